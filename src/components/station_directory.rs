use leptos::{component, create_signal, event_target_value, store_value, view, CollectView, IntoView, SignalGet, SignalSet};
use crate::data;

#[component]
#[must_use]
pub fn StationDirectory() -> impl IntoView {
    let directory = store_value(data::major_stations().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to load station list: {e}").into());
        crate::models::StationDirectory::default()
    }));
    let (query, set_query) = create_signal(String::new());

    view! {
        <section class="station-directory">
            <h2>"Major Railway Stations"</h2>
            <input
                type="search"
                placeholder="Search by code or name"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <table class="station-table">
                <thead>
                    <tr><th>"Code"</th><th>"Station"</th><th>"Latitude"</th><th>"Longitude"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        let query = query.get();
                        directory.with_value(|directory| {
                            directory
                                .search(&query)
                                .into_iter()
                                .map(|station| view! {
                                    <tr>
                                        <td>{station.code.clone()}</td>
                                        <td>{station.name.clone()}</td>
                                        <td>{format!("{:.4}", station.lat)}</td>
                                        <td>{format!("{:.4}", station.lng)}</td>
                                    </tr>
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </section>
    }
}
