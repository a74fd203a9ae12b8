use leptos::{component, create_signal, event_target_value, store_value, view, IntoView, SignalGet, SignalGetUntracked, SignalSet};
use crate::data;
use crate::models::ScheduleLookup;

/// Neighborhood search for general waste and recycling pickup days
#[component]
#[must_use]
pub fn WasteLookup() -> impl IntoView {
    let schedules = store_value(data::waste_schedules().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to load waste schedules: {e}").into());
        crate::models::WasteSchedules::default()
    }));
    let (query, set_query) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<ScheduleLookup>);

    let search = move || {
        let query = query.get_untracked();
        set_result.set(Some(schedules.with_value(|s| s.lookup(&query))));
    };

    view! {
        <section class="waste-lookup">
            <h2>"Waste Collection Schedule"</h2>
            <div class="waste-search">
                <input
                    type="text"
                    placeholder="Enter your neighborhood"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keyup=move |ev| {
                        if ev.key() == "Enter" {
                            search();
                        }
                    }
                />
                <button class="toolbar-button" on:click=move |_| search()>"Search"</button>
            </div>

            <div class="waste-results">
                {move || match result.get() {
                    None => ().into_view(),
                    Some(ScheduleLookup::Found { query, schedule }) => view! {
                        <h3 class="font-bold text-lg">{query}</h3>
                        <p><span class="font-semibold">"General Waste: "</span>{schedule.general}</p>
                        <p><span class="font-semibold">"Recycling: "</span>{schedule.recycling}</p>
                    }
                    .into_view(),
                    Some(lookup @ ScheduleLookup::EmptyQuery) => {
                        view! { <p class="text-red-500">{lookup.message()}</p> }.into_view()
                    }
                    Some(lookup @ ScheduleLookup::NotFound { .. }) => {
                        view! { <p class="text-gray-600">{lookup.message()}</p> }.into_view()
                    }
                }}
            </div>
        </section>
    }
}
