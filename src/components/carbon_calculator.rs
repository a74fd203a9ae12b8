use leptos::{component, create_signal, event_target_value, view, CollectView, IntoView, SignalGet, SignalGetUntracked, SignalSet};
use crate::models::{CarbonFootprint, CarbonInputs, TransportMode};

#[component]
#[must_use]
pub fn CarbonCalculator() -> impl IntoView {
    let (distance, set_distance) = create_signal(String::new());
    let (mode, set_mode) = create_signal(TransportMode::default());
    let (electricity, set_electricity) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<CarbonFootprint>);

    let calculate = move |_| {
        let inputs = CarbonInputs::from_fields(
            &distance.get_untracked(),
            mode.get_untracked(),
            &electricity.get_untracked(),
        );
        set_result.set(Some(inputs.footprint()));
    };

    view! {
        <section class="carbon-calculator">
            <h2>"Carbon Footprint Calculator"</h2>
            <label>
                "Daily commute distance (km)"
                <input type="number" min="0" prop:value=distance
                    on:input=move |ev| set_distance.set(event_target_value(&ev)) />
            </label>
            <label>
                "Mode of transport"
                <select on:change=move |ev| {
                    if let Some(selected) = TransportMode::from_label(&event_target_value(&ev)) {
                        set_mode.set(selected);
                    }
                }>
                    {TransportMode::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.label() selected=move || mode.get() == option>
                                {format!("{} ({} g/km)", option.label(), option.grams_per_km())}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Monthly electricity use (kWh)"
                <input type="number" min="0" prop:value=electricity
                    on:input=move |ev| set_electricity.set(event_target_value(&ev)) />
            </label>
            <button class="toolbar-button" on:click=calculate>"Calculate"</button>

            {move || result.get().map(|footprint| view! {
                <div class="carbon-result">
                    <p class="text-lg">"Your estimated monthly footprint is:"</p>
                    <p class="text-3xl font-bold text-emerald-600">{footprint.total_text()}</p>
                    <div class="mt-2 text-sm text-gray-600">
                        <p>{footprint.breakdown_text()}</p>
                    </div>
                </div>
            })}
        </section>
    }
}
