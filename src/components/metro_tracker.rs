use leptos::{component, create_signal, view, IntoView, Signal, SignalGet, SignalUpdate};
use crate::components::metro_map::MetroMap;
use crate::components::status_panel::StatusPanel;
use crate::data;
use crate::logging::log;
use crate::simulation::use_train_simulation;

/// Live metro view: map, per-line status and playback controls
#[component]
#[must_use]
pub fn MetroTracker() -> impl IntoView {
    let routes = data::default_routes().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to load metro routes: {e}").into());
        Vec::new()
    });
    let config = data::default_config().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to load simulation config, using defaults: {e}").into());
        crate::models::SimulationConfig::default()
    });
    log!("Loaded {} metro routes", routes.len());

    let simulation = use_train_simulation(routes.clone(), &config);
    let outputs = Signal::derive(move || simulation.outputs.get());
    let (show_labels, set_show_labels) = create_signal(false);

    view! {
        <section class="metro-tracker">
            <div class="metro-toolbar">
                <h2>"Metro Live Tracker"</h2>
                <button class="toolbar-button" on:click=move |_| simulation.toggle()>
                    {move || if simulation.running.get() { "Pause" } else { "Resume" }}
                </button>
                <label class="toolbar-toggle">
                    <input
                        type="checkbox"
                        prop:checked=show_labels
                        on:change=move |_| set_show_labels.update(|v| *v = !*v)
                    />
                    " Station names"
                </label>
                <span class="tick-counter">
                    {move || format!("Tick {}", simulation.tick_count.get())}
                </span>
            </div>
            <div class="metro-layout">
                <MetroMap routes=routes outputs=outputs show_labels=show_labels />
                <StatusPanel outputs=outputs />
            </div>
        </section>
    }
}
