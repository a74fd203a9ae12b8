use leptos::{component, view, CollectView, IntoView, Signal, SignalGet};
use crate::simulation::{Phase, TickOutput};

/// Badge text and CSS class for a train's phase
#[must_use]
pub const fn phase_badge(phase: Phase) -> (&'static str, &'static str) {
    match phase {
        Phase::Moving => ("Normal", "text-green-600"),
        Phase::Stopped => ("At station", "text-yellow-600"),
    }
}

/// One card per line with its latest status line
#[component]
#[must_use]
pub fn StatusPanel(#[prop(into)] outputs: Signal<Vec<TickOutput>>) -> impl IntoView {
    view! {
        <div class="metro-results">
            {move || {
                let outputs = outputs.get();
                if outputs.is_empty() {
                    return view! { <p class="text-red-500">"Could not load metro data."</p> }.into_view();
                }
                outputs
                    .into_iter()
                    .map(|output| {
                        let (badge, badge_class) = phase_badge(output.phase);
                        view! {
                            <div class="metro-card">
                                <div class="font-bold text-lg" style=format!("color:{}", output.icon.fill)>
                                    {format!("{} Line", output.route_name)}
                                </div>
                                <div class=format!("text-sm {badge_class}")>{badge}</div>
                                <p class="text-xs text-gray-500">{output.status}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
