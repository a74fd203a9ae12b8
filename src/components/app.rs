use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Route, Router, Routes, A};
use crate::components::carbon_calculator::CarbonCalculator;
use crate::components::metro_tracker::MetroTracker;
use crate::components::station_directory::StationDirectory;
use crate::components::waste_lookup::WasteLookup;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ecocitty_connect.css"/>
        <Title text="EcoCitty Connect"/>

        <Router>
            <nav class="app-nav">
                <span class="app-title">"EcoCitty Connect"</span>
                <A href="/" exact=true>"Metro"</A>
                <A href="/carbon">"Carbon"</A>
                <A href="/stations">"Stations"</A>
                <A href="/waste">"Waste"</A>
            </nav>
            <main class="app">
                <Routes>
                    <Route path="/" view=MetroTracker/>
                    <Route path="/carbon" view=CarbonCalculator/>
                    <Route path="/stations" view=StationDirectory/>
                    <Route path="/waste" view=WasteLookup/>
                </Routes>
            </main>
        </Router>
    }
}
