mod route_lines;
mod train_markers;

use leptos::{
    component, create_effect, create_node_ref, create_signal, html, store_value, view, IntoView, NodeRef,
    Signal, SignalGet, SignalGetUntracked, SignalSet, StoredValue,
};
use wasm_bindgen::{closure::Closure, JsCast};
use crate::geometry::{Bounds, MapProjection};
use crate::models::Route;
use crate::simulation::TickOutput;

const MAP_PADDING: f64 = 36.0;

fn render_map(canvas: &web_sys::HtmlCanvasElement, routes: &[Route], outputs: &[TickOutput], show_labels: bool) {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let Ok(Some(context)) = canvas.get_context("2d") else {
        leptos::logging::warn!("Failed to get 2D context");
        return;
    };
    let Ok(ctx) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        leptos::logging::warn!("Failed to cast to 2D rendering context");
        return;
    };

    route_lines::draw_background(&ctx, width, height);

    let Some(bounds) = Bounds::from_coordinates(routes.iter().flat_map(Route::polyline)) else {
        return;
    };
    let projection = MapProjection::fit(bounds, width, height, MAP_PADDING);

    route_lines::draw_route_lines(&ctx, &projection, routes);
    route_lines::draw_stations(&ctx, &projection, routes, show_labels);
    train_markers::draw_train_markers(&ctx, &projection, outputs);
}

fn setup_render_effect(
    canvas_ref: NodeRef<html::Canvas>,
    routes: StoredValue<Vec<Route>>,
    outputs: Signal<Vec<TickOutput>>,
    show_labels: Signal<bool>,
) {
    let (render_requested, set_render_requested) = create_signal(false);

    create_effect(move |_| {
        // Track dependencies
        let _ = outputs.get();
        let _ = show_labels.get();

        // Coalesce ticks that land within one animation frame
        if render_requested.get_untracked() {
            return;
        }
        set_render_requested.set(true);

        let Some(window) = web_sys::window() else { return };
        let callback = Closure::once(move || {
            set_render_requested.set(false);

            let Some(canvas) = canvas_ref.get_untracked() else { return };
            let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;

            // Browser dimensions are always non-negative
            #[allow(clippy::cast_sign_loss)]
            let container_width = canvas_elem.client_width() as u32;
            #[allow(clippy::cast_sign_loss)]
            let container_height = canvas_elem.client_height() as u32;
            if container_width > 0 && container_height > 0 {
                canvas_elem.set_width(container_width);
                canvas_elem.set_height(container_height);
            }

            routes.with_value(|routes| {
                render_map(canvas_elem, routes, &outputs.get_untracked(), show_labels.get_untracked());
            });
        });

        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        callback.forget();
    });
}

/// Canvas map of every route with live train markers
#[component]
#[must_use]
pub fn MetroMap(
    routes: Vec<Route>,
    #[prop(into)] outputs: Signal<Vec<TickOutput>>,
    #[prop(into)] show_labels: Signal<bool>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let routes = store_value(routes);

    setup_render_effect(canvas_ref, routes, outputs, show_labels);

    view! {
        <div class="metro-map">
            <canvas node_ref=canvas_ref class="metro-map-canvas"></canvas>
        </div>
    }
}
