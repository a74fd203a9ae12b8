use web_sys::CanvasRenderingContext2d;
use crate::geometry::MapProjection;
use crate::models::Route;

const ROUTE_LINE_WIDTH: f64 = 4.0;
const STATION_RADIUS: f64 = 3.5;
const STATION_FILL_COLOR: &str = "#fff";
const STATION_LABEL_COLOR: &str = "#4b5563";
const STATION_LABEL_FONT: &str = "10px sans-serif";
const BACKGROUND_COLOR: &str = "#f3f4f6";

pub fn draw_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Draw every route as a polyline in its own color
pub fn draw_route_lines(ctx: &CanvasRenderingContext2d, projection: &MapProjection, routes: &[Route]) {
    ctx.set_line_width(ROUTE_LINE_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for route in routes {
        ctx.set_stroke_style_str(route.color());
        ctx.begin_path();
        for (i, coord) in route.polyline().enumerate() {
            let (x, y) = projection.project(coord);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
}

/// Draw a ringed dot for every waypoint, outlined in its route color
pub fn draw_stations(
    ctx: &CanvasRenderingContext2d,
    projection: &MapProjection,
    routes: &[Route],
    show_labels: bool,
) {
    ctx.set_line_width(1.5);
    ctx.set_font(STATION_LABEL_FONT);

    for route in routes {
        ctx.set_stroke_style_str(route.color());
        for waypoint in route.waypoints() {
            let (x, y) = projection.project(waypoint.coordinate());

            ctx.set_fill_style_str(STATION_FILL_COLOR);
            ctx.begin_path();
            let _ = ctx.arc(x, y, STATION_RADIUS, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
            ctx.stroke();

            if show_labels {
                ctx.set_fill_style_str(STATION_LABEL_COLOR);
                let _ = ctx.fill_text(&waypoint.name, x + 6.0, y - 4.0);
            }
        }
    }
}
