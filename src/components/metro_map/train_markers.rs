use web_sys::CanvasRenderingContext2d;
use crate::geometry::MapProjection;
use crate::simulation::{Phase, TickOutput};

// Train marker constants
const TRAIN_RADIUS: f64 = 8.0;
const TRAIN_OUTLINE_WIDTH: f64 = 2.0;
const TRAIN_GLYPH_FONT: &str = "bold 9px monospace";
const DWELL_HALO_COLOR: &str = "rgba(255, 255, 255, 0.6)";
const DWELL_HALO_RADIUS: f64 = 13.0;

pub fn draw_train_markers(ctx: &CanvasRenderingContext2d, projection: &MapProjection, outputs: &[TickOutput]) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for output in outputs {
        let (x, y) = projection.project(output.position);

        // Dwelling trains get a soft halo so they stand out from station dots
        if output.phase == Phase::Stopped {
            ctx.set_fill_style_str(DWELL_HALO_COLOR);
            ctx.begin_path();
            let _ = ctx.arc(x, y, DWELL_HALO_RADIUS, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }

        ctx.set_fill_style_str(&output.icon.fill);
        ctx.set_stroke_style_str(output.icon.outline);
        ctx.set_line_width(TRAIN_OUTLINE_WIDTH);
        ctx.begin_path();
        let _ = ctx.arc(x, y, TRAIN_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.stroke();

        ctx.set_fill_style_str(output.icon.outline);
        ctx.set_font(TRAIN_GLYPH_FONT);
        let _ = ctx.fill_text(&output.icon.glyph.to_string(), x, y);
    }

    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
}
