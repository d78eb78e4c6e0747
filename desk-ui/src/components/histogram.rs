//! Histogram Component
//!
//! Bar chart of a binned distribution using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::Distribution;

const PLOT_BG: &str = "#1E1E1E";
const PAPER_BG: &str = "#1e1e2f";
const FONT_COLOR: &str = "#ffffff";
const GRID_COLOR: &str = "#374151";

/// Histogram chart for one distribution
#[component]
pub fn HistogramChart(distribution: Distribution) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let title = distribution.title.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_histogram(&canvas, &distribution);
        }
    });

    view! {
        <div class="rounded-xl p-6" style=format!("background-color: {}", PAPER_BG)>
            <h3 class="text-lg font-semibold mb-4 text-white">{title}</h3>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Draw the bars on canvas
fn draw_histogram(canvas: &HtmlCanvasElement, dist: &Distribution) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&PAPER_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style(&PLOT_BG.into());
    ctx.fill_rect(margin_left, margin_top, chart_width, chart_height);

    let bins = &dist.histogram.bins;
    let max_count = dist.histogram.max_count();

    ctx.set_font("12px sans-serif");

    if bins.is_empty() || max_count == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Horizontal grid lines with count labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_count as f64 * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&FONT_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars
    let bar_width = chart_width / bins.len() as f64;
    ctx.set_fill_style(&dist.color.as_str().into());
    for (i, bin) in bins.iter().enumerate() {
        let bar_height = bin.count as f64 / max_count as f64 * chart_height;
        let x = margin_left + i as f64 * bar_width;
        let y = margin_top + chart_height - bar_height;
        ctx.fill_rect(x + 1.0, y, (bar_width - 2.0).max(1.0), bar_height);
    }

    // X-axis labels at a handful of bin edges
    ctx.set_fill_style(&FONT_COLOR.into());
    let label_every = (bins.len() / 5).max(1);
    for (i, bin) in bins.iter().enumerate().step_by(label_every) {
        let x = margin_left + i as f64 * bar_width;
        let _ = ctx.fill_text(&format_edge(bin.start), x, height - 10.0);
    }
    if let Some(last) = bins.last() {
        let _ = ctx.fill_text(&format_edge(last.end), width - margin_right - 40.0, height - 10.0);
    }
}

fn format_edge(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
