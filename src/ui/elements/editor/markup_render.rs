// src/ui/elements/editor/markup_render.rs
use bevy_egui::egui;

use crate::matrix::markup::parse_insight;

/// Renders stored insight text in viewing mode: bullet lines get a `•`
/// prefix, `**…**` spans render with the strong text color, everything
/// else stays a plain paragraph.
pub fn render_insight_text(ui: &mut egui::Ui, text: &str) {
    let blocks = parse_insight(text);
    if blocks.is_empty() {
        ui.weak("–");
        return;
    }

    let base_format = egui::TextFormat {
        font_id: egui::TextStyle::Body.resolve(ui.style()),
        color: ui.visuals().text_color(),
        ..Default::default()
    };
    let mut strong_format = base_format.clone();
    strong_format.color = ui.visuals().strong_text_color();

    for block in &blocks {
        let mut job = egui::text::LayoutJob::default();
        if block.bullet {
            job.append("• ", 0.0, base_format.clone());
        }
        for span in &block.spans {
            let format = if span.emphasized {
                strong_format.clone()
            } else {
                base_format.clone()
            };
            job.append(&span.text, 0.0, format);
        }
        ui.label(job);
    }
}
