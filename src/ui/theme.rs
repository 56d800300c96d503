//! Theme configuration for egui.

use egui::{Color32, FontId, Stroke, TextStyle, Visuals};

use crate::config::Config;

/// Apply the configured theme and font size to the egui context.
pub fn apply_theme(ctx: &egui::Context, config: &Config) {
    let mut style = (*ctx.style()).clone();

    style.visuals = if config.dark_mode {
        dark_visuals()
    } else {
        Visuals::light()
    };

    style.text_styles.insert(TextStyle::Monospace, FontId::monospace(config.font_size));
    style.text_styles.insert(TextStyle::Body, FontId::proportional(config.font_size));
    style.text_styles.insert(TextStyle::Button, FontId::proportional(config.font_size));

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    let bg_color = Color32::from_rgb(30, 30, 46);
    let panel_color = Color32::from_rgb(36, 36, 54);
    let widget_color = Color32::from_rgb(45, 45, 68);
    let text_color = Color32::from_rgb(224, 224, 224);

    // Panel colors
    visuals.panel_fill = panel_color;
    visuals.window_fill = bg_color;
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 30);

    // Widget colors
    visuals.widgets.noninteractive.bg_fill = widget_color;
    visuals.widgets.inactive.bg_fill = widget_color;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(60, 60, 90);
    visuals.widgets.active.bg_fill = accent_color();

    // Text colors
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);

    // Selection
    visuals.selection.bg_fill = accent_color().gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());

    visuals.widgets.inactive.rounding = 4.0.into();
    visuals.widgets.hovered.rounding = 4.0.into();
    visuals.widgets.active.rounding = 4.0.into();

    visuals
}

/// Get the accent color for UI highlights.
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 181, 246)
}

/// Color for the transient status message.
pub fn status_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(129, 199, 132)
    } else {
        Color32::from_rgb(46, 125, 50)
    }
}
