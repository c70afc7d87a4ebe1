use crate::domain::panel::Rgb;
use eframe::egui;

/// Dark theme shared by every panel of the dashboard
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(10, 12, 16); // #0A0C10
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(10, 12, 16);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34); // #161B22
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(15, 18, 24);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;

    pub const TITLE_SIZE: f32 = 16.0;
    pub const PANEL_TITLE_SIZE: f32 = 13.0;

    /// Vertical gap between grid rows, as a fraction of a row's height
    pub const ROW_GAP_RATIO: f32 = 0.5;

    pub const MIN_PLOT_HEIGHT: f32 = 80.0;

    pub const LINE_WIDTH: f32 = 1.5;
    pub const THRESHOLD_WIDTH: f32 = 1.2;

    // --- Styles ---

    pub fn color(rgb: Rgb) -> egui::Color32 {
        egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals
    }

    /// Frame drawn around each metric panel
    pub fn panel_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_SMALL as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }
}
