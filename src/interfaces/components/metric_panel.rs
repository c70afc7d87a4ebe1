use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::panel_view_model::PanelViewModel;
use chrono::{Local, TimeZone};
use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotBounds};

/// Renders one metric panel: title, series line, dashed threshold and legend.
///
/// The plot is static; dragging, zooming and scrolling are turned off.
pub fn render_metric_panel(ui: &mut egui::Ui, vm: &PanelViewModel, height: f32) {
    DesignSystem::panel_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(vm.title)
                    .size(DesignSystem::PANEL_TITLE_SIZE)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
        ui.add_space(4.0);

        Plot::new(&vm.id)
            .height(height)
            .show_grid([true, true])
            .legend(Legend::default().position(vm.legend_corner))
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .x_axis_formatter(|mark, _range| format_minute(mark.value))
            .show(ui, |plot_ui| {
                if let (Some((x_min, x_max)), Some((y_min, y_max))) = (vm.x_range, vm.y_bounds) {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [x_min, y_min],
                        [x_max, y_max],
                    ));
                }

                plot_ui.line(
                    Line::new(vm.series_label, vm.points.clone())
                        .color(vm.color)
                        .width(DesignSystem::LINE_WIDTH),
                );
                plot_ui.hline(
                    HLine::new(vm.threshold_label, vm.threshold)
                        .color(vm.threshold_color)
                        .style(LineStyle::dashed_dense())
                        .width(DesignSystem::THRESHOLD_WIDTH),
                );
            });
    });
}

fn format_minute(secs: f64) -> String {
    Local
        .timestamp_opt(secs as i64, 0)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}
