use crate::domain::metrics::MetricsSnapshot;
use crate::domain::panel::{DashboardLayout, GRID_COLS, GRID_ROWS, GridSlot};
use crate::interfaces::components::metric_panel::render_metric_panel;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::panel_view_model::PanelViewModel;
use eframe::egui;
use tracing::{info, warn};

/// Height taken by a panel's title row and frame margins
const PANEL_CHROME: f32 = 40.0;

/// The whole figure: title plus a 3x2 grid of panels
pub struct DashboardApp {
    title: String,
    panels: Vec<PanelViewModel>,
}

impl DashboardApp {
    pub fn new(
        title: impl Into<String>,
        snapshot: &MetricsSnapshot,
        layout: &DashboardLayout,
    ) -> Self {
        let panels: Vec<_> = layout
            .panels()
            .iter()
            .filter_map(|spec| {
                let vm = PanelViewModel::build(spec, snapshot);
                if vm.is_none() {
                    warn!("No series for panel '{}', leaving it blank", spec.title);
                }
                vm
            })
            .collect();

        info!(
            "Dashboard ready: {} panels, empty cells {:?}",
            panels.len(),
            layout.empty_slots()
        );

        Self {
            title: title.into(),
            panels,
        }
    }

    pub fn panels(&self) -> &[PanelViewModel] {
        &self.panels
    }

    fn panel_at(&self, slot: GridSlot) -> Option<&PanelViewModel> {
        self.panels.iter().find(|p| p.slot == slot)
    }
}

/// Splits the available height into rows separated by `ROW_GAP_RATIO` of a row.
pub fn row_geometry(available_height: f32) -> (f32, f32) {
    let gaps = (GRID_ROWS - 1) as f32 * DesignSystem::ROW_GAP_RATIO;
    let row = available_height / (GRID_ROWS as f32 + gaps);
    (row, row * DesignSystem::ROW_GAP_RATIO)
}

/// Plot height for a row, never below `MIN_PLOT_HEIGHT`.
///
/// When the floor kicks in the grid outgrows the window and scrolls.
pub fn plot_height(row_height: f32) -> f32 {
    (row_height - PANEL_CHROME).max(DesignSystem::MIN_PLOT_HEIGHT)
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.title)
                        .size(DesignSystem::TITLE_SIZE)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
            });
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                let (row_height, gap) = row_geometry(ui.available_height());
                let height = plot_height(row_height);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for row in 0..GRID_ROWS {
                            if row > 0 {
                                ui.add_space(gap);
                            }
                            ui.columns(GRID_COLS, |columns| {
                                for (col, column) in columns.iter_mut().enumerate() {
                                    // Cells without a panel are left out of the figure
                                    if let Some(vm) = self.panel_at(GridSlot::new(row, col)) {
                                        render_metric_panel(column, vm, height);
                                    }
                                }
                            });
                        }
                    });
            });
    }
}
