use crate::domain::metrics::MetricsSnapshot;
use crate::domain::panel::{GridSlot, LegendAnchor, PanelSpec, Rgb, THRESHOLD_LABEL};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::Corner;

/// Everything the plot widget needs for one panel, precomputed once
#[derive(Debug, Clone)]
pub struct PanelViewModel {
    pub id: String,
    pub slot: GridSlot,
    pub title: &'static str,
    pub series_label: &'static str,
    pub points: Vec<[f64; 2]>,
    pub color: egui::Color32,
    pub threshold: f64,
    pub threshold_label: &'static str,
    pub threshold_color: egui::Color32,
    pub x_range: Option<(f64, f64)>,
    pub y_bounds: Option<(f64, f64)>,
    pub legend_corner: Corner,
}

impl PanelViewModel {
    /// Returns `None` when the snapshot lacks the panel's metric.
    pub fn build(spec: &PanelSpec, snapshot: &MetricsSnapshot) -> Option<Self> {
        let series = snapshot.series(spec.metric)?;
        let xs = snapshot.timeline().as_unix_seconds();

        let points: Vec<[f64; 2]> = xs
            .iter()
            .zip(series.samples())
            .map(|(x, y)| [*x, *y])
            .collect();

        let x_range = match (xs.first(), xs.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        };

        Some(Self {
            id: format!("panel_{}_{}", spec.slot.row, spec.slot.col),
            slot: spec.slot,
            title: spec.title,
            series_label: spec.metric.label(),
            points,
            color: DesignSystem::color(spec.color),
            threshold: spec.threshold,
            threshold_label: THRESHOLD_LABEL,
            threshold_color: DesignSystem::color(Rgb::RED),
            x_range,
            y_bounds: spec.resolve_y_bounds(series),
            legend_corner: legend_corner(spec.legend),
        })
    }
}

/// egui_plot only anchors legends to corners
pub fn legend_corner(anchor: LegendAnchor) -> Corner {
    match anchor {
        LegendAnchor::LowerCenter => Corner::LeftBottom,
        LegendAnchor::UpperCenter => Corner::RightTop,
        LegendAnchor::UpperLeft => Corner::LeftTop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generator::MetricGenerator;
    use crate::domain::panel::DashboardLayout;
    use crate::domain::timeline::{Timeline, WINDOW_LEN};

    #[test]
    fn test_view_models_for_standard_layout() {
        let snapshot = MetricGenerator::seeded(21)
            .snapshot(Timeline::now().unwrap())
            .unwrap();
        let layout = DashboardLayout::standard();

        for spec in layout.panels() {
            let vm = PanelViewModel::build(spec, &snapshot).unwrap();
            assert_eq!(vm.points.len(), WINDOW_LEN);
            assert_eq!(vm.threshold, spec.threshold);
            assert_eq!(vm.threshold_label, "Alert Threshold");
            assert_eq!(vm.threshold_color, egui::Color32::from_rgb(255, 0, 0));
        }
    }

    #[test]
    fn test_points_follow_timeline() {
        let snapshot = MetricGenerator::seeded(21)
            .snapshot(Timeline::now().unwrap())
            .unwrap();
        let layout = DashboardLayout::standard();
        let vm = PanelViewModel::build(&layout.panels()[2], &snapshot).unwrap();

        let (first, last) = vm.x_range.unwrap();
        assert_eq!(last - first, 59.0 * 60.0);
        assert_eq!(vm.points[48][1], 1.0);
        assert_eq!(vm.points[50][1], 5.0);
    }

    #[test]
    fn test_queue_bounds_resolved_from_data() {
        let snapshot = MetricGenerator::seeded(8)
            .snapshot(Timeline::now().unwrap())
            .unwrap();
        let layout = DashboardLayout::standard();
        let queue = layout.panel_at(GridSlot::new(0, 1)).unwrap();
        let vm = PanelViewModel::build(queue, &snapshot).unwrap();

        let max = vm.points.iter().map(|p| p[1]).fold(f64::MIN, f64::max);
        assert_eq!(vm.y_bounds, Some((0.0, max + 50.0)));
        assert_eq!(vm.legend_corner, Corner::RightTop);
    }
}
