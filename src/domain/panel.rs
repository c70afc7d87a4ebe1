//! Static description of the dashboard figure.
//!
//! The figure is a 3x2 grid. Five cells hold a metric panel, the last cell
//! is left empty. Everything here is plain data; the egui layer turns it into
//! plots.

use crate::domain::metrics::{MetricKind, MetricSeries};

pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 2;

pub const THRESHOLD_LABEL: &str = "Alert Threshold";

/// Plain RGB color, kept free of any UI crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSlot {
    pub row: usize,
    pub col: usize,
}

impl GridSlot {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Every cell of the grid in row-major order
    pub fn all() -> impl Iterator<Item = GridSlot> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| GridSlot::new(row, col)))
    }
}

/// How the y axis of a panel is bounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YBounds {
    Fixed { min: f64, max: f64 },
    /// Lower bound fixed, upper bound is the series maximum plus `pad`
    DataMaxPadded { min: f64, pad: f64 },
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendAnchor {
    LowerCenter,
    UpperCenter,
    UpperLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub slot: GridSlot,
    pub metric: MetricKind,
    pub title: &'static str,
    pub color: Rgb,
    pub y_bounds: YBounds,
    pub threshold: f64,
    pub legend: LegendAnchor,
}

impl PanelSpec {
    /// Concrete `(min, max)` for the y axis, `None` when the plot should fit the data.
    pub fn resolve_y_bounds(&self, series: &MetricSeries) -> Option<(f64, f64)> {
        match self.y_bounds {
            YBounds::Fixed { min, max } => Some((min, max)),
            YBounds::DataMaxPadded { min, pad } => {
                let top = series.max().unwrap_or(min);
                Some((min, top + pad))
            }
            YBounds::Auto => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardLayout {
    panels: Vec<PanelSpec>,
}

impl DashboardLayout {
    pub fn standard() -> Self {
        let panels = vec![
            PanelSpec {
                slot: GridSlot::new(0, 0),
                metric: MetricKind::SuccessRate,
                title: "SAP Success Rate (%)",
                color: Rgb::GREEN,
                y_bounds: YBounds::Fixed {
                    min: 70.0,
                    max: 100.0,
                },
                threshold: 80.0,
                legend: LegendAnchor::LowerCenter,
            },
            PanelSpec {
                slot: GridSlot::new(0, 1),
                metric: MetricKind::QueueDepth,
                title: "Queue Depth (Messages)",
                color: Rgb::ORANGE,
                y_bounds: YBounds::DataMaxPadded {
                    min: 0.0,
                    pad: 50.0,
                },
                threshold: 200.0,
                legend: LegendAnchor::UpperCenter,
            },
            PanelSpec {
                slot: GridSlot::new(1, 0),
                metric: MetricKind::DlqCount,
                title: "DLQ Message Count",
                color: Rgb::CYAN,
                y_bounds: YBounds::Auto,
                threshold: 1.0,
                legend: LegendAnchor::UpperLeft,
            },
            PanelSpec {
                slot: GridSlot::new(2, 0),
                metric: MetricKind::GatewayLatency,
                title: "Gateway Latency (ms)",
                color: Rgb::PURPLE,
                y_bounds: YBounds::Auto,
                threshold: 250.0,
                legend: LegendAnchor::UpperLeft,
            },
            PanelSpec {
                slot: GridSlot::new(1, 1),
                metric: MetricKind::Health,
                title: "SAP Health (%)",
                color: Rgb::GRAY,
                y_bounds: YBounds::Fixed {
                    min: 70.0,
                    max: 100.0,
                },
                threshold: 80.0,
                legend: LegendAnchor::LowerCenter,
            },
        ];

        Self { panels }
    }

    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    pub fn panel_at(&self, slot: GridSlot) -> Option<&PanelSpec> {
        self.panels.iter().find(|p| p.slot == slot)
    }

    /// Grid cells with no panel; these are removed from the figure
    pub fn empty_slots(&self) -> Vec<GridSlot> {
        GridSlot::all()
            .filter(|slot| self.panel_at(*slot).is_none())
            .collect()
    }
}
