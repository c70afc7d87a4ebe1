use crate::domain::metrics::{MetricKind, MetricSeries, MetricsSnapshot};
use serde::Serialize;
use std::fmt;

/// Headline statistics of one series, as printed by the headless binary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub metric: MetricKind,
    pub label: &'static str,
    pub unit: &'static str,
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
}

impl SeriesSummary {
    pub fn from_series(series: &MetricSeries) -> Option<Self> {
        let kind = series.kind();
        Some(Self {
            metric: kind,
            label: kind.label(),
            unit: kind.unit(),
            samples: series.len(),
            min: series.min()?,
            max: series.max()?,
            mean: series.mean()?,
            last: series.last()?,
        })
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} min {:>8.2}  max {:>8.2}  mean {:>8.2}  last {:>8.2} {}",
            self.label, self.min, self.max, self.mean, self.last, self.unit
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummary {
    pub window_start: String,
    pub window_end: String,
    pub series: Vec<SeriesSummary>,
}

impl SnapshotSummary {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let timeline = snapshot.timeline();
        let stamp = |t: Option<chrono::DateTime<chrono::Local>>| {
            t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        };

        Self {
            window_start: stamp(timeline.first()),
            window_end: stamp(timeline.last()),
            series: MetricKind::ALL
                .iter()
                .filter_map(|kind| snapshot.series(*kind))
                .filter_map(SeriesSummary::from_series)
                .collect(),
        }
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Window {} .. {}", self.window_start, self.window_end)?;
        for s in &self.series {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generator::MetricGenerator;
    use crate::domain::timeline::Timeline;

    #[test]
    fn test_series_summary_values() {
        let series = MetricSeries::new(MetricKind::DlqCount, vec![0.0, 1.0, 5.0, 2.0]);
        let summary = SeriesSummary::from_series(&series).unwrap();

        assert_eq!(summary.samples, 4);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.last, 2.0);
        assert_eq!(summary.unit, "messages");
    }

    #[test]
    fn test_empty_series_has_no_summary() {
        let series = MetricSeries::new(MetricKind::Health, Vec::new());
        assert!(SeriesSummary::from_series(&series).is_none());
    }

    #[test]
    fn test_snapshot_summary_lists_every_metric() {
        let snapshot = MetricGenerator::seeded(11)
            .snapshot(Timeline::now().unwrap())
            .unwrap();
        let summary = SnapshotSummary::from_snapshot(&snapshot);

        assert_eq!(summary.series.len(), MetricKind::ALL.len());
        assert!(!summary.window_start.is_empty());

        let text = summary.to_string();
        assert!(text.contains("Worker Latency"));
        assert!(text.contains("Gateway Latency"));
    }

    #[test]
    fn test_snapshot_summary_serializes_to_json() {
        let snapshot = MetricGenerator::seeded(11)
            .snapshot(Timeline::now().unwrap())
            .unwrap();
        let json = serde_json::to_value(SnapshotSummary::from_snapshot(&snapshot)).unwrap();

        let series = json["series"].as_array().unwrap();
        assert_eq!(series.len(), 6);
        assert_eq!(series[1]["metric"], "queue_depth");
        assert_eq!(series[2]["max"], 5.0);
    }
}
