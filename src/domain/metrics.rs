use crate::domain::errors::DashboardError;
use crate::domain::timeline::Timeline;
use serde::Serialize;
use std::fmt;

/// The six synthetic metrics the dashboard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    SuccessRate,
    QueueDepth,
    DlqCount,
    WorkerLatency,
    GatewayLatency,
    Health,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::SuccessRate,
        MetricKind::QueueDepth,
        MetricKind::DlqCount,
        MetricKind::WorkerLatency,
        MetricKind::GatewayLatency,
        MetricKind::Health,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::SuccessRate => "SAP Success Rate",
            MetricKind::QueueDepth => "Queue Depth",
            MetricKind::DlqCount => "DLQ Message Count",
            MetricKind::WorkerLatency => "Worker Latency",
            MetricKind::GatewayLatency => "Gateway Latency",
            MetricKind::Health => "SAP Health",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::SuccessRate | MetricKind::Health => "%",
            MetricKind::QueueDepth | MetricKind::DlqCount => "messages",
            MetricKind::WorkerLatency => "s",
            MetricKind::GatewayLatency => "ms",
        }
    }

    /// Counts are whole numbers; everything else is continuous
    pub fn is_integral(&self) -> bool {
        matches!(self, MetricKind::QueueDepth | MetricKind::DlqCount)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One metric sampled over the dashboard timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    kind: MetricKind,
    samples: Vec<f64>,
}

impl MetricSeries {
    pub fn new(kind: MetricKind, samples: Vec<f64>) -> Self {
        Self { kind, samples }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }
}

/// Timeline plus one series per metric, generated once and read-only afterwards
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    timeline: Timeline,
    series: Vec<MetricSeries>,
}

impl MetricsSnapshot {
    /// Validates that every metric is present exactly once and aligned with the timeline.
    pub fn new(timeline: Timeline, series: Vec<MetricSeries>) -> Result<Self, DashboardError> {
        for kind in MetricKind::ALL {
            match series.iter().filter(|s| s.kind == kind).count() {
                0 => return Err(DashboardError::MissingSeries { kind }),
                1 => {}
                _ => return Err(DashboardError::DuplicateSeries { kind }),
            }
        }

        if let Some(bad) = series.iter().find(|s| s.len() != timeline.len()) {
            return Err(DashboardError::LengthMismatch {
                kind: bad.kind,
                expected: timeline.len(),
                actual: bad.len(),
            });
        }

        Ok(Self { timeline, series })
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn series(&self, kind: MetricKind) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricSeries> {
        self.series.iter()
    }
}
