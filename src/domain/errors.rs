use crate::domain::metrics::MetricKind;
use thiserror::Error;

/// Errors raised while building or configuring the dashboard
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Series {kind} has {actual} samples, timeline has {expected}")]
    LengthMismatch {
        kind: MetricKind,
        expected: usize,
        actual: usize,
    },

    #[error("Snapshot has more than one {kind} series")]
    DuplicateSeries { kind: MetricKind },

    #[error("Snapshot is missing the {kind} series")]
    MissingSeries { kind: MetricKind },

    #[error("Spike [{start}, {end}) on {kind} does not fit in {len} samples")]
    SpikeOutOfRange {
        kind: MetricKind,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Invalid distribution for {kind}: {reason}")]
    InvalidDistribution { kind: MetricKind, reason: String },

    #[error("Timeline of {len} minutes reaches past the supported date range")]
    TimelineOverflow { len: usize },

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}
