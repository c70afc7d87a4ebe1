use crate::domain::errors::DashboardError;
use chrono::{DateTime, Duration, Local};

/// Number of samples shown on every panel (one hour of minute samples)
pub const WINDOW_LEN: usize = 60;

/// Shared x axis of the dashboard: minute-spaced timestamps.
///
/// Entry `i` of a timeline of length `n` built at `now` is
/// `now - (n - i)` minutes, so the newest point is one minute old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    points: Vec<DateTime<Local>>,
}

impl Timeline {
    /// Builds the standard window ending at the current local time.
    pub fn now() -> Result<Self, DashboardError> {
        Self::ending_at(Local::now(), WINDOW_LEN)
    }

    /// Fails when the oldest point would fall outside chrono's date range.
    pub fn ending_at(now: DateTime<Local>, len: usize) -> Result<Self, DashboardError> {
        let points = (0..len)
            .map(|i| {
                i64::try_from(len - i)
                    .ok()
                    .and_then(Duration::try_minutes)
                    .and_then(|offset| now.checked_sub_signed(offset))
                    .ok_or(DashboardError::TimelineOverflow { len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DateTime<Local>] {
        &self.points
    }

    pub fn first(&self) -> Option<DateTime<Local>> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DateTime<Local>> {
        self.points.last().copied()
    }

    /// X values for plotting, in seconds since the Unix epoch
    pub fn as_unix_seconds(&self) -> Vec<f64> {
        self.points.iter().map(|t| t.timestamp() as f64).collect()
    }
}
