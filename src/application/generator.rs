use crate::domain::errors::DashboardError;
use crate::domain::metrics::{MetricKind, MetricSeries, MetricsSnapshot};
use crate::domain::timeline::Timeline;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use std::ops::Range;
use tracing::{debug, info};

/// Distribution the raw samples are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseShape {
    Normal { mean: f64, std_dev: f64 },
    Constant(f64),
}

/// A localized perturbation simulating an incident
#[derive(Debug, Clone, PartialEq)]
pub enum Spike {
    /// Adds `offset` to every sample in `range`
    Add { range: Range<usize>, offset: f64 },
    /// Overwrites samples starting at `start` with `values`
    Set { start: usize, values: Vec<f64> },
}

impl Spike {
    fn range(&self) -> Range<usize> {
        match self {
            Spike::Add { range, .. } => range.clone(),
            Spike::Set { start, values } => *start..start + values.len(),
        }
    }

    fn apply(&self, samples: &mut [f64]) {
        match self {
            Spike::Add { range, offset } => {
                for v in &mut samples[range.clone()] {
                    *v += offset;
                }
            }
            Spike::Set { start, values } => {
                samples[*start..start + values.len()].copy_from_slice(values);
            }
        }
    }
}

/// How one metric series is synthesized.
///
/// Samples are drawn from `base`, folded to absolute values when `abs` is
/// set, truncated when `integral` is set, then each spike is applied in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRecipe {
    pub base: BaseShape,
    pub abs: bool,
    pub integral: bool,
    pub spikes: Vec<Spike>,
}

impl SeriesRecipe {
    pub fn for_kind(kind: MetricKind) -> Self {
        match kind {
            MetricKind::SuccessRate | MetricKind::Health => Self {
                base: BaseShape::Normal {
                    mean: 90.0,
                    std_dev: 3.0,
                },
                abs: false,
                integral: kind.is_integral(),
                spikes: Vec::new(),
            },
            MetricKind::QueueDepth => Self {
                base: BaseShape::Normal {
                    mean: 50.0,
                    std_dev: 20.0,
                },
                abs: true,
                integral: kind.is_integral(),
                spikes: vec![Spike::Add {
                    range: 45..50,
                    offset: 100.0,
                }],
            },
            MetricKind::DlqCount => Self {
                base: BaseShape::Constant(0.0),
                abs: false,
                integral: kind.is_integral(),
                spikes: vec![Spike::Set {
                    start: 48,
                    values: vec![1.0, 3.0, 5.0, 2.0],
                }],
            },
            MetricKind::WorkerLatency => Self {
                base: BaseShape::Normal {
                    mean: 2.0,
                    std_dev: 0.5,
                },
                abs: true,
                integral: kind.is_integral(),
                spikes: vec![Spike::Add {
                    range: 45..50,
                    offset: 2.0,
                }],
            },
            MetricKind::GatewayLatency => Self {
                base: BaseShape::Normal {
                    mean: 120.0,
                    std_dev: 20.0,
                },
                abs: true,
                integral: kind.is_integral(),
                spikes: vec![Spike::Add {
                    range: 20..25,
                    offset: 80.0,
                }],
            },
        }
    }
}

/// Produces synthetic metric series from an injectable RNG
pub struct MetricGenerator<R: Rng> {
    rng: R,
}

impl MetricGenerator<StdRng> {
    /// Unseeded generator; values differ on every run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> MetricGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn series(&mut self, kind: MetricKind, len: usize) -> Result<MetricSeries, DashboardError> {
        let recipe = SeriesRecipe::for_kind(kind);
        self.series_from_recipe(kind, &recipe, len)
    }

    pub fn series_from_recipe(
        &mut self,
        kind: MetricKind,
        recipe: &SeriesRecipe,
        len: usize,
    ) -> Result<MetricSeries, DashboardError> {
        for spike in &recipe.spikes {
            let range = spike.range();
            if range.start > range.end || range.end > len {
                return Err(DashboardError::SpikeOutOfRange {
                    kind,
                    start: range.start,
                    end: range.end,
                    len,
                });
            }
        }

        let mut samples: Vec<f64> = match recipe.base {
            BaseShape::Normal { mean, std_dev } => {
                let normal = Normal::new(mean, std_dev).map_err(|e| {
                    DashboardError::InvalidDistribution {
                        kind,
                        reason: e.to_string(),
                    }
                })?;
                (&mut self.rng).sample_iter(normal).take(len).collect()
            }
            BaseShape::Constant(value) => vec![value; len],
        };

        if recipe.abs {
            samples.iter_mut().for_each(|v| *v = v.abs());
        }
        if recipe.integral {
            samples.iter_mut().for_each(|v| *v = v.trunc());
        }
        for spike in &recipe.spikes {
            spike.apply(&mut samples);
        }

        debug!(metric = %kind, samples = samples.len(), "Generated series");
        Ok(MetricSeries::new(kind, samples))
    }

    /// Generates every metric over `timeline`.
    pub fn snapshot(&mut self, timeline: Timeline) -> Result<MetricsSnapshot, DashboardError> {
        let len = timeline.len();
        let series = MetricKind::ALL
            .iter()
            .map(|kind| self.series(*kind, len))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Generated {} synthetic series over {} samples",
            series.len(),
            len
        );
        MetricsSnapshot::new(timeline, series)
    }
}
