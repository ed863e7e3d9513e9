//! Separation thresholds and the per-point predicate

use crate::error::{Error, Result};
use crate::types::{Dimension, Point};
use crate::utils::geo::haversine_km;
use crate::utils::time::{abs_diff_nanos, duration_nanos, epoch_nanos};
use jiff::SignedDuration;
use serde::Deserialize;

/// Unvalidated separation thresholds
///
/// Every field is optional; an omitted threshold places no constraint on
/// its dimension. Deserializes from e.g.
/// `{"h_sep": 1000, "t_sep": "PT24H1M"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeparationConfig {
    /// Maximum great-circle distance in kilometers
    #[serde(default)]
    pub h_sep: Option<f64>,
    /// Maximum absolute altitude difference in meters
    #[serde(default)]
    pub a_sep: Option<f64>,
    /// Maximum ratio between the larger and the smaller air pressure
    #[serde(default)]
    pub p_sep: Option<f64>,
    /// Maximum absolute time difference
    #[serde(default)]
    pub t_sep: Option<SignedDuration>,
}

impl SeparationConfig {
    pub fn with_h_sep(mut self, km: f64) -> Self {
        self.h_sep = Some(km);
        self
    }

    pub fn with_a_sep(mut self, meters: f64) -> Self {
        self.a_sep = Some(meters);
        self
    }

    pub fn with_p_sep(mut self, ratio: f64) -> Self {
        self.p_sep = Some(ratio);
        self
    }

    pub fn with_t_sep(mut self, duration: SignedDuration) -> Self {
        self.t_sep = Some(duration);
        self
    }
}

/// Validated, immutable separation thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Separation {
    h_sep: Option<f64>,
    a_sep: Option<f64>,
    p_sep: Option<f64>,
    t_sep: Option<SignedDuration>,
}

impl Separation {
    /// Validate a configuration
    ///
    /// Distances must be finite and non-negative, the duration non-negative
    /// and the pressure ratio finite and strictly greater than 1.
    pub fn new(config: SeparationConfig) -> Result<Self> {
        check(Dimension::Horizontal, config.h_sep, |v| v.is_finite() && *v >= 0.0)?;
        check(Dimension::Altitude, config.a_sep, |v| v.is_finite() && *v >= 0.0)?;
        check(Dimension::Pressure, config.p_sep, |v| v.is_finite() && *v > 1.0)?;
        check(Dimension::Time, config.t_sep, |v| !v.is_negative())?;

        Ok(Self {
            h_sep: config.h_sep,
            a_sep: config.a_sep,
            p_sep: config.p_sep,
            t_sep: config.t_sep,
        })
    }

    /// Thresholds that place no constraint at all
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn h_sep(&self) -> Option<f64> {
        self.h_sep
    }

    pub fn a_sep(&self) -> Option<f64> {
        self.a_sep
    }

    pub fn p_sep(&self) -> Option<f64> {
        self.p_sep
    }

    pub fn t_sep(&self) -> Option<SignedDuration> {
        self.t_sep
    }

    /// Whether a threshold is configured for `dimension`
    pub fn constrains(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Horizontal => self.h_sep.is_some(),
            Dimension::Altitude => self.a_sep.is_some(),
            Dimension::Pressure => self.p_sep.is_some(),
            Dimension::Time => self.t_sep.is_some(),
        }
    }

    /// Configured dimensions, in evaluation order
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL.into_iter().filter(|d| self.constrains(*d))
    }

    /// Whether `reference` is within separation of `sample`
    ///
    /// A configured dimension that either point lacks fails the test.
    /// With no thresholds configured every pair matches.
    pub fn is_within(&self, sample: &Point, reference: &Point) -> bool {
        self.dimensions()
            .all(|dimension| self.is_within_on(dimension, sample, reference))
    }

    fn is_within_on(&self, dimension: Dimension, sample: &Point, reference: &Point) -> bool {
        match dimension {
            Dimension::Horizontal => self
                .h_sep
                .is_some_and(|h_sep| within_horizontal(sample, reference, h_sep)),
            Dimension::Altitude => {
                let a_sep = self.a_sep;
                let sample = sample.vertical().altitude();
                let reference = reference.vertical().altitude();
                matches!((a_sep, sample, reference), (Some(a_sep), Some(s), Some(r)) if within_altitude(s, r, a_sep))
            }
            Dimension::Pressure => {
                let p_sep = self.p_sep;
                let sample = sample.vertical().air_pressure();
                let reference = reference.vertical().air_pressure();
                matches!((p_sep, sample, reference), (Some(p_sep), Some(s), Some(r)) if within_pressure(s, r, p_sep))
            }
            Dimension::Time => match (self.t_sep, sample.time, reference.time) {
                (Some(t_sep), Some(s), Some(r)) => {
                    within_time(epoch_nanos(s), epoch_nanos(r), duration_nanos(t_sep))
                }
                _ => false,
            },
        }
    }
}

fn check<T: std::fmt::Display>(
    dimension: Dimension,
    value: Option<T>,
    valid: impl Fn(&T) -> bool,
) -> Result<()> {
    match value {
        Some(value) if !valid(&value) => Err(Error::InvalidThreshold {
            dimension,
            value: value.to_string(),
        }),
        _ => Ok(()),
    }
}

impl TryFrom<SeparationConfig> for Separation {
    type Error = Error;

    fn try_from(config: SeparationConfig) -> Result<Self> {
        Self::new(config)
    }
}

/// Great-circle distance test, `h_sep` in kilometers
pub fn within_horizontal(sample: &Point, reference: &Point, h_sep: f64) -> bool {
    haversine_km(
        sample.latitude,
        sample.longitude,
        reference.latitude,
        reference.longitude,
    ) <= h_sep
}

/// Absolute altitude difference test, `a_sep` in meters
#[inline]
pub fn within_altitude(sample: f64, reference: f64, a_sep: f64) -> bool {
    (sample - reference).abs() <= a_sep
}

/// Pressure ratio band test
///
/// Passes when the larger of the two pressures is at most `p_sep` times the
/// smaller one, i.e. `sample / p_sep <= reference <= sample * p_sep`. The
/// ratio is always taken larger over smaller, so swapping the arguments
/// never changes the result. Non-positive or NaN pressures never pass.
#[inline]
pub fn within_pressure(sample: f64, reference: f64, p_sep: f64) -> bool {
    if !(sample > 0.0 && reference > 0.0) {
        return false;
    }
    sample.max(reference) / sample.min(reference) <= p_sep
}

/// Absolute time difference test on epoch nanoseconds
#[inline]
pub fn within_time(sample: i128, reference: i128, t_sep: i128) -> bool {
    abs_diff_nanos(sample, reference) <= t_sep
}
