//! Column-oriented search index over a reference dataset

use crate::error::{Error, Result};
use crate::separation::{Separation, within_altitude, within_pressure, within_time};
use crate::types::{Coord, DatasetId, Dimension, Point, UngriddedData};
use crate::utils::geo::{haversine_radians, meridional_km, wrap_longitude};
use crate::utils::time::{duration_nanos, epoch_nanos};
use tracing::debug;

/// Reference coordinates laid out for batch comparison against one point
///
/// Built once per reference dataset and read-only afterwards, so it can be
/// shared between threads. Entry `i` of every array belongs to entry `i`
/// of the source dataset.
#[derive(Debug, Clone)]
pub struct SeparationIndex {
    source: DatasetId,
    /// Latitude in radians
    latitude: Vec<f64>,
    /// Longitude in radians, wrapped to `[-π, π)`
    longitude: Vec<f64>,
    cos_latitude: Vec<f64>,
    altitude: Option<Vec<f64>>,
    air_pressure: Option<Vec<f64>>,
    /// Nanoseconds since the Unix epoch
    time: Option<Vec<i128>>,
}

impl SeparationIndex {
    /// Extract and convert the coordinate arrays of `data`
    ///
    /// Fails with [`Error::MissingCoordinate`] if the dataset has no
    /// latitude or longitude.
    pub fn build(data: &UngriddedData) -> Result<Self> {
        let lat = data
            .latitude()
            .ok_or(Error::MissingCoordinate(Coord::Latitude))?;
        let lon = data
            .longitude()
            .ok_or(Error::MissingCoordinate(Coord::Longitude))?;

        let latitude: Vec<f64> = lat.iter().map(|v| v.to_radians()).collect();
        let longitude = lon
            .iter()
            .map(|v| wrap_longitude(*v).to_radians())
            .collect();
        let cos_latitude = latitude.iter().map(|v| v.cos()).collect();

        let index = Self {
            source: data.id(),
            latitude,
            longitude,
            cos_latitude,
            altitude: data.altitude().map(<[f64]>::to_vec),
            air_pressure: data.air_pressure().map(<[f64]>::to_vec),
            time: data
                .time()
                .map(|t| t.iter().copied().map(epoch_nanos).collect()),
        };

        debug!(
            len = index.len(),
            altitude = index.altitude.is_some(),
            air_pressure = index.air_pressure.is_some(),
            time = index.time.is_some(),
            "separation index built"
        );

        Ok(index)
    }

    /// Number of indexed reference entries
    pub fn len(&self) -> usize {
        self.latitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_empty()
    }

    /// Dataset this index was built from
    pub fn source(&self) -> DatasetId {
        self.source
    }

    /// Whether this index was built from `data` (or a clone of it)
    ///
    /// Compares [`DatasetId`]s, not contents.
    pub fn is_for(&self, data: &UngriddedData) -> bool {
        self.source == data.id()
    }

    /// Whether the indexed data defines the coordinate `dimension` reads
    pub fn has(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Horizontal => true,
            Dimension::Altitude => self.altitude.is_some(),
            Dimension::Pressure => self.air_pressure.is_some(),
            Dimension::Time => self.time.is_some(),
        }
    }

    /// Positions of all entries within `separation` of `sample`
    ///
    /// Positions are ascending, i.e. in the native order of the reference
    /// dataset. A configured dimension that the sample point or the index
    /// does not define matches nothing.
    pub fn matches(&self, separation: &Separation, sample: &Point) -> Vec<usize> {
        let Some(checks) = self.checks(separation, sample) else {
            return Vec::new();
        };

        (0..self.len())
            .filter(|&i| checks.iter().all(|check| check.passes(i)))
            .collect()
    }

    /// Configured dimensions applicable to `sample`, bound to the indexed arrays
    ///
    /// Returns `None` if some configured dimension cannot be evaluated.
    fn checks<'a>(&'a self, separation: &Separation, sample: &Point) -> Option<Vec<Check<'a>>> {
        let vertical = sample.vertical();

        separation
            .dimensions()
            .map(|dimension| match dimension {
                Dimension::Horizontal => {
                    let latitude = sample.latitude.to_radians();
                    if latitude.is_nan() || sample.longitude.is_nan() {
                        return None;
                    }
                    Some(Check::Horizontal {
                        index: self,
                        latitude,
                        longitude: wrap_longitude(sample.longitude).to_radians(),
                        cos_latitude: latitude.cos(),
                        h_sep: separation.h_sep()?,
                    })
                }
                Dimension::Altitude => Some(Check::Altitude {
                    reference: self.altitude.as_deref()?,
                    sample: vertical.altitude()?,
                    a_sep: separation.a_sep()?,
                }),
                Dimension::Pressure => Some(Check::Pressure {
                    reference: self.air_pressure.as_deref()?,
                    sample: vertical.air_pressure()?,
                    p_sep: separation.p_sep()?,
                }),
                Dimension::Time => Some(Check::Time {
                    reference: self.time.as_deref()?,
                    sample: epoch_nanos(sample.time?),
                    t_sep: duration_nanos(separation.t_sep()?),
                }),
            })
            .collect()
    }
}

/// Rounding allowance for the meridional pre-check, which must never reject
/// an entry the haversine evaluation would accept
const PRUNE_SLACK_KM: f64 = 1e-9;

/// One configured dimension of a single sample point against the index
enum Check<'a> {
    Horizontal {
        index: &'a SeparationIndex,
        latitude: f64,
        longitude: f64,
        cos_latitude: f64,
        h_sep: f64,
    },
    Altitude {
        reference: &'a [f64],
        sample: f64,
        a_sep: f64,
    },
    Pressure {
        reference: &'a [f64],
        sample: f64,
        p_sep: f64,
    },
    Time {
        reference: &'a [i128],
        sample: i128,
        t_sep: i128,
    },
}

impl Check<'_> {
    #[inline]
    fn passes(&self, i: usize) -> bool {
        match *self {
            Check::Horizontal {
                index,
                latitude,
                longitude,
                cos_latitude,
                h_sep,
            } => {
                let ref_latitude = index.latitude[i];
                meridional_km(latitude, ref_latitude) <= h_sep + PRUNE_SLACK_KM
                    && haversine_radians(
                        latitude,
                        longitude,
                        cos_latitude,
                        ref_latitude,
                        index.longitude[i],
                        index.cos_latitude[i],
                    ) <= h_sep
            }
            Check::Altitude {
                reference,
                sample,
                a_sep,
            } => within_altitude(sample, reference[i], a_sep),
            Check::Pressure {
                reference,
                sample,
                p_sep,
            } => within_pressure(sample, reference[i], p_sep),
            Check::Time {
                reference,
                sample,
                t_sep,
            } => within_time(sample, reference[i], t_sep),
        }
    }
}
