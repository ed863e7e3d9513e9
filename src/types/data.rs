use crate::error::{Error, Result};
use crate::types::{Coord, Point};
use jiff::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DATASET_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a built dataset, shared by its clones
///
/// Identity is not content: two datasets built separately from identical
/// arrays get different ids, so an index built for one is not reused for
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetId(u64);

impl DatasetId {
    fn next() -> Self {
        Self(NEXT_DATASET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Ungridded (point-wise) dataset with coordinate arrays and values
///
/// Every present array has one entry per point, positionally aligned with
/// `values`. The order of entries is the dataset's native order and is
/// preserved by every selection. Missing float coordinates of individual
/// entries are stored as NaN.
///
/// # Example
///
/// ```
/// use sepconstraint::UngriddedData;
///
/// let data = UngriddedData::builder()
///     .latitude(vec![0.0, 1.0])
///     .longitude(vec![0.0, 1.0])
///     .values(vec![10.0, 20.0])
///     .build()?;
///
/// assert_eq!(data.len(), 2);
/// # Ok::<(), sepconstraint::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UngriddedData {
    id: DatasetId,
    latitude: Option<Vec<f64>>,
    longitude: Option<Vec<f64>>,
    altitude: Option<Vec<f64>>,
    air_pressure: Option<Vec<f64>>,
    time: Option<Vec<Timestamp>>,
    values: Vec<f64>,
}

impl UngriddedData {
    pub fn builder() -> UngriddedDataBuilder {
        UngriddedDataBuilder::default()
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flattened data values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn latitude(&self) -> Option<&[f64]> {
        self.latitude.as_deref()
    }

    pub fn longitude(&self) -> Option<&[f64]> {
        self.longitude.as_deref()
    }

    pub fn altitude(&self) -> Option<&[f64]> {
        self.altitude.as_deref()
    }

    pub fn air_pressure(&self) -> Option<&[f64]> {
        self.air_pressure.as_deref()
    }

    pub fn time(&self) -> Option<&[Timestamp]> {
        self.time.as_deref()
    }

    /// Whether the given array is defined for this dataset
    pub fn has(&self, coord: Coord) -> bool {
        match coord {
            Coord::Latitude => self.latitude.is_some(),
            Coord::Longitude => self.longitude.is_some(),
            Coord::Altitude => self.altitude.is_some(),
            Coord::AirPressure => self.air_pressure.is_some(),
            Coord::Time => self.time.is_some(),
            Coord::Values => true,
        }
    }

    /// Coordinate tuple of entry `i`
    ///
    /// Returns `None` if `i` is out of range. A missing latitude or
    /// longitude array reads as NaN; NaN vertical entries are reported as
    /// `None`.
    pub fn point(&self, i: usize) -> Option<Point> {
        if i >= self.len() {
            return None;
        }

        let float = |arr: &Option<Vec<f64>>| arr.as_ref().map(|a| a[i]).filter(|v| !v.is_nan());

        Some(Point {
            latitude: float(&self.latitude).unwrap_or(f64::NAN),
            longitude: float(&self.longitude).unwrap_or(f64::NAN),
            altitude: float(&self.altitude),
            air_pressure: float(&self.air_pressure),
            time: self.time.as_ref().map(|t| t[i]),
        })
    }

    /// Materialize the entries at `indices`, in the given order
    ///
    /// Indices may repeat. The subset carries every array present on the
    /// source and gets an id of its own.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn select(&self, indices: &[usize]) -> UngriddedData {
        fn pick<T: Copy>(arr: &Option<Vec<T>>, indices: &[usize]) -> Option<Vec<T>> {
            arr.as_ref().map(|a| indices.iter().map(|&i| a[i]).collect())
        }

        UngriddedData {
            id: DatasetId::next(),
            latitude: pick(&self.latitude, indices),
            longitude: pick(&self.longitude, indices),
            altitude: pick(&self.altitude, indices),
            air_pressure: pick(&self.air_pressure, indices),
            time: pick(&self.time, indices),
            values: indices.iter().map(|&i| self.values[i]).collect(),
        }
    }
}

/// Builder for [`UngriddedData`]
///
/// Arrays are optional; all supplied arrays must have the same length.
/// Omitted values are filled with NaN, which is what sample point
/// collections usually want.
#[derive(Debug, Default, Clone)]
pub struct UngriddedDataBuilder {
    latitude: Option<Vec<f64>>,
    longitude: Option<Vec<f64>>,
    altitude: Option<Vec<f64>>,
    air_pressure: Option<Vec<f64>>,
    time: Option<Vec<Timestamp>>,
    values: Option<Vec<f64>>,
}

impl UngriddedDataBuilder {
    pub fn latitude(mut self, latitude: Vec<f64>) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn longitude(mut self, longitude: Vec<f64>) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn altitude(mut self, altitude: Vec<f64>) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn air_pressure(mut self, air_pressure: Vec<f64>) -> Self {
        self.air_pressure = Some(air_pressure);
        self
    }

    pub fn time(mut self, time: Vec<Timestamp>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Validate array lengths and build the dataset
    pub fn build(self) -> Result<UngriddedData> {
        let lengths = [
            (Coord::Values, self.values.as_ref().map(Vec::len)),
            (Coord::Latitude, self.latitude.as_ref().map(Vec::len)),
            (Coord::Longitude, self.longitude.as_ref().map(Vec::len)),
            (Coord::Altitude, self.altitude.as_ref().map(Vec::len)),
            (Coord::AirPressure, self.air_pressure.as_ref().map(Vec::len)),
            (Coord::Time, self.time.as_ref().map(Vec::len)),
        ];

        let expected = lengths.iter().find_map(|(_, len)| *len).unwrap_or(0);
        for (coord, len) in lengths {
            match len {
                Some(actual) if actual != expected => {
                    return Err(Error::LengthMismatch {
                        coord,
                        expected,
                        actual,
                    });
                }
                _ => {}
            }
        }

        Ok(UngriddedData {
            id: DatasetId::next(),
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            air_pressure: self.air_pressure,
            time: self.time,
            values: self.values.unwrap_or_else(|| vec![f64::NAN; expected]),
        })
    }
}
