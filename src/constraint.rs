//! Separation constraint: per-sample selection of reference entries

use crate::error::{Error, Result};
use crate::index::SeparationIndex;
use crate::separation::{Separation, SeparationConfig};
use crate::types::{Coord, Dimension, Point, Side, UngriddedData};
use rayon::prelude::*;
use std::ops::Range;
use tracing::{debug, trace};

/// How sample points are distributed over threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Evaluate sample points one after the other on the calling thread
    #[default]
    Sequential,
    /// Evaluate sample points on the global rayon pool
    Parallel,
}

/// Selects the reference entries within separation of each sample point
///
/// Holds immutable thresholds plus a cached index of the most recently
/// indexed reference dataset.
///
/// # Example
///
/// ```
/// use sepconstraint::{SepConstraint, SeparationConfig, UngriddedData};
///
/// let reference = UngriddedData::builder()
///     .latitude(vec![0.0, 0.0, 0.0])
///     .longitude(vec![0.0, 1.0, 5.0])
///     .values(vec![1.0, 2.0, 3.0])
///     .build()?;
/// let sample = UngriddedData::builder()
///     .latitude(vec![0.0])
///     .longitude(vec![0.5])
///     .build()?;
///
/// let mut constraint = SepConstraint::new(SeparationConfig::default().with_h_sep(100.0))?;
/// constraint.index_data(&reference)?;
///
/// let matched = constraint.constrain_points(&sample, &reference)?;
/// assert_eq!(matched.vals(), &[1.0, 2.0]);
/// # Ok::<(), sepconstraint::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SepConstraint {
    separation: Separation,
    execution: Execution,
    index: Option<SeparationIndex>,
}

impl SepConstraint {
    /// Validate thresholds and create a constraint
    ///
    /// Invalid thresholds are rejected here, before any indexing.
    pub fn new(config: SeparationConfig) -> Result<Self> {
        Ok(Self::from_separation(Separation::try_from(config)?))
    }

    pub fn from_separation(separation: Separation) -> Self {
        Self {
            separation,
            execution: Execution::default(),
            index: None,
        }
    }

    /// Choose how sample points are evaluated
    ///
    /// Results are identical in both modes.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn separation(&self) -> &Separation {
        &self.separation
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Currently cached index, if any
    pub fn index(&self) -> Option<&SeparationIndex> {
        self.index.as_ref()
    }

    /// Build (or reuse) the index of `data`
    ///
    /// Indexing the dataset that is already cached is a no-op. Indexing a
    /// different dataset replaces the cache.
    pub fn index_data(&mut self, data: &UngriddedData) -> Result<&SeparationIndex> {
        match self.index.take() {
            Some(index) if index.is_for(data) => {
                debug!(len = index.len(), "reusing separation index");
                Ok(self.index.insert(index))
            }
            _ => {
                let index = SeparationIndex::build(data)?;
                Ok(self.index.insert(index))
            }
        }
    }

    /// Reference entries within separation of every sample point
    ///
    /// Indexes `reference` first unless its index is already cached. The
    /// result concatenates, in sample order, the matches of each sample
    /// point; each sample's matches keep the reference order.
    pub fn constrain_points(
        &mut self,
        sample: &UngriddedData,
        reference: &UngriddedData,
    ) -> Result<ConstrainedPoints> {
        let separation = self.separation;
        let execution = self.execution;
        let index = self.index_data(reference)?;
        constrain(&separation, execution, index, sample, reference)
    }

    /// Same as [`constrain_points`](Self::constrain_points), against a
    /// caller-owned index
    ///
    /// The index must have been built from `reference` (or a clone of it).
    pub fn constrain_points_with(
        &self,
        index: &SeparationIndex,
        sample: &UngriddedData,
        reference: &UngriddedData,
    ) -> Result<ConstrainedPoints> {
        if !index.is_for(reference) {
            return Err(Error::ForeignIndex);
        }
        constrain(&self.separation, self.execution, index, sample, reference)
    }
}

fn constrain(
    separation: &Separation,
    execution: Execution,
    index: &SeparationIndex,
    sample: &UngriddedData,
    reference: &UngriddedData,
) -> Result<ConstrainedPoints> {
    check_dimensions(separation, index, sample)?;

    let points: Vec<Point> = (0..sample.len()).filter_map(|i| sample.point(i)).collect();
    let matches = |point: &Point| index.matches(separation, point);

    let per_sample: Vec<Vec<usize>> = match execution {
        Execution::Sequential => points.iter().map(matches).collect(),
        Execution::Parallel => points.par_iter().map(matches).collect(),
    };

    let result = ConstrainedPoints::assemble(reference, per_sample);

    trace!(
        samples = points.len(),
        reference = index.len(),
        matched = result.len(),
        "points constrained"
    );

    Ok(result)
}

/// Fail fast when a configured dimension is missing from either input
fn check_dimensions(
    separation: &Separation,
    index: &SeparationIndex,
    sample: &UngriddedData,
) -> Result<()> {
    for dimension in separation.dimensions() {
        if !index.has(dimension) {
            return Err(Error::DimensionMismatch {
                dimension,
                side: Side::Reference,
            });
        }

        let sample_has = match dimension {
            Dimension::Horizontal => sample.has(Coord::Latitude) && sample.has(Coord::Longitude),
            _ => sample.has(dimension.coord()),
        };
        if !sample_has {
            return Err(Error::DimensionMismatch {
                dimension,
                side: Side::Sample,
            });
        }
    }
    Ok(())
}

/// Reference entries selected by a constrain call
///
/// `data` holds the selected entries (coordinates and values) in output
/// order; `indices` holds their positions in the reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedPoints {
    data: UngriddedData,
    indices: Vec<usize>,
    /// `offsets[i]..offsets[i + 1]` is the slice of sample point `i`
    offsets: Vec<usize>,
}

impl ConstrainedPoints {
    fn assemble(reference: &UngriddedData, per_sample: Vec<Vec<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(per_sample.len() + 1);
        offsets.push(0);

        let total = per_sample.iter().map(Vec::len).sum();
        let mut indices = Vec::with_capacity(total);
        for matched in per_sample {
            indices.extend(matched);
            offsets.push(indices.len());
        }

        Self {
            data: reference.select(&indices),
            indices,
            offsets,
        }
    }

    /// Flattened values of all matched entries
    pub fn vals(&self) -> &[f64] {
        self.data.values()
    }

    /// Matched entries as a dataset of their own
    pub fn data(&self) -> &UngriddedData {
        &self.data
    }

    pub fn into_data(self) -> UngriddedData {
        self.data
    }

    /// Reference positions of the matched entries
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of sample points that were evaluated
    pub fn sample_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Output range belonging to sample point `i`
    pub fn sample_range(&self, i: usize) -> Option<Range<usize>> {
        let start = *self.offsets.get(i)?;
        let end = *self.offsets.get(i + 1)?;
        Some(start..end)
    }

    /// Reference positions matched by sample point `i`
    pub fn for_sample(&self, i: usize) -> Option<&[usize]> {
        self.sample_range(i).map(|range| &self.indices[range])
    }

    /// Values matched by sample point `i`
    pub fn vals_for_sample(&self, i: usize) -> Option<&[f64]> {
        self.sample_range(i).map(|range| &self.vals()[range])
    }
}
