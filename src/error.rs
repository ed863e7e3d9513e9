use crate::types::{Coord, Dimension, Side};

/// Unrecoverable constraint errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Missing {0} coordinate")]
    MissingCoordinate(Coord),

    #[error("Invalid {dimension} threshold: {value}")]
    InvalidThreshold { dimension: Dimension, value: String },

    #[error("{dimension} separation configured but the {side} has no {} coordinate", .dimension.coord())]
    DimensionMismatch { dimension: Dimension, side: Side },

    #[error("Separation index was not built from the reference data")]
    ForeignIndex,

    #[error("{coord} has {actual} entries (expected {expected})")]
    LengthMismatch {
        coord: Coord,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
