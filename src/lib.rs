#![doc = include_str!("../README.md")]

pub use crate::constraint::{ConstrainedPoints, Execution, SepConstraint};
pub use crate::error::{Error, Result};
pub use crate::index::SeparationIndex;
pub use crate::separation::{Separation, SeparationConfig};
pub use crate::types::*;

mod constraint;
mod error;
mod index;
pub mod separation;
mod types;
pub mod utils;
