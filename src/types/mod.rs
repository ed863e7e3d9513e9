mod data;
mod enums;
mod point;

pub use data::*;
pub use enums::*;
pub use point::*;
