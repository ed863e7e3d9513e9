pub mod geo;
pub mod time;
