use std::fmt;

/// Coordinate (or value) array of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coord {
    Latitude,
    Longitude,
    Altitude,
    AirPressure,
    Time,
    Values,
}

impl Coord {
    pub fn name(&self) -> &'static str {
        match self {
            Coord::Latitude => "latitude",
            Coord::Longitude => "longitude",
            Coord::Altitude => "altitude",
            Coord::AirPressure => "air_pressure",
            Coord::Time => "time",
            Coord::Values => "values",
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical dimension a separation threshold applies to
///
/// Ordered the way thresholds are evaluated: horizontal first, since it
/// usually rejects the largest share of reference entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Horizontal,
    Altitude,
    Pressure,
    Time,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Horizontal,
        Dimension::Altitude,
        Dimension::Pressure,
        Dimension::Time,
    ];

    /// Coordinate array this dimension reads
    ///
    /// Horizontal reads longitude as well; latitude is reported since both
    /// are mandatory for indexing anyway.
    pub fn coord(&self) -> Coord {
        match self {
            Dimension::Horizontal => Coord::Latitude,
            Dimension::Altitude => Coord::Altitude,
            Dimension::Pressure => Coord::AirPressure,
            Dimension::Time => Coord::Time,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Horizontal => "horizontal",
            Dimension::Altitude => "altitude",
            Dimension::Pressure => "pressure",
            Dimension::Time => "time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which input of a constrain call an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Sample,
    Reference,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sample => f.write_str("sample points"),
            Side::Reference => f.write_str("reference data"),
        }
    }
}
