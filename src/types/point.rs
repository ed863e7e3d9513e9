use jiff::Timestamp;

/// A single collocation coordinate
///
/// Latitude and longitude are in degrees, altitude in meters and air
/// pressure in whatever unit the reference data uses. Sample points and
/// reference entries share this shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub air_pressure: Option<f64>,
    pub time: Option<Timestamp>,
}

/// Vertical representation(s) carried by a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    Absent,
    Altitude(f64),
    Pressure(f64),
    Both { altitude: f64, air_pressure: f64 },
}

impl Point {
    /// Create a point with horizontal position only
    pub fn lat_lon(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            air_pressure: None,
            time: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_air_pressure(mut self, air_pressure: f64) -> Self {
        self.air_pressure = Some(air_pressure);
        self
    }

    pub fn with_time(mut self, time: Timestamp) -> Self {
        self.time = Some(time);
        self
    }

    /// Vertical coordinate(s) of this point
    ///
    /// NaN entries count as absent.
    pub fn vertical(&self) -> Vertical {
        let altitude = self.altitude.filter(|v| !v.is_nan());
        let air_pressure = self.air_pressure.filter(|v| !v.is_nan());
        match (altitude, air_pressure) {
            (None, None) => Vertical::Absent,
            (Some(altitude), None) => Vertical::Altitude(altitude),
            (None, Some(air_pressure)) => Vertical::Pressure(air_pressure),
            (Some(altitude), Some(air_pressure)) => Vertical::Both {
                altitude,
                air_pressure,
            },
        }
    }
}

impl Vertical {
    pub fn altitude(&self) -> Option<f64> {
        match *self {
            Vertical::Altitude(altitude) | Vertical::Both { altitude, .. } => Some(altitude),
            _ => None,
        }
    }

    pub fn air_pressure(&self) -> Option<f64> {
        match *self {
            Vertical::Pressure(air_pressure) | Vertical::Both { air_pressure, .. } => {
                Some(air_pressure)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn lat_lon_has_no_vertical() {
        let point = Point::lat_lon(1.0, 2.0);
        assert_eq!(point.vertical(), Vertical::Absent);
        assert_none!(point.time);
    }

    #[test]
    fn vertical_tags() {
        let alt = Point::lat_lon(0.0, 0.0).with_altitude(50.0);
        assert_eq!(alt.vertical(), Vertical::Altitude(50.0));
        assert_none!(alt.vertical().air_pressure());

        let pres = Point::lat_lon(0.0, 0.0).with_air_pressure(850.0);
        assert_eq!(pres.vertical(), Vertical::Pressure(850.0));
        assert_none!(pres.vertical().altitude());

        let both = alt.with_air_pressure(850.0);
        assert_some_eq!(both.vertical().altitude(), 50.0);
        assert_some_eq!(both.vertical().air_pressure(), 850.0);
    }

    #[test]
    fn nan_vertical_is_absent() {
        let point = Point::lat_lon(0.0, 0.0)
            .with_altitude(f64::NAN)
            .with_air_pressure(1000.0);
        assert_eq!(point.vertical(), Vertical::Pressure(1000.0));
    }
}
