//! National grid and geographic coordinate types.
//!
//! School positions arrive as textual easting/northing pairs on the OSGB36
//! national grid. This module parses them, measures straight-line distance
//! between grid points, and converts to WGS84 latitude/longitude for map
//! display.

use serde::{Deserialize, Serialize};

use crate::osgb36;

const MILES_PER_KILOMETER: f64 = 0.621_371_2;

/// A position on the national grid: easting/northing in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub easting: f64,
    pub northing: f64,
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GridCoordinate {
    #[must_use]
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    /// Parses the textual easting/northing pair found in source data.
    ///
    /// Returns `None` unless both fields parse as finite numbers. Absent or
    /// malformed coordinate text is a normal outcome for this data, not an
    /// error.
    #[must_use]
    pub fn parse(easting: &str, northing: &str) -> Option<Self> {
        let easting = parse_finite(easting)?;
        let northing = parse_finite(northing)?;
        Some(Self { easting, northing })
    }

    /// Straight-line distance to `other` in miles.
    ///
    /// Planar Euclidean distance over grid meters, converted to miles. Valid
    /// only because the grid covers a bounded local area; this is not a
    /// geodesic and loses accuracy toward the grid edges.
    #[must_use]
    pub fn distance_miles(self, other: Self) -> f64 {
        let de = self.easting - other.easting;
        let dn = self.northing - other.northing;
        de.hypot(dn) / 1000.0 * MILES_PER_KILOMETER
    }

    /// The equivalent WGS84 position.
    #[must_use]
    pub fn to_wgs84(self) -> GeographicCoordinate {
        let (latitude, longitude) = osgb36::grid_to_wgs84(self.easting, self.northing);
        GeographicCoordinate {
            latitude,
            longitude,
        }
    }
}

/// Strict float parse that also rejects non-finite values.
fn parse_finite(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
