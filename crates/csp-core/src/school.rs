//! The school entity that enters comparisons.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityValue;
use crate::geo::GridCoordinate;

/// One school as the engine sees it: identity, an optional grid position,
/// and the fixed set of availability-tagged performance metrics.
///
/// Built per request from provider records; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableSchool {
    pub urn: String,
    pub name: String,
    pub address: String,
    pub local_authority: String,
    pub position: Option<GridCoordinate>,
    /// Attainment 8 score.
    pub attainment8: AvailabilityValue<Decimal>,
    /// Percentage of pupils achieving grade 5 or above in English.
    pub english: AvailabilityValue<Decimal>,
    /// Percentage of pupils achieving grade 5 or above in maths.
    pub maths: AvailabilityValue<Decimal>,
    /// Percentage of pupils achieving grade 5 or above in science.
    pub science: AvailabilityValue<Decimal>,
    /// Percentage of pupils achieving grade 5 or above in humanities.
    pub humanities: AvailabilityValue<Decimal>,
    /// Percentage of pupils achieving grade 5 or above in a language.
    pub language: AvailabilityValue<Decimal>,
}
