//! Provider record types.
//!
//! These model the JSON school records served by data providers: nullable
//! numeric readings paired with optional suppression codes, grid coordinates
//! as raw text, and a nested three-year trend block per cohort. Field
//! absence is the norm in this data, hence `#[serde(default)]` throughout.
//! [`crate::normalize`] converts records into the comparison domain types.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A possibly-absent metric reading plus its optional suppression code.
///
/// `value` accepts JSON numbers and numeric strings. When it is absent the
/// code explains why; a record carrying neither means the measure was not
/// collected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetric {
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub code: Option<String>,
}

/// One cohort's readings for the three most recent years.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawYears {
    #[serde(default)]
    pub latest: RawMetric,
    #[serde(default)]
    pub previous: RawMetric,
    #[serde(default)]
    pub earliest: RawMetric,
}

/// The attainment trend block: one yearly series per cohort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrend {
    #[serde(default)]
    pub school: RawYears,
    #[serde(default)]
    pub local_authority: RawYears,
    #[serde(default)]
    pub national: RawYears,
}

/// A school as delivered by providers.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolRecord {
    pub urn: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub local_authority: String,
    /// Grid position as raw text; parsed downstream, never assumed numeric.
    #[serde(default)]
    pub easting: Option<String>,
    #[serde(default)]
    pub northing: Option<String>,
    #[serde(default)]
    pub attainment8: RawMetric,
    #[serde(default)]
    pub english: RawMetric,
    #[serde(default)]
    pub maths: RawMetric,
    #[serde(default)]
    pub science: RawMetric,
    #[serde(default)]
    pub humanities: RawMetric,
    #[serde(default)]
    pub language: RawMetric,
    #[serde(default)]
    pub trend: Option<RawTrend>,
}

/// A subject school with its precomputed comparable peers.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarSchoolsGroup {
    pub subject: SchoolRecord,
    #[serde(default)]
    pub peers: Vec<SchoolRecord>,
}
