//! Multi-year trend averaging.
//!
//! Each metric carries up to three yearly readings per cohort (the school
//! itself, its local authority, the national figure). Averages skip
//! withheld years rather than zeroing them, and round to one decimal place
//! with midpoints going away from zero, matching the published statistics.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityValue;

/// Three yearly readings of one metric for one cohort, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricHistory {
    pub latest: AvailabilityValue<Decimal>,
    pub previous: AvailabilityValue<Decimal>,
    pub earliest: AvailabilityValue<Decimal>,
}

impl MetricHistory {
    #[must_use]
    pub fn new(
        latest: AvailabilityValue<Decimal>,
        previous: AvailabilityValue<Decimal>,
        earliest: AvailabilityValue<Decimal>,
    ) -> Self {
        Self {
            latest,
            previous,
            earliest,
        }
    }

    /// Mean of the readings that are present, rounded to one decimal place
    /// with midpoints rounding away from zero (not banker's rounding).
    ///
    /// `None` when every year is withheld.
    #[must_use]
    pub fn mean(&self) -> Option<Decimal> {
        let present: Vec<Decimal> = [&self.latest, &self.previous, &self.earliest]
            .into_iter()
            .filter_map(AvailabilityValue::value)
            .collect();
        if present.is_empty() {
            return None;
        }
        let sum: Decimal = present.iter().sum();
        let mean = sum / Decimal::from(present.len());
        Some(mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Per-cohort trend averages shown alongside a school comparison.
///
/// `Default` is the all-absent state used when a school has no trend block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAverage {
    pub school: Option<Decimal>,
    pub local_authority: Option<Decimal>,
    pub national: Option<Decimal>,
}

impl TrendAverage {
    /// Averages each cohort independently.
    #[must_use]
    pub fn from_histories(
        school: &MetricHistory,
        local_authority: &MetricHistory,
        national: &MetricHistory,
    ) -> Self {
        Self {
            school: school.mean(),
            local_authority: local_authority.mean(),
            national: national.mean(),
        }
    }
}
