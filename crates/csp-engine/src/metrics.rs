//! Metric selection for school rankings.

use rust_decimal::Decimal;
use serde::Serialize;

use csp_core::{AvailabilityValue, ComparableSchool};

/// The closed set of rankable metrics.
///
/// Sort keys resolve through [`MetricKey::parse`], which is total: every
/// caller-supplied string selects a valid metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Attainment8,
    English,
    Maths,
    Science,
    Humanities,
    Language,
}

impl MetricKey {
    /// Every selectable metric, in display order.
    pub const ALL: [MetricKey; 6] = [
        Self::Attainment8,
        Self::English,
        Self::Maths,
        Self::Science,
        Self::Humanities,
        Self::Language,
    ];

    /// Short code used in sort-key query strings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Attainment8 => "Att8",
            Self::English => "Eng",
            Self::Maths => "Mat",
            Self::Science => "Sci",
            Self::Humanities => "Hum",
            Self::Language => "Lan",
        }
    }

    /// Name shown to users for this metric.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Attainment8 => "Attainment 8",
            Self::English => "Grade 5 or above in English",
            Self::Maths => "Grade 5 or above in maths",
            Self::Science => "Grade 5 or above in science",
            Self::Humanities => "Grade 5 or above in humanities",
            Self::Language => "Grade 5 or above in a language",
        }
    }

    /// Resolves a sort-key string to a metric.
    ///
    /// Unknown or empty keys fall back to Attainment 8 rather than failing.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|metric| metric.code() == key)
            .unwrap_or(Self::Attainment8)
    }

    /// The selected metric's reading on `school`.
    #[must_use]
    pub fn value_of(self, school: &ComparableSchool) -> &AvailabilityValue<Decimal> {
        match self {
            Self::Attainment8 => &school.attainment8,
            Self::English => &school.english,
            Self::Maths => &school.maths,
            Self::Science => &school.science,
            Self::Humanities => &school.humanities,
            Self::Language => &school.language,
        }
    }
}

/// One selectable sort choice, flagged when it is the active selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub key: MetricKey,
    pub name: &'static str,
    pub selected: bool,
}

/// The full list of sort choices with `current` marked as selected.
#[must_use]
pub fn sort_options(current: MetricKey) -> Vec<SortOption> {
    MetricKey::ALL
        .into_iter()
        .map(|key| SortOption {
            key,
            name: key.display_name(),
            selected: key == current,
        })
        .collect()
}
