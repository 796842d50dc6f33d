//! Availability-tagged metric values.
//!
//! Published school statistics are frequently withheld: confidentiality
//! rules, cohorts too small to publish, or a measure that does not apply.
//! The source data marks these with single-letter suppression codes in place
//! of a number. [`AvailabilityValue`] models "a value, or the reason there is
//! none" as one type so the illegal state of a value that is both present
//! and suppressed cannot be constructed.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a reported statistic carries no numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionReason {
    /// Withheld under disclosure-control rules (`c` in source data).
    Confidential,
    /// The cohort is too small to publish without identifying pupils (`x`).
    SmallCohort,
    /// The measure does not apply to this school (`z`), or nothing was
    /// collected at all.
    NotApplicable,
    /// Any other marker the source emits, preserved verbatim.
    Other(String),
}

impl SuppressionReason {
    /// Maps a raw suppression code to a reason.
    ///
    /// Total: the single-letter markers match case-insensitively, a blank
    /// code means not applicable, and anything else is carried through as
    /// [`SuppressionReason::Other`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let trimmed = code.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "c" => Self::Confidential,
            "x" => Self::SmallCohort,
            "" | "z" => Self::NotApplicable,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Label shown wherever a number would have been.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Confidential => "confidential",
            Self::SmallCohort => "cohort too small",
            Self::NotApplicable => "not applicable",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported metric: either a usable value or a reason it was withheld.
///
/// Constructed once when raw source data is parsed and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityValue<T> {
    Available(T),
    Unavailable(SuppressionReason),
}

impl<T> AvailabilityValue<T> {
    #[must_use]
    pub fn available(value: T) -> Self {
        Self::Available(value)
    }

    #[must_use]
    pub fn unavailable(reason: SuppressionReason) -> Self {
        Self::Unavailable(reason)
    }

    /// Builds a value from the raw pair of optional number and optional
    /// suppression code. A present number always wins; an absent number with
    /// no code is treated as not applicable.
    #[must_use]
    pub fn from_raw(value: Option<T>, code: Option<&str>) -> Self {
        match value {
            Some(v) => Self::Available(v),
            None => Self::Unavailable(SuppressionReason::from_code(code.unwrap_or(""))),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The suppression reason, when the value is withheld.
    #[must_use]
    pub fn reason(&self) -> Option<&SuppressionReason> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

impl<T: Copy> AvailabilityValue<T> {
    /// The reported value, when one is present.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Available(v) => Some(*v),
            Self::Unavailable(_) => None,
        }
    }
}

impl<T: Ord> AvailabilityValue<T> {
    /// Total order used by every ranking sort.
    ///
    /// Available values compare by payload; any unavailable value is
    /// strictly less than any available one, so a descending sort always
    /// places withheld entries at the end. Two unavailable values compare
    /// equal regardless of reason, which is why this is a named comparator
    /// rather than an [`Ord`] impl: [`Eq`] still distinguishes their reasons.
    #[must_use]
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Available(a), Self::Available(b)) => a.cmp(b),
            (Self::Available(_), Self::Unavailable(_)) => Ordering::Greater,
            (Self::Unavailable(_), Self::Available(_)) => Ordering::Less,
            (Self::Unavailable(_), Self::Unavailable(_)) => Ordering::Equal,
        }
    }
}

impl<T: fmt::Display> fmt::Display for AvailabilityValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(value) => value.fmt(f),
            Self::Unavailable(reason) => reason.fmt(f),
        }
    }
}
