//! Ranking of comparable schools by a selected metric.

use rust_decimal::Decimal;
use serde::Serialize;

use csp_core::{AvailabilityValue, ComparableSchool, GeographicCoordinate, GridCoordinate};

use crate::metrics::MetricKey;

/// The metric a ranking ran under, with the ranked school's reading for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortDescriptor {
    pub key: MetricKey,
    pub name: &'static str,
    pub value: AvailabilityValue<Decimal>,
}

/// One school in a ranked comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub school: ComparableSchool,
    /// WGS84 position for map display, when the school has a grid position.
    pub location: Option<GeographicCoordinate>,
    pub sort: SortDescriptor,
}

/// Ranks `schools` descending by the chosen metric.
///
/// Stateless and deterministic. The sort is stable: schools with equal
/// readings, and all schools with withheld readings, keep their input
/// relative order, so repeated calls with identical input paginate
/// identically. Withheld readings always rank last.
#[must_use]
pub fn rank(schools: Vec<ComparableSchool>, key: MetricKey) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = schools
        .into_iter()
        .map(|school| {
            let location = school.position.map(GridCoordinate::to_wgs84);
            let value = key.value_of(&school).clone();
            RankedEntry {
                school,
                location,
                sort: SortDescriptor {
                    key,
                    name: key.display_name(),
                    value,
                },
            }
        })
        .collect();
    entries.sort_by(|a, b| b.sort.value.ranking_cmp(&a.sort.value));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use csp_core::SuppressionReason;

    fn school(urn: &str, attainment8: AvailabilityValue<Decimal>) -> ComparableSchool {
        ComparableSchool {
            urn: urn.to_string(),
            name: format!("School {urn}"),
            address: "1 High Street".to_string(),
            local_authority: "Testshire".to_string(),
            position: None,
            attainment8,
            english: AvailabilityValue::unavailable(SuppressionReason::NotApplicable),
            maths: AvailabilityValue::unavailable(SuppressionReason::NotApplicable),
            science: AvailabilityValue::unavailable(SuppressionReason::NotApplicable),
            humanities: AvailabilityValue::unavailable(SuppressionReason::NotApplicable),
            language: AvailabilityValue::unavailable(SuppressionReason::NotApplicable),
        }
    }

    fn available(value: i64) -> AvailabilityValue<Decimal> {
        AvailabilityValue::available(Decimal::new(value, 0))
    }

    fn urns(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.school.urn.as_str()).collect()
    }

    #[test]
    fn ranks_descending_with_withheld_last() {
        let group = vec![
            school("A", available(60)),
            school("B", AvailabilityValue::unavailable(SuppressionReason::SmallCohort)),
            school("C", available(45)),
            school("D", available(70)),
        ];

        let ranked = rank(group, MetricKey::Attainment8);
        assert_eq!(urns(&ranked), ["D", "A", "C", "B"]);
        assert_eq!(ranked[0].sort.value, available(70));
        assert_eq!(ranked[0].sort.name, "Attainment 8");
        assert!(!ranked[3].sort.value.is_available());
    }

    #[test]
    fn equal_readings_keep_input_order() {
        let group = vec![
            school("first", available(50)),
            school("second", available(50)),
            school("third", available(50)),
        ];

        let ranked = rank(group, MetricKey::Attainment8);
        assert_eq!(urns(&ranked), ["first", "second", "third"]);
    }

    #[test]
    fn withheld_readings_keep_input_order_among_themselves() {
        let group = vec![
            school("x1", AvailabilityValue::unavailable(SuppressionReason::SmallCohort)),
            school("a", available(40)),
            school("x2", AvailabilityValue::unavailable(SuppressionReason::Confidential)),
        ];

        let ranked = rank(group, MetricKey::Attainment8);
        assert_eq!(urns(&ranked), ["a", "x1", "x2"]);
    }

    #[test]
    fn ranking_is_deterministic_across_calls() {
        let group = vec![
            school("A", available(60)),
            school("B", available(60)),
            school("C", AvailabilityValue::unavailable(SuppressionReason::SmallCohort)),
            school("D", available(70)),
        ];

        let first = rank(group.clone(), MetricKey::Attainment8);
        let second = rank(group, MetricKey::Attainment8);
        assert_eq!(urns(&first), urns(&second));
    }

    #[test]
    fn location_present_only_for_positioned_schools() {
        let mut positioned = school("A", available(50));
        positioned.position = Some(GridCoordinate::new(530_000.0, 180_000.0));
        let unpositioned = school("B", available(60));

        let ranked = rank(vec![positioned, unpositioned], MetricKey::Attainment8);
        assert_eq!(urns(&ranked), ["B", "A"]);
        assert!(ranked[0].location.is_none());
        let location = ranked[1].location.expect("positioned school has a location");
        assert!(location.latitude > 51.4 && location.latitude < 51.6);
    }
}
