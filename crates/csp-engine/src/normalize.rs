//! Normalization of provider records into comparison domain types.

use rust_decimal::Decimal;

use csp_core::{
    AvailabilityValue, ComparableSchool, GridCoordinate, MetricHistory, TrendAverage,
};

use crate::record::{RawMetric, RawYears, SchoolRecord};

/// Converts a provider record into a [`ComparableSchool`].
///
/// The grid position parses from its raw text fields and is dropped when
/// either field is absent or malformed. Each metric keeps its value or
/// collapses to a suppression reason from the record's code.
#[must_use]
pub fn school_from_record(record: &SchoolRecord) -> ComparableSchool {
    let position = match (&record.easting, &record.northing) {
        (Some(easting), Some(northing)) => GridCoordinate::parse(easting, northing),
        _ => None,
    };

    ComparableSchool {
        urn: record.urn.clone(),
        name: record.name.clone(),
        address: record.address.clone(),
        local_authority: record.local_authority.clone(),
        position,
        attainment8: metric_value(&record.attainment8),
        english: metric_value(&record.english),
        maths: metric_value(&record.maths),
        science: metric_value(&record.science),
        humanities: metric_value(&record.humanities),
        language: metric_value(&record.language),
    }
}

/// One cohort's raw yearly series as a [`MetricHistory`].
#[must_use]
pub fn history_from_years(years: &RawYears) -> MetricHistory {
    MetricHistory::new(
        metric_value(&years.latest),
        metric_value(&years.previous),
        metric_value(&years.earliest),
    )
}

/// The record's attainment trend averaged per cohort.
///
/// Records without a trend block yield the all-absent default.
#[must_use]
pub fn trend_from_record(record: &SchoolRecord) -> TrendAverage {
    record
        .trend
        .as_ref()
        .map_or_else(TrendAverage::default, |trend| {
            TrendAverage::from_histories(
                &history_from_years(&trend.school),
                &history_from_years(&trend.local_authority),
                &history_from_years(&trend.national),
            )
        })
}

fn metric_value(raw: &RawMetric) -> AvailabilityValue<Decimal> {
    AvailabilityValue::from_raw(raw.value, raw.code.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csp_core::SuppressionReason;
    use serde_json::json;

    fn record(value: serde_json::Value) -> SchoolRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn metrics_normalize_to_value_or_reason() {
        let school = school_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
            "attainment8": { "value": 50.3 },
            "english": { "code": "c" },
            "maths": { "code": "x" },
            "science": { "code": "NE" },
        })));

        assert_eq!(
            school.attainment8,
            AvailabilityValue::available(Decimal::new(503, 1))
        );
        assert_eq!(
            school.english,
            AvailabilityValue::unavailable(SuppressionReason::Confidential)
        );
        assert_eq!(
            school.maths,
            AvailabilityValue::unavailable(SuppressionReason::SmallCohort)
        );
        assert_eq!(
            school.science,
            AvailabilityValue::unavailable(SuppressionReason::Other("NE".to_string()))
        );
        // No value and no code both ways.
        assert_eq!(
            school.humanities,
            AvailabilityValue::unavailable(SuppressionReason::NotApplicable)
        );
    }

    #[test]
    fn position_parses_from_text_fields() {
        let school = school_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
            "easting": "530000",
            "northing": "180000",
        })));

        let position = school.position.expect("position parses");
        assert!((position.easting - 530_000.0).abs() < f64::EPSILON);
        assert!((position.northing - 180_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_or_malformed_coordinates_drop_the_position() {
        let missing = school_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
            "easting": "530000",
        })));
        assert_eq!(missing.position, None);

        let malformed = school_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
            "easting": "530000",
            "northing": "not a number",
        })));
        assert_eq!(malformed.position, None);
    }

    #[test]
    fn trend_averages_each_cohort() {
        let trend = trend_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
            "trend": {
                "school": {
                    "latest": { "value": 48.0 },
                    "previous": { "value": 50.0 },
                    "earliest": { "value": 52.0 },
                },
                "local_authority": {
                    "latest": { "value": 45.5 },
                    "previous": { "code": "x" },
                },
            },
        })));

        assert_eq!(trend.school, Some(Decimal::new(500, 1))); // 50.0
        assert_eq!(trend.local_authority, Some(Decimal::new(455, 1))); // 45.5
        assert_eq!(trend.national, None);
    }

    #[test]
    fn missing_trend_block_yields_the_default() {
        let trend = trend_from_record(&record(json!({
            "urn": "100001",
            "name": "Greenfield Academy",
        })));
        assert_eq!(trend, TrendAverage::default());
    }
}
