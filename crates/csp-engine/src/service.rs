//! The school comparison pipeline.

use serde::Serialize;

use csp_core::{
    ComparableSchool, GeographicCoordinate, GridCoordinate, Paginated, TrendAverage,
};

use crate::config::EngineConfig;
use crate::error::ProviderError;
use crate::metrics::{self, MetricKey, SortOption};
use crate::normalize;
use crate::provider::{SchoolLookup, SimilarSchools};
use crate::rank::{rank, RankedEntry};

/// A ranked peer enriched with its straight-line distance from the subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub entry: RankedEntry,
    /// Present only when both this school and the subject have grid
    /// positions.
    pub distance_miles: Option<f64>,
}

/// Everything a comparison page needs for one subject school.
#[derive(Debug, Clone)]
pub struct SchoolComparison {
    pub subject: ComparableSchool,
    pub subject_location: Option<GeographicCoordinate>,
    pub trend: TrendAverage,
    pub entries: Paginated<ComparisonRow>,
    pub sort_options: Vec<SortOption>,
}

/// Runs school comparisons against a data provider.
#[derive(Debug)]
pub struct ComparisonService<P> {
    provider: P,
    config: EngineConfig,
}

impl<P: SchoolLookup + SimilarSchools> ComparisonService<P> {
    #[must_use]
    pub fn new(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Builds the ranked comparison page for `urn`.
    ///
    /// 1. Fetch the subject record; unknown URNs short-circuit to `Ok(None)`.
    /// 2. Fetch the precomputed similarity group; absence means no
    ///    comparison is available. Neither fetch retries.
    /// 3. Resolve the sort key (unknown or empty keys select Attainment 8).
    /// 4. Normalize the peers and rank them descending by the metric. The
    ///    subject is not an entry in its own table.
    /// 5. Window the ranking and attach subject-relative distances by
    ///    re-mapping the full ranked sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider itself fails; not-found
    /// outcomes are `Ok(None)`.
    pub async fn compare(
        &self,
        urn: &str,
        sort_key: &str,
        page_number: usize,
    ) -> Result<Option<SchoolComparison>, ProviderError> {
        // Step 1: the subject school must exist.
        let Some(subject_record) = self.provider.school_by_urn(urn).await? else {
            tracing::debug!(urn, "school not found");
            return Ok(None);
        };

        // Step 2: without a precomputed group there is nothing to rank.
        let Some(group) = self.provider.similar_schools_group(urn).await? else {
            tracing::debug!(urn, "no similarity group");
            return Ok(None);
        };

        // Steps 3-5 are pure; nothing below suspends or fails.
        let key = MetricKey::parse(sort_key);
        let subject = normalize::school_from_record(&subject_record);
        let trend = normalize::trend_from_record(&subject_record);
        let subject_position = subject.position;
        let subject_location = subject_position.map(GridCoordinate::to_wgs84);

        let peers: Vec<ComparableSchool> = group
            .peers
            .iter()
            .filter(|peer| peer.urn != urn)
            .map(normalize::school_from_record)
            .collect();

        tracing::debug!(
            urn,
            sort = key.code(),
            peers = peers.len(),
            page = page_number,
            "ranking comparison group"
        );

        let ranked = rank(peers, key);
        let entries =
            Paginated::new(ranked, page_number, self.config.page_size).map(|entry| {
                let distance_miles = match (subject_position, entry.school.position) {
                    (Some(subject), Some(peer)) => Some(subject.distance_miles(peer)),
                    _ => None,
                };
                ComparisonRow {
                    entry,
                    distance_miles,
                }
            });

        Ok(Some(SchoolComparison {
            subject,
            subject_location,
            trend,
            entries,
            sort_options: metrics::sort_options(key),
        }))
    }
}
