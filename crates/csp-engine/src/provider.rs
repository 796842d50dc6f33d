//! Data provider seam.
//!
//! The engine math is pure; these traits are the only place the comparison
//! pipeline suspends. Implementations back them with whatever store holds
//! the school records. `Ok(None)` is the expected not-found outcome
//! throughout; `Err` is reserved for genuine backend failure.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::record::{SchoolRecord, SimilarSchoolsGroup};

/// Looks up individual school records.
#[async_trait]
pub trait SchoolLookup: Send + Sync {
    /// The record for `urn`, or `Ok(None)` when the URN is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] only when the backing store fails.
    async fn school_by_urn(&self, urn: &str) -> Result<Option<SchoolRecord>, ProviderError>;
}

/// Serves precomputed similar-school groupings.
#[async_trait]
pub trait SimilarSchools: Send + Sync {
    /// URNs of the schools judged similar to `urn`, in similarity order, or
    /// `Ok(None)` when no grouping has been computed for it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] only when the backing store fails.
    async fn similar_school_urns(&self, urn: &str)
        -> Result<Option<Vec<String>>, ProviderError>;

    /// The full grouping for `urn`: the subject record plus its peers.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] only when the backing store fails.
    async fn similar_schools_group(
        &self,
        urn: &str,
    ) -> Result<Option<SimilarSchoolsGroup>, ProviderError>;
}

/// Map-backed provider for tests and embedding.
///
/// Peer URNs with no registered record are skipped when a group is
/// assembled rather than failing the whole group.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    schools: HashMap<String, SchoolRecord>,
    groups: HashMap<String, Vec<String>>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a school record under its URN.
    pub fn insert_school(&mut self, record: SchoolRecord) {
        self.schools.insert(record.urn.clone(), record);
    }

    /// Registers the similar-school URNs for a subject URN.
    pub fn insert_group(&mut self, urn: impl Into<String>, peers: Vec<String>) {
        self.groups.insert(urn.into(), peers);
    }
}

#[async_trait]
impl SchoolLookup for InMemoryProvider {
    async fn school_by_urn(&self, urn: &str) -> Result<Option<SchoolRecord>, ProviderError> {
        Ok(self.schools.get(urn).cloned())
    }
}

#[async_trait]
impl SimilarSchools for InMemoryProvider {
    async fn similar_school_urns(
        &self,
        urn: &str,
    ) -> Result<Option<Vec<String>>, ProviderError> {
        Ok(self.groups.get(urn).cloned())
    }

    async fn similar_schools_group(
        &self,
        urn: &str,
    ) -> Result<Option<SimilarSchoolsGroup>, ProviderError> {
        let Some(subject) = self.schools.get(urn) else {
            return Ok(None);
        };
        let Some(peer_urns) = self.groups.get(urn) else {
            return Ok(None);
        };
        let peers = peer_urns
            .iter()
            .filter_map(|peer| self.schools.get(peer).cloned())
            .collect();
        Ok(Some(SimilarSchoolsGroup {
            subject: subject.clone(),
            peers,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn school(urn: &str) -> SchoolRecord {
        serde_json::from_value(json!({ "urn": urn, "name": format!("School {urn}") })).unwrap()
    }

    #[tokio::test]
    async fn lookup_roundtrips_and_misses() {
        let mut provider = InMemoryProvider::new();
        provider.insert_school(school("100001"));

        let found = provider.school_by_urn("100001").await.unwrap();
        assert_eq!(found.map(|r| r.name), Some("School 100001".to_string()));

        let missing = provider.school_by_urn("999999").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn group_requires_subject_and_grouping() {
        let mut provider = InMemoryProvider::new();
        provider.insert_school(school("100001"));

        // No grouping registered yet.
        assert!(provider
            .similar_schools_group("100001")
            .await
            .unwrap()
            .is_none());
        // Grouping registered for an unknown subject.
        provider.insert_group("999999", vec!["100001".to_string()]);
        assert!(provider
            .similar_schools_group("999999")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn group_skips_unregistered_peers() {
        let mut provider = InMemoryProvider::new();
        provider.insert_school(school("100001"));
        provider.insert_school(school("100002"));
        provider.insert_group(
            "100001",
            vec!["100002".to_string(), "999999".to_string()],
        );

        let group = provider
            .similar_schools_group("100001")
            .await
            .unwrap()
            .expect("group present");
        assert_eq!(group.subject.urn, "100001");
        assert_eq!(group.peers.len(), 1);
        assert_eq!(group.peers[0].urn, "100002");

        let urns = provider.similar_school_urns("100001").await.unwrap();
        assert_eq!(urns, Some(vec!["100002".to_string(), "999999".to_string()]));
    }
}
