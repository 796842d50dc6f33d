use thiserror::Error;

/// Errors surfaced by school data providers.
///
/// Absence is never an error: unknown URNs and missing groupings come back
/// as `Ok(None)` from the provider traits. These variants cover genuine
/// backend failure only.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backing store could not be reached or answered abnormally.
    #[error("provider backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded into the expected shape.
    #[error("malformed record for urn {urn}: {source}")]
    MalformedRecord {
        urn: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_names_the_urn() {
        let source = serde_json::from_str::<crate::record::SchoolRecord>("{}").unwrap_err();
        let err = ProviderError::MalformedRecord {
            urn: "100001".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("malformed record for urn 100001"));
    }
}
