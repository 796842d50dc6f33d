//! Comparative performance ranking for schools.
//!
//! Given a subject school and its precomputed group of comparable peers,
//! the engine ranks the group by a caller-selected metric with withheld
//! values always last, attaches map positions and subject-relative
//! distances, averages three-year attainment trends, and windows the result
//! into fixed-size pages. Records arrive through the async provider traits;
//! everything after the fetch is pure and synchronous.

pub mod config;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod provider;
pub mod rank;
pub mod record;
pub mod service;

pub use config::{ConfigError, EngineConfig};
pub use error::ProviderError;
pub use metrics::{sort_options, MetricKey, SortOption};
pub use provider::{InMemoryProvider, SchoolLookup, SimilarSchools};
pub use rank::{rank, RankedEntry, SortDescriptor};
pub use record::{RawMetric, RawTrend, RawYears, SchoolRecord, SimilarSchoolsGroup};
pub use service::{ComparisonRow, ComparisonService, SchoolComparison};
