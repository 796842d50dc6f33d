//! Value types and pure computation for the CSP comparison engine.
//!
//! Everything in this crate is synchronous, allocation-only, and free of
//! shared state: availability-tagged metric values with a total ranking
//! order, national-grid coordinate parsing and the OSGB36 to WGS84 datum
//! transform, missing-tolerant trend averaging, and the windowed page view
//! used to present ranked sequences.

pub mod availability;
pub mod geo;
pub mod paging;
pub mod school;
pub mod trend;

mod osgb36;

pub use availability::{AvailabilityValue, SuppressionReason};
pub use geo::{GeographicCoordinate, GridCoordinate};
pub use paging::Paginated;
pub use school::ComparableSchool;
pub use trend::{MetricHistory, TrendAverage};
