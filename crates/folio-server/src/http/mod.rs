//! HTTP plumbing shared by all routes.
//!
//! - `error`: `FolioError` -> JSON error response
//! - `track`: middleware feeding request counts and latencies into the aggregator

pub mod error;
pub mod track;

pub use error::ApiError;
pub use track::track_requests;
