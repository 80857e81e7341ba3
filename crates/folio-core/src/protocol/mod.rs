//! Analytics wire contracts.
//!
//! - `events`: ingestion bodies posted by the frontend, validated into events
//! - `snapshot`: the structured metrics view served by reporting routes

pub mod events;
pub mod snapshot;

pub use events::{
    BlogViewEvent, BlogViewRequest, PageViewEvent, PageViewRequest, ProjectViewEvent,
    ProjectViewRequest,
};
pub use snapshot::{BlogView, LoginAttempts, MetricsSnapshot, ProjectView};
