//! folio server library entry.
//!
//! This crate hosts the in-process portfolio metrics aggregator and the thin
//! HTTP layer around it: request tracking, analytics ingestion and reporting
//! routes. It is consumed by the binary (`main.rs`) and by integration tests.

pub mod analytics;
pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
