//! folio core: transport-agnostic analytics contracts and error types.
//!
//! This crate defines the JSON shapes shared by the server and its clients:
//! the metrics snapshot returned by reporting routes and the ingestion bodies
//! accepted by the analytics routes. It carries no transport or runtime
//! dependencies so it can be reused by tooling and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FolioError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{FolioError, Result};
