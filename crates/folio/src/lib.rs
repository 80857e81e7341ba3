//! Top-level facade crate for folio.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use folio_core::*;
}

pub mod server {
    pub use folio_server::*;
}
