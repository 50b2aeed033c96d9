//! rusty-forum/crates/rf-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Rusty-Forum:
//! value objects, repository ports, redaction rules and the use cases
//! that orchestrate them.

pub mod error;
pub mod models;
pub mod redaction;
pub mod traits;
pub mod use_cases;
pub mod validation;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
pub use validation::FromPayload;
