//! commerce-ui Registry
//!
//! Payload types and schema validation for the upstream component registry.
//! Every document is fetched as JSON and checked against the named schema
//! before it reaches the rest of the system.

mod types;
pub mod validation;

pub use types::*;
pub use validation::ValidationError;
