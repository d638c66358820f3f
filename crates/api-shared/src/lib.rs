//! # API Shared
//!
//! Shared definitions for the audience targeting APIs.
//!
//! Contains:
//! - Wire types for the condition catalog (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` (which serves the catalog), `audience-core` (which builds its domain
//! model on these types) and `audience-ui` (which fetches and renders them).

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
