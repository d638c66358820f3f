//! # Audience Core
//!
//! Core logic for the healthcare audience targeting form.
//!
//! This crate contains the pure data operations behind the form:
//! - The condition catalog and lookup by identifier
//! - Selection state with reducer-style transitions (select condition, toggle subcategory,
//!   toggle medication)
//! - Derivation of the target audience summary from the current selection
//! - Start-up configuration resolved once and passed into services
//!
//! **No API concerns**: HTTP servers, the catalog client and HTML rendering belong in
//! `api-rest` and `audience-ui`.

pub mod audience;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod selection;

// The domain model is the shared wire model.
pub use api_shared::{CatalogRes, Condition, Medication, SubCategory};

pub use audience::TargetAudience;
pub use catalog::Catalog;
pub use config::CoreConfig;
pub use error::{AudienceError, AudienceResult};
pub use selection::{Event, Selection};
