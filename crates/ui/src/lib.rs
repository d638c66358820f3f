//! # Audience UI
//!
//! Server-rendered form for healthcare audience targeting.
//!
//! Handles:
//! - Presentational primitives (badge, checkbox, select, card) as leptos components
//! - The root view: catalog load state, selection state and the derived summary, rendered
//!   server-side
//! - The one-shot catalog loader (HTTP client)
//! - The axum application mapping form posts onto view events
//!
//! Uses `audience-core` for all selection and derivation logic.

#![warn(rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod loader;
pub mod render;
pub mod view;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use app::router;
pub use loader::{load_into, CatalogLoader, LoadError};
pub use view::{AudienceView, LoadState};

/// The single view instance shared by the loader task and all request handlers.
pub type SharedView = Arc<RwLock<AudienceView>>;

/// Create a view that is waiting for its catalog.
pub fn pending_view() -> SharedView {
    Arc::new(RwLock::new(AudienceView::new()))
}
