//! Constants used throughout the audience workspace.
//!
//! Defaults for start-up configuration and the fixed texts the form renders, kept in one
//! place so the server, UI and CLI agree.

/// Catalog endpoint fetched by the form when `AUDIENCE_DATA_URL` is not set.
pub const DEFAULT_DATA_URL: &str = "http://127.0.0.1:8000/data";

/// Listen address of the form UI when `AUDIENCE_UI_ADDR` is not set.
pub const DEFAULT_UI_ADDR: &str = "0.0.0.0:3000";

/// Listen address of the mock catalog API when `AUDIENCE_MOCK_ADDR` is not set.
pub const DEFAULT_MOCK_ADDR: &str = "0.0.0.0:8000";

/// Path the mock catalog API serves the catalog on.
pub const DATA_PATH: &str = "/data";

/// Message recorded when the catalog endpoint answers with a non-success status.
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";

/// Placeholder shown in the condition dropdown before a choice is made.
pub const CONDITION_PLACEHOLDER: &str = "Choose Condition";
