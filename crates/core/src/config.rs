//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into services. Request handlers never read process-wide environment variables; the
//! binaries read them once and hand the parsed values to `CoreConfig::new`.

use crate::constants::DEFAULT_DATA_URL;
use crate::{AudienceError, AudienceResult};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_url: String,
    ui_addr: SocketAddr,
    mock_addr: SocketAddr,
    serve_mock: bool,
    mock_data_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns `AudienceError::InvalidInput` if `data_url` is not an `http://` or `https://` URL.
    pub fn new(
        data_url: String,
        ui_addr: SocketAddr,
        mock_addr: SocketAddr,
        serve_mock: bool,
        mock_data_path: Option<PathBuf>,
    ) -> AudienceResult<Self> {
        validate_data_url(&data_url)?;

        Ok(Self {
            data_url,
            ui_addr,
            mock_addr,
            serve_mock,
            mock_data_path,
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn ui_addr(&self) -> SocketAddr {
        self.ui_addr
    }

    pub fn mock_addr(&self) -> SocketAddr {
        self.mock_addr
    }

    pub fn serve_mock(&self) -> bool {
        self.serve_mock
    }

    pub fn mock_data_path(&self) -> Option<&Path> {
        self.mock_data_path.as_deref()
    }
}

fn validate_data_url(url: &str) -> AudienceResult<()> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(AudienceError::InvalidInput(format!(
            "catalog data URL must be an http:// or https:// URL, got {url:?}"
        ))),
    }
}

/// Resolve the catalog data URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default local endpoint.
pub fn data_url_from_env_value(value: Option<String>) -> AudienceResult<String> {
    let url = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.into());
    validate_data_url(&url)?;
    Ok(url)
}

/// Parse a listen address from an optional string value, falling back to `default`.
pub fn socket_addr_from_env_value(
    value: Option<String>,
    default: &str,
) -> AudienceResult<SocketAddr> {
    let raw = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());

    raw.parse()
        .map_err(|_| AudienceError::InvalidInput(format!("invalid listen address: {raw:?}")))
}

/// Parse a boolean flag from an optional string value.
///
/// Accepts `true/false`, `1/0` and `yes/no` in any case. `None` or empty yields `default`.
pub fn flag_from_env_value(value: Option<String>, default: bool) -> AudienceResult<bool> {
    let Some(raw) = value.map(|v| v.trim().to_ascii_lowercase()) else {
        return Ok(default);
    };

    match raw.as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AudienceError::InvalidInput(format!(
            "expected a boolean flag, got {other:?}"
        ))),
    }
}
