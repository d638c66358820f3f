//! One-shot catalog loading.
//!
//! The form fetches its catalog exactly once. There is no retry, timeout or cancellation: the
//! view stays pending until the request resolves, then records either the catalog or the
//! error message.

use audience_core::constants::NETWORK_ERROR_MESSAGE;
use audience_core::{AudienceError, Catalog, CatalogRes};
use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::SharedView;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("{0}")]
    Request(reqwest::Error),
    #[error("{msg}", msg = NETWORK_ERROR_MESSAGE)]
    Status(reqwest::StatusCode),
    #[error("{0}")]
    Decode(reqwest::Error),
    #[error("{0}")]
    Catalog(#[from] AudienceError),
}

/// Fetches the condition catalog from one URL.
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    client: reqwest::Client,
    url: String,
}

impl CatalogLoader {
    /// Create a loader for the catalog at `url`.
    ///
    /// # Errors
    /// Returns `LoadError::Client` if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(LoadError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the catalog request.
    ///
    /// # Errors
    /// Returns a `LoadError` if:
    /// - the request cannot be sent or the connection fails,
    /// - the response status is not a success (`LoadError::Status`),
    /// - the body is not a valid catalog.
    pub async fn fetch(&self) -> Result<Catalog, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(LoadError::Request)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("catalog request to {} returned {}", self.url, status);
            return Err(LoadError::Status(status));
        }

        let body: CatalogRes = response.json().await.map_err(LoadError::Decode)?;
        Ok(Catalog::from_response(body)?)
    }
}

/// Run the one catalog load for `view` and record its outcome.
pub async fn load_into(view: SharedView, loader: CatalogLoader) {
    tracing::info!("-- Fetching catalog from {}", loader.url());

    match loader.fetch().await {
        Ok(catalog) => view.write().await.finish_loading(catalog),
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            view.write().await.fail_loading(e.to_string());
        }
    }
}
