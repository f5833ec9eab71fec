// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async client for the category listing endpoint.
//
// One operation only: `GET /api/services`, answered by a JSON array of
// service categories. No retry, no caching.

use reqwest::{Client, Url};
use tracing::{debug, info, instrument};

use servicedeck_core::config::{AppConfig, SERVICES_PATH};
use servicedeck_core::error::{Result, ServiceDeckError};
use servicedeck_core::types::{ServiceCategory, total_services};

/// Client bound to a single catalogue origin.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    /// `api_base_url` joined with [`SERVICES_PATH`].
    endpoint: Url,
}

impl CatalogClient {
    /// Build a client from application settings.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ServiceDeckError::Transport {
                url: config.api_base_url.clone(),
                reason: format!("could not build HTTP client: {e}"),
            })?;
        Self::with_http(&config.api_base_url, http)
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http(base_url: &str, http: Client) -> Result<Self> {
        let endpoint = resolve_endpoint(base_url)?;
        Ok(Self { http, endpoint })
    }

    /// The absolute URL this client fetches from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full category list.
    ///
    /// Any non-2xx status, transport fault, or body that does not decode as
    /// `[ServiceCategory]` is returned as an error; nothing is retried.
    #[instrument(skip(self), fields(url = %self.endpoint))]
    pub async fn fetch_categories(&self) -> Result<Vec<ServiceCategory>> {
        let url = self.endpoint.as_str();

        debug!("requesting service categories");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceDeckError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| transport(url, e))?;
        let categories = decode_categories(url, &body)?;

        info!(
            categories = categories.len(),
            services = total_services(&categories),
            "service categories received"
        );
        Ok(categories)
    }
}

/// Decode a response body into categories, attributing failures to `url`.
pub fn decode_categories(url: &str, body: &[u8]) -> Result<Vec<ServiceCategory>> {
    serde_json::from_slice(body).map_err(|e| ServiceDeckError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn resolve_endpoint(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url)
        .map_err(|e| ServiceDeckError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ServiceDeckError::InvalidBaseUrl(format!(
            "{base_url}: scheme must be http or https"
        )));
    }
    base.join(SERVICES_PATH)
        .map_err(|e| ServiceDeckError::InvalidBaseUrl(format!("{base_url}: {e}")))
}

fn transport(url: &str, err: reqwest::Error) -> ServiceDeckError {
    let reason = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    ServiceDeckError::Transport {
        url: url.to_string(),
        reason,
    }
}
