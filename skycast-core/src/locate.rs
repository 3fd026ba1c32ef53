use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use tracing::debug;

use crate::error::WeatherError;

/// Source of the device's current position.
///
/// A trait seam so the session loop can run against a stub in tests, and so
/// an environment with no usable capability can report
/// [`WeatherError::LocationUnsupported`].
#[async_trait]
pub trait Locator: Send + Sync + Debug {
    /// Resolve the current position as `(lat, lon)`.
    async fn current_position(&self) -> Result<(f64, f64), WeatherError>;
}

pub const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// IP-based geolocation via the ip-api.com JSON endpoint. Coarse, but needs
/// no permission prompt and works on anything with a network connection.
#[derive(Debug, Clone)]
pub struct IpLocator {
    base_url: String,
    http: Client,
}

impl IpLocator {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    async fn query(&self) -> Result<(f64, f64)> {
        let url = format!("{}/json", self.base_url);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to send request to ip-api.com")?;

        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("ip-api.com request failed with status {status}"));
        }

        let parsed: IpApiResponse = res
            .json()
            .await
            .context("Failed to parse ip-api.com JSON")?;

        if parsed.status != "success" {
            return Err(anyhow!("ip-api.com reported lookup status '{}'", parsed.status));
        }

        match (parsed.lat, parsed.lon) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(anyhow!("ip-api.com response contained no coordinates")),
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Locator for IpLocator {
    async fn current_position(&self) -> Result<(f64, f64), WeatherError> {
        match self.query().await {
            Ok(position) => Ok(position),
            Err(err) => {
                debug!(error = %format!("{err:#}"), "device location lookup failed");
                Err(WeatherError::LocationDenied)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Locator for environments where no location capability exists at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocator;

#[async_trait]
impl Locator for UnsupportedLocator {
    async fn current_position(&self) -> Result<(f64, f64), WeatherError> {
        Err(WeatherError::LocationUnsupported)
    }
}
