use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::WeatherError;
use crate::model::{CurrentWeather, Forecast, Place, Units, WeatherPair};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather current-weather and 5-day/3-hour forecast
/// endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host (used by tests against a mock
    /// server).
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    /// Fetch current weather and the forecast list as one atomic unit.
    ///
    /// The two requests are issued concurrently; if either fails for any
    /// reason (transport, non-2xx status, malformed body), the whole
    /// operation fails and no payload escapes. Partial success is not a
    /// thing here.
    pub async fn fetch_pair(
        &self,
        place: &Place,
        units: Units,
    ) -> Result<WeatherPair, WeatherError> {
        let pair = tokio::try_join!(
            self.fetch_endpoint::<CurrentWeather>("weather", place, units),
            self.fetch_endpoint::<Forecast>("forecast", place, units),
        );

        match pair {
            Ok((current, forecast)) => Ok(WeatherPair { current, forecast }),
            Err(err) => {
                debug!(error = %format!("{err:#}"), "paired weather fetch failed");
                Err(WeatherError::NetworkOrNotFound)
            }
        }
    }

    async fn fetch_endpoint<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        place: &Place,
        units: Units,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&self.query(place, units))
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }

    fn query(&self, place: &Place, units: Units) -> Vec<(&'static str, String)> {
        let mut params = match place {
            Place::City(name) => vec![("q", name.clone())],
            Place::Coords { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };

        params.push(("units", units.query_value().to_string()));
        params.push(("appid", self.api_key.clone()));
        params
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multi-byte bodies can't split a char.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
