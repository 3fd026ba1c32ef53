//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and its paired current+forecast fetch
//! - Device-location lookup
//! - Shared domain models, forecast day-selection and the application state
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod locate;
pub mod model;
pub mod state;

pub use client::OpenWeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use forecast::select_for_date;
pub use locate::{IpLocator, Locator};
pub use model::{CurrentWeather, Forecast, ForecastEntry, Place, Units, WeatherPair};
pub use state::AppState;
