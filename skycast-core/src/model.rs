use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// What the user asked about: a free-text city name, or a coordinate pair
/// obtained from the device locator. Lives only for the duration of one
/// request.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    City(String),
    Coords { lat: f64, lon: f64 },
}

/// Measurement-unit preference, mirrored verbatim into the provider's
/// `units` query parameter. Display labels derive from this value alone,
/// never from the payload: the provider already returns values in the
/// requested system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn toggle(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }

    /// Value of the `units` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temp_label(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_label(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One `weather[]` element; only the fields this application reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Parsed current-weather payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub coord: Coord,
    pub main: CurrentMain,
    pub wind: Wind,
    pub weather: Vec<Condition>,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryMain {
    pub temp: f64,
}

/// One 3-hour-resolution forecast reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp (seconds, UTC).
    pub dt: i64,
    pub main: EntryMain,
    pub weather: Vec<Condition>,
}

impl ForecastEntry {
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.dt, 0).single()
    }

    /// UTC calendar day of this entry, the key used for day selection.
    pub fn day_utc(&self) -> Option<NaiveDate> {
        self.time_utc().map(|t| t.date_naive())
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Parsed forecast payload: 3-hour increments in ascending time order,
/// as returned by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
}

/// Result of one paired fetch. The two payloads succeed or fail as a unit;
/// no partial pair is ever constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPair {
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// URL of the provider-hosted icon image for a condition's `icon` code.
pub fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}

/// OpenStreetMap URL centered on the queried coordinate, with a marker.
pub fn map_url(coord: &Coord) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=10/{lat}/{lon}",
        lat = coord.lat,
        lon = coord.lon
    )
}
