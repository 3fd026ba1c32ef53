use chrono::NaiveDate;

use crate::error::WeatherError;
use crate::forecast::select_for_date;
use crate::model::{CurrentWeather, Forecast, ForecastEntry, Place, Units, WeatherPair};

/// The process-wide UI state bundle: everything a view needs to render.
///
/// Single-writer discipline: the fields are read freely but mutated only
/// through the transition methods below, all driven by user events (submit,
/// toggle, date change, clear) or by the completion of a paired fetch.
/// Overlapping fetches are neither deduplicated nor cancelled; the last
/// result applied wins. That race is accepted for a single-user,
/// low-frequency tool.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub city: String,
    pub date: NaiveDate,
    pub units: Units,
    pub current: Option<CurrentWeather>,
    pub forecast: Option<Forecast>,
    pub error: Option<WeatherError>,
    /// UI feedback only; carries no other semantics.
    pub loading: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            city: String::new(),
            date: today,
            units: Units::default(),
            current: None,
            forecast: None,
            error: None,
            loading: false,
        }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Validate the city field on form submit.
    ///
    /// Returns `true` when a fetch should be issued. An empty (or
    /// whitespace-only) city never reaches the network; it surfaces
    /// [`WeatherError::EmptyCity`] instead.
    pub fn submit_city(&mut self) -> bool {
        if self.city.trim().is_empty() {
            self.error = Some(WeatherError::EmptyCity);
            false
        } else {
            true
        }
    }

    /// The place a city fetch would query, if a city is set.
    pub fn place(&self) -> Option<Place> {
        let city = self.city.trim();
        if city.is_empty() {
            None
        } else {
            Some(Place::City(city.to_string()))
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Commit the outcome of a paired fetch.
    ///
    /// Success replaces both payloads wholesale and clears any prior error.
    /// Failure stores the error and clears both payloads, with one
    /// exception: a refused location grant
    /// ([`WeatherError::keeps_previous_results`]) leaves whatever was
    /// already on screen. Either way the loading flag drops.
    pub fn apply_result(&mut self, result: Result<WeatherPair, WeatherError>) {
        self.loading = false;

        match result {
            Ok(pair) => {
                self.current = Some(pair.current);
                self.forecast = Some(pair.forecast);
                self.error = None;
            }
            Err(err) => {
                if !err.keeps_previous_results() {
                    self.current = None;
                    self.forecast = None;
                }
                self.error = Some(err);
            }
        }
    }

    /// Flip the unit preference. Returns `true` when a re-fetch is required,
    /// which is the case iff a city is currently set.
    pub fn toggle_units(&mut self) -> bool {
        self.units = self.units.toggle();
        !self.city.trim().is_empty()
    }

    /// Reset city, date, payloads and error unconditionally. The unit
    /// preference survives a clear.
    pub fn clear(&mut self, today: NaiveDate) {
        self.city.clear();
        self.date = today;
        self.current = None;
        self.forecast = None;
        self.error = None;
    }

    /// Forecast entries for the selected date, derived on every call.
    pub fn entries_for_selected_date(&self) -> Option<Vec<&ForecastEntry>> {
        select_for_date(self.forecast.as_ref(), self.date)
    }
}
