//! The interactive lookup session: a small event loop over [`AppState`],
//! where each menu choice runs its state transition(s) and the view is
//! re-rendered from scratch.

use std::fmt;

use anyhow::Result;
use chrono::Utc;
use inquire::{DateSelect, InquireError, Select, Text};

use skycast_core::model::Place;
use skycast_core::{AppState, Locator, OpenWeatherClient, WeatherError};
use tracing::debug;

use crate::render;

/// Paired fetch for the city currently set in `state`. The caller is
/// expected to have validated the city via [`AppState::submit_city`]; a
/// state with no city is a no-op here.
pub async fn fetch_city(client: &OpenWeatherClient, state: &mut AppState) {
    let Some(place) = state.place() else {
        return;
    };

    debug!(city = %state.city.trim(), units = ?state.units, "fetching weather pair");
    state.begin_fetch();
    let result = client.fetch_pair(&place, state.units).await;
    state.apply_result(result);
}

/// Resolve the device position, then run the paired fetch for it.
///
/// A refused or failed position lookup surfaces its own error and leaves
/// prior results untouched; a fetch failure *after* a successful lookup is
/// reported as [`WeatherError::LocationFetchFailed`] and clears them.
pub async fn fetch_for_location(
    client: &OpenWeatherClient,
    locator: &dyn Locator,
    state: &mut AppState,
) {
    match locator.current_position().await {
        Err(err) => state.apply_result(Err(err)),
        Ok((lat, lon)) => {
            debug!(lat, lon, units = ?state.units, "fetching weather pair for device location");
            state.begin_fetch();
            let result = client
                .fetch_pair(&Place::Coords { lat, lon }, state.units)
                .await
                .map_err(|_| WeatherError::LocationFetchFailed);
            state.apply_result(result);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    SearchCity,
    UseMyLocation,
    PickDate,
    ToggleUnits,
    Clear,
    Quit,
}

impl MenuItem {
    fn all() -> Vec<MenuItem> {
        vec![
            MenuItem::SearchCity,
            MenuItem::UseMyLocation,
            MenuItem::PickDate,
            MenuItem::ToggleUnits,
            MenuItem::Clear,
            MenuItem::Quit,
        ]
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::SearchCity => "Search for a city",
            MenuItem::UseMyLocation => "Use my location",
            MenuItem::PickDate => "Pick a forecast date",
            MenuItem::ToggleUnits => "Toggle units (metric/imperial)",
            MenuItem::Clear => "Clear",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub struct Session {
    state: AppState,
    client: OpenWeatherClient,
    locator: Box<dyn Locator>,
}

impl Session {
    pub fn new(client: OpenWeatherClient, locator: Box<dyn Locator>) -> Self {
        Self {
            state: AppState::new(Utc::now().date_naive()),
            client,
            locator,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            print!("{}", render::view(&self.state));

            let choice = match Select::new("What would you like to do?", MenuItem::all()).prompt()
            {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            match choice {
                MenuItem::SearchCity => {
                    let city = Text::new("City:")
                        .with_initial_value(&self.state.city)
                        .prompt()?;
                    self.state.set_city(city);

                    if self.state.submit_city() {
                        fetch_city(&self.client, &mut self.state).await;
                    }
                }
                MenuItem::UseMyLocation => {
                    fetch_for_location(&self.client, self.locator.as_ref(), &mut self.state)
                        .await;
                }
                MenuItem::PickDate => {
                    let date = DateSelect::new("Forecast date:")
                        .with_default(self.state.date)
                        .prompt()?;
                    self.state.set_date(date);
                }
                MenuItem::ToggleUnits => {
                    // Exactly one re-fetch, and only when a city is set.
                    if self.state.toggle_units() {
                        fetch_city(&self.client, &mut self.state).await;
                    }
                }
                MenuItem::Clear => self.state.clear(Utc::now().date_naive()),
                MenuItem::Quit => break,
            }
        }

        Ok(())
    }
}
