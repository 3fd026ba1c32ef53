use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use skycast_core::{AppState, Config, IpLocator, OpenWeatherClient, Units};

use crate::render;
use crate::session::{Session, fetch_city, fetch_for_location};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// One-shot lookup for a city.
    Show {
        /// City name, e.g. "Cape Town".
        city: String,

        /// Forecast date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Use imperial units (°F, mph) instead of metric.
        #[arg(long)]
        imperial: bool,
    },

    /// One-shot lookup for the device's current location.
    Here {
        /// Forecast date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Use imperial units (°F, mph) instead of metric.
        #[arg(long)]
        imperial: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            // No subcommand: interactive session.
            None => {
                let client = client_from_config()?;
                Session::new(client, Box::new(IpLocator::new())).run().await
            }
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, date, imperial }) => {
                let client = client_from_config()?;
                let mut state = one_shot_state(date, imperial);
                state.set_city(city);

                if state.submit_city() {
                    fetch_city(&client, &mut state).await;
                }

                print!("{}", render::view(&state));
                Ok(())
            }
            Some(Command::Here { date, imperial }) => {
                let client = client_from_config()?;
                let mut state = one_shot_state(date, imperial);

                fetch_for_location(&client, &IpLocator::new(), &mut state).await;

                print!("{}", render::view(&state));
                Ok(())
            }
        }
    }
}

fn one_shot_state(date: Option<NaiveDate>, imperial: bool) -> AppState {
    let mut state = AppState::new(Utc::now().date_naive());
    if imperial {
        state.units = Units::Imperial;
    }
    if let Some(date) = date {
        state.set_date(date);
    }
    state
}

fn client_from_config() -> Result<OpenWeatherClient> {
    let config = Config::load()?;
    OpenWeatherClient::new(config.api_key()?.to_string())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}
