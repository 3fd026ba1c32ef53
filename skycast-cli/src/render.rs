//! Human-friendly output formatting. Everything renders from [`AppState`]
//! alone; unit labels come from the preference, never from the payload.

use std::fmt::Write;

use skycast_core::AppState;
use skycast_core::model::{ForecastEntry, Units, icon_url, map_url};

/// Render the whole state bundle to a string (the caller prints it).
pub fn view(state: &AppState) -> String {
    let mut out = String::new();

    if state.loading {
        let _ = writeln!(out, "Loading...");
    }

    if let Some(err) = &state.error {
        let _ = writeln!(out, "{err}");
    }

    if let Some(current) = &state.current {
        let _ = writeln!(out);
        let _ = writeln!(out, "Current weather in {}", current.name);
        if let Some(condition) = current.condition() {
            let _ = writeln!(
                out,
                "  {}  ({})",
                condition.description,
                icon_url(&condition.icon)
            );
        }
        let _ = writeln!(
            out,
            "  Temperature: {:.1}{}",
            current.main.temp,
            state.units.temp_label()
        );
        let _ = writeln!(
            out,
            "  Wind speed:  {:.1} {}",
            current.wind.speed,
            state.units.speed_label()
        );
        let _ = writeln!(out, "  Humidity:    {}%", current.main.humidity);
        let _ = writeln!(out, "  Map:         {}", map_url(&current.coord));
    }

    match &state.forecast {
        None => {
            // Nothing fetched yet; only worth saying so once a snapshot exists.
            if state.current.is_some() {
                let _ = writeln!(out, "No forecast loaded.");
            }
        }
        Some(_) => match state.entries_for_selected_date() {
            None => {
                let _ = writeln!(out);
                let _ = writeln!(out, "No weather data available for the selected date.");
            }
            Some(entries) => {
                let _ = writeln!(out);
                let _ = writeln!(out, "Forecast for {}", state.date.format("%a, %d %b %Y"));
                for entry in entries {
                    let _ = writeln!(out, "{}", format_entry(entry, state.units));
                }
            }
        },
    }

    out
}

fn format_entry(entry: &ForecastEntry, units: Units) -> String {
    let time = entry
        .time_utc()
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());

    let (description, icon) = match entry.condition() {
        Some(condition) => (condition.description.as_str(), icon_url(&condition.icon)),
        None => ("unknown", String::new()),
    };

    format!(
        "  {}  {:>6.1}{}  {}  {}",
        time,
        entry.main.temp,
        units.temp_label(),
        description,
        icon
    )
}
