use thiserror::Error;

/// The five user-visible failure categories. `Display` is the exact message
/// shown to the user; every variant is terminal for the current operation
/// (no retry, no backoff).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The search form was submitted with an empty city field. No request
    /// is ever issued for this case.
    #[error("Please enter a city")]
    EmptyCity,

    /// Anything that went wrong between us and the provider: transport
    /// failure, non-2xx status (including "city not found"), or a body that
    /// does not parse. The user-facing message deliberately does not
    /// distinguish these.
    #[error("City not found or invalid API call")]
    NetworkOrNotFound,

    /// The device-location lookup was refused or did not produce a position.
    #[error("Location access denied or unavailable")]
    LocationDenied,

    /// No location capability exists at all on this system.
    #[error("Location lookup is not supported on this system")]
    LocationUnsupported,

    /// A position was obtained but the weather fetch for it failed.
    #[error("Unable to fetch weather for current location")]
    LocationFetchFailed,
}

impl WeatherError {
    /// Whether previously fetched results survive this error.
    ///
    /// A failed location *grant* leaves whatever was on screen untouched;
    /// every other failure clears the current snapshot and forecast.
    pub fn keeps_previous_results(&self) -> bool {
        matches!(self, Self::LocationDenied | Self::LocationUnsupported)
    }
}
