//! Application state for the bridge server

use shared::error::{AppError, AppResult};

use crate::brink::BrinkClient;
use crate::core::Config;
use crate::services::{LocationDirectory, TimeService};

/// Shared application state
///
/// Holds one instance of every collaborator; `Clone` is a shallow copy
/// (the HTTP client, the directory map and the POS limiter are all
/// internally reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Token -> location metadata cache
    pub locations: LocationDirectory,
    /// Business-clock resolver (time API + tz database fallback)
    pub clock: TimeService,
    /// Brink SOAP client
    pub brink: BrinkClient,
}

impl AppState {
    /// Create state from config, loading the location directory from
    /// the configured JSON file
    pub fn new(config: &Config) -> AppResult<Self> {
        let locations = LocationDirectory::from_file(&config.locations_path)?;
        Self::with_directory(config.clone(), locations)
    }

    /// Create state with an already-populated location directory
    /// (used by tests and embedders)
    pub fn with_directory(config: Config, locations: LocationDirectory) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.brink_timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        let clock = TimeService::new(http.clone(), config.time_api_url.clone());
        let brink = BrinkClient::new(http, &config);

        Ok(Self {
            config,
            locations,
            clock,
            brink,
        })
    }
}
