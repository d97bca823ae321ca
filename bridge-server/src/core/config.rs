//! Bridge server configuration

/// Bridge server configuration
///
/// All values can be overridden through environment variables; unset
/// variables fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Brink Sales service endpoint (GetOrders)
    pub brink_sales_url: String,
    /// Brink Labor service endpoint (GetShifts)
    pub brink_labor_url: String,
    /// Brink Settings service endpoint (GetEmployees)
    pub brink_settings_url: String,
    /// Outbound POS call timeout in seconds
    pub brink_timeout_secs: u64,
    /// Maximum concurrent outbound POS calls
    pub brink_max_concurrency: usize,
    /// External time service base URL (worldtimeapi-compatible)
    pub time_api_url: String,
    /// Path to the location directory JSON file
    pub locations_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            brink_sales_url: std::env::var("BRINK_SALES_URL")
                .unwrap_or_else(|_| "https://api.brinkpos.net/Sales2.svc".into()),
            brink_labor_url: std::env::var("BRINK_LABOR_URL")
                .unwrap_or_else(|_| "https://api.brinkpos.net/Labor2.svc".into()),
            brink_settings_url: std::env::var("BRINK_SETTINGS_URL")
                .unwrap_or_else(|_| "https://api.brinkpos.net/Settings2.svc".into()),
            brink_timeout_secs: std::env::var("BRINK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            brink_max_concurrency: std::env::var("BRINK_MAX_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            time_api_url: std::env::var("TIME_API_URL")
                .unwrap_or_else(|_| "https://worldtimeapi.org/api/timezone".into()),
            locations_path: std::env::var("LOCATIONS_PATH")
                .unwrap_or_else(|_| "locations.json".into()),
        }
    }

    /// Is this a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
