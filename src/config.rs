use serde::Deserialize;

/// Which `/suggest` flavour the server exposes
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Season derived from the caller's location and weather, exact matching
    #[default]
    Weather,
    /// Season supplied by the caller (optional), substring matching
    Supplied,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the outfit CSV dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// OpenWeatherMap API key
    #[serde(default)]
    pub weather_api_key: Option<String>,

    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    /// IP geolocation endpoint
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    #[serde(default)]
    pub service_mode: ServiceMode,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_dataset_path() -> String {
    "Unstyled1.csv".to_string()
}

fn default_weather_api_url() -> String {
    "http://api.openweathermap.org".to_string()
}

fn default_geolocation_url() -> String {
    "https://ipinfo.io".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
