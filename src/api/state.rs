use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::config::{Config, ServiceMode};
use crate::models::Dataset;
use crate::services::{
    load_dataset, ColumnFilter, IpInfoProvider, LocationProvider, OpenWeatherProvider,
    WeatherProvider,
};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub location_provider: Arc<dyn LocationProvider>,
    pub weather_provider: Arc<dyn WeatherProvider>,
    pub mode: ServiceMode,
}

impl AppState {
    pub fn new(
        dataset: Dataset,
        location_provider: Arc<dyn LocationProvider>,
        weather_provider: Arc<dyn WeatherProvider>,
        mode: ServiceMode,
    ) -> Self {
        Self {
            dataset: Arc::new(dataset),
            location_provider,
            weather_provider,
            mode,
        }
    }

    /// Loads the dataset and wires the HTTP-backed providers from configuration
    pub fn from_config(config: &Config) -> Self {
        // Caller-supplied lookups return every column the file carries
        let columns = match config.service_mode {
            ServiceMode::Weather => ColumnFilter::Outfit,
            ServiceMode::Supplied => ColumnFilter::All,
        };
        let dataset = load_dataset(&config.dataset_path, columns);

        if config.service_mode == ServiceMode::Weather && config.weather_api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY is not set, every weather lookup will fall back to summer");
        }

        let http_client = HttpClient::new();
        let location_provider = Arc::new(IpInfoProvider::new(
            http_client.clone(),
            config.geolocation_url.clone(),
        ));
        let weather_provider = Arc::new(OpenWeatherProvider::new(
            http_client,
            config.weather_api_key.clone(),
            config.weather_api_url.clone(),
        ));

        Self::new(dataset, location_provider, weather_provider, config.service_mode)
    }
}
