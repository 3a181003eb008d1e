use serde::Deserialize;

pub mod outfit;
pub mod season;
pub mod suggestion;

pub use outfit::{Dataset, OutfitRow, OUTFIT_COLUMNS};
pub use season::Season;
pub use suggestion::{
    SuggestRequest, SuppliedSuggestResponse, WeatherSuggestQuery, WeatherSuggestResponse,
};

// ============================================================================
// External API Types
// ============================================================================

/// Response from the IP geolocation endpoint (ipinfo.io shape)
#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Current weather response from OpenWeatherMap
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub main: WeatherMain,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    /// Temperature in the requested units (metric: Celsius)
    pub temp: f64,
}
