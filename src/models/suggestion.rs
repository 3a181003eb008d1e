use serde::{Deserialize, Serialize};

use super::{OutfitRow, Season};

/// Query string for the weather-driven `GET /suggest`
#[derive(Debug, Deserialize)]
pub struct WeatherSuggestQuery {
    /// Type of event: office, party, trip, marriage, etc.
    pub event: String,
}

/// Query string or JSON body for the caller-supplied `/suggest`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestRequest {
    pub event: String,
    #[serde(default)]
    pub season: Option<String>,
}

/// Response of the weather-driven `GET /suggest`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WeatherSuggestResponse {
    Found {
        success: bool,
        event: String,
        season_detected: Season,
        city_detected: Option<String>,
        outfit: OutfitRow,
    },
    NotFound {
        success: bool,
        message: String,
        season_detected: Season,
        city_detected: Option<String>,
    },
}

impl WeatherSuggestResponse {
    pub fn found(event: String, season: Season, city: Option<String>, outfit: OutfitRow) -> Self {
        Self::Found {
            success: true,
            event,
            season_detected: season,
            city_detected: city,
            outfit,
        }
    }

    pub fn not_found(event: &str, season: Season, city: Option<String>) -> Self {
        Self::NotFound {
            success: false,
            message: format!("No outfits found for event '{}' in season '{}'.", event, season),
            season_detected: season,
            city_detected: city,
        }
    }
}

/// Response of the caller-supplied `/suggest`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuppliedSuggestResponse {
    Found {
        found: bool,
        event: String,
        season: Option<String>,
        outfit: OutfitRow,
    },
    NotFound {
        found: bool,
        message: String,
        event: String,
        season: Option<String>,
    },
}

impl SuppliedSuggestResponse {
    pub fn found(request: SuggestRequest, outfit: OutfitRow) -> Self {
        Self::Found {
            found: true,
            event: request.event,
            season: request.season,
            outfit,
        }
    }

    pub fn not_found(request: SuggestRequest) -> Self {
        let message = match request.season.as_deref() {
            Some(season) => format!(
                "No outfits found for event '{}' in season '{}'.",
                request.event, season
            ),
            None => format!("No outfits found for event '{}'.", request.event),
        };

        Self::NotFound {
            found: false,
            message,
            event: request.event,
            season: request.season,
        }
    }
}
