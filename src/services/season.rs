use crate::{models::Season, services::providers::WeatherProvider};

/// Resolves the current season for a city
///
/// Without a city, or when the weather lookup fails for any reason, the
/// result is [`Season::Summer`].
pub async fn resolve_season(provider: &dyn WeatherProvider, city: Option<&str>) -> Season {
    let Some(city) = city else {
        tracing::debug!("No city detected, using default season");
        return Season::default();
    };

    match provider.current_temperature(city).await {
        Ok(temperature) => {
            let season = Season::from_temperature(temperature);
            tracing::info!(
                city = %city,
                temperature,
                season = %season,
                "Season resolved from weather"
            );
            season
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                city = %city,
                error = %e,
                "Weather lookup failed, using default season"
            );
            Season::default()
        }
    }
}
