use crate::{
    models::{Dataset, SuggestRequest, SuppliedSuggestResponse, WeatherSuggestResponse},
    services::{
        location::resolve_city,
        matcher::{choose_outfit, find_outfits, MatchCriteria},
        providers::{LocationProvider, WeatherProvider},
        season::resolve_season,
    },
};

/// Suggests an outfit for `event` in the season currently observed at the caller's location
///
/// Flow: city (geolocation) → season (weather) → exact match → random pick.
pub async fn suggest_from_weather(
    dataset: &Dataset,
    location: &dyn LocationProvider,
    weather: &dyn WeatherProvider,
    event: &str,
) -> WeatherSuggestResponse {
    let city = resolve_city(location).await;
    let season = resolve_season(weather, city.as_deref()).await;

    let matches = find_outfits(dataset, &MatchCriteria::exact(event, season.as_str()));
    let outfit = choose_outfit(&matches, &mut rand::rng()).cloned();

    tracing::info!(
        event = %event,
        season = %season,
        city = ?city,
        matches = matches.len(),
        "Weather suggestion resolved"
    );

    match outfit {
        Some(outfit) => WeatherSuggestResponse::found(event.to_string(), season, city, outfit),
        None => WeatherSuggestResponse::not_found(event, season, city),
    }
}

/// Suggests an outfit for a caller-supplied event and optional season
pub fn suggest_supplied(dataset: &Dataset, request: SuggestRequest) -> SuppliedSuggestResponse {
    // An empty needle is contained in every event
    if request.event.trim().is_empty() {
        tracing::info!("Blank event in supplied-season suggestion");
        return SuppliedSuggestResponse::not_found(request);
    }

    let criteria = MatchCriteria::substring(&request.event, request.season.as_deref());
    let matches = find_outfits(dataset, &criteria);
    let outfit = choose_outfit(&matches, &mut rand::rng()).cloned();

    tracing::info!(
        event = %request.event,
        season = ?request.season,
        matches = matches.len(),
        "Supplied-season suggestion resolved"
    );

    match outfit {
        Some(outfit) => SuppliedSuggestResponse::found(request, outfit),
        None => SuppliedSuggestResponse::not_found(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{OutfitRow, Season},
        services::providers::{MockLocationProvider, MockWeatherProvider},
    };

    fn dataset() -> Dataset {
        let rows: Vec<OutfitRow> = vec![
            [("event", "office"), ("season", "winter"), ("topwear", "Coat")]
                .into_iter()
                .collect(),
            [("event", "Office Wear"), ("season", "summer"), ("topwear", "Shirt")]
                .into_iter()
                .collect(),
        ];
        Dataset::new(rows)
    }

    fn located(city: Option<&'static str>) -> MockLocationProvider {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_locate()
            .returning(move || Ok(city.map(str::to_string)));
        provider.expect_name().return_const("mock");
        provider
    }

    fn weather_at(celsius: f64) -> MockWeatherProvider {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_current_temperature()
            .returning(move |_| Ok(celsius));
        provider.expect_name().return_const("mock");
        provider
    }

    #[tokio::test]
    async fn test_weather_flow_found() {
        let response =
            suggest_from_weather(&dataset(), &located(Some("Oslo")), &weather_at(2.0), "Office")
                .await;

        match response {
            WeatherSuggestResponse::Found {
                season_detected,
                city_detected,
                outfit,
                ..
            } => {
                assert_eq!(season_detected, Season::Winter);
                assert_eq!(city_detected.as_deref(), Some("Oslo"));
                assert_eq!(outfit.get("topwear"), "Coat");
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_weather_flow_is_strict() {
        // "Office Wear" is the only summer row and must not match "office"
        let response =
            suggest_from_weather(&dataset(), &located(None), &weather_at(30.0), "office")
                .await;

        match response {
            WeatherSuggestResponse::NotFound {
                season_detected,
                city_detected,
                ..
            } => {
                assert_eq!(season_detected, Season::Summer);
                assert!(city_detected.is_none());
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_weather_blank_event_is_not_found() {
        let response =
            suggest_from_weather(&dataset(), &located(None), &weather_at(30.0), "  ").await;

        match response {
            WeatherSuggestResponse::NotFound { success, .. } => assert!(!success),
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn test_supplied_blank_event_is_not_found() {
        let request = SuggestRequest {
            event: " ".to_string(),
            season: None,
        };

        match suggest_supplied(&dataset(), request) {
            SuppliedSuggestResponse::NotFound { found, .. } => assert!(!found),
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn test_supplied_flow_is_lenient() {
        let request = SuggestRequest {
            event: "office".to_string(),
            season: Some("Summer".to_string()),
        };

        match suggest_supplied(&dataset(), request) {
            SuppliedSuggestResponse::Found { outfit, season, .. } => {
                assert_eq!(outfit.get("topwear"), "Shirt");
                assert_eq!(season.as_deref(), Some("Summer"));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_supplied_not_found() {
        let request = SuggestRequest {
            event: "wedding".to_string(),
            season: None,
        };

        match suggest_supplied(&dataset(), request) {
            SuppliedSuggestResponse::NotFound { found, message, .. } => {
                assert!(!found);
                assert_eq!(message, "No outfits found for event 'wedding'.");
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }
}
