//! OpenWeatherMap current-weather provider
//!
//! API Flow: /data/2.5/weather?q={city}&appid={key}&units=metric → `main.temp` in Celsius

use crate::{
    error::{AppError, AppResult},
    models::CurrentWeather,
    services::providers::WeatherProvider,
};
use reqwest::Client as HttpClient;

const UNITS: &str = "metric";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OpenWeatherProvider {
    pub fn new(http_client: HttpClient, api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    fn weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[tracing::instrument(skip(self), fields(provider = "openweather"))]
    async fn current_temperature(&self, city: &str) -> AppResult<f64> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Weather API key is not configured".to_string()))?;

        let response = self
            .http_client
            .get(self.weather_url())
            .query(&[("q", city), ("appid", api_key), ("units", UNITS)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Weather API returned status {}: {}",
                status, body
            )));
        }

        let weather: CurrentWeather = response.json().await?;

        tracing::debug!(
            city = %city,
            temperature = weather.main.temp,
            "Weather lookup completed"
        );

        Ok(weather.main.temp)
    }

    fn name(&self) -> &'static str {
        "openweather"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_url_strips_trailing_slash() {
        let provider = OpenWeatherProvider::new(
            HttpClient::new(),
            None,
            "http://api.openweathermap.org/".to_string(),
        );
        assert_eq!(
            provider.weather_url(),
            "http://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let provider = OpenWeatherProvider::new(
            HttpClient::new(),
            None,
            "http://127.0.0.1:9".to_string(),
        );

        let err = provider.current_temperature("London").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }
}
