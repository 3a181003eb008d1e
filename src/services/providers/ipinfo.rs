//! ipinfo.io geolocation provider
//!
//! Calls the endpoint without parameters, so the location is that of the
//! address the request leaves from.

use crate::{
    error::{AppError, AppResult},
    models::GeoLocation,
    services::providers::LocationProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct IpInfoProvider {
    http_client: HttpClient,
    api_url: String,
}

impl IpInfoProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl LocationProvider for IpInfoProvider {
    #[tracing::instrument(skip(self), fields(provider = "ipinfo"))]
    async fn locate(&self) -> AppResult<Option<String>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Geolocation API returned status {}: {}",
                status, body
            )));
        }

        let location: GeoLocation = response.json().await?;

        tracing::debug!(
            city = ?location.city,
            country = ?location.country,
            "Geolocation lookup completed"
        );

        Ok(location.city)
    }

    fn name(&self) -> &'static str {
        "ipinfo"
    }
}
