use crate::services::providers::LocationProvider;

/// Resolves the caller's city, swallowing every provider failure into `None`
pub async fn resolve_city(provider: &dyn LocationProvider) -> Option<String> {
    match provider.locate().await {
        Ok(Some(city)) if !city.trim().is_empty() => Some(city.trim().to_string()),
        Ok(_) => {
            tracing::warn!(
                provider = provider.name(),
                "Geolocation response carried no city"
            );
            None
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "Geolocation lookup failed"
            );
            None
        }
    }
}
