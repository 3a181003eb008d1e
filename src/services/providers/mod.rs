//! External lookups behind the weather-driven suggestion flow
//!
//! Providers report failures as errors; callers in `services::location` and
//! `services::season` decide how to fall back.

use crate::error::AppResult;

pub mod ipinfo;
pub mod openweather;

pub use ipinfo::IpInfoProvider;
pub use openweather::OpenWeatherProvider;

/// Maps the apparent network address of this process to a city
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// City of the caller's apparent address, `None` when the service does not know it
    async fn locate(&self) -> AppResult<Option<String>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Reports the current temperature of a city
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current temperature in Celsius
    async fn current_temperature(&self, city: &str) -> AppResult<f64>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
