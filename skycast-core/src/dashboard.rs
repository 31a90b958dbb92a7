use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CurrentWeather, Forecast};
use crate::source::WeatherSource;

/// Everything one screen needs: current conditions plus the 5-day strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// The dashboard surfaces a single generic message on any failure;
/// partial results are discarded.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to load weather data. Please try again.")]
    Unavailable(anyhow::Error),
}

/// Fetch current conditions and the forecast concurrently and combine
/// them. Either failure fails the whole load.
pub async fn load(
    source: &dyn WeatherSource,
    location: &str,
) -> Result<Dashboard, DashboardError> {
    let (current, forecast) = tokio::try_join!(
        source.current_weather(location),
        source.forecast(location),
    )
    .map_err(DashboardError::Unavailable)?;

    Ok(Dashboard { current, forecast })
}
