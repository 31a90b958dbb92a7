use std::fmt::Debug;

use async_trait::async_trait;

use crate::generator;
use crate::model::{CurrentWeather, Forecast};

/// Abstraction over where weather data comes from. The dashboard only
/// talks to this trait, so a real HTTP-backed source could be dropped
/// in without touching the presentation side.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, location: &str) -> anyhow::Result<CurrentWeather>;

    async fn forecast(&self, location: &str) -> anyhow::Result<Forecast>;
}

/// The built-in source: synthesizes records from the location string
/// via the mock generators. Total over all inputs, so it never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

#[async_trait]
impl WeatherSource for MockSource {
    async fn current_weather(&self, location: &str) -> anyhow::Result<CurrentWeather> {
        Ok(generator::current_weather(location))
    }

    async fn forecast(&self, location: &str) -> anyhow::Result<Forecast> {
        Ok(generator::forecast(location))
    }
}
