//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Shared domain models (current snapshot, 5-day forecast)
//! - Deterministic mock weather generation (no network I/O anywhere)
//! - Abstraction over weather sources
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod bucket;
pub mod config;
pub mod dashboard;
pub mod generator;
pub mod model;
pub mod source;

pub use bucket::Bucket;
pub use config::{Config, Units};
pub use dashboard::{Dashboard, DashboardError};
pub use model::{City, CurrentWeather, Forecast, ForecastEntry, MainMetrics, WeatherCondition, Wind};
pub use source::{MockSource, WeatherSource};
