use serde::{Deserialize, Serialize};

/// One weather condition entry, in the OpenWeather shape the display
/// layer expects. The first two characters of `icon` pick the condition
/// family (clear/cloud/rain/snow/haze); the trailing character is day/night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl WeatherCondition {
    pub fn new(id: u32, main: &str, description: &str, icon: &str) -> Self {
        Self {
            id,
            main: main.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Thermal and atmospheric readings shared by current weather and
/// forecast entries. `pressure` is hPa, `humidity` is percent.
///
/// `temp_min <= temp <= temp_max` is not guaranteed: min/max are fixed
/// offsets around a base temperature, not recomputed from `temp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

/// Wind reading: `speed` in m/s, `deg` in [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: u16,
}

/// Current-conditions snapshot for one location. `dt` is epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub weather: Vec<WeatherCondition>,
    pub main: MainMetrics,
    pub wind: Wind,
    pub name: String,
    pub dt: i64,
}

/// One forecast day. `dt_txt` is the RFC 3339 rendering of `dt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
    pub dt_txt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

/// Five-day forecast: `list[i]` is today + `i` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
    pub city: City,
}
