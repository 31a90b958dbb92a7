use crate::model::{MainMetrics, WeatherCondition, Wind};

/// Mock condition bucket, selected by the first character of the
/// location string. Every string, including the empty one, maps to
/// exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Clear,
    BrokenClouds,
    ModerateRain,
    ScatteredClouds,
}

impl Bucket {
    /// Classify a location by its lower-cased first character:
    /// a-c clear, d-f broken clouds, g-i rain, everything else
    /// scattered clouds.
    pub fn classify(location: &str) -> Self {
        match location.to_lowercase().chars().next() {
            Some('a'..='c') => Bucket::Clear,
            Some('d'..='f') => Bucket::BrokenClouds,
            Some('g'..='i') => Bucket::ModerateRain,
            _ => Bucket::ScatteredClouds,
        }
    }

    pub fn condition(&self) -> WeatherCondition {
        match self {
            Bucket::Clear => WeatherCondition::new(800, "Clear", "clear sky", "01d"),
            Bucket::BrokenClouds => WeatherCondition::new(803, "Clouds", "broken clouds", "04d"),
            Bucket::ModerateRain => WeatherCondition::new(501, "Rain", "moderate rain", "10d"),
            Bucket::ScatteredClouds => {
                WeatherCondition::new(802, "Clouds", "scattered clouds", "03d")
            }
        }
    }

    /// Integer base temperature used by the forecast generator before
    /// the random variation is applied.
    pub fn base_temp(&self) -> f64 {
        match self {
            Bucket::Clear => 25.0,
            Bucket::BrokenClouds => 20.0,
            Bucket::ModerateRain => 16.0,
            Bucket::ScatteredClouds => 22.0,
        }
    }

    /// Fixed current-weather readings for this bucket.
    pub(crate) fn current_metrics(&self) -> MainMetrics {
        match self {
            Bucket::Clear => MainMetrics {
                temp: 25.4,
                feels_like: 24.9,
                temp_min: 23.1,
                temp_max: 27.2,
                pressure: 1012,
                humidity: 45,
            },
            Bucket::BrokenClouds => MainMetrics {
                temp: 20.5,
                feels_like: 20.1,
                temp_min: 19.2,
                temp_max: 21.8,
                pressure: 1010,
                humidity: 65,
            },
            Bucket::ModerateRain => MainMetrics {
                temp: 16.8,
                feels_like: 16.5,
                temp_min: 15.4,
                temp_max: 17.9,
                pressure: 1008,
                humidity: 82,
            },
            Bucket::ScatteredClouds => MainMetrics {
                temp: 22.7,
                feels_like: 22.5,
                temp_min: 21.3,
                temp_max: 23.9,
                pressure: 1013,
                humidity: 58,
            },
        }
    }

    pub(crate) fn current_wind(&self) -> Wind {
        match self {
            Bucket::Clear => Wind { speed: 3.1, deg: 240 },
            Bucket::BrokenClouds => Wind { speed: 5.2, deg: 180 },
            Bucket::ModerateRain => Wind { speed: 6.7, deg: 200 },
            Bucket::ScatteredClouds => Wind { speed: 4.3, deg: 220 },
        }
    }
}
