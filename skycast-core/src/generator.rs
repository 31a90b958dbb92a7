//! Deterministic mock weather synthesis.
//!
//! No network call is ever made: both generators derive plausible
//! weather records from the location string alone. The current-weather
//! side is fully templated by bucket; the forecast side perturbs a
//! bucket base temperature with an injected random source.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::bucket::Bucket;
use crate::model::{City, CurrentWeather, Forecast, ForecastEntry, MainMetrics, WeatherCondition, Wind};

/// Forecast length in days, today included.
pub const FORECAST_DAYS: usize = 5;

/// Country echoed in forecast metadata; there is no real geocoding.
pub const FORECAST_COUNTRY: &str = "Demo";

/// Current conditions for `location`, stamped with the wall clock.
pub fn current_weather(location: &str) -> CurrentWeather {
    current_weather_at(location, Utc::now())
}

/// Current conditions with an explicit observation time.
///
/// The snapshot is a fixed per-bucket template; only `name` and `dt`
/// vary between calls. `name` echoes the input verbatim, original
/// casing included.
pub fn current_weather_at(location: &str, now: DateTime<Utc>) -> CurrentWeather {
    let bucket = Bucket::classify(location);

    CurrentWeather {
        weather: vec![bucket.condition()],
        main: bucket.current_metrics(),
        wind: bucket.current_wind(),
        name: location.to_string(),
        dt: now.timestamp(),
    }
}

/// Five-day forecast for `location`, using the wall clock and the
/// process random source.
pub fn forecast(location: &str) -> Forecast {
    forecast_with(location, Utc::now(), &mut rand::rng())
}

/// Five-day forecast with an explicit clock and random source, so
/// callers can seed for reproducible output.
///
/// Entry `i` lands on `now + i` days, keeping the time-of-day of `now`.
/// Conditions cycle through a fixed five-entry sequence; readings are
/// the bucket base temperature plus bounded jitter.
pub fn forecast_with<R: Rng + ?Sized>(
    location: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Forecast {
    let base_temp = Bucket::classify(location).base_temp();
    let mut list = Vec::with_capacity(FORECAST_DAYS);

    for day in 0..FORECAST_DAYS {
        let when = now + Duration::days(day as i64);
        let temp = base_temp + rng.random_range(-2.5..2.5);

        list.push(ForecastEntry {
            dt: when.timestamp(),
            main: MainMetrics {
                temp,
                feels_like: temp - 0.5,
                temp_min: temp - 2.0,
                temp_max: temp + 2.0,
                pressure: 1010 + rng.random_range(0..10),
                humidity: 50 + rng.random_range(0..40),
            },
            weather: vec![cycle_condition(day)],
            wind: Wind {
                speed: rng.random_range(2.0..10.0),
                deg: rng.random_range(0..360),
            },
            dt_txt: when.to_rfc3339_opts(SecondsFormat::Secs, true),
        });
    }

    Forecast {
        list,
        city: City {
            name: location.to_string(),
            country: FORECAST_COUNTRY.to_string(),
        },
    }
}

/// Fixed condition cycle for forecast days: clear, broken clouds,
/// moderate rain, scattered clouds, haze.
fn cycle_condition(day: usize) -> WeatherCondition {
    match day % FORECAST_DAYS {
        0 => Bucket::Clear.condition(),
        1 => Bucket::BrokenClouds.condition(),
        2 => Bucket::ModerateRain.condition(),
        3 => Bucket::ScatteredClouds.condition(),
        _ => WeatherCondition::new(721, "Haze", "haze", "50d"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).single().expect("valid timestamp")
    }

    #[test]
    fn boston_gets_the_clear_template() {
        let snapshot = current_weather_at("Boston", fixed_now());

        assert_eq!(snapshot.weather.len(), 1);
        assert_eq!(snapshot.weather[0].icon, "01d");
        assert_eq!(snapshot.weather[0].description, "clear sky");
        assert_eq!(snapshot.main.temp, 25.4);
        assert_eq!(snapshot.main.humidity, 45);
        assert_eq!(snapshot.wind.deg, 240);
    }

    #[test]
    fn hanoi_gets_the_rain_template() {
        let snapshot = current_weather_at("hanoi", fixed_now());

        assert_eq!(snapshot.weather[0].icon, "10d");
        assert_eq!(snapshot.main.temp, 16.8);
        assert_eq!(snapshot.main.humidity, 82);
    }

    #[test]
    fn broken_clouds_and_default_templates() {
        let denver = current_weather_at("Denver", fixed_now());
        assert_eq!(denver.weather[0].icon, "04d");
        assert_eq!(denver.main.temp, 20.5);
        assert_eq!(denver.wind.speed, 5.2);

        let zurich = current_weather_at("Zurich", fixed_now());
        assert_eq!(zurich.weather[0].icon, "03d");
        assert_eq!(zurich.main.temp, 22.7);
        assert_eq!(zurich.main.pressure, 1013);
    }

    #[test]
    fn name_is_echoed_verbatim() {
        assert_eq!(current_weather_at("LoNdOn", fixed_now()).name, "LoNdOn");
        assert_eq!(current_weather_at("", fixed_now()).name, "");
        assert_eq!(current_weather_at("  padded  ", fixed_now()).name, "  padded  ");
    }

    #[test]
    fn empty_location_falls_into_the_default_template() {
        let snapshot = current_weather_at("", fixed_now());
        assert_eq!(snapshot.weather[0].icon, "03d");
        assert_eq!(snapshot.main.humidity, 58);
    }

    #[test]
    fn observation_time_comes_from_the_injected_clock() {
        let snapshot = current_weather_at("Boston", fixed_now());
        assert_eq!(snapshot.dt, fixed_now().timestamp());
    }

    #[test]
    fn repeated_calls_are_identical_under_a_fixed_clock() {
        let a = current_weather_at("Boston", fixed_now());
        let b = current_weather_at("Boston", fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn forecast_has_five_days_with_increasing_timestamps() {
        let mut rng = StdRng::seed_from_u64(7);
        let forecast = forecast_with("Boston", fixed_now(), &mut rng);

        assert_eq!(forecast.list.len(), FORECAST_DAYS);
        for (day, entry) in forecast.list.iter().enumerate() {
            let expected = fixed_now() + Duration::days(day as i64);
            assert_eq!(entry.dt, expected.timestamp());
        }
        for pair in forecast.list.windows(2) {
            assert!(pair[0].dt < pair[1].dt);
        }
    }

    #[test]
    fn dt_txt_parses_and_matches_the_forecast_day() {
        let mut rng = StdRng::seed_from_u64(7);
        let forecast = forecast_with("Boston", fixed_now(), &mut rng);

        for (day, entry) in forecast.list.iter().enumerate() {
            let parsed = DateTime::parse_from_rfc3339(&entry.dt_txt)
                .expect("dt_txt must be RFC 3339");
            assert_eq!(parsed.timestamp(), entry.dt);

            let expected = fixed_now() + Duration::days(day as i64);
            assert_eq!(parsed.date_naive(), expected.date_naive());
            assert_eq!(parsed.date_naive().day(), expected.day());
        }
    }

    #[test]
    fn conditions_cycle_through_the_fixed_sequence() {
        let mut rng = StdRng::seed_from_u64(3);
        let forecast = forecast_with("Denver", fixed_now(), &mut rng);

        let icons: Vec<&str> =
            forecast.list.iter().map(|e| e.weather[0].icon.as_str()).collect();
        assert_eq!(icons, ["01d", "04d", "10d", "03d", "50d"]);
    }

    #[test]
    fn randomized_readings_stay_in_their_ranges() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast = forecast_with("geneva", fixed_now(), &mut rng);

            for entry in &forecast.list {
                assert!((50u8..90).contains(&entry.main.humidity));
                assert!((1010u32..1020).contains(&entry.main.pressure));
                assert!(entry.wind.deg < 360);
                assert!((2.0..10.0).contains(&entry.wind.speed));
                assert_eq!(entry.main.feels_like, entry.main.temp - 0.5);
                assert_eq!(entry.main.temp_min, entry.main.temp - 2.0);
                assert_eq!(entry.main.temp_max, entry.main.temp + 2.0);
            }
        }
    }

    #[test]
    fn default_bucket_temperature_stays_near_its_base() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast = forecast_with("Zurich", fixed_now(), &mut rng);

            let first = &forecast.list[0];
            assert_eq!(first.weather[0].icon, "01d");
            assert!((19.5..24.5).contains(&first.main.temp));
        }
    }

    #[test]
    fn same_seed_reproduces_the_forecast() {
        let mut a_rng = StdRng::seed_from_u64(42);
        let mut b_rng = StdRng::seed_from_u64(42);

        let a = forecast_with("cairo", fixed_now(), &mut a_rng);
        let b = forecast_with("cairo", fixed_now(), &mut b_rng);
        assert_eq!(a, b);
    }

    #[test]
    fn forecast_echoes_location_metadata() {
        let mut rng = StdRng::seed_from_u64(1);
        let forecast = forecast_with("Zurich", fixed_now(), &mut rng);

        assert_eq!(forecast.city.name, "Zurich");
        assert_eq!(forecast.city.country, "Demo");
    }
}
