//! Text rendering for the dashboard: a current-conditions card and a
//! 5-day forecast strip. Pure string building, no I/O.

use std::fmt::Write;

use chrono::DateTime;
use skycast_core::{CurrentWeather, Dashboard, Forecast, ForecastEntry, Units};

pub fn render_dashboard(dashboard: &Dashboard, units: Units) -> String {
    let mut out = String::new();
    out.push_str(&render_current(&dashboard.current, units));
    out.push('\n');
    out.push_str(&render_forecast(&dashboard.forecast, units));
    out
}

pub fn render_current(current: &CurrentWeather, units: Units) -> String {
    let condition = current.weather.first();
    let description = condition.map_or("unknown", |c| c.description.as_str());
    let glyph = condition.map_or("·", |c| icon_glyph(&c.icon));

    let mut out = String::new();
    let _ = writeln!(out, "{glyph}  {}: {description}", current.name);
    let _ = writeln!(
        out,
        "   temperature  {} (feels like {})",
        format_temp(current.main.temp, units),
        format_temp(current.main.feels_like, units),
    );
    let _ = writeln!(
        out,
        "   range        {} to {}",
        format_temp(current.main.temp_min, units),
        format_temp(current.main.temp_max, units),
    );
    let _ = writeln!(out, "   humidity     {}%", current.main.humidity);
    let _ = writeln!(out, "   pressure     {} hPa", current.main.pressure);
    let _ = writeln!(
        out,
        "   wind         {} from {}°",
        format_speed(current.wind.speed, units),
        current.wind.deg,
    );
    if let Some(observed) = DateTime::from_timestamp(current.dt, 0) {
        let _ = writeln!(out, "   observed     {}", observed.format("%Y-%m-%d %H:%M UTC"));
    }
    out
}

pub fn render_forecast(forecast: &Forecast, units: Units) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "5-day forecast for {} ({})",
        forecast.city.name, forecast.city.country
    );
    for entry in &forecast.list {
        out.push_str(&render_entry(entry, units));
    }
    out
}

fn render_entry(entry: &ForecastEntry, units: Units) -> String {
    let condition = entry.weather.first();
    let description = condition.map_or("unknown", |c| c.description.as_str());
    let glyph = condition.map_or("·", |c| icon_glyph(&c.icon));
    let day = DateTime::from_timestamp(entry.dt, 0)
        .map_or_else(|| "--".to_string(), |d| d.format("%a %d %b").to_string());

    format!(
        "   {day}  {glyph}  {description:<16}  {:>8}  hum {:>2}%  wind {}\n",
        format_temp(entry.main.temp, units),
        entry.main.humidity,
        format_speed(entry.wind.speed, units),
    )
}

/// Glyph by icon-code family: the first two characters pick the
/// condition family, the trailing day/night marker is ignored.
fn icon_glyph(icon: &str) -> &'static str {
    match icon.get(..2).unwrap_or("") {
        "01" => "☀",
        "02" | "03" | "04" => "☁",
        "09" | "10" => "🌧",
        "11" => "⛈",
        "13" => "❄",
        "50" => "🌫",
        _ => "·",
    }
}

fn format_temp(celsius: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("{celsius:.1}°C"),
        Units::Imperial => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
    }
}

fn format_speed(mps: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("{mps:.1} m/s"),
        Units::Imperial => format!("{:.1} mph", mps * 2.236_94),
    }
}
