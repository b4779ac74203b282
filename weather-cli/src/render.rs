//! Plain-text rendering of the view-model state.

use std::fmt::Write;

use weather_core::{AppState, ConsolidatedWeather, FetchStatus};

pub const OFFLINE_BANNER: &str = "!! Not connected to Internet";

pub fn render(state: &AppState) -> String {
    let mut out = String::from("Weather\n");

    for weather in &state.weather_results {
        render_day(&mut out, weather);
    }

    match &state.fetch_status {
        FetchStatus::Loading => out.push_str("\nLoading...\n"),
        FetchStatus::Loaded if state.weather_results.is_empty() => {
            out.push_str("\nNo forecast available\n");
        }
        FetchStatus::Loaded => {}
        FetchStatus::Failed { reason } => {
            let _ = writeln!(out, "\nCould not load forecast: {reason}");
        }
    }

    if !state.is_connected {
        let _ = writeln!(out, "\n{OFFLINE_BANNER}");
    }

    out
}

fn render_day(out: &mut String, weather: &ConsolidatedWeather) {
    let _ = writeln!(out, "\n{}", weather.applicable_date.format("%A"));
    let _ = writeln!(out, "  Current temp: {:.1}°C", weather.the_temp);
    let _ = writeln!(out, "  Max temp: {:.1}°C", weather.max_temp);
    let _ = writeln!(out, "  Min temp: {:.1}°C", weather.min_temp);
}
