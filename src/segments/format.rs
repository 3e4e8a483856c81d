//! Turns a forecast, or a failed cycle, into the segment line.
//!
//! Pure functions: the same input always yields the same sequence, and
//! the renderer always receives a non-empty, well-formed line.

use crate::forecast::types::PRECIP_UNKNOWN;
use crate::forecast::{Forecast, ForecastError, HourlyPoint};
use crate::segments::{palette, TextSegment};

/// Builds the full strip for a forecast: bold date, the daily
/// min/max/precipitation block, then one block per display hour.
///
/// Unknown daily values keep their sentinel text rather than pretending
/// to be zero.
pub fn forecast_segments(forecast: &Forecast) -> Vec<TextSegment> {
    let today = &forecast.today;
    let mut segments = vec![
        TextSegment::bold(format!("{}/{}", today.month, today.day), 35, palette::INK),
        separator(),
        TextSegment::new(today.min_temp.to_string(), 31, palette::DAILY_MIN),
        TextSegment::new("c ", 18, palette::UNIT),
        TextSegment::new(today.max_temp.to_string(), 31, palette::DAILY_MAX),
        TextSegment::new("c ", 18, palette::UNIT),
        TextSegment::new(today.max_precip_prob.to_string(), 31, palette::PRECIP),
        TextSegment::new("%  ", 18, palette::UNIT),
    ];
    for hour in &forecast.hours {
        segments.extend(hour_segments(hour));
    }
    segments
}

fn hour_segments(hour: &HourlyPoint) -> Vec<TextSegment> {
    vec![
        separator(),
        TextSegment::bold(hour.hour.to_string(), 24, palette::INK),
        TextSegment::new("|", 20, palette::SEPARATOR_LIGHT),
        TextSegment::new(hour.temp.to_string(), 24, palette::HOURLY_TEMP),
        TextSegment::new("c ", 13, palette::UNIT),
        TextSegment::new(
            precip_label(hour.precip_prob, PRECIP_UNKNOWN),
            24,
            palette::PRECIP,
        ),
        TextSegment::new("%   ", 13, palette::UNIT),
    ]
}

fn separator() -> TextSegment {
    TextSegment::new(" | ", 35, palette::SEPARATOR)
}

/// Precipitation display with two possible sources. Rain wins when both
/// are known; "?" only when neither is.
///
/// The fetch path only ever supplies the rain source; the ice source is
/// part of the contract all the same.
pub fn precip_label(rain: i32, ice: i32) -> String {
    if rain == PRECIP_UNKNOWN && ice == PRECIP_UNKNOWN {
        return "?".to_string();
    }
    if rain != PRECIP_UNKNOWN {
        rain.to_string()
    } else {
        ice.to_string()
    }
}

/// The two-segment line shown when a cycle fails: a prominent label and
/// the error text in small print.
pub fn error_segments(error: &ForecastError) -> Vec<TextSegment> {
    vec![
        TextSegment::new("error", 30, palette::ERROR_LABEL),
        TextSegment::new(error.to_string(), 12, palette::INK),
    ]
}
