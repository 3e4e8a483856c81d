pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{build_forecast, ForecastClient};
pub use error::ForecastError;
pub use types::{DailySummary, Forecast, HourlyPoint};
