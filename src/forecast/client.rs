//! Fetches today's forecast and assembles it into a [`Forecast`].

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use reqwest::{Client, StatusCode};

use crate::config::ApiConfig;
use crate::forecast::api::{
    ApiResponse, ForecastItem, CATEGORY_MAX_TEMP, CATEGORY_MIN_TEMP, CATEGORY_PRECIP_PROB,
    CATEGORY_TEMP, RESULT_OK,
};
use crate::forecast::error::ForecastError;
use crate::forecast::types::{DailySummary, Forecast, HourlyPoint};

/// The forecast run every query asks for. The provider publishes the
/// day's run shortly after 02:10 local time; [`base_time`] gates on
/// 02:12 to leave it time to land.
const BASE_TIME_SLOT: &str = "0200";

const SERVICE_PATH: &str = "/getVilageFcst";

/// Issues the forecast request and folds the provider's flat item list
/// into a [`Forecast`].
pub struct ForecastClient {
    http: Client,
    config: ApiConfig,
}

impl ForecastClient {
    pub fn new(config: ApiConfig) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|source| ForecastError::Network { source })?;
        Ok(Self { http, config })
    }

    /// Retrieves today's forecast.
    ///
    /// Fails with [`ForecastError::NotReady`] before the publication
    /// window, [`ForecastError::HttpStatus`]/[`ForecastError::Network`]
    /// on transport problems, [`ForecastError::Api`] when the envelope
    /// carries a failure code, and [`ForecastError::Parse`] on a body
    /// that does not match the documented shape.
    pub async fn fetch(&self) -> Result<Forecast, ForecastError> {
        let now = Local::now();
        let query_date = base_date(now.date_naive());
        let query_time = base_time(now.time())?;

        let url = format!("{}{}", self.config.base_url, SERVICE_PATH);
        let row_count = self.config.row_count.to_string();
        let grid_x = self.config.grid_x.to_string();
        let grid_y = self.config.grid_y.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("serviceKey", self.config.service_key.as_str()),
                ("pageNo", "1"),
                ("numOfRows", row_count.as_str()),
                ("dataType", "JSON"),
                ("base_date", query_date.as_str()),
                ("base_time", query_time),
                ("nx", grid_x.as_str()),
                ("ny", grid_y.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ForecastError::Network { source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ForecastError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ForecastError::Network { source })?;
        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| ForecastError::Parse(e.to_string()))?;

        let header = parsed.response.header;
        if header.result_code != RESULT_OK {
            return Err(ForecastError::Api {
                code: header.result_code,
                message: header.result_msg,
            });
        }

        let items = parsed
            .response
            .body
            .map(|body| body.items.item)
            .unwrap_or_default();
        build_forecast(&items, &query_date, now.month(), now.day())
    }
}

/// Query date in `YYYYMMDD` form.
fn base_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Returns the forecast run to query, or [`ForecastError::NotReady`]
/// when today's run has not been published yet.
///
/// The readiness check is a pre-check only; the query always asks for
/// the fixed 02:00 run.
fn base_time(time: NaiveTime) -> Result<&'static str, ForecastError> {
    let (hour, minute) = (time.hour(), time.minute());
    if hour < 2 || (hour == 2 && minute < 12) {
        return Err(ForecastError::NotReady);
    }
    Ok(BASE_TIME_SLOT)
}

/// Folds the provider's flat item list into a [`Forecast`].
///
/// Items for other dates are skipped. TMN/TMX fill the daily scalars
/// without touching hour buckets; every other category lands in the
/// bucket for its hour, created with unknown values on first sight, so
/// an unrecognized code still reserves its hour. Buckets keep their
/// first-seen order; the final filter keeps only the strip hours.
pub fn build_forecast(
    items: &[ForecastItem],
    query_date: &str,
    month: u32,
    day: u32,
) -> Result<Forecast, ForecastError> {
    let mut today = DailySummary::unknown(month, day);
    let mut hours: Vec<HourlyPoint> = Vec::new();

    for item in items {
        if item.fcst_date != query_date {
            continue;
        }

        match item.category.as_str() {
            CATEGORY_MIN_TEMP => {
                today.min_temp = parse_value(&item.fcst_value)?;
                continue;
            }
            CATEGORY_MAX_TEMP => {
                today.max_temp = parse_value(&item.fcst_value)?;
                continue;
            }
            _ => {}
        }

        let hour = parse_hour(&item.fcst_time)?;
        let index = match hours.iter().position(|bucket| bucket.hour == hour) {
            Some(index) => index,
            None => {
                hours.push(HourlyPoint::unknown(hour));
                hours.len() - 1
            }
        };

        match item.category.as_str() {
            CATEGORY_PRECIP_PROB => {
                let prob = parse_value(&item.fcst_value)?;
                hours[index].precip_prob = prob;
                if today.max_precip_prob < prob {
                    today.max_precip_prob = prob;
                }
            }
            CATEGORY_TEMP => {
                hours[index].temp = parse_value(&item.fcst_value)?;
            }
            _ => {}
        }
    }

    hours.retain(|bucket| bucket.is_display_hour());
    Ok(Forecast { today, hours })
}

/// Parses a forecast value. The provider sends most values as integer
/// text but daily extremes sometimes arrive as decimals ("5.0"); those
/// truncate toward zero.
fn parse_value(text: &str) -> Result<i32, ForecastError> {
    if let Ok(value) = text.parse::<i32>() {
        return Ok(value);
    }
    text.parse::<f64>()
        .map(|value| value as i32)
        .map_err(|_| ForecastError::Parse(format!("bad numeric value '{text}'")))
}

/// Extracts the hour from an `HHMM` forecast time.
fn parse_hour(text: &str) -> Result<u32, ForecastError> {
    text.get(..2)
        .and_then(|hour| hour.parse::<u32>().ok())
        .ok_or_else(|| ForecastError::Parse(format!("bad forecast time '{text}'")))
}
