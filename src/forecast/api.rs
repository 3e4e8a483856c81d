//! Serde model of the village forecast response envelope.
//!
//! The provider wraps everything in `response.header` (result code and
//! message) and `response.body.items.item` (a flat list of category
//! coded values). The body is absent on provider-side failures.

use serde::Deserialize;

/// Daily minimum temperature.
pub const CATEGORY_MIN_TEMP: &str = "TMN";
/// Daily maximum temperature.
pub const CATEGORY_MAX_TEMP: &str = "TMX";
/// Precipitation probability for one hour.
pub const CATEGORY_PRECIP_PROB: &str = "POP";
/// Temperature for one hour.
pub const CATEGORY_TEMP: &str = "TMP";

/// Result code the provider reports on success.
pub const RESULT_OK: &str = "00";

#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    pub response: ResponseEnvelope,
}

#[derive(Deserialize, Debug)]
pub struct ResponseEnvelope {
    pub header: ResponseHeader,
    #[serde(default)]
    pub body: Option<ResponseBody>,
}

#[derive(Deserialize, Debug)]
pub struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,

    #[serde(rename = "resultMsg")]
    pub result_msg: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ResponseBody {
    #[serde(default)]
    pub items: Items,
}

#[derive(Deserialize, Debug, Default)]
pub struct Items {
    #[serde(default)]
    pub item: Vec<ForecastItem>,
}

/// One flat forecast value from the provider.
#[derive(Deserialize, Debug, Clone)]
pub struct ForecastItem {
    pub category: String,

    #[serde(rename = "fcstDate")]
    pub fcst_date: String,

    #[serde(rename = "fcstTime", default)]
    pub fcst_time: String,

    #[serde(rename = "fcstValue")]
    pub fcst_value: String,
}
