use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Forecast provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the village forecast service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Service key issued by the data portal.
    #[serde(default)]
    pub service_key: String,
    /// Forecast grid column (nx).
    #[serde(default = "default_grid_x")]
    pub grid_x: u32,
    /// Forecast grid row (ny).
    #[serde(default = "default_grid_y")]
    pub grid_y: u32,
    /// Rows requested per page (default: 300).
    #[serde(default = "default_row_count")]
    pub row_count: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Cadence of the background fetch task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between scheduled ticks (default: 4 hours).
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
    /// Minimum seconds between fetch attempts (default: 1 hour).
    #[serde(default = "default_min_fetch_gap")]
    pub min_fetch_gap_seconds: u64,
}

fn default_base_url() -> String {
    "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0".to_string()
}

fn default_grid_x() -> u32 {
    60
}

fn default_grid_y() -> u32 {
    127
}

fn default_row_count() -> u32 {
    300
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_interval() -> u64 {
    4 * 60 * 60
}

fn default_min_fetch_gap() -> u64 {
    60 * 60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            service_key: String::new(),
            grid_x: default_grid_x(),
            grid_y: default_grid_y(),
            row_count: default_row_count(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            tick_interval_seconds: default_tick_interval(),
            min_fetch_gap_seconds: default_min_fetch_gap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}
