/// Placeholder for a temperature the provider has not supplied.
pub const TEMP_UNKNOWN: i32 = -100;

/// Placeholder for an unknown daily maximum temperature.
pub const MAX_TEMP_UNKNOWN: i32 = 100;

/// Placeholder for an unknown precipitation probability.
pub const PRECIP_UNKNOWN: i32 = -1;

/// Today's scalar summary values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub month: u32,
    pub day: u32,
    pub min_temp: i32,
    pub max_temp: i32,
    pub max_precip_prob: i32,
}

impl DailySummary {
    /// Summary for the given calendar day with every value unknown.
    pub fn unknown(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            min_temp: TEMP_UNKNOWN,
            max_temp: MAX_TEMP_UNKNOWN,
            max_precip_prob: PRECIP_UNKNOWN,
        }
    }
}

/// One forecast hour. Unique by `hour` within a forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPoint {
    pub hour: u32,
    pub temp: i32,
    pub precip_prob: i32,
}

impl HourlyPoint {
    /// Bucket for an hour no value has been recorded against yet.
    pub fn unknown(hour: u32) -> Self {
        Self {
            hour,
            temp: TEMP_UNKNOWN,
            precip_prob: PRECIP_UNKNOWN,
        }
    }

    /// Whether this hour belongs on the strip: even hours from 08 to 24.
    pub fn is_display_hour(&self) -> bool {
        (8..=24).contains(&self.hour) && self.hour % 2 == 0
    }
}

/// A fully assembled forecast for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    pub today: DailySummary,
    pub hours: Vec<HourlyPoint>,
}
