use crate::segments::Rgb;

pub const INK: Rgb = Rgb(0, 0, 0);
pub const SEPARATOR: Rgb = Rgb(150, 150, 150);
pub const SEPARATOR_LIGHT: Rgb = Rgb(180, 180, 180);
pub const UNIT: Rgb = Rgb(80, 80, 80);
pub const DAILY_MIN: Rgb = Rgb(155, 80, 0);
pub const DAILY_MAX: Rgb = Rgb(155, 0, 80);
pub const PRECIP: Rgb = Rgb(0, 0, 155);
pub const HOURLY_TEMP: Rgb = Rgb(130, 0, 0);
pub const ERROR_LABEL: Rgb = Rgb(99, 0, 0);
