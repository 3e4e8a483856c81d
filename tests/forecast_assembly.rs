use weatherbar::forecast::api::ForecastItem;
use weatherbar::forecast::types::{MAX_TEMP_UNKNOWN, PRECIP_UNKNOWN, TEMP_UNKNOWN};
use weatherbar::forecast::{build_forecast, ForecastError, HourlyPoint};

const DATE: &str = "20240305";

fn item(category: &str, time: &str, value: &str) -> ForecastItem {
    item_for(DATE, category, time, value)
}

fn item_for(date: &str, category: &str, time: &str, value: &str) -> ForecastItem {
    ForecastItem {
        category: category.to_string(),
        fcst_date: date.to_string(),
        fcst_time: time.to_string(),
        fcst_value: value.to_string(),
    }
}

#[test]
fn assembles_daily_and_hourly_values() {
    let items = vec![
        item("TMP", "0800", "20"),
        item("POP", "0800", "30"),
        item("TMN", "", "59"),
        item("TMX", "", "77"),
    ];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.month, 3);
    assert_eq!(forecast.today.day, 5);
    assert_eq!(forecast.today.min_temp, 59);
    assert_eq!(forecast.today.max_temp, 77);
    assert_eq!(forecast.today.max_precip_prob, 30);
    assert_eq!(
        forecast.hours,
        vec![HourlyPoint {
            hour: 8,
            temp: 20,
            precip_prob: 30,
        }]
    );
}

#[test]
fn zero_matching_items_yield_sentinels() {
    let items = vec![
        item_for("20240306", "TMP", "0800", "20"),
        item_for("20240306", "TMN", "", "5"),
    ];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.min_temp, TEMP_UNKNOWN);
    assert_eq!(forecast.today.max_temp, MAX_TEMP_UNKNOWN);
    assert_eq!(forecast.today.max_precip_prob, PRECIP_UNKNOWN);
    assert!(forecast.hours.is_empty());
}

#[test]
fn unrecognized_category_only_reserves_its_hour() {
    let items = vec![item("SKY", "0800", "1")];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.min_temp, TEMP_UNKNOWN);
    assert_eq!(forecast.today.max_precip_prob, PRECIP_UNKNOWN);
    assert_eq!(forecast.hours, vec![HourlyPoint::unknown(8)]);
}

#[test]
fn repeated_items_settle_into_the_same_bucket() {
    let once = vec![item("TMP", "0800", "20"), item("POP", "0800", "30")];
    let twice: Vec<_> = once.iter().cloned().chain(once.iter().cloned()).collect();

    let from_once = build_forecast(&once, DATE, 3, 5).unwrap();
    let from_twice = build_forecast(&twice, DATE, 3, 5).unwrap();

    assert_eq!(from_once, from_twice);
}

#[test]
fn strip_keeps_even_hours_between_eight_and_midnight() {
    let items = vec![
        item("TMP", "0600", "1"),
        item("TMP", "0700", "2"),
        item("TMP", "0800", "3"),
        item("TMP", "0900", "4"),
        item("TMP", "1400", "5"),
        item("TMP", "2300", "6"),
    ];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    let hours: Vec<u32> = forecast.hours.iter().map(|h| h.hour).collect();
    assert_eq!(hours, vec![8, 14]);
}

#[test]
fn strip_hours_keep_first_seen_order() {
    let items = vec![
        item("TMP", "1400", "5"),
        item("TMP", "0800", "3"),
        item("TMP", "1000", "4"),
    ];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    let hours: Vec<u32> = forecast.hours.iter().map(|h| h.hour).collect();
    assert_eq!(hours, vec![14, 8, 10]);
}

#[test]
fn max_precip_is_the_running_maximum() {
    let items = vec![
        item("POP", "0800", "30"),
        item("POP", "1000", "70"),
        item("POP", "1200", "50"),
    ];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.max_precip_prob, 70);
}

#[test]
fn max_precip_stays_unknown_without_pop_items() {
    let items = vec![item("TMP", "0800", "20"), item("TMP", "1000", "22")];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.max_precip_prob, PRECIP_UNKNOWN);
}

#[test]
fn daily_extremes_do_not_create_hour_buckets() {
    let items = vec![item("TMN", "", "5"), item("TMX", "", "12")];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert!(forecast.hours.is_empty());
}

#[test]
fn decimal_extremes_truncate() {
    let items = vec![item("TMN", "", "5.9"), item("TMX", "", "12.0")];

    let forecast = build_forecast(&items, DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.min_temp, 5);
    assert_eq!(forecast.today.max_temp, 12);
}

#[test]
fn a_value_that_is_not_a_number_fails_the_scan() {
    let items = vec![item("TMP", "0800", "rain")];

    let result = build_forecast(&items, DATE, 3, 5);

    assert!(matches!(result, Err(ForecastError::Parse(_))));
}

#[test]
fn empty_input_is_a_valid_forecast() {
    let forecast = build_forecast(&[], DATE, 3, 5).unwrap();

    assert_eq!(forecast.today.min_temp, TEMP_UNKNOWN);
    assert!(forecast.hours.is_empty());
}
