//! The periodic fetch-format-publish task.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::config::RefreshConfig;
use crate::forecast::ForecastClient;
use crate::segments::format::{error_segments, forecast_segments};
use crate::segments::{SegmentStore, TextSegment};
use crate::ui::events::AppEvent;

/// Runs for the process lifetime: fetch, format, publish, notify.
///
/// The interval fires immediately at startup and then on the configured
/// cadence. Ticks landing inside the minimum gap are skipped, so timer
/// catch-up after a long suspend costs at most one request.
pub async fn run(
    client: ForecastClient,
    store: SegmentStore,
    notifier: Sender<AppEvent>,
    config: RefreshConfig,
) {
    let mut ticker = interval(Duration::from_secs(config.tick_interval_seconds));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let min_gap = Duration::from_secs(config.min_fetch_gap_seconds);
    let mut last_attempt: Option<Instant> = None;

    loop {
        ticker.tick().await;
        let now = Instant::now();
        if !should_fetch(last_attempt, now, min_gap) {
            continue;
        }
        last_attempt = Some(now);

        let segments = refresh(&client).await;
        store.publish(segments);
        if notifier.send(AppEvent::Refresh).is_err() {
            // UI is gone; nothing left to draw for.
            break;
        }
    }
}

/// One cycle. Every failure becomes the error line; nothing escapes.
/// A not-ready provider is a normal outcome and waits for the next
/// tick like any other.
pub async fn refresh(client: &ForecastClient) -> Vec<TextSegment> {
    match client.fetch().await {
        Ok(forecast) => {
            tracing::info!("forecast updated ({} strip hours)", forecast.hours.len());
            forecast_segments(&forecast)
        }
        Err(error) => {
            tracing::warn!("fetch cycle failed: {error}");
            error_segments(&error)
        }
    }
}

fn should_fetch(last: Option<Instant>, now: Instant, min_gap: Duration) -> bool {
    match last {
        Some(last) => now.duration_since(last) >= min_gap,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_always_fetches() {
        assert!(should_fetch(None, Instant::now(), Duration::from_secs(3600)));
    }

    #[test]
    fn tick_inside_the_gap_is_skipped() {
        let now = Instant::now();
        assert!(!should_fetch(
            Some(now),
            now + Duration::from_secs(10),
            Duration::from_secs(3600)
        ));
    }

    #[test]
    fn tick_past_the_gap_fetches() {
        let now = Instant::now();
        assert!(should_fetch(
            Some(now),
            now + Duration::from_secs(3600),
            Duration::from_secs(3600)
        ));
    }
}
