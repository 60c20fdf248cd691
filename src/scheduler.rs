//! Midnight rotation of the daily car.
//!
//! A long-running task spawned at startup: sleeps until the next UTC
//! midnight, re-rolls the daily car through the same service path as the
//! administrative endpoint, and repeats. Failures are logged and the loop
//! keeps going; the lazy seating in `GameService::todays_car` covers any
//! day the rotation missed.

use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::Duration;

use crate::constants::API_NAME;
use crate::service::GameService;

pub async fn run(service: GameService) {
    loop {
        let sleep_for = duration_until_next_midnight();
        tracing::info!(
            "{} Next daily car rotation in {}s",
            API_NAME,
            sleep_for.as_secs()
        );
        tokio::time::sleep(sleep_for).await;

        match service.rotate_daily_car().await {
            Ok(car_id) => {
                tracing::info!("{} Midnight rotation selected car {}", API_NAME, car_id);
            }
            Err(e) => {
                tracing::error!("{} Midnight rotation failed: {:#}", API_NAME, e);
            }
        }
    }
}

fn duration_until_next_midnight() -> Duration {
    let now = Utc::now();
    let next_midnight = (now + ChronoDuration::days(1))
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc();
    (next_midnight - now)
        .to_std()
        .unwrap_or(Duration::from_secs(1))
}
