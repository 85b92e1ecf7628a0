use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::platform;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Display-only countdown to the next daily UTC boundary, ticking once a
/// second. It runs independently of any session state and has no effect
/// on gameplay.
pub fn use_daily_countdown() -> Signal<String> {
    let mut remaining =
        use_signal(|| format_hms(ms_until_utc_midnight(platform::now_ms())));

    // Track if the tick loop has started to prevent multiple loops
    let ticking = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if !ticking.get() {
            ticking.set(true);

            spawn(async move {
                loop {
                    platform::sleep_ms(1_000).await;
                    remaining.set(format_hms(ms_until_utc_midnight(platform::now_ms())));
                }
            });
        }
    });

    remaining
}

/// Milliseconds until the next 00:00 UTC.
pub fn ms_until_utc_midnight(now_ms: i64) -> i64 {
    DAY_MS - now_ms.rem_euclid(DAY_MS)
}

/// `HH:MM:SS`, zero padded.
pub fn format_hms(ms: i64) -> String {
    let total = ms.max(0) / 1_000;
    format!("{:02}:{:02}:{:02}", total / 3_600, total % 3_600 / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_rolls_over_to_a_full_day() {
        assert_eq!(ms_until_utc_midnight(0), DAY_MS);
        assert_eq!(ms_until_utc_midnight(DAY_MS), DAY_MS);
    }

    #[test]
    fn one_second_before_midnight() {
        assert_eq!(ms_until_utc_midnight(DAY_MS - 1_000), 1_000);
        assert_eq!(format_hms(1_000), "00:00:01");
    }

    #[test]
    fn formats_padded_hms() {
        assert_eq!(format_hms(DAY_MS), "24:00:00");
        assert_eq!(format_hms(3_723_000), "01:02:03");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(-5_000), "00:00:00");
    }
}
