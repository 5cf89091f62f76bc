// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tick timing and the local-time field.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fmt::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time left until the next whole second after `now`.
///
/// Sleeping for this rather than a flat second keeps ticks aligned with the
/// clock, so the seconds shown never skip or drift.
pub fn until_next_second(now: SystemTime) -> Duration {
    let into_second = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    Duration::from_secs(1) - Duration::from_nanos(u64::from(into_second))
}

/// Returns `true` if `pattern` is a valid `strftime` pattern.
pub fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Formats `time` with `pattern`; an unformattable pattern yields an empty string.
pub fn format_time<Tz>(time: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out.clear();
    }
    out
}

/// Formats the current local time.
pub fn local_time(pattern: &str) -> String {
    format_time(&Local::now(), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_time() -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2006, 1, 2)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn test_until_next_second() {
        let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_250);
        assert_eq!(until_next_second(now), Duration::from_millis(750));

        let on_boundary = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(until_next_second(on_boundary), Duration::from_secs(1));

        let almost = UNIX_EPOCH + Duration::from_nanos(1_700_000_000_999_999_999);
        assert_eq!(until_next_second(almost), Duration::from_nanos(1));
    }

    #[test]
    fn test_format_time() {
        let t = sample_time();
        assert_eq!(format_time(&t, "%a %d | %H:%M:%S"), "Mon 02 | 15:04:05");
        assert_eq!(format_time(&t, "%H:%M %z"), "15:04 +0000");
    }

    #[test]
    fn test_zone_fields_are_rendered() {
        assert!(is_valid_pattern("%H:%M %Z"));
        let shown = local_time("%H:%M %Z");
        assert!(!shown.is_empty());
        assert!(shown.len() > "00:00 ".len(), "zone missing from {shown:?}");
        assert!(!local_time("%z").is_empty());
    }

    #[test]
    fn test_pattern_validation() {
        assert!(is_valid_pattern("%a %d | %H:%M:%S"));
        assert!(!is_valid_pattern("%Q"));
    }

    #[test]
    fn test_bad_pattern_does_not_panic() {
        let t = sample_time();
        assert_eq!(format_time(&t, "%Q"), "");
    }
}
