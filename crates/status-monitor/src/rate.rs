// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-width rendering of byte rates.
//!
//! A rate is shown in the smallest of B/s, KiB/s and MiB/s that keeps the
//! number below 1000, always four characters wide so the status bar does
//! not jitter:
//!
//! ```text
//! RX  5.0B/s   RX 50.0B/s   RX  500B/s   RX  2.0KiB/s   RX  1.9MiB/s
//! ```

use crate::{Palette, Signs, Urgency};

/// Rates at or above this many bytes per tick (1000 MiB/s) are not shown.
pub const RATE_CEILING: i64 = 1000 * 1024 * 1024;

/// Smallest rate whose KiB value rounds to 1000 (999.5 KiB); shown in MiB/s.
const MIB_FROM: i64 = 1_023_488;

/// The unit tier a rate is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    Bytes,
    KiB,
    MiB,
}

/// Scales a raw byte rate into its display tier.
///
/// Returns `None` for negative rates and rates at or above [`RATE_CEILING`].
pub fn scale(rate: i64) -> Option<(f64, RateUnit)> {
    if !(0..RATE_CEILING).contains(&rate) {
        return None;
    }
    let scaled = if rate >= MIB_FROM {
        (rate as f64 / (1024.0 * 1024.0), RateUnit::MiB)
    } else if rate >= 1000 {
        (rate as f64 / 1024.0, RateUnit::KiB)
    } else {
        (rate as f64, RateUnit::Bytes)
    };
    Some(scaled)
}

/// Formats byte rates with a label and unit suffix.
#[derive(Debug, Clone)]
pub struct RateFormatter {
    signs: Signs,
    float_separator: String,
    palette: Palette,
}

impl RateFormatter {
    pub fn new(signs: Signs, float_separator: impl Into<String>, palette: Palette) -> Self {
        Self {
            signs,
            float_separator: float_separator.into(),
            palette,
        }
    }

    /// Renders `rate` bytes per tick as `"{label} {value}{unit}"`, or
    /// `"{label} ERR"` when the rate is negative or too large.
    pub fn format(&self, label: &str, rate: i64) -> String {
        let Some((value, unit)) = scale(rate) else {
            return self.palette.paint(Urgency::Critical, &format!("{label} ERR"));
        };

        let suffix = match unit {
            RateUnit::Bytes => &self.signs.bps,
            RateUnit::KiB => &self.signs.kibps,
            RateUnit::MiB => &self.signs.mibps,
        };
        let urgency = if unit == RateUnit::MiB {
            Urgency::Warning
        } else {
            Urgency::Normal
        };

        // 99.95 and up would round to "100.0" with one decimal.
        let digits = if value >= 99.95 {
            format!("{value:>4.0}")
        } else {
            format!("{value:>4.1}")
        };
        let digits = digits.replacen('.', &self.float_separator, 1);

        self.palette
            .paint(urgency, &format!("{label} {digits}{suffix}"))
    }
}

impl Default for RateFormatter {
    fn default() -> Self {
        Self::new(Signs::default(), ".", Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_tiers() {
        assert_eq!(scale(500), Some((500.0, RateUnit::Bytes)));
        assert_eq!(scale(999).map(|s| s.1), Some(RateUnit::Bytes));
        assert_eq!(scale(1000).map(|s| s.1), Some(RateUnit::KiB));
        assert_eq!(scale(2000).map(|s| s.1), Some(RateUnit::KiB));
        assert_eq!(scale(MIB_FROM - 1).map(|s| s.1), Some(RateUnit::KiB));
        assert_eq!(scale(MIB_FROM).map(|s| s.1), Some(RateUnit::MiB));
        assert_eq!(scale(1_023_999).map(|s| s.1), Some(RateUnit::MiB));
        assert_eq!(scale(1000 * 1024).map(|s| s.1), Some(RateUnit::MiB));
        assert_eq!(scale(2_000_000).map(|s| s.1), Some(RateUnit::MiB));
        assert_eq!(scale(RATE_CEILING - 1).map(|s| s.1), Some(RateUnit::MiB));
        assert_eq!(scale(RATE_CEILING), None);
        assert_eq!(scale(-1), None);
    }

    #[test]
    fn test_format_bytes() {
        let f = RateFormatter::default();
        assert_eq!(f.format("RX", 0), "RX  0.0B/s");
        assert_eq!(f.format("RX", 5), "RX  5.0B/s");
        assert_eq!(f.format("RX", 50), "RX 50.0B/s");
        assert_eq!(f.format("RX", 500), "RX  500B/s");
    }

    #[test]
    fn test_format_kib_and_mib() {
        let f = RateFormatter::default();
        assert_eq!(f.format("TX", 2000), "TX  2.0KiB/s");
        assert_eq!(f.format("TX", 20 * 1024), "TX 20.0KiB/s");
        assert_eq!(f.format("TX", 500 * 1024), "TX  500KiB/s");
        assert_eq!(f.format("TX", 2_000_000), "TX  1.9MiB/s");
    }

    #[test]
    fn test_format_errors() {
        let f = RateFormatter::default();
        assert_eq!(f.format("RX", -1), "RX ERR");
        assert_eq!(f.format("RX", RATE_CEILING), "RX ERR");
        assert_eq!(f.format("RX", i64::MAX), "RX ERR");
    }

    #[test]
    fn test_fixed_width() {
        let f = RateFormatter::default();
        for rate in [0, 7, 42, 99, 100, 999, 1000, 1023, 102_350, 1_023_999, 1_048_576, 900_000_000] {
            let s = f.format("", rate);
            let digits: String = s.chars().skip(1).take(4).collect();
            assert!(
                digits.trim_start().chars().all(|c| c.is_ascii_digit() || c == '.'),
                "rate {rate} rendered as {s:?}"
            );
            assert!(
                s.chars().nth(5).is_some_and(|c| c.is_ascii_alphabetic()),
                "rate {rate} rendered as {s:?}"
            );
            if !s.ends_with("MiB/s") {
                assert_ne!(digits, "1000", "rate {rate} rendered as {s:?}");
            }
        }

        // Would round to 1000 KiB/s; shown one tier up instead.
        assert_eq!(f.format("TX", 1_023_999), "TX  1.0MiB/s");
        assert_eq!(f.format("TX", MIB_FROM - 1), "TX  999KiB/s");
        assert_eq!(f.format("TX", MIB_FROM), "TX  1.0MiB/s");
    }

    #[test]
    fn test_float_separator() {
        let f = RateFormatter::new(Signs::default(), ",", Palette::default());
        assert_eq!(f.format("RX", 5), "RX  5,0B/s");
        assert_eq!(f.format("RX", 500), "RX  500B/s");
    }

    #[test]
    fn test_mib_tier_is_warning() {
        let palette = Palette {
            normal: "\x01".into(),
            warning: "\x03".into(),
            critical: "\x04".into(),
        };
        let f = RateFormatter::new(Signs::default(), ".", palette);
        assert_eq!(f.format("RX", 2_000_000), "\x03RX  1.9MiB/s\x01");
        assert_eq!(f.format("RX", -5), "\x04RX ERR\x01");
        assert_eq!(f.format("RX", 5), "\x01RX  5.0B/s");
    }
}
