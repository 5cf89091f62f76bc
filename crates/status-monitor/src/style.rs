// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Urgency levels and the escape palette used to colour them.
//!
//! dwm with the statuscolors patch switches colour when it meets a control
//! byte (`\x01`, `\x02`, ...) in the root window name. A [`Palette`] maps
//! each [`Urgency`] to such a prefix. The default palette is empty, which
//! leaves the output uncoloured.


/// How alarming a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

impl Urgency {
    /// Classifies a load or usage percentage (higher is worse).
    pub fn for_usage(percent: i64) -> Self {
        if percent >= 100 {
            Self::Critical
        } else if percent >= 70 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Classifies a remaining battery percentage (lower is worse).
    pub fn for_charge(percent: i64) -> Self {
        if percent <= 5 {
            Self::Critical
        } else if percent <= 10 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Escape prefixes for each urgency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub normal: String,
    pub warning: String,
    pub critical: String,
}

impl Palette {
    /// Wraps `text` in the prefix for `urgency`, switching back to the
    /// normal colour afterwards.
    pub fn paint(&self, urgency: Urgency, text: &str) -> String {
        let prefix = match urgency {
            Urgency::Normal => return format!("{}{text}", self.normal),
            Urgency::Warning => &self.warning,
            Urgency::Critical => &self.critical,
        };
        if prefix.is_empty() {
            return format!("{}{text}", self.normal);
        }
        format!("{prefix}{text}{}", self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_thresholds() {
        assert_eq!(Urgency::for_usage(0), Urgency::Normal);
        assert_eq!(Urgency::for_usage(69), Urgency::Normal);
        assert_eq!(Urgency::for_usage(70), Urgency::Warning);
        assert_eq!(Urgency::for_usage(100), Urgency::Critical);
        assert_eq!(Urgency::for_usage(250), Urgency::Critical);
    }

    #[test]
    fn test_charge_thresholds() {
        assert_eq!(Urgency::for_charge(5), Urgency::Critical);
        assert_eq!(Urgency::for_charge(6), Urgency::Warning);
        assert_eq!(Urgency::for_charge(10), Urgency::Warning);
        assert_eq!(Urgency::for_charge(11), Urgency::Normal);
    }

    #[test]
    fn test_default_palette_is_transparent() {
        let p = Palette::default();
        assert_eq!(p.paint(Urgency::Critical, "CPU120"), "CPU120");
        assert_eq!(p.paint(Urgency::Normal, "CPU 12"), "CPU 12");
    }

    #[test]
    fn test_paint_resets_to_normal() {
        let p = Palette {
            normal: "\x01".into(),
            warning: "\x03".into(),
            critical: "\x04".into(),
        };
        assert_eq!(p.paint(Urgency::Warning, "MEM 80"), "\x03MEM 80\x01");
        assert_eq!(p.paint(Urgency::Normal, "MEM 20"), "\x01MEM 20");
    }
}
