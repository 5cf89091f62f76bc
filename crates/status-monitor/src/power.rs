// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Battery charge and AC adapter state via `/sys/class/power_supply/`.
//!
//! Every `BAT*` entry contributes to one aggregate, so a laptop with two
//! batteries shows a single combined percentage. Depending on the
//! hardware, a battery reports either energy (`energy_*`, µWh) or charge
//! (`charge_*`, µAh), and its draw as `current_now` or `power_now`. Values
//! are taken from the `uevent` file when it has them, otherwise from the
//! individual attribute files.

use crate::{MonitorError, Palette, Reading, Signs, Urgency, ValueStore};
use std::path::{Path, PathBuf};

/// AC adapter state, relative to the power-supply directory.
const AC_ONLINE: &str = "AC/online";

/// Name prefix of battery entries.
const BATTERY_PREFIX: &str = "BAT";

const UEVENT_FULL: &[&str] = &["POWER_SUPPLY_ENERGY_FULL", "POWER_SUPPLY_CHARGE_FULL"];
const UEVENT_NOW: &[&str] = &["POWER_SUPPLY_ENERGY_NOW", "POWER_SUPPLY_CHARGE_NOW"];
const UEVENT_DRAW: &[&str] = &["POWER_SUPPLY_CURRENT_NOW", "POWER_SUPPLY_POWER_NOW"];

const FILES_FULL: &[&str] = &["energy_full", "charge_full"];
const FILES_NOW: &[&str] = &["energy_now", "charge_now"];
const FILES_DRAW: &[&str] = &["current_now", "power_now"];

/// Energy figures summed over all batteries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatteryAggregate {
    pub energy_full: i64,
    pub energy_now: i64,
    pub current_now: i64,
}

impl BatteryAggregate {
    /// Reads one battery directory.
    ///
    /// Missing or non-numeric values count as 0.
    pub fn read_battery(dir: &Path) -> Self {
        let uevent = ValueStore::parse(&dir.join("uevent"));
        let from_uevent = Self {
            energy_full: uevent.search_int(UEVENT_FULL),
            energy_now: uevent.search_int(UEVENT_NOW),
            current_now: uevent.search_int(UEVENT_DRAW),
        };
        if from_uevent.energy_full > 0 {
            return from_uevent;
        }

        Self {
            energy_full: read_first_int(dir, FILES_FULL),
            energy_now: read_first_int(dir, FILES_NOW),
            current_now: read_first_int(dir, FILES_DRAW),
        }
    }

    /// Adds another battery's figures. Totals that do not fit are invalid.
    pub fn add(&mut self, other: &BatteryAggregate) -> Result<(), MonitorError> {
        let sum = |a: i64, b: i64| {
            a.checked_add(b)
                .ok_or_else(|| MonitorError::Invalid(format!("battery total overflows: {a} + {b}")))
        };
        *self = Self {
            energy_full: sum(self.energy_full, other.energy_full)?,
            energy_now: sum(self.energy_now, other.energy_now)?,
            current_now: sum(self.current_now, other.current_now)?,
        };
        Ok(())
    }

    /// Remaining charge in percent, truncated.
    ///
    /// Fails without capacity, or when the figures are too large to scale.
    pub fn percent(&self) -> Result<i64, MonitorError> {
        if self.energy_full <= 0 {
            return Err(MonitorError::Invalid("no battery capacity".to_string()));
        }
        let scaled = self.energy_now.checked_mul(100).ok_or_else(|| {
            MonitorError::Invalid(format!("energy_now {} out of range", self.energy_now))
        })?;
        Ok(scaled / self.energy_full)
    }

    /// Estimated `(hours, minutes)` until empty at the current draw.
    ///
    /// `None` when nothing is being drawn. Some drivers report the draw of
    /// a discharging battery as a negative number; only its magnitude is used.
    pub fn time_remaining(&self) -> Option<(i64, i64)> {
        let draw = self.current_now.checked_abs()?;
        if draw == 0 {
            return None;
        }
        let minutes = (self.energy_now as f64 / draw as f64 * 60.0) as i64;
        Some((minutes / 60, minutes % 60))
    }
}

/// Reads the first of `names` under `dir` that can be read, as an integer.
fn read_first_int(dir: &Path, names: &[&str]) -> i64 {
    names
        .iter()
        .find_map(|name| std::fs::read_to_string(dir.join(name)).ok())
        .and_then(|content| content.trim().parse().ok())
        .unwrap_or(0)
}

/// Combined AC and battery state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStatus {
    pub plugged: bool,
    pub battery: BatteryAggregate,
}

/// Reads and formats power state.
#[derive(Debug, Clone)]
pub struct PowerMetric {
    power_supply: PathBuf,
    plugged_sign: String,
    unplugged_sign: String,
    palette: Palette,
}

impl PowerMetric {
    pub fn new(power_supply: impl Into<PathBuf>, signs: &Signs, palette: Palette) -> Self {
        Self {
            power_supply: power_supply.into(),
            plugged_sign: signs.plugged.clone(),
            unplugged_sign: signs.unplugged.clone(),
            palette,
        }
    }

    /// Returns e.g. `"AC  97"`, `"BAT  50 [2:00]"`, or the error marker.
    pub fn sample(&self) -> Reading {
        match self.read().and_then(|status| self.format(&status)) {
            Ok(text) => Reading::Value(text),
            Err(e) => Reading::failed("power", format!("{}ERR", self.unplugged_sign), &e),
        }
    }

    /// Reads the adapter state and the aggregate over all batteries.
    pub fn read(&self) -> Result<PowerStatus, MonitorError> {
        let ac_path = self.power_supply.join(AC_ONLINE);
        let online =
            std::fs::read_to_string(&ac_path).map_err(|e| MonitorError::read(&ac_path, e))?;

        let entries = std::fs::read_dir(&self.power_supply)
            .map_err(|e| MonitorError::read(&self.power_supply, e))?;

        let mut battery = BatteryAggregate::default();
        for entry in entries.filter_map(|e| e.ok()) {
            if !entry.file_name().to_string_lossy().starts_with(BATTERY_PREFIX) {
                continue;
            }
            let reading = BatteryAggregate::read_battery(&entry.path());
            tracing::trace!("{}: {reading:?}", entry.path().display());
            battery.add(&reading)?;
        }

        Ok(PowerStatus {
            plugged: online.trim() == "1",
            battery,
        })
    }

    /// Formats a status. Fails when no battery reported a capacity.
    pub fn format(&self, status: &PowerStatus) -> Result<String, MonitorError> {
        let percent = status.battery.percent()?;

        let (icon, remaining) = if status.plugged {
            (&self.plugged_sign, String::new())
        } else {
            let remaining = status
                .battery
                .time_remaining()
                .map(|(h, m)| format!(" [{h}:{m:02}]"))
                .unwrap_or_default();
            (&self.unplugged_sign, remaining)
        };

        let text = format!("{icon} {percent:>3}{remaining}");
        Ok(self.palette.paint(Urgency::for_charge(percent), &text))
    }
}
