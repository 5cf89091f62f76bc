// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A flat `KEY=VALUE` table, as found in sysfs `uevent` files.

use std::collections::HashMap;
use std::path::Path;

/// Key/value pairs parsed from a `KEY=VALUE` text file.
///
/// Built fresh for each read and dropped as soon as the needed fields are
/// extracted. Lines without exactly one `=` are ignored; a repeated key
/// keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    values: HashMap<String, String>,
}

impl ValueStore {
    /// Parses the file at `path`.
    ///
    /// A file that cannot be read yields an empty store: a missing
    /// `uevent` means "no data", not an error.
    pub fn parse(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_str(&content),
            Err(e) => {
                tracing::trace!("no values from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parses `KEY=VALUE` lines from a string.
    pub fn parse_str(content: &str) -> Self {
        let values = content
            .lines()
            .filter_map(|line| {
                let mut parts = line.split('=');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(key), Some(value), None) => Some((key.to_string(), value.to_string())),
                    _ => None,
                }
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the integer value of the first key in `candidates` that is
    /// present, or 0 when none is present or its value is not an integer.
    pub fn search_int(&self, candidates: &[&str]) -> i64 {
        candidates
            .iter()
            .find_map(|key| self.get(key))
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
