// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Host name, from a single-line file such as `/etc/hostname`.

use std::path::Path;

/// Returns the trimmed content of `path`, or an empty string when it
/// cannot be read.
pub fn read_hostname(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content.trim().to_string(),
        Err(e) => {
            tracing::debug!("hostname unavailable from {}: {e}", path.display());
            String::new()
        }
    }
}
