// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Destinations for the composed status line.

use crate::BarError;
use std::process::Stdio;

/// Somewhere a status line can be published.
///
/// Publishing is best effort: implementations log failures and return.
#[allow(async_fn_in_trait)]
pub trait TitleSink {
    async fn publish(&mut self, line: &str);
}

/// Runs an external command with the line as its last argument,
/// `xsetroot -name <line>` by default.
#[derive(Debug, Clone)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
    warned: bool,
}

impl CommandSink {
    /// Builds a sink from `[program, args...]`.
    pub fn new(command: &[String]) -> Result<Self, BarError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| BarError::InvalidCommand("title command is empty".to_string()))?;
        if program.trim().is_empty() {
            return Err(BarError::InvalidCommand("title program is blank".to_string()));
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            warned: false,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Logs a failure once at `warn`, then at `debug` so a missing
    /// program does not flood the log every second.
    fn report(&mut self, detail: String) {
        if self.warned {
            tracing::debug!("{}: {detail}", self.program);
        } else {
            tracing::warn!("{}: {detail}", self.program);
            self.warned = true;
        }
    }
}

impl TitleSink for CommandSink {
    async fn publish(&mut self, line: &str) {
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(s) if s.success() => {}
            Ok(s) => self.report(format!("exited with {s}")),
            Err(e) => self.report(format!("cannot run: {e}")),
        }
    }
}

/// Prints each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TitleSink for StdoutSink {
    async fn publish(&mut self, line: &str) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(CommandSink::new(&[]), Err(BarError::InvalidCommand(_))));
        assert!(matches!(
            CommandSink::new(&["  ".to_string()]),
            Err(BarError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_split_program_and_args() {
        let sink = CommandSink::new(&["xsetroot".to_string(), "-name".to_string()]).unwrap();
        assert_eq!(sink.program(), "xsetroot");
        assert_eq!(sink.args, vec!["-name"]);
    }

    #[tokio::test]
    async fn test_missing_program_is_not_fatal() {
        let mut sink = CommandSink::new(&["/nonexistent/xsetroot".to_string()]).unwrap();
        sink.publish("line").await;
        sink.publish("line").await;
        assert!(sink.warned);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_command() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("title");
        let script = format!("printf '%s' \"$1\" > {}", out.display());
        let mut sink = CommandSink::new(&[
            "sh".to_string(),
            "-c".to_string(),
            script,
            "sh".to_string(),
        ])
        .unwrap();
        sink.publish("host | CPU 12").await;
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "host | CPU 12");
        assert!(!sink.warned);
    }
}
