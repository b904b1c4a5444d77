// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::expand_path;

/// Installs the global subscriber writing to `log_file`, filtered by `RUST_LOG`.
///
/// The terminal belongs to the TUI, so without a log file nothing is installed
/// and every event is dropped.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(log_file) = log_file else {
        return Ok(());
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let path = expand_path(log_file)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create log dir {}: {e}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init_tracing(None).is_ok());
    }

    #[test]
    fn creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs/nested/agenda.log");

        init_tracing(Some(&path)).unwrap();
        assert!(path.exists());
    }
}
