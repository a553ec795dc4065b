//! Debug logging behind `LOOM_TUI_DEBUG`.
//!
//! The terminal belongs to the host application, so debug output goes to a
//! file sink, never stdout/stderr. Disabled entirely unless the env flag is
//! set.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::config::EnvConfig;

const DEFAULT_LOG_PATH: &str = "loom_tui-debug.log";

/// Append-only debug sink.
#[derive(Debug, Default)]
pub struct DebugLog {
    file: Option<Mutex<File>>,
}

impl DebugLog {
    fn from_env() -> Self {
        let config = EnvConfig::from_env();
        if !config.debug {
            return Self::default();
        }
        let path = config.write_log.unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
        Self::to_file(&path)
    }

    /// Sink appending to `path`; disabled when the file cannot be opened.
    pub fn to_file(path: &str) -> Self {
        let file = OpenOptions::new().create(true).append(true).open(path).ok();
        Self {
            file: file.map(Mutex::new),
        }
    }

    pub fn enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn write_line(&self, args: fmt::Arguments<'_>) {
        let Some(file) = self.file.as_ref() else {
            return;
        };
        let mut file = match file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Sink failure must not disturb the host; drop the line.
        let _ = writeln!(file, "{args}");
    }
}

static DEBUG_LOG: Lazy<DebugLog> = Lazy::new(DebugLog::from_env);

pub fn debug_enabled() -> bool {
    DEBUG_LOG.enabled()
}

pub fn debug_line(args: fmt::Arguments<'_>) {
    DEBUG_LOG.write_line(args);
}

/// Format-and-log when debug logging is enabled; free otherwise.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::debug_line(format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::DebugLog;
    use std::fs;

    #[test]
    fn default_sink_is_disabled() {
        let log = DebugLog::default();
        assert!(!log.enabled());
        log.write_line(format_args!("dropped"));
    }

    #[test]
    fn file_sink_appends_lines() {
        let path = std::env::temp_dir().join("loom_tui-logging-test.log");
        let path_str = path.to_str().expect("utf-8 temp path");
        let _ = fs::remove_file(&path);

        let log = DebugLog::to_file(path_str);
        assert!(log.enabled());
        log.write_line(format_args!("first {}", 1));
        log.write_line(format_args!("second"));

        let contents = fs::read_to_string(&path).expect("log file readable");
        assert_eq!(contents, "first 1\nsecond\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unopenable_path_disables_the_sink() {
        let log = DebugLog::to_file("/nonexistent-dir/loom.log");
        assert!(!log.enabled());
    }
}
