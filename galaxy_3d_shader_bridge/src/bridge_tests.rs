//! Unit tests for the Bridge logging façade and the bridge_* macros
//!
//! IMPORTANT: LOGGER is a global shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::galaxy3d::{Bridge, Galaxy3dError, Galaxy3dResult};
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

/// Source tag used by every entry these tests emit
const TEST_SOURCE: &str = "test::bridge";

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Non-serial unit tests in this binary log shader events concurrently
        if entry.source == TEST_SOURCE {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// LOGGER REPLACEMENT
// ============================================================================

#[test]
#[serial]
fn test_set_logger_routes_entries() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);

    Bridge::log(LogSeverity::Info, TEST_SOURCE, "translators constructed".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, TEST_SOURCE);
        assert!(captured[0].file.is_none());
    }

    Bridge::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);
    Bridge::reset_logger();

    Bridge::log(LogSeverity::Warn, TEST_SOURCE, "after reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_log_detailed_keeps_location() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);

    Bridge::log_detailed(LogSeverity::Error, TEST_SOURCE, "boom".to_string(), "shader_record.rs", 12);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured[0].file, Some("shader_record.rs"));
        assert_eq!(captured[0].line, Some(12));
    }

    Bridge::reset_logger();
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_bridge_err_logs_and_builds_variant() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);

    let err = crate::bridge_err!(LifecycleMisuse, TEST_SOURCE, "Unknown uniform '{}'", "u_color");

    assert!(matches!(err, Galaxy3dError::LifecycleMisuse(ref msg) if msg == "Unknown uniform 'u_color'"));
    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].line.is_some());
    }

    Bridge::reset_logger();
}

#[test]
#[serial]
fn test_bridge_bail_returns_early() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);

    fn failing(flag: bool) -> Galaxy3dResult<u32> {
        if flag {
            crate::bridge_bail!(InternalConsistency, TEST_SOURCE, "flag was {}", flag);
        }
        Ok(1)
    }

    assert!(matches!(failing(true), Err(Galaxy3dError::InternalConsistency(_))));
    assert_eq!(failing(false).unwrap(), 1);
    assert_eq!(entries.lock().unwrap().len(), 1);

    Bridge::reset_logger();
}

#[test]
#[serial]
fn test_severity_macros() {
    let (logger, entries) = CaptureLogger::new();
    Bridge::set_logger(logger);

    crate::bridge_trace!(TEST_SOURCE, "trace {}", 1);
    crate::bridge_debug!(TEST_SOURCE, "debug {}", 2);
    crate::bridge_info!(TEST_SOURCE, "info {}", 3);
    crate::bridge_warn!(TEST_SOURCE, "warn {}", 4);
    crate::bridge_error!(TEST_SOURCE, "error {}", 5);

    {
        let captured = entries.lock().unwrap();
        let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
        assert_eq!(severities, vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]);
        assert_eq!(captured[4].message, "error 5");
    }

    Bridge::reset_logger();
}
