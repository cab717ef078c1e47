//! Diagnostics routing for the shader bridge
//!
//! Every compile, translator build and teardown, and every protocol breach is reported
//! as a `LogEntry` handed to the installed `Logger` (see `Bridge::set_logger`). Failed
//! translations land at `Debug` with the translator's info log as message; errors carry
//! the file and line that raised them.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Receiver for shader bridge diagnostics
///
/// Hosts implement it to forward entries to their own console or debug channel.
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_shader_bridge::galaxy3d::log::{Logger, LogEntry, LogSeverity};
///
/// /// Keeps translator output, drops lifecycle chatter
/// struct CompileLogOnly;
///
/// impl Logger for CompileLogOnly {
///     fn log(&self, entry: &LogEntry) {
///         if entry.source == "galaxy3d::Shader" && entry.severity >= LogSeverity::Debug {
///             eprintln!("{}", entry.message);
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry. Called with the logger lock held for reading.
    fn log(&self, entry: &LogEntry);
}

/// One diagnostic emitted by the bridge
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    /// Wall-clock time the entry was emitted
    pub timestamp: SystemTime,

    /// Emitting component: "galaxy3d::Shader", "galaxy3d::Compiler" or
    /// "galaxy3d::ShaderManager"
    pub source: String,

    /// Formatted text; for a failed compile this is the translator info log
    pub message: String,

    /// Rust file that raised the error (`bridge_error!` family only)
    pub file: Option<&'static str>,

    /// Line in `file`
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose output, off in most hosts
    Trace,

    /// Shader lifecycle events and failed compile logs
    Debug,

    /// Translator engine start and shutdown
    Info,

    Warn,

    /// Contract breaches, always with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width tag printed by `DefaultLogger`
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger installed until the host provides its own
///
/// Prints `[timestamp] [SEVERITY] [source] message`, followed by ` (file:line)` when
/// the entry carries a location. Multi-line translator logs are printed as-is.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let label = entry.severity.label();

        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        println!(
            "[{}] [{}] [{}] {}{}",
            datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
            severity,
            entry.source.bright_blue(),
            entry.message,
            location
        );
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! bridge_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Bridge::log(
            $crate::galaxy3d::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at TRACE
#[macro_export]
macro_rules! bridge_trace {
    ($source:expr, $($arg:tt)*) => { $crate::bridge_log!(Trace, $source, $($arg)*) };
}

/// Log at DEBUG
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_shader_bridge::bridge_debug;
///
/// let info_log = "ERROR: 0:3: 'vec5' : no matching overloaded function found";
/// bridge_debug!("galaxy3d::Shader", "Compile failed:\n{}", info_log);
/// ```
#[macro_export]
macro_rules! bridge_debug {
    ($source:expr, $($arg:tt)*) => { $crate::bridge_log!(Debug, $source, $($arg)*) };
}

/// Log at INFO
#[macro_export]
macro_rules! bridge_info {
    ($source:expr, $($arg:tt)*) => { $crate::bridge_log!(Info, $source, $($arg)*) };
}

/// Log at WARN
#[macro_export]
macro_rules! bridge_warn {
    ($source:expr, $($arg:tt)*) => { $crate::bridge_log!(Warn, $source, $($arg)*) };
}

/// Log at ERROR, tagged with the caller's file:line
#[macro_export]
macro_rules! bridge_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Bridge::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log at ERROR and build the `Galaxy3dError` variant named by `$kind`
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_shader_bridge::bridge_err;
/// use galaxy_3d_shader_bridge::galaxy3d::Galaxy3dError;
///
/// let name = "u_color";
/// let err = bridge_err!(LifecycleMisuse, "galaxy3d::Shader", "Unknown uniform '{}'", name);
/// assert!(matches!(err, Galaxy3dError::LifecycleMisuse(_)));
/// ```
#[macro_export]
macro_rules! bridge_err {
    ($kind:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Bridge::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Galaxy3dError::$kind(message)
    }};
}

/// `return Err(bridge_err!(...))`
#[macro_export]
macro_rules! bridge_bail {
    ($kind:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::bridge_err!($kind, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
