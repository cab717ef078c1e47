//! Error types for the Galaxy3D shader bridge
//!
//! Translation failures and unsupported language versions are NOT errors: they are
//! ordinary compile outcomes reported through `CompileStatus` and the shader info log.
//! The variants below cover everything that is a contract breach or a missing service.

use std::fmt;

/// Result type for shader bridge operations
pub type Galaxy3dResult<T> = std::result::Result<T, Galaxy3dError>;

/// Shader bridge errors
#[derive(Debug, Clone)]
pub enum Galaxy3dError {
    /// The translation engine or a per-stage translator could not be created
    InitializationFailed(String),

    /// Unknown or stale shader handle
    InvalidResource(String),

    /// The translator reported data that contradicts its own contract
    /// (e.g. an active uniform without an assigned register)
    InternalConsistency(String),

    /// Caller broke the shader object protocol (release at zero references,
    /// register lookup of a name that is not active, ...)
    LifecycleMisuse(String),
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Galaxy3dError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Galaxy3dError::InternalConsistency(msg) => write!(f, "Internal consistency error: {}", msg),
            Galaxy3dError::LifecycleMisuse(msg) => write!(f, "Lifecycle misuse: {}", msg),
        }
    }
}

impl std::error::Error for Galaxy3dError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
