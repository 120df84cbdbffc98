//! Error types for the MathForGames engine
//!
//! This module defines the error types used throughout the engine,
//! including initialization, scene-graph bookkeeping, and the render surface.

use std::fmt;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Initialization failed (engine, surface, scene selection)
    InitializationFailed(String),

    /// Actor key is unknown to the scene, or the actor is in the wrong state
    InvalidActor(String),

    /// Scene index or name is unknown, or a scene name is already taken
    InvalidScene(String),

    /// Parent/child link would break the scene tree (cycle, second parent)
    InvalidHierarchy(String),

    /// External resource (texture, asset path) could not be used
    ResourceError(String),

    /// Render surface reported a failure
    SurfaceError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidActor(msg) => write!(f, "Invalid actor: {}", msg),
            Error::InvalidScene(msg) => write!(f, "Invalid scene: {}", msg),
            Error::InvalidHierarchy(msg) => write!(f, "Invalid hierarchy: {}", msg),
            Error::ResourceError(msg) => write!(f, "Resource error: {}", msg),
            Error::SurfaceError(msg) => write!(f, "Surface error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error` value in one step
///
/// The first argument is the log source, the second the `Error` variant,
/// the rest a format string.
///
/// # Example
///
/// ```ignore
/// let actor = scene.actor(key)
///     .ok_or_else(|| engine_err!("mfg::Scene", InvalidActor, "Unknown actor {:?}", key))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::Error::$variant(message)
    }};
}

/// Log an ERROR and return early with the matching `Error`
///
/// # Example
///
/// ```ignore
/// if parent == child {
///     engine_bail!("mfg::Scene", InvalidHierarchy, "An actor cannot be its own child");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
