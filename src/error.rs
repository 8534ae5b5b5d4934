use std::fmt;

/// Error types for the GPS display crate.
///
/// The decoder core itself never fails — malformed sentences simply stay
/// incomplete — so these cover the host-side surfaces: file I/O, option
/// parsing and export.
#[derive(Debug)]
pub enum GpsError {
    /// I/O errors
    Io(std::io::Error),
    /// Parse errors with context
    Parse(String),
    /// Export format error
    Export(String),
    /// Unrecognized sentence dialect name
    UnknownDialect(String),
    /// Unrecognized display mode name
    UnknownDisplayMode(String),
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::Io(err) => write!(f, "I/O error: {}", err),
            GpsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            GpsError::Export(msg) => write!(f, "Export error: {}", msg),
            GpsError::UnknownDialect(name) => write!(f, "Unknown dialect: {}", name),
            GpsError::UnknownDisplayMode(name) => write!(f, "Unknown display mode: {}", name),
        }
    }
}

impl std::error::Error for GpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GpsError {
    fn from(err: std::io::Error) -> Self {
        GpsError::Io(err)
    }
}

impl From<anyhow::Error> for GpsError {
    fn from(err: anyhow::Error) -> Self {
        GpsError::Parse(err.to_string())
    }
}
