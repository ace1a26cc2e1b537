//! Crate-level error types.

use std::fmt;

/// Errors produced by the tessera crate.
///
/// The effect engine itself has no fatal paths - invalid enum inputs and
/// missing capabilities degrade to documented fallbacks. Errors only
/// surface from the configuration layer.
#[derive(Debug)]
pub enum TesseraError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TesseraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TesseraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for TesseraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
