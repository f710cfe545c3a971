#![warn(missing_docs)]
//! Lens specific error structures
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type LensResult<T> = std::result::Result<T, LensError>;

/// Errors that can be returned by the lens calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensError {
    /// a division by zero caused by degenerate geometry (e.g. an afocal lens or an object placed in the focal plane)
    NumericDivergence(String),
    /// errors in connection with the command line interface
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for LensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumericDivergence(m) => {
                write!(f, "NumericDivergence:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Lens Error:Other:{m}"),
        }
    }
}
impl Error for LensError {}

impl std::convert::From<String> for LensError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
