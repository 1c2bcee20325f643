//! Generation errors

use std::fmt;

/// Reasons why a maze could not be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Width or height leaves no room for a border and an interior cell
    InvalidDimensions { width: usize, height: usize },
    /// Generator configuration is unusable
    InvalidConfig(&'static str),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "maze of {}x{} is too small, both dimensions must be at least 3",
                width, height
            ),
            Self::InvalidConfig(reason) => write!(f, "invalid generator configuration: {}", reason),
        }
    }
}

impl std::error::Error for GenerationError {}
