//! Error types for plife.
//!
//! This module provides error types for simulation configuration, running
//! an unconfigured engine, and rule-matrix export.

use std::fmt;

/// Errors that can occur while configuring a simulation.
#[derive(Debug)]
pub enum ConfigError {
    /// No particle groups were supplied.
    NoGroups,
    /// A group was declared with a particle count of zero.
    EmptyGroup(String),
    /// A supplied rule matrix does not match the number of groups.
    MatrixDimension { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoGroups => {
                write!(f, "No particle groups configured. Use .with_group() to add at least one.")
            }
            ConfigError::EmptyGroup(name) => {
                write!(f, "Group \"{}\" has a particle count of zero", name)
            }
            ConfigError::MatrixDimension { expected, actual } => write!(
                f,
                "Rule matrix is {}x{} but the simulation has {} groups",
                actual, actual, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when driving a simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// The engine has been cleared (or never set up); there is nothing to advance.
    NotConfigured,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NotConfigured => {
                write!(f, "Simulation is not configured. Set up groups and rules before advancing.")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors that can occur during rule-matrix export.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to write the output file.
    Io(std::io::Error),
    /// Failed to encode the matrix image.
    Image(image::ImageError),
    /// Failed to serialize the matrix as JSON.
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "Failed to write rule matrix: {}", e),
            ExportError::Image(e) => write!(f, "Failed to encode rule matrix image: {}", e),
            ExportError::Json(e) => write!(f, "Failed to serialize rule matrix: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Image(e) => Some(e),
            ExportError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}
