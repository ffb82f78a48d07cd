//! Error types for Worldspace
//!
//! This module defines the error types used throughout the crate,
//! including spatial partition operations, configuration and the
//! World registry.

use std::fmt;
use glam::Vec3;
use crate::entity::EntityGuid;

/// Result type for Worldspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Worldspace errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Entity position lies outside the root bounds of the partition
    OutOfBounds {
        /// Identity of the rejected entity
        guid: EntityGuid,
        /// Position at the time of the insert
        position: Vec3,
    },

    /// Entity is not held by the leaf its position maps to
    EntityNotFound(EntityGuid),

    /// Entity identity already present in the target leaf
    DuplicateEntity(EntityGuid),

    /// Invalid partition configuration (thresholds, bounds)
    InvalidConfig(String),

    /// World not initialized, or a registry entry already exists
    InitializationFailed(String),

    /// No partition registered under the given name
    PartitionNotFound(String),

    /// A registry or partition lock was poisoned by a panicking thread
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { guid, position } => {
                write!(f, "Entity {} at {} is outside partition bounds", guid, position)
            }
            Error::EntityNotFound(guid) => write!(f, "Entity not found: {}", guid),
            Error::DuplicateEntity(guid) => write!(f, "Duplicate entity: {}", guid),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::PartitionNotFound(name) => write!(f, "Partition not found: {}", name),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error with file:line information and evaluate to it
///
/// # Example
///
/// ```ignore
/// let err = world_err!("worldspace::World", Error::PartitionNotFound(name.to_string()));
/// ```
#[macro_export]
macro_rules! world_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::worldspace::Error = $err;
        $crate::world_error!($source, "{}", err);
        err
    }};
}

/// Log an error and return it from the current function
///
/// # Example
///
/// ```ignore
/// world_bail!("worldspace::World", Error::InitializationFailed("...".to_string()));
/// ```
#[macro_export]
macro_rules! world_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::world_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
