//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::entity::EntityGuid;
use crate::error::{Error, Result};
use glam::Vec3;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_out_of_bounds_display() {
    let err = Error::OutOfBounds {
        guid: EntityGuid(7),
        position: Vec3::new(-1.0, 2.0, 0.0),
    };
    let display = format!("{}", err);
    assert!(display.contains("outside partition bounds"));
    assert!(display.contains("#7"));
}

#[test]
fn test_entity_not_found_display() {
    let err = Error::EntityNotFound(EntityGuid(42));
    assert_eq!(format!("{}", err), "Entity not found: #42");
}

#[test]
fn test_duplicate_entity_display() {
    let err = Error::DuplicateEntity(EntityGuid(3));
    assert_eq!(format!("{}", err), "Duplicate entity: #3");
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("balance_threshold must be lower".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("balance_threshold must be lower"));
}

#[test]
fn test_registry_errors_display() {
    let err = Error::PartitionNotFound("overworld".to_string());
    assert_eq!(format!("{}", err), "Partition not found: overworld");

    let err = Error::InitializationFailed("World not initialized".to_string());
    assert!(format!("{}", err).contains("Initialization failed"));

    let err = Error::LockPoisoned("registry".to_string());
    assert_eq!(format!("{}", err), "Lock poisoned: registry");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::EntityNotFound(EntityGuid(1));
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::DuplicateEntity(EntityGuid(9));
    let debug = format!("{:?}", err);
    assert!(debug.contains("DuplicateEntity"));
}

#[test]
fn test_error_clone_eq() {
    let err = Error::OutOfBounds {
        guid: EntityGuid(5),
        position: Vec3::ZERO,
    };
    assert_eq!(err.clone(), err);
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidConfig("zero".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert!(matches!(outer(), Err(Error::InvalidConfig(_))));
}
