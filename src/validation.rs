//! Input validation for unloading problems.
//!
//! The optimizer trusts its input. These checks are an optional
//! pre-flight for callers that want to reject bad data up front:
//! - Duplicate train IDs
//! - Negative arrival times
//! - Non-positive unloading durations
//! - Departure times that overflow `i64`
//!
//! All issues are collected; nothing is deduplicated or repaired.

use crate::models::Interval;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending train ID.
    pub train_id: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two trains share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeStart,
    /// Unloading takes no time or negative time.
    NonPositiveDuration,
    /// `start + duration` does not fit in an `i64`.
    EndOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, train_id: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            train_id,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a set of unloading requests.
///
/// Checks:
/// 1. No duplicate train IDs
/// 2. Every arrival time is non-negative
/// 3. Every duration is positive
/// 4. Every departure time is representable
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_intervals(intervals: &[Interval]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for iv in intervals {
        if !seen.insert(iv.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                iv.id,
                format!("Duplicate train ID: {}", iv.id),
            ));
        }

        if iv.start < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeStart,
                iv.id,
                format!("Train {} arrives at negative time {}", iv.id, iv.start),
            ));
        }

        if iv.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                iv.id,
                format!("Train {} has non-positive duration {}", iv.id, iv.duration),
            ));
        }

        if iv.start.checked_add(iv.duration).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EndOverflow,
                iv.id,
                format!("Train {} departure time overflows", iv.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
