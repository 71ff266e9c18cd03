//! # Validation Module
//!
//! Input validation for caller-supplied strings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                 │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any mutation runs)                        │
//! │  ├── The workflow never assumes an interactive prompt exists:          │
//! │  │   headless callers pass the reason as a parameter and get the       │
//! │  │   same typed errors                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote persistence service                                   │
//! │  └── Server-side schema validation                                     │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Maximum length of a rejection reason.
pub const MAX_REASON_LENGTH: usize = 500;

/// Maximum length of a branch or category name.
pub const MAX_NAME_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a rejection reason.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 500 characters
///
/// ## Example
/// ```rust
/// use stockit_core::validation::validate_rejection_reason;
///
/// assert!(validate_rejection_reason("Damaged goods").is_ok());
/// assert!(validate_rejection_reason("").is_err());
/// assert!(validate_rejection_reason("   ").is_err());
/// ```
pub fn validate_rejection_reason(reason: &str) -> ValidationResult<()> {
    let reason = reason.trim();

    if reason.is_empty() {
        return Err(ValidationError::Required {
            field: "reason".to_string(),
        });
    }

    if reason.chars().count() > MAX_REASON_LENGTH {
        return Err(ValidationError::TooLong {
            field: "reason".to_string(),
            max: MAX_REASON_LENGTH,
        });
    }

    Ok(())
}

/// Validates a branch name.
pub fn validate_branch_name(name: &str) -> ValidationResult<()> {
    validate_display_name("name", name)
}

/// Validates a category name.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_display_name("name", name)
}

fn validate_display_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
