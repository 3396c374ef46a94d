// crates/flag-enum/src/error.rs
// ============================================================================
// Module: Flag Enum Error Definitions
// Description: Structured diagnostics for flag enumeration operations.
// Purpose: Provide one error taxonomy for introspection, arithmetic, and conversion.
// Dependencies: serde::{Serialize, Deserialize}, thiserror, crate::registry::TypeRef
// ============================================================================

//! ## Overview
//! Centralizes the failures raised by the flag operations. Every failure is
//! returned to the caller at the point of detection; nothing is retried or
//! recovered internally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::registry::TypeRef;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by flag enumeration operations.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FlagError {
    /// An argument expected to reference an enumeration type does not.
    #[error(
        "the given parameter (\"{parameter}\") is not a valid or acceptable data-type; received \
         the type \"{type_name}\""
    )]
    InvalidArgumentType {
        /// Name of the offending type.
        type_name: String,
        /// Name of the parameter that carried it.
        parameter: String,
    },

    /// A required value argument was absent.
    #[error("value cannot be absent (parameter \"{parameter}\")")]
    NullArgument {
        /// Name of the parameter that was absent.
        parameter: String,
    },

    /// No declared member carries exactly the requested value.
    #[error("no member of {type_name} has the exact value {bits}")]
    NotFound {
        /// Enumeration type that was searched.
        type_name: String,
        /// Raw value that had no name.
        bits: i64,
    },

    /// Two entries resolved to the same member name while building a mapping.
    #[error("duplicate member name {name} in {type_name}")]
    DuplicateKey {
        /// Enumeration type the mapping was built for.
        type_name: String,
        /// Name that appeared twice.
        name: String,
    },

    /// An operation needed a first element but the sequence was empty.
    #[error("{operation} requires at least one value, received an empty sequence")]
    EmptySequence {
        /// Operation that read past the end.
        operation: String,
    },
}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl FlagError {
    /// Creates an invalid argument type error for the given type handle.
    #[must_use]
    pub fn invalid_argument_type(ty: TypeRef, parameter: impl Into<String>) -> Self {
        Self::InvalidArgumentType {
            type_name: ty.short_name(),
            parameter: parameter.into(),
        }
    }

    /// Creates a null argument error.
    pub fn null_argument(parameter: impl Into<String>) -> Self {
        Self::NullArgument {
            parameter: parameter.into(),
        }
    }

    /// Creates a lookup-miss error for a raw value.
    pub fn not_found(type_name: impl Into<String>, bits: i64) -> Self {
        Self::NotFound {
            type_name: type_name.into(),
            bits,
        }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateKey {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Creates an empty sequence error for the named operation.
    pub fn empty_sequence(operation: impl Into<String>) -> Self {
        Self::EmptySequence {
            operation: operation.into(),
        }
    }

    /// Returns the parameter name carried by argument errors.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidArgumentType {
                parameter,
                ..
            }
            | Self::NullArgument {
                parameter,
            } => Some(parameter.as_str()),
            Self::NotFound {
                ..
            }
            | Self::DuplicateKey {
                ..
            }
            | Self::EmptySequence {
                ..
            } => None,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for flag operations
pub type FlagResult<T> = Result<T, FlagError>;
