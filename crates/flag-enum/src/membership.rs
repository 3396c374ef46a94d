// crates/flag-enum/src/membership.rs
// ============================================================================
// Module: Membership Queries
// Description: All/any flag tests against a value or against the whole type.
// Purpose: Answer "is this flag set" questions by value or by member name.
// Dependencies: crate::{arithmetic, error, introspection, traits}
// ============================================================================

//! ## Overview
//! `has_*` queries test a value's current flags. `contains_*` queries test the
//! collapse of every declared member instead, so any candidate drawn from the
//! same type passes them regardless of the value it is asked about.
//!
//! The name-keyed queries resolve names through the value's *instance*
//! mapping. A name that is declared on the type but not set on the value
//! never resolves: it counts as a missing candidate for `has_all_named` and
//! contributes nothing to `has_any_named`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::arithmetic::collapse;
use crate::error::FlagResult;
use crate::introspection::base_values;
use crate::introspection::to_enum_values;
use crate::traits::FlagEnum;

// ============================================================================
// SECTION: Value-Keyed Queries
// ============================================================================

/// Returns true when every candidate's bits are set in `value`
///
/// An empty candidate list is vacuously satisfied.
#[must_use]
pub fn has_all<E: FlagEnum>(value: E, candidates: &[E]) -> bool {
    candidates.iter().all(|candidate| value.has_flag(*candidate))
}

/// Returns true when at least one candidate's bits are set in `value`
#[must_use]
pub fn has_any<E: FlagEnum>(value: E, candidates: &[E]) -> bool {
    candidates.iter().any(|candidate| value.has_flag(*candidate))
}

// ============================================================================
// SECTION: Name-Keyed Queries
// ============================================================================

/// Name-keyed form of [`has_all`]
///
/// # Errors
/// Propagates failures from building the instance mapping of `value`.
pub fn has_all_named<E: FlagEnum, S: AsRef<str>>(value: E, names: &[S]) -> FlagResult<bool> {
    let resolved = to_enum_values(value, names)?;
    if resolved.len() < names.len() {
        return Ok(false);
    }
    Ok(has_all(value, &resolved))
}

/// Name-keyed form of [`has_any`]
///
/// # Errors
/// Propagates failures from building the instance mapping of `value`.
pub fn has_any_named<E: FlagEnum, S: AsRef<str>>(value: E, names: &[S]) -> FlagResult<bool> {
    let resolved = to_enum_values(value, names)?;
    Ok(has_any(value, &resolved))
}

// ============================================================================
// SECTION: Type-Wide Queries
// ============================================================================

/// Tests `candidates` with [`has_all`] against every declared member ORed together
///
/// `value` only selects the type; its own flags are not consulted.
///
/// # Errors
/// Returns [`FlagError::EmptySequence`](crate::FlagError::EmptySequence) when
/// the type declares no members.
pub fn contains_all<E: FlagEnum>(_value: E, candidates: &[E]) -> FlagResult<bool> {
    let full = collapse(&base_values::<E>())?;
    Ok(has_all(full, candidates))
}

/// Tests `candidates` with [`has_any`] against every declared member ORed together
///
/// `value` only selects the type; its own flags are not consulted.
///
/// # Errors
/// Returns [`FlagError::EmptySequence`](crate::FlagError::EmptySequence) when
/// the type declares no members.
pub fn contains_any<E: FlagEnum>(_value: E, candidates: &[E]) -> FlagResult<bool> {
    let full = collapse(&base_values::<E>())?;
    Ok(has_any(full, candidates))
}
