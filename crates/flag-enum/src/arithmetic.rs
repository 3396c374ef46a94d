// crates/flag-enum/src/arithmetic.rs
// ============================================================================
// Module: Flag Arithmetic
// Description: Bitwise add, remove, and collapse over flag values.
// Purpose: Produce new flag values; inputs are never mutated.
// Dependencies: crate::{error, introspection, membership, traits}, tracing
// ============================================================================

//! ## Overview
//! All arithmetic works on the `i64` representation and rebuilds a value of
//! the same type through [`FlagEnum::from_bits`]. Operations that need a first
//! element report [`FlagError::EmptySequence`] instead of reading past the end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::FlagError;
use crate::error::FlagResult;
use crate::introspection::instance_values;
use crate::membership::has_any;
use crate::traits::FlagEnum;

// ============================================================================
// SECTION: Add
// ============================================================================

/// ORs `values` into `base`, starting from the first value when `base` is absent
///
/// Flags already present are a no-op.
///
/// # Errors
/// Returns [`FlagError::EmptySequence`] when `base` is absent and `values` is empty.
pub fn add<E: FlagEnum>(base: Option<E>, values: &[E]) -> FlagResult<E> {
    let start = match base {
        Some(base) => base,
        None => *values.first().ok_or_else(|| FlagError::empty_sequence("add"))?,
    };
    Ok(union(start, values))
}

/// ORs `values` into `base`
#[must_use]
pub fn union<E: FlagEnum>(base: E, values: &[E]) -> E {
    let bits = values.iter().fold(base.bits(), |acc, value| acc | value.bits());
    E::from_bits(bits)
}

/// OR-reduces a sequence of values into one
///
/// # Errors
/// Returns [`FlagError::EmptySequence`] when `values` is empty.
pub fn collapse<E: FlagEnum>(values: &[E]) -> FlagResult<E> {
    let first = values.first().ok_or_else(|| FlagError::empty_sequence("collapse"))?;
    Ok(union(*first, values))
}

// ============================================================================
// SECTION: Remove
// ============================================================================

/// Removes every instance member of `value` that matches any of `values`
///
/// Returns `None` when `values` is at least as long as the instance member
/// list of `value`, or when no member survives the filter. Bits of `value`
/// that no declared member covers do not survive either.
#[must_use]
pub fn remove<E: FlagEnum>(value: E, values: &[E]) -> Option<E> {
    let members = instance_values(value);
    if values.len() >= members.len() {
        tracing::trace!(
            type_name = E::TYPE_NAME,
            removing = values.len(),
            members = members.len(),
            "remove: removal covers every instance member"
        );
        return None;
    }

    let kept: Vec<E> = members.into_iter().filter(|member| !has_any(*member, values)).collect();
    tracing::trace!(type_name = E::TYPE_NAME, kept = kept.len(), "remove: filtered instance members");
    collapse(&kept).ok()
}

/// Removes every instance member of `value`
///
/// The zero value is returned unchanged; any other value yields `None`.
#[must_use]
pub fn remove_all<E: FlagEnum>(value: E) -> Option<E> {
    if value.is_zero() {
        return Some(value);
    }
    remove(value, &instance_values(value))
}
