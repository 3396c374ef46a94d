// crates/flag-enum/src/introspection.rs
// ============================================================================
// Module: Flag Introspection
// Description: Base and instance member views plus name/value mappings.
// Purpose: Enumerate what a type declares versus what a value has set.
// Dependencies: crate::{error, traits}, std::collections::BTreeMap
// ============================================================================

//! ## Overview
//! "Base" views cover every member the type declares. "Instance" views cover
//! the members whose bits are all set in one value. A zero-valued member is
//! part of every instance view since it has no bits to miss.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::FlagError;
use crate::error::FlagResult;
use crate::traits::FlagEnum;
use crate::traits::Member;

// ============================================================================
// SECTION: Type Aliases
// ============================================================================

/// Name to value mapping built from a member view
pub type NamePairs<E> = BTreeMap<&'static str, E>;

// ============================================================================
// SECTION: Base Views
// ============================================================================

/// Returns every declared member in declaration order
#[must_use]
pub fn base_members<E: FlagEnum>() -> Vec<Member<E>> {
    E::MEMBERS.to_vec()
}

/// Returns every declared member name in declaration order
#[must_use]
pub fn base_names<E: FlagEnum>() -> Vec<&'static str> {
    E::MEMBERS.iter().map(|(name, _)| *name).collect()
}

/// Returns every declared member value in declaration order
#[must_use]
pub fn base_values<E: FlagEnum>() -> Vec<E> {
    E::MEMBERS.iter().map(|(_, value)| *value).collect()
}

/// Returns the name to value mapping of every declared member
///
/// # Errors
/// Returns [`FlagError::DuplicateKey`] when two members share a value, since
/// both resolve to the first declared name.
pub fn base_pairs<E: FlagEnum>() -> FlagResult<NamePairs<E>> {
    to_pairs(&base_values::<E>())
}

// ============================================================================
// SECTION: Instance Views
// ============================================================================

/// Returns the declared members whose bits are all set in `value`
#[must_use]
pub fn instance_members<E: FlagEnum>(value: E) -> Vec<Member<E>> {
    E::MEMBERS.iter().copied().filter(|(_, member)| value.has_flag(*member)).collect()
}

/// Returns the member values set in `value`
#[must_use]
pub fn instance_values<E: FlagEnum>(value: E) -> Vec<E> {
    instance_members(value).into_iter().map(|(_, member)| member).collect()
}

/// Returns the names of the members set in `value`
///
/// Each name is the canonical name of the member's value, so aliased members
/// repeat the first declared name.
#[must_use]
pub fn instance_names<E: FlagEnum>(value: E) -> Vec<&'static str> {
    instance_values(value).into_iter().filter_map(canonical_name).collect()
}

/// Returns the name to value mapping of the members set in `value`
///
/// # Errors
/// Returns [`FlagError::DuplicateKey`] when two set members share a value.
pub fn instance_pairs<E: FlagEnum>(value: E) -> FlagResult<NamePairs<E>> {
    to_pairs(&instance_values(value))
}

// ============================================================================
// SECTION: Name Resolution
// ============================================================================

/// Returns the name of the member declared with exactly `value`
///
/// Combinations without a dedicated member have no name.
///
/// # Errors
/// Returns [`FlagError::NotFound`] when no member has exactly this value.
pub fn name_of<E: FlagEnum>(value: E) -> FlagResult<&'static str> {
    canonical_name(value).ok_or_else(|| FlagError::not_found(E::TYPE_NAME, value.bits()))
}

/// Builds a name to value mapping, keying each value by [`name_of`]
///
/// # Errors
/// Returns [`FlagError::NotFound`] for a value without an exact member and
/// [`FlagError::DuplicateKey`] when two values resolve to the same name.
pub fn to_pairs<E: FlagEnum>(values: &[E]) -> FlagResult<NamePairs<E>> {
    let mut pairs = NamePairs::new();
    for value in values {
        let name = name_of(*value)?;
        match pairs.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(*value);
            }
            Entry::Occupied(_) => return Err(FlagError::duplicate_key(E::TYPE_NAME, name)),
        }
    }
    Ok(pairs)
}

/// Resolves member names against the members currently set on `value`
///
/// Names that are declared on the type but not set on `value` cannot be
/// resolved, and unresolved names are dropped.
///
/// # Errors
/// Propagates failures from [`instance_pairs`].
pub fn to_enum_values<E: FlagEnum, S: AsRef<str>>(value: E, names: &[S]) -> FlagResult<Vec<E>> {
    let pairs = instance_pairs(value)?;
    Ok(names.iter().filter_map(|name| pairs.get(name.as_ref()).copied()).collect())
}

/// First declared name whose value equals `value` exactly
fn canonical_name<E: FlagEnum>(value: E) -> Option<&'static str> {
    E::MEMBERS.iter().find(|(_, member)| *member == value).map(|(name, _)| *name)
}
