// crates/flag-enum/src/convert.rs
// ============================================================================
// Module: Cross-Enum Conversion
// Description: Maps a value of one flag enumeration onto another by member name.
// Purpose: Carry flags between unrelated enumerations that share member names.
// Dependencies: crate::{error, introspection, registry, traits}, tracing
// ============================================================================

//! ## Overview
//! Conversion walks the source value's instance mapping and, for every name
//! the target also declares, ORs the target member into a result that starts
//! from the target's zero value. Matching is exact and case-sensitive.
//! Source names the target lacks are dropped; target members the source
//! lacks stay unset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::FlagResult;
use crate::introspection::instance_pairs;
use crate::registry::EnumRegistry;
use crate::registry::RawFlags;
use crate::registry::TypeRef;
use crate::traits::Bits;
use crate::traits::FlagEnum;

// ============================================================================
// SECTION: Name Matching
// ============================================================================

/// Outcome of matching a source value against a target member table
struct NameMatch {
    /// OR of every matched target member
    bits: Bits,
    /// Number of source names that found a target member
    matched: usize,
}

/// Matches the set members of `value` against `lookup` by name
fn match_names<E, F>(value: E, target_name: &str, lookup: F) -> FlagResult<NameMatch>
where
    E: FlagEnum,
    F: Fn(&str) -> Option<Bits>,
{
    let mut result = NameMatch {
        bits: 0,
        matched: 0,
    };
    for name in instance_pairs(value)?.into_keys() {
        if let Some(bits) = lookup(name) {
            result.bits |= bits;
            result.matched += 1;
        } else {
            tracing::trace!(
                source_type = E::TYPE_NAME,
                target_type = target_name,
                member = name,
                "convert: dropped member without a counterpart"
            );
        }
    }
    Ok(result)
}

/// Value of the member of `T` called `name`
fn member_bits<T: FlagEnum>(name: &str) -> Option<Bits> {
    T::MEMBERS.iter().find(|(member, _)| *member == name).map(|(_, value)| value.bits())
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts `value` into the registered enumeration named by `target`
///
/// # Errors
/// Returns [`FlagError::InvalidArgumentType`](crate::FlagError::InvalidArgumentType)
/// when `target` is not a registered enumeration, and propagates failures from
/// building the source instance mapping.
pub fn convert_by_type<'r, E: FlagEnum>(
    value: E,
    registry: &'r EnumRegistry,
    target: TypeRef,
) -> FlagResult<RawFlags<'r>> {
    let descriptor = registry.resolve(target, "target")?;
    let matched =
        match_names(value, descriptor.type_name(), |name| descriptor.member_bits(name))?;
    Ok(RawFlags::new(descriptor, matched.bits))
}

/// Converts `value` into `T`
///
/// Yields the zero value of `T` when no member name matches.
///
/// # Errors
/// Propagates failures from building the source instance mapping.
pub fn convert<E: FlagEnum, T: FlagEnum>(value: E) -> FlagResult<T> {
    let matched = match_names(value, T::TYPE_NAME, member_bits::<T>)?;
    Ok(T::from_bits(matched.bits))
}

/// Converts `value` into the type of `reference`
///
/// `reference` only selects the target type. Returns `None` when no member
/// name matches.
///
/// # Errors
/// Propagates failures from building the source instance mapping.
pub fn convert_by_example<E: FlagEnum, T: FlagEnum>(
    value: E,
    _reference: T,
) -> FlagResult<Option<T>> {
    let matched = match_names(value, T::TYPE_NAME, member_bits::<T>)?;
    if matched.matched == 0 {
        tracing::debug!(
            source_type = E::TYPE_NAME,
            target_type = T::TYPE_NAME,
            "convert: no member names in common"
        );
        return Ok(None);
    }
    Ok(Some(T::from_bits(matched.bits)))
}
