// crates/flag-enum/src/info.rs
// ============================================================================
// Module: Enum Info Wrappers
// Description: Value holders exposing instance and base views of a flag value.
// Purpose: Bundle the introspection views for callers that want one handle.
// Dependencies: crate::{arithmetic, error, introspection, registry, traits}
// ============================================================================

//! ## Overview
//! [`EnumInfo`] recomputes its views on every access. [`EnumView`] builds two
//! infos once, at construction: one over the value and one over the collapse
//! of every declared member.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::arithmetic::collapse;
use crate::error::FlagError;
use crate::error::FlagResult;
use crate::introspection::NamePairs;
use crate::introspection::base_values;
use crate::introspection::instance_names;
use crate::introspection::instance_pairs;
use crate::introspection::instance_values;
use crate::registry::EnumRegistry;
use crate::registry::RawFlags;
use crate::registry::TypeRef;
use crate::traits::FlagEnum;

// ============================================================================
// SECTION: Enum Info
// ============================================================================

/// Instance views over one flag value
///
/// # Invariants
/// - Holds no derived state; every view is recomputed on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumInfo<E> {
    /// Wrapped value
    value: E,
}

impl<E: FlagEnum> EnumInfo<E> {
    /// Wraps `value`
    #[must_use]
    pub const fn new(value: E) -> Self {
        Self {
            value,
        }
    }

    /// Returns the wrapped value
    #[must_use]
    pub const fn value(&self) -> E {
        self.value
    }

    /// Names of the members set in the value
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        instance_names(self.value)
    }

    /// Name to value mapping of the members set in the value
    ///
    /// # Errors
    /// Returns [`FlagError::DuplicateKey`] when set members alias each other.
    pub fn pairs(&self) -> FlagResult<NamePairs<E>> {
        instance_pairs(self.value)
    }

    /// Members set in the value
    #[must_use]
    pub fn flags(&self) -> Vec<E> {
        instance_values(self.value)
    }
}

impl<E: FlagEnum> From<E> for EnumInfo<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Enum View
// ============================================================================

/// A flag value with its instance info and the info of its whole type
///
/// # Invariants
/// - `base_info` wraps the OR of every declared member of `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumView<E> {
    /// Wrapped value
    value: E,
    /// Views over the wrapped value
    instance_info: EnumInfo<E>,
    /// Views over every declared member ORed together
    base_info: EnumInfo<E>,
}

impl<E: FlagEnum> EnumView<E> {
    /// Builds the instance and base infos for `value`
    ///
    /// # Errors
    /// Returns [`FlagError::EmptySequence`] when `E` declares no members.
    pub fn new(value: E) -> FlagResult<Self> {
        let full = collapse(&base_values::<E>())?;
        Ok(Self {
            value,
            instance_info: EnumInfo::new(value),
            base_info: EnumInfo::new(full),
        })
    }

    /// Builds a view from a value that may be absent
    ///
    /// # Errors
    /// Returns [`FlagError::NullArgument`] when `value` is `None`, otherwise
    /// the errors of [`EnumView::new`].
    pub fn from_option(value: Option<E>) -> FlagResult<Self> {
        value.map_or_else(|| Err(FlagError::null_argument("value")), Self::new)
    }

    /// Returns the wrapped value
    #[must_use]
    pub const fn value(&self) -> E {
        self.value
    }

    /// Returns the views over the wrapped value
    #[must_use]
    pub const fn instance_info(&self) -> &EnumInfo<E> {
        &self.instance_info
    }

    /// Returns the views over the whole type
    #[must_use]
    pub const fn base_info(&self) -> &EnumInfo<E> {
        &self.base_info
    }
}

// ============================================================================
// SECTION: Default Member Factory
// ============================================================================

/// Returns the first declared member of `E`
#[must_use]
pub fn default_member<E: FlagEnum>() -> Option<E> {
    E::MEMBERS.first().map(|(_, value)| *value)
}

/// Returns the first declared member of the registered enumeration `ty`
///
/// Yields `None` for a registered enumeration without members.
///
/// # Errors
/// Returns [`FlagError::InvalidArgumentType`] when `ty` is not a registered
/// enumeration.
pub fn create_instance_from_type(
    registry: &EnumRegistry,
    ty: TypeRef,
) -> FlagResult<Option<RawFlags<'_>>> {
    let descriptor = registry.resolve(ty, "type")?;
    Ok(descriptor.members().first().map(|(_, bits)| RawFlags::new(descriptor, *bits)))
}
