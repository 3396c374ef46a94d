// crates/flag-enum/src/registry.rs
// ============================================================================
// Module: Enum Type Registry
// Description: Runtime type handles, enum descriptors, and dynamic flag values.
// Purpose: Resolve arbitrary type handles to registered flag enumerations.
// Dependencies: crate::{error, traits}, std::any, std::collections::HashMap, tracing
// ============================================================================

//! ## Overview
//! Operations that take a *type* rather than a value receive a [`TypeRef`].
//! Any `'static` type has one, so the handle may name something that is not
//! a flag enumeration at all. [`EnumRegistry`] is the explicit table that
//! decides which handles are enumerations and what their members are.
//!
//! Values produced through a type handle are [`RawFlags`]: raw bits tagged
//! with the descriptor they belong to. They downcast into the concrete type
//! when the caller knows it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::TypeId;
use std::any::type_name;
use std::collections::HashMap;

use crate::error::FlagError;
use crate::error::FlagResult;
use crate::traits::Bits;
use crate::traits::FlagEnum;

// ============================================================================
// SECTION: Type Handle
// ============================================================================

/// Runtime handle for any `'static` type
///
/// # Invariants
/// - `name` is the compiler-provided name of the type identified by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Type identity used for registry lookups
    id: TypeId,
    /// Human-readable type name for diagnostics
    name: &'static str,
}

impl TypeRef {
    /// Returns the handle for `T`
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the type identity
    #[must_use]
    pub const fn id(self) -> TypeId {
        self.id
    }

    /// Returns the type name
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path
    ///
    /// Only the outer path is stripped; generic arguments are kept verbatim.
    #[must_use]
    pub fn short_name(self) -> String {
        let (head, generics) =
            self.name.find('<').map_or((self.name, ""), |at| self.name.split_at(at));
        let base = head.rsplit("::").next().unwrap_or(head);
        format!("{base}{generics}")
    }
}

// ============================================================================
// SECTION: Enum Descriptor
// ============================================================================

/// Registry record for one flag enumeration
///
/// # Invariants
/// - `members` preserves declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Handle of the described type
    ty: TypeRef,
    /// Short type name used in diagnostics
    type_name: &'static str,
    /// Declared members as raw values
    members: Vec<(&'static str, Bits)>,
}

impl EnumDescriptor {
    /// Builds the descriptor for `E`
    #[must_use]
    pub fn of<E: FlagEnum>() -> Self {
        Self {
            ty: TypeRef::of::<E>(),
            type_name: E::TYPE_NAME,
            members: E::MEMBERS.iter().map(|(name, value)| (*name, value.bits())).collect(),
        }
    }

    /// Returns the handle of the described type
    #[must_use]
    pub const fn type_ref(&self) -> TypeRef {
        self.ty
    }

    /// Returns the enumeration name
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the declared members in declaration order
    #[must_use]
    pub fn members(&self) -> &[(&'static str, Bits)] {
        &self.members
    }

    /// Returns the value of the member called `name`
    #[must_use]
    pub fn member_bits(&self, name: &str) -> Option<Bits> {
        self.members.iter().find(|(member, _)| *member == name).map(|(_, bits)| *bits)
    }

    /// Returns true when `T` is the described type
    #[must_use]
    pub fn describes<T: 'static>(&self) -> bool {
        self.ty.id() == TypeId::of::<T>()
    }
}

// ============================================================================
// SECTION: Dynamic Value
// ============================================================================

/// Flag value whose type is only known at runtime
///
/// # Invariants
/// - `bits` belongs to the enumeration described by `descriptor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFlags<'r> {
    /// Descriptor of the value's enumeration
    descriptor: &'r EnumDescriptor,
    /// Underlying integer representation
    bits: Bits,
}

impl<'r> RawFlags<'r> {
    /// Tags `bits` with its enumeration descriptor
    #[must_use]
    pub const fn new(descriptor: &'r EnumDescriptor, bits: Bits) -> Self {
        Self {
            descriptor,
            bits,
        }
    }

    /// Returns the enumeration descriptor
    #[must_use]
    pub const fn descriptor(&self) -> &'r EnumDescriptor {
        self.descriptor
    }

    /// Returns the underlying integer representation
    #[must_use]
    pub const fn bits(&self) -> Bits {
        self.bits
    }

    /// Returns true when every bit of `flag` is set
    #[must_use]
    pub const fn has_bits(&self, flag: Bits) -> bool {
        self.bits & flag == flag
    }

    /// Returns the names of the declared members set in this value
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.descriptor
            .members()
            .iter()
            .filter(|(_, bits)| self.has_bits(*bits))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Converts into the concrete enumeration when `E` is the described type
    #[must_use]
    pub fn downcast<E: FlagEnum>(&self) -> Option<E> {
        self.descriptor.describes::<E>().then(|| E::from_bits(self.bits))
    }
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Table of the types recognized as flag enumerations
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    /// Descriptors keyed by type identity
    descriptors: HashMap<TypeId, EnumDescriptor>,
}

impl EnumRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `E`, replacing any earlier registration of the same type
    pub fn register<E: FlagEnum>(&mut self) -> &mut Self {
        let descriptor = EnumDescriptor::of::<E>();
        tracing::debug!(
            type_name = descriptor.type_name(),
            members = descriptor.members().len(),
            "registry: registered flag enumeration"
        );
        self.descriptors.insert(descriptor.type_ref().id(), descriptor);
        self
    }

    /// Builder-style form of [`EnumRegistry::register`]
    #[must_use]
    pub fn with<E: FlagEnum>(mut self) -> Self {
        self.register::<E>();
        self
    }

    /// Returns true when `ty` is a registered enumeration
    #[must_use]
    pub fn contains(&self, ty: TypeRef) -> bool {
        self.descriptors.contains_key(&ty.id())
    }

    /// Returns the number of registered enumerations
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Resolves `ty` to its descriptor
    ///
    /// # Errors
    /// Returns [`FlagError::InvalidArgumentType`] naming `parameter` when `ty`
    /// is not a registered enumeration.
    pub fn resolve(&self, ty: TypeRef, parameter: &str) -> FlagResult<&EnumDescriptor> {
        self.descriptors
            .get(&ty.id())
            .ok_or_else(|| FlagError::invalid_argument_type(ty, parameter))
    }
}
