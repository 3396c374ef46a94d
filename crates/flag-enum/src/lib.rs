// crates/flag-enum/src/lib.rs
// ============================================================================
// Module: Flag Enum Root
// Description: Public API surface for bit-flag enumeration utilities.
// Purpose: Wire together core modules, re-exports, and the declaration macro.
// Dependencies: crate::{arithmetic, convert, error, info, introspection, membership,
//              registry, traits}
// ============================================================================

//! ## Overview
//! Utilities for bit-flag style enumerations: listing declared and set
//! members, all/any membership tests, OR-based add/remove/collapse, and
//! conversion between unrelated enumerations by member name. Every operation
//! is a pure function over `Copy` values and returns a new value.
//!
//! ```
//! use flag_enum::flag_enum;
//! use flag_enum::has_all;
//! use flag_enum::remove;
//!
//! flag_enum! {
//!     /// File permissions.
//!     pub struct Perm {
//!         /// Nothing granted.
//!         None = 0,
//!         /// Read access.
//!         Read = 1,
//!         /// Write access.
//!         Write = 2,
//!         /// Execute access.
//!         Exec = 4,
//!     }
//! }
//!
//! let rw = Perm::Read | Perm::Write;
//! assert!(has_all(rw, &[Perm::Read, Perm::Write]));
//! assert_eq!(remove(rw, &[Perm::Write]), Some(Perm::Read));
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod arithmetic;
pub mod convert;
pub mod error;
pub mod info;
pub mod introspection;
pub mod membership;
pub mod registry;
pub mod traits;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arithmetic::add;
pub use arithmetic::collapse;
pub use arithmetic::remove;
pub use arithmetic::remove_all;
pub use arithmetic::union;
pub use convert::convert;
pub use convert::convert_by_example;
pub use convert::convert_by_type;
pub use error::FlagError;
pub use error::FlagResult;
pub use info::EnumInfo;
pub use info::EnumView;
pub use info::create_instance_from_type;
pub use info::default_member;
pub use introspection::NamePairs;
pub use introspection::base_members;
pub use introspection::base_names;
pub use introspection::base_pairs;
pub use introspection::base_values;
pub use introspection::instance_members;
pub use introspection::instance_names;
pub use introspection::instance_pairs;
pub use introspection::instance_values;
pub use introspection::name_of;
pub use introspection::to_enum_values;
pub use introspection::to_pairs;
pub use membership::contains_all;
pub use membership::contains_any;
pub use membership::has_all;
pub use membership::has_all_named;
pub use membership::has_any;
pub use membership::has_any_named;
pub use registry::EnumDescriptor;
pub use registry::EnumRegistry;
pub use registry::RawFlags;
pub use registry::TypeRef;
pub use traits::Bits;
pub use traits::FlagEnum;
pub use traits::Member;

// ============================================================================
// SECTION: Declaration Macro
// ============================================================================

/// Declares a flag enumeration
///
/// Generates a `Copy` newtype over [`Bits`] with one associated const per
/// member, the [`FlagEnum`] member table in declaration order, `BitOr`, and a
/// `Default` of zero:
///
/// ```ignore
/// flag_enum! {
///     /// Access rights.
///     pub struct Access {
///         /// Read access.
///         Read = 1,
///         /// Write access.
///         Write = 2,
///         /// Both.
///         ReadWrite = 3,
///     }
/// }
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$inner:meta])*
                $member:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $name($crate::Bits);

        #[allow(non_upper_case_globals, reason = "Members keep their declared names.")]
        impl $name {
            $(
                $(#[$inner])*
                pub const $member: Self = Self($value);
            )*
        }

        impl $crate::FlagEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [$crate::Member<Self>] =
                &[$((stringify!($member), Self::$member)),*];

            fn bits(self) -> $crate::Bits {
                self.0
            }

            fn from_bits(bits: $crate::Bits) -> Self {
                Self(bits)
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}
