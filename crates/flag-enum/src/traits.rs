// crates/flag-enum/src/traits.rs
// ============================================================================
// Module: Flag Enum Traits
// Description: The member-table contract every flag enumeration implements.
// Purpose: Stand in for host reflection with a compile-time member table.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A flag enumeration is a `Copy` value over an `i64` plus an ordered table of
//! named members. The [`flag_enum!`](crate::flag_enum) macro generates both;
//! hand-written implementations only need the table and the two conversions.

// ============================================================================
// SECTION: Type Aliases
// ============================================================================

/// Underlying integer representation shared by every flag enumeration
pub type Bits = i64;

/// One declared member: its name and its value
pub type Member<E> = (&'static str, E);

// ============================================================================
// SECTION: Flag Enum Trait
// ============================================================================

/// Contract for bit-flag style enumerations
///
/// Implementors declare their members once, in declaration order. Member
/// names must be unique within the type; member values may repeat and need
/// not be powers of two.
pub trait FlagEnum: Copy + Eq + 'static {
    /// Name of the enumeration type used in diagnostics
    const TYPE_NAME: &'static str;

    /// Declared members in declaration order
    const MEMBERS: &'static [Member<Self>];

    /// Returns the underlying integer representation
    fn bits(self) -> Bits;

    /// Rebuilds a value of this type from a raw integer
    ///
    /// Any combination of bits is accepted, named or not.
    fn from_bits(bits: Bits) -> Self;

    /// Returns the value with no bits set
    #[must_use]
    fn zero() -> Self {
        Self::from_bits(0)
    }

    /// Returns true when no bits are set
    fn is_zero(self) -> bool {
        self.bits() == 0
    }

    /// Returns true when every bit of `flag` is set in `self`
    ///
    /// A zero-valued flag is contained in every value.
    fn has_flag(self, flag: Self) -> bool {
        let flag = flag.bits();
        self.bits() & flag == flag
    }
}
