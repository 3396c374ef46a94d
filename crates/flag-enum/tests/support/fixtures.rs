// crates/flag-enum/tests/support/fixtures.rs
// ============================================================================
// Module: Flag Enum Fixtures
// Description: Shared flag enumerations for integration tests.
// ============================================================================
//! ## Overview
//! Enumerations shared by integration tests. `Perm` and `Access` share the
//! `Read` and `Write` member names with different values; `Color` shares no
//! names with either.

#![allow(dead_code, reason = "Not every test binary uses every fixture.")]

use flag_enum::flag_enum;

flag_enum! {
    /// File permissions.
    pub struct Perm {
        /// Nothing granted.
        None = 0,
        /// Read access.
        Read = 1,
        /// Write access.
        Write = 2,
        /// Execute access.
        Exec = 4,
    }
}

flag_enum! {
    /// Access rights with the `Perm` names at different values.
    pub struct Access {
        /// Write access.
        Write = 1,
        /// Read access.
        Read = 8,
    }
}

flag_enum! {
    /// Primary colors.
    pub struct Color {
        /// Red channel.
        Red = 1,
        /// Green channel.
        Green = 2,
        /// Blue channel.
        Blue = 4,
    }
}
