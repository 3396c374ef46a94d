// crates/flag-enum/tests/introspection.rs
// ============================================================================
// Module: Flag Introspection Tests
// Description: Base and instance member views, names, and pair mappings.
// ============================================================================
//! ## Overview
//! Integration tests for member enumeration and name resolution.

#[path = "support/fixtures.rs"]
mod fixtures;
mod support;

use fixtures::Perm;
use flag_enum::FlagError;
use flag_enum::base_members;
use flag_enum::base_names;
use flag_enum::base_pairs;
use flag_enum::base_values;
use flag_enum::instance_members;
use flag_enum::instance_names;
use flag_enum::instance_pairs;
use flag_enum::instance_values;
use flag_enum::name_of;
use flag_enum::to_enum_values;
use flag_enum::to_pairs;
use support::TestResult;
use support::ensure;
use support::ensure_eq;

// ============================================================================
// SECTION: Base Views
// ============================================================================

#[test]
fn test_base_members_keep_declaration_order() -> TestResult {
    let members = base_members::<Perm>();
    ensure_eq(
        &members,
        &vec![
            ("None", Perm::None),
            ("Read", Perm::Read),
            ("Write", Perm::Write),
            ("Exec", Perm::Exec),
        ],
        "base members",
    )?;
    ensure_eq(&base_names::<Perm>(), &vec!["None", "Read", "Write", "Exec"], "base names")?;
    ensure_eq(
        &base_values::<Perm>(),
        &vec![Perm::None, Perm::Read, Perm::Write, Perm::Exec],
        "base values",
    )
}

#[test]
fn test_base_pairs_cover_every_member() -> TestResult {
    let pairs = base_pairs::<Perm>()?;
    ensure_eq(&pairs.len(), &4, "base pair count")?;
    ensure_eq(&pairs.get("Exec"), &Some(&Perm::Exec), "Exec pair")
}

// ============================================================================
// SECTION: Instance Views
// ============================================================================

#[test]
fn test_instance_members_include_zero_member() -> TestResult {
    let members = instance_members(Perm::Read | Perm::Write);
    ensure_eq(
        &members,
        &vec![("None", Perm::None), ("Read", Perm::Read), ("Write", Perm::Write)],
        "instance members of Read | Write",
    )?;
    ensure_eq(&instance_values(Perm::None), &vec![Perm::None], "instance values of None")
}

#[test]
fn test_instance_names_follow_declaration_order() -> TestResult {
    ensure_eq(
        &instance_names(Perm::Exec | Perm::Read),
        &vec!["None", "Read", "Exec"],
        "instance names",
    )
}

#[test]
fn test_instance_pairs_only_hold_set_members() -> TestResult {
    let pairs = instance_pairs(Perm::Write)?;
    ensure(pairs.contains_key("Write"), "Expected Write in instance pairs")?;
    ensure(pairs.contains_key("None"), "Expected zero member in instance pairs")?;
    ensure(!pairs.contains_key("Read"), "Expected unset Read to be absent")
}

// ============================================================================
// SECTION: Name Resolution
// ============================================================================

#[test]
fn test_name_of_exact_member() -> TestResult {
    ensure_eq(&name_of(Perm::Write)?, &"Write", "name of Write")
}

#[test]
fn test_name_of_combination_is_not_found() -> TestResult {
    let err = name_of(Perm::Read | Perm::Write).err();
    ensure_eq(
        &err,
        &Some(FlagError::NotFound {
            type_name: "Perm".to_string(),
            bits: 3,
        }),
        "combination lookup",
    )
}

#[test]
fn test_to_pairs_rejects_repeated_member() -> TestResult {
    let err = to_pairs(&[Perm::Read, Perm::Exec, Perm::Read]).err();
    ensure_eq(&err, &Some(FlagError::duplicate_key("Perm", "Read")), "repeated member")
}

#[test]
fn test_to_pairs_rejects_unnamed_value() -> TestResult {
    let err = to_pairs(&[Perm::Read | Perm::Exec]).err();
    ensure(matches!(err, Some(FlagError::NotFound { bits: 5, .. })), "Expected NotFound for 5")
}

#[test]
fn test_to_enum_values_resolves_only_set_names() -> TestResult {
    let resolved = to_enum_values(Perm::Read, &["Read", "Write", "Bogus"])?;
    ensure_eq(&resolved, &vec![Perm::Read], "resolved names")
}
