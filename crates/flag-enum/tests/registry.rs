// crates/flag-enum/tests/registry.rs
// ============================================================================
// Module: Enum Registry Tests
// Description: Registration, type-handle resolution, and raw flag values.
// ============================================================================
//! ## Overview
//! Integration tests for the registry standing in for runtime reflection.

#[path = "support/fixtures.rs"]
mod fixtures;
mod support;

use fixtures::Color;
use fixtures::Perm;
use flag_enum::EnumDescriptor;
use flag_enum::EnumRegistry;
use flag_enum::FlagError;
use flag_enum::RawFlags;
use flag_enum::TypeRef;
use support::TestResult;
use support::ensure;
use support::ensure_eq;

#[test]
fn test_registry_tracks_registered_types() -> TestResult {
    let mut registry = EnumRegistry::new();
    ensure(registry.is_empty(), "Expected a new registry to be empty")?;
    registry.register::<Perm>().register::<Color>().register::<Perm>();
    ensure_eq(&registry.len(), &2, "re-registration replaces")?;
    ensure(registry.contains(TypeRef::of::<Color>()), "Expected Color registered")?;
    ensure(!registry.contains(TypeRef::of::<str>()), "Expected str unregistered")
}

#[test]
fn test_resolve_returns_descriptor() -> TestResult {
    let registry = EnumRegistry::new().with::<Color>();
    let descriptor = registry.resolve(TypeRef::of::<Color>(), "ty")?;
    ensure_eq(&descriptor.type_name(), &"Color", "descriptor name")?;
    ensure_eq(
        &descriptor.members().to_vec(),
        &vec![("Red", 1), ("Green", 2), ("Blue", 4)],
        "descriptor members",
    )?;
    ensure_eq(&descriptor.member_bits("Blue"), &Some(4), "member lookup")?;
    ensure_eq(&descriptor.member_bits("blue"), &None, "case-sensitive lookup")?;
    ensure(descriptor.describes::<Color>(), "Expected descriptor to describe Color")
}

#[test]
fn test_resolve_unknown_type_names_parameter() -> TestResult {
    let registry = EnumRegistry::new().with::<Color>();
    let err = registry.resolve(TypeRef::of::<Vec<u8>>(), "ty").err();
    ensure_eq(&err.as_ref().and_then(FlagError::parameter), &Some("ty"), "parameter")?;
    let message = err.map(|err| err.to_string()).unwrap_or_default();
    ensure(message.contains("\"ty\""), "Expected parameter name in message")
}

#[test]
fn test_type_ref_short_name_strips_module_path() -> TestResult {
    ensure_eq(&TypeRef::of::<String>().short_name(), &"String".to_string(), "String")?;
    ensure_eq(&TypeRef::of::<Perm>().short_name(), &"Perm".to_string(), "Perm")?;
    ensure_eq(&TypeRef::of::<Vec<u8>>().short_name(), &"Vec<u8>".to_string(), "Vec<u8>")
}

#[test]
fn test_raw_flags_report_set_members() -> TestResult {
    let descriptor = EnumDescriptor::of::<Perm>();
    let raw = RawFlags::new(&descriptor, 5);
    ensure(raw.has_bits(4), "Expected Exec bit")?;
    ensure(!raw.has_bits(2), "Expected Write bit clear")?;
    ensure_eq(&raw.names(), &vec!["None", "Read", "Exec"], "raw names")?;
    ensure_eq(&raw.downcast::<Perm>(), &Some(Perm::Read | Perm::Exec), "downcast")?;
    ensure_eq(&raw.descriptor().type_ref(), &TypeRef::of::<Perm>(), "type handle")
}
