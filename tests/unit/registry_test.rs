//! Tests for the TOML recipient registry

use std::fs;

use tempfile::TempDir;

use replate::adapters::toml::TomlRecipientRegistry;
use replate::core::models::{Category, GeoPoint, Recipient};
use replate::core::ports::{RecipientRegistry, RegistryError};

fn registry(dir: &TempDir) -> TomlRecipientRegistry {
    TomlRecipientRegistry::new(dir.path().join("recipients.toml"))
}

fn shelter(id: &str) -> Recipient {
    Recipient {
        recipient_id: id.to_string(),
        name: "Night Shelter".to_string(),
        location: GeoPoint::new(12.9352, 77.5996),
        capacity_kg: 60.0,
        accepted_categories: vec![Category::Prepared, Category::Bakery],
        verified: false,
    }
}

#[test]
fn test_missing_file_is_empty_registry() {
    let dir = TempDir::new().unwrap();
    assert!(registry(&dir).list().unwrap().is_empty());
}

#[test]
fn test_add_and_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let reg = registry(&dir);

    reg.add(shelter("shelter-1")).unwrap();
    let listed = reg.list().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipient_id, "shelter-1");
    assert_eq!(listed[0].accepted_categories, vec![Category::Prepared, Category::Bakery]);
    assert!(!listed[0].verified);
}

#[test]
fn test_duplicate_id_rejected() {
    let dir = TempDir::new().unwrap();
    let reg = registry(&dir);

    reg.add(shelter("shelter-1")).unwrap();
    let err = reg.add(shelter("shelter-1")).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateRecipient(_)));
}

#[test]
fn test_remove_unknown_errors_with_id() {
    let dir = TempDir::new().unwrap();
    let err = registry(&dir).remove("nobody").unwrap_err();
    assert!(err.to_string().contains("nobody"));
}

#[test]
fn test_remove_deletes_entry() {
    let dir = TempDir::new().unwrap();
    let reg = registry(&dir);

    reg.add(shelter("shelter-1")).unwrap();
    reg.add(shelter("shelter-2")).unwrap();
    reg.remove("shelter-1").unwrap();

    let listed = reg.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipient_id, "shelter-2");
}

#[test]
fn test_set_verified() {
    let dir = TempDir::new().unwrap();
    let reg = registry(&dir);

    reg.add(shelter("shelter-1")).unwrap();
    reg.set_verified("shelter-1", true).unwrap();
    assert!(reg.list().unwrap()[0].verified);

    reg.set_verified("shelter-1", false).unwrap();
    assert!(!reg.list().unwrap()[0].verified);
}

#[test]
fn test_set_verified_unknown_errors() {
    let dir = TempDir::new().unwrap();
    let err = registry(&dir).set_verified("nobody", true).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownRecipient(_)));
}

#[test]
fn test_hand_edited_file_parses() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("recipients.toml"),
        r#"[[recipient]]
id = "akshaya-patra"
name = "Akshaya Patra"
lat = 12.9352
lng = 77.5996
capacity_kg = 120.0
categories = ["prepared", "produce"]
verified = true
"#,
    )
    .unwrap();

    let listed = registry(&dir).list().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].verified);
    assert!((listed[0].capacity_kg - 120.0).abs() < 1e-9);
}

#[test]
fn test_corrupt_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recipients.toml"), "this is not toml [[[").unwrap();

    let err = registry(&dir).list().unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }));
}
