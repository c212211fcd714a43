// Integration tests for the manifest load/mutate/persist cycle

use anyhow::Result;
use dit::error::DitError;
use dit::ops;
use dit::store::ManifestStore;
use std::fs;
use tempfile::TempDir;

/// Setup test environment: an empty directory with a store handle in it
fn setup() -> Result<(TempDir, ManifestStore)> {
    let temp_dir = TempDir::new()?;
    let store = ManifestStore::new(temp_dir.path().join("Project.dit"));
    Ok((temp_dir, store))
}

#[test]
fn init_then_load_returns_exact_fields() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "2.1")?;

    let project = store.load()?;
    assert_eq!(project.name, "Demo");
    assert_eq!(project.description, "A demo project");
    assert_eq!(project.version, "2.1");
    assert!(project.packages.is_empty());

    Ok(())
}

#[test]
fn init_twice_replaces_rather_than_merges() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    ops::init(&store, "Fresh", "Started over", "0.1")?;

    let project = store.load()?;
    assert_eq!(project.name, "Fresh");
    assert!(project.packages.is_empty());

    Ok(())
}

#[test]
fn add_package_preserves_insertion_order_across_round_trip() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    ops::add_package(&store, "util", "Utility package", "0.2")?;
    ops::add_package(&store, "net", "Networking", "3.1.4")?;

    let project = store.load()?;
    let names: Vec<_> = project.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["core", "util", "net"]);
    assert_eq!(project.packages[1].description, "Utility package");
    assert_eq!(project.packages[2].version, "3.1.4");

    // A second round trip reproduces the document exactly.
    store.save(&project)?;
    assert_eq!(store.load()?, project);

    Ok(())
}

#[test]
fn duplicate_package_fails_and_leaves_document_unchanged() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    let before = fs::read_to_string(store.path())?;

    let err = ops::add_package(&store, "core", "Another core", "2.0").unwrap_err();
    assert!(matches!(
        err,
        DitError::DuplicateName { kind: "package", .. }
    ));

    let after = fs::read_to_string(store.path())?;
    assert_eq!(before, after);

    Ok(())
}

#[test]
fn add_module_with_missing_package_fails_and_leaves_document_unchanged() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    let before = fs::read_to_string(store.path())?;

    let err = ops::add_module(&store, "nope", "utils", "Utilities").unwrap_err();
    assert!(matches!(err, DitError::NotFound { kind: "package", .. }));

    let after = fs::read_to_string(store.path())?;
    assert_eq!(before, after);

    Ok(())
}

#[test]
fn duplicate_module_in_package_is_rejected() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    ops::add_module(&store, "core", "utils", "Utilities")?;

    let err = ops::add_module(&store, "core", "utils", "More utilities").unwrap_err();
    assert!(matches!(
        err,
        DitError::DuplicateName { kind: "module", .. }
    ));

    Ok(())
}

#[test]
fn add_file_targets_first_matching_module_across_packages() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "alpha", "First package", "1.0")?;
    ops::add_package(&store, "beta", "Second package", "1.0")?;
    ops::add_module(&store, "alpha", "utils", "Alpha utilities")?;
    ops::add_module(&store, "beta", "utils", "Beta utilities")?;

    ops::add_file(&store, "utils", "lib.stone", "// contents")?;

    let project = store.load()?;
    let alpha_utils = &project.packages[0].modules[0];
    let beta_utils = &project.packages[1].modules[0];
    assert_eq!(alpha_utils.files.len(), 1);
    assert_eq!(alpha_utils.files[0].name, "lib.stone");
    assert_eq!(alpha_utils.files[0].content, "// contents");
    assert!(beta_utils.files.is_empty());

    Ok(())
}

#[test]
fn add_file_with_missing_module_fails() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;

    let err = ops::add_file(&store, "nope", "lib.stone", "// contents").unwrap_err();
    assert!(matches!(err, DitError::NotFound { kind: "module", .. }));

    Ok(())
}

#[test]
fn duplicate_file_in_module_is_rejected() -> Result<()> {
    let (_temp, store) = setup()?;

    ops::init(&store, "Demo", "A demo project", "1.0")?;
    ops::add_package(&store, "core", "Core package", "1.0")?;
    ops::add_module(&store, "core", "utils", "Utilities")?;
    ops::add_file(&store, "utils", "lib.stone", "// contents")?;

    let err = ops::add_file(&store, "utils", "lib.stone", "// other").unwrap_err();
    assert!(matches!(err, DitError::DuplicateName { kind: "file", .. }));

    Ok(())
}

#[test]
fn unknown_manifest_fields_are_tolerated() -> Result<()> {
    let (_temp, store) = setup()?;

    fs::write(
        store.path(),
        r#"{
  "name": "Demo",
  "description": "Written by another tool",
  "version": "1.0",
  "generator": "other-tool 3.2",
  "packages": [
    {
      "name": "core",
      "description": "Core package",
      "version": "1.0",
      "modules": [],
      "homepage": "https://example.invalid"
    }
  ]
}"#,
    )?;

    let project = store.load()?;
    assert_eq!(project.name, "Demo");
    assert_eq!(project.packages[0].name, "core");

    Ok(())
}
