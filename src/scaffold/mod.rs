//! Filesystem scaffolding
//!
//! Creates directories and placeholder files mirroring the logical
//! hierarchy. Purely additive: nothing here reads or writes the manifest
//! document, and a partially created directory is left in place when a
//! later step fails.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DitError;

/// Extension for manifest placeholder files.
pub const MANIFEST_EXT: &str = "dit";
/// Extension for placeholder source files.
pub const SOURCE_EXT: &str = "stone";

/// Create `<root>/<name>/` with a `Package.dit` placeholder.
pub fn scaffold_package(root: &Path, name: &str) -> Result<(), DitError> {
    let dir = root.join(name);
    create_dir(&dir)?;
    let body = format!(
        "package {name} {{\n    description \"A new package\";\n    version 1.0;\n}}"
    );
    write_placeholder(&dir.join(format!("Package.{MANIFEST_EXT}")), &body)
}

/// Create `<root>/<package>/<module>/` with a `<module>.stone` placeholder.
pub fn scaffold_module(root: &Path, package: &str, module: &str) -> Result<(), DitError> {
    let dir = root.join(package).join(module);
    create_dir(&dir)?;
    let body = format!("module {module};\n\n// Define your module here");
    write_placeholder(&dir.join(format!("{module}.{SOURCE_EXT}")), &body)
}

/// Create a top-level project directory with a root manifest placeholder.
pub fn scaffold_project_root(root: &Path, name: &str) -> Result<(), DitError> {
    let dir = root.join(name);
    create_dir(&dir)?;
    let body = format!(
        "project {name} {{\n    description \"A new project\";\n    version 1.0;\n}}"
    );
    write_placeholder(&dir.join(format!("{name}.{MANIFEST_EXT}")), &body)
}

fn create_dir(dir: &Path) -> Result<(), DitError> {
    fs::create_dir_all(dir)
        .map_err(|err| DitError::io(format!("failed to create {}", dir.display()), err))
}

fn write_placeholder(path: &Path, body: &str) -> Result<(), DitError> {
    fs::write(path, body)
        .map_err(|err| DitError::io(format!("failed to create {}", path.display()), err))?;
    debug!(path = %path.display(), "scaffolded placeholder");
    Ok(())
}
