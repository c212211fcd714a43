//! Mutation operations over the manifest
//!
//! Each operation is one load -> mutate -> save pipeline with the whole
//! Project as the transaction unit: nothing is persisted unless the
//! mutation succeeded, and every success rewrites the full document.
//! Lookups are linear scans in insertion order; manifests are small
//! author-curated documents and first match wins.

use tracing::debug;

use crate::error::DitError;
use crate::models::{File, Module, Package, Project};
use crate::store::ManifestStore;

/// Create a fresh project manifest, replacing any prior document at the
/// store path. Calling init twice replaces, never merges.
pub fn init(
    store: &ManifestStore,
    name: &str,
    description: &str,
    version: &str,
) -> Result<Project, DitError> {
    let _guard = store.lock()?;
    let project = Project::new(name.to_string(), description.to_string(), version.to_string());
    store.save(&project)?;
    debug!(name, "initialized project manifest");
    Ok(project)
}

/// Append a package to the project.
pub fn add_package(
    store: &ManifestStore,
    name: &str,
    description: &str,
    version: &str,
) -> Result<Project, DitError> {
    let _guard = store.lock()?;
    let mut project = store.load()?;
    project.add_package(Package::new(
        name.to_string(),
        description.to_string(),
        version.to_string(),
    ))?;
    project.touch();
    store.save(&project)?;
    debug!(name, "added package");
    Ok(project)
}

/// Append a module to the named package.
pub fn add_module(
    store: &ManifestStore,
    package_name: &str,
    module_name: &str,
    description: &str,
) -> Result<Project, DitError> {
    let _guard = store.lock()?;
    let mut project = store.load()?;
    let package = project
        .package_mut(package_name)
        .ok_or_else(|| DitError::NotFound {
            kind: "package",
            name: package_name.to_string(),
        })?;
    package.add_module(Module::new(module_name.to_string(), description.to_string()))?;
    project.touch();
    store.save(&project)?;
    debug!(package = package_name, module = module_name, "added module");
    Ok(project)
}

/// Append a file to the first module with a matching name across all
/// packages (see [`Project::module_mut`] for the tie-break order).
pub fn add_file(
    store: &ManifestStore,
    module_name: &str,
    file_name: &str,
    content: &str,
) -> Result<Project, DitError> {
    let _guard = store.lock()?;
    let mut project = store.load()?;
    let module = project
        .module_mut(module_name)
        .ok_or_else(|| DitError::NotFound {
            kind: "module",
            name: module_name.to_string(),
        })?;
    module.add_file(File::new(file_name.to_string(), content.to_string()))?;
    project.touch();
    store.save(&project)?;
    debug!(module = module_name, file = file_name, "added file");
    Ok(project)
}
