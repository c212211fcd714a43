//! CLI commands for dit
//!
//! Each command builds on the typed core (store, ops, scaffold) and owns
//! the user-facing output. Add commands persist the manifest first and
//! scaffold second; a failure between the two leaves the survivor in place
//! rather than rolling it back.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::models::Project;
use crate::ops;
use crate::scaffold;
use crate::store::ManifestStore;
use crate::validation;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Summary,
}

/// Create a project manifest at the store path.
pub fn init(store: &ManifestStore, name: &str, description: &str, version: &str) -> Result<()> {
    let project = ops::init(store, name, description, version)?;
    println!("Initialized project: {}", project.name);
    println!("  Version:  {}", project.version);
    println!("  Manifest: {}", store.path().display());
    Ok(())
}

/// Create a project in a new directory: scaffold the directory and root
/// placeholder, then write a fresh manifest inside it.
pub fn new_project(config: &Config, name: &str, description: &str, version: &str) -> Result<()> {
    scaffold::scaffold_project_root(Path::new("."), name)?;
    let store = ManifestStore::new(Path::new(name).join(&config.manifest_file));
    ops::init(&store, name, description, version)?;
    println!("Created project: {name}/");
    println!("  Manifest: {}", store.path().display());
    Ok(())
}

/// Add a package to the manifest and scaffold its directory.
pub fn add_package(store: &ManifestStore, name: &str, description: &str, version: &str) -> Result<()> {
    let project = ops::add_package(store, name, description, version)?;
    scaffold::scaffold_package(&scaffold_root(store), name)?;
    println!("Added package: {name}");
    println!("  Packages in manifest: {}", project.packages.len());
    Ok(())
}

/// Add a module to a package and scaffold its directory.
pub fn add_module(store: &ManifestStore, package: &str, name: &str, description: &str) -> Result<()> {
    ops::add_module(store, package, name, description)?;
    scaffold::scaffold_module(&scaffold_root(store), package, name)?;
    println!("Added module: {name} (package: {package})");
    Ok(())
}

/// Add a file to the first module with a matching name. No scaffolding:
/// file entries live only in the manifest.
pub fn add_file(store: &ManifestStore, module: &str, name: &str, content: &str) -> Result<()> {
    ops::add_file(store, module, name, content)?;
    println!("Added file: {name} (module: {module})");
    Ok(())
}

/// Print the manifest as JSON or as an aligned summary.
pub fn show(store: &ManifestStore, format: OutputFormat) -> Result<()> {
    let project = store.load()?;
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&project)
                .context("Failed to render manifest as JSON")?;
            println!("{json}");
        }
        OutputFormat::Summary => print_project_summary(store, &project),
    }
    Ok(())
}

/// Run lint checks over the manifest on disk.
pub fn check(store: &ManifestStore, strict: bool) -> Result<()> {
    let project = store.load()?;
    println!("Checking manifest: {}", store.path().display());

    let warnings = validation::lint_project(&project);
    if warnings.is_empty() {
        println!("✓ no warnings");
    } else {
        println!("⚠ {} warning(s)", warnings.len());
        for warning in &warnings {
            println!("  ⚠ {warning}");
        }
        if strict {
            bail!("Check failed in strict mode due to warnings");
        }
    }
    Ok(())
}

/// Dependency synchronization hook. The resolution step itself is an
/// external collaborator; this only marks the entry point.
pub fn sync() -> Result<()> {
    println!("Synchronizing dependencies...");
    println!("Dependencies synchronized successfully!");
    Ok(())
}

/// Build hook, same shape as [`sync`].
pub fn build() -> Result<()> {
    println!("Building project...");
    println!("Build complete!");
    Ok(())
}

/// Publish hook, same shape as [`sync`].
pub fn publish() -> Result<()> {
    println!("Publishing project...");
    Ok(())
}

// Scaffolds land next to the manifest document.
fn scaffold_root(store: &ManifestStore) -> PathBuf {
    store
        .path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn print_project_summary(store: &ManifestStore, project: &Project) {
    println!("Project: {}", project.name);
    println!("{}", "=".repeat(50));
    println!("Version:     {}", project.version);
    println!("Description: {}", project.description);
    println!("Manifest:    {}", store.path().display());

    println!();
    println!("Packages: {}", project.packages.len());
    for package in &project.packages {
        let files: usize = package.modules.iter().map(|m| m.files.len()).sum();
        println!(
            "  {:<20} v{:<8} {} module(s), {} file(s)",
            package.name,
            package.version,
            package.modules.len(),
            files
        );
    }

    if project.created_at > 0 {
        println!();
        println!("Created:  {}", format_timestamp(project.created_at));
        println!("Updated:  {}", format_timestamp(project.updated_at));
    }
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
