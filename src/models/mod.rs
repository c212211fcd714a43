//! Entity model for the project manifest
//!
//! Ownership is strictly tree-shaped: a Project owns Packages, a Package
//! owns Modules, a Module may own Files. Sequences keep insertion order so
//! the serialized manifest round-trips byte-for-byte, and names are unique
//! within their owning entity.

use serde::{Deserialize, Serialize};

use crate::error::DitError;

/// A placeholder source file owned by a module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content: String,
}

impl File {
    pub fn new(name: String, content: String) -> Self {
        Self { name, content }
    }
}

/// A module within a package. The file list is optional in the document:
/// a module with no files serializes without a `files` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

impl Module {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            files: Vec::new(),
        }
    }

    /// Append a file. File names are unique within their module.
    pub fn add_file(&mut self, file: File) -> Result<(), DitError> {
        if self.files.iter().any(|f| f.name == file.name) {
            return Err(DitError::DuplicateName {
                kind: "file",
                name: file.name,
            });
        }
        self.files.push(file);
        Ok(())
    }
}

/// A package within the project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Package {
    pub fn new(name: String, description: String, version: String) -> Self {
        Self {
            name,
            description,
            version,
            modules: Vec::new(),
        }
    }

    /// Append a module. Module names are unique within their package.
    pub fn add_module(&mut self, module: Module) -> Result<(), DitError> {
        if self.modules.iter().any(|m| m.name == module.name) {
            return Err(DitError::DuplicateName {
                kind: "module",
                name: module.name,
            });
        }
        self.modules.push(module);
        Ok(())
    }
}

/// The root of the entity hierarchy; one Project per manifest document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Project {
    pub fn new(name: String, description: String, version: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            name,
            description,
            version,
            packages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a package. Package names are unique within the project.
    pub fn add_package(&mut self, package: Package) -> Result<(), DitError> {
        if self.packages.iter().any(|p| p.name == package.name) {
            return Err(DitError::DuplicateName {
                kind: "package",
                name: package.name,
            });
        }
        self.packages.push(package);
        Ok(())
    }

    /// First package with the given name.
    pub fn package_mut(&mut self, name: &str) -> Option<&mut Package> {
        self.packages.iter_mut().find(|p| p.name == name)
    }

    /// First module with the given name, scanning packages then modules in
    /// insertion order. Module names are only unique within their package;
    /// when two packages carry a module of the same name the earlier
    /// package wins.
    pub fn module_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.packages
            .iter_mut()
            .flat_map(|p| p.modules.iter_mut())
            .find(|m| m.name == name)
    }

    /// Stamp the last-modified time.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }
}
