//! Lint checks for manifest documents
//!
//! Add operations already reject duplicate names within an owning entity,
//! but a manifest can also be edited by hand; these checks surface issues
//! in whatever document is on disk. Warnings only, never mutation errors.

use std::collections::HashMap;

use crate::models::Project;

/// Check for common manifest issues (lint-like checks)
pub fn lint_project(project: &Project) -> Vec<String> {
    let mut warnings = Vec::new();

    let name_re = regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*$").unwrap();
    let version_re = regex::Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap();

    check_name(&mut warnings, &name_re, "Project", &project.name);
    if project.description.is_empty() {
        warnings.push("Project has an empty description".to_string());
    }
    if !version_re.is_match(&project.version) {
        warnings.push(format!(
            "Project version '{}' is not a dotted number",
            project.version
        ));
    }
    if project.packages.is_empty() {
        warnings.push("Project has no packages".to_string());
    }

    for package in &project.packages {
        check_name(&mut warnings, &name_re, "Package", &package.name);
        if package.description.is_empty() {
            warnings.push(format!("{}: Package has an empty description", package.name));
        }
        if !version_re.is_match(&package.version) {
            warnings.push(format!(
                "{}: Package version '{}' is not a dotted number",
                package.name, package.version
            ));
        }
        if package.modules.is_empty() {
            warnings.push(format!("{}: Package has no modules", package.name));
        }

        for module in &package.modules {
            check_name(&mut warnings, &name_re, "Module", &module.name);
            if module.description.is_empty() {
                warnings.push(format!(
                    "{}/{}: Module has an empty description",
                    package.name, module.name
                ));
            }
            for file in &module.files {
                if file.name.is_empty() {
                    warnings.push(format!(
                        "{}/{}: File has an empty name",
                        package.name, module.name
                    ));
                }
            }
        }
    }

    // Module names repeated across packages are legal, but `add file`
    // targets the first match only, so repeats are worth flagging.
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for package in &project.packages {
        for module in &package.modules {
            if let Some(first) = seen.insert(&module.name, &package.name) {
                warnings.push(format!(
                    "Module name '{}' appears in both '{}' and '{}'; `add file` targets the first",
                    module.name, first, package.name
                ));
            }
        }
    }

    warnings
}

fn check_name(warnings: &mut Vec<String>, re: &regex::Regex, kind: &str, name: &str) {
    if name.is_empty() {
        warnings.push(format!("{kind} has an empty name"));
    } else if !re.is_match(name) {
        warnings.push(format!("{kind} name '{name}' has unusual characters"));
    }
}
