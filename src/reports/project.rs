//! Project identity resolution.

use std::{fs, path::Path};

use toml::Value;

/// Resolve a stable identifier for the build unit rooted at `project_root`.
///
/// The package name from the nearest `Cargo.toml` wins, walking up from the
/// project root and stopping at `.git`. When no manifest names a package,
/// the root directory's name is used instead.
pub fn project_identifier(project_root: &Path) -> String {
    if let Some(name) = manifest_package_name(project_root) {
        return name;
    }

    project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

fn manifest_package_name(start_dir: &Path) -> Option<String> {
    let mut current = start_dir.to_path_buf();

    loop {
        let manifest_path = current.join("Cargo.toml");
        if manifest_path.exists() {
            if let Some(name) = package_name_in(&manifest_path) {
                return Some(name);
            }
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

fn package_name_in(manifest_path: &Path) -> Option<String> {
    let content = fs::read_to_string(manifest_path).ok()?;
    let manifest: Value = content.parse().ok()?;

    manifest
        .get("package")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}
