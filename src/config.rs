use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::variables::VariableRegistry;

const REGISTRY_FILE: &str = "variables.json";

/// Per-user registry file.
pub fn global_registry_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("varedit").join(REGISTRY_FILE);
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("varedit")
                .join(REGISTRY_FILE);
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("varedit").join(REGISTRY_FILE);
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("varedit")
                .join(REGISTRY_FILE);
        }
    }

    local_registry_path()
}

/// Registry overrides in the working directory.
pub fn local_registry_path() -> PathBuf {
    PathBuf::from(".varedit-variables.json")
}

/// Load a registry file. A missing file is an empty registry.
pub fn load_registry(path: &Path) -> Result<VariableRegistry> {
    if !path.exists() {
        return Ok(VariableRegistry::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry {}", path.display()))?;
    VariableRegistry::from_json(&content)
        .with_context(|| format!("Failed to parse registry {}", path.display()))
}

pub fn save_registry(path: &Path, registry: &VariableRegistry) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create registry dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(registry).context("Failed to encode registry")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("Failed to write registry {}", path.display()))
}

/// Global registry with local overrides merged over it.
pub fn load_effective_registry(global: &Path, local: &Path) -> Result<VariableRegistry> {
    let global_registry = load_registry(global)?;
    let local_registry = load_registry(local)?;
    let effective = global_registry.union(&local_registry);
    tracing::debug!(
        global = global_registry.len(),
        local = local_registry.len(),
        effective = effective.len(),
        "variable registry loaded"
    );
    Ok(effective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::Variable;
    use tempfile::tempdir;

    #[test]
    fn test_missing_registry_is_empty() {
        let dir = tempdir().unwrap();
        let registry = load_registry(&dir.path().join("nope.json")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_save_and_load_registry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(REGISTRY_FILE);
        let registry = VariableRegistry::new(vec![
            Variable::new("v1", "Name", "Alice"),
            Variable::new("v2", "City", "Paris"),
        ])
        .unwrap();

        save_registry(&path, &registry).unwrap();
        let loaded = load_registry(&path).unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REGISTRY_FILE);
        std::fs::write(&path, "not json").unwrap();
        let err = load_registry(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse registry"));
    }

    #[test]
    fn test_global_path_ends_with_registry_file() {
        assert!(global_registry_path().ends_with(REGISTRY_FILE)
            || global_registry_path() == local_registry_path());
    }
}
