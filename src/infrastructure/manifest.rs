use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::ScaffoldError;

/// Overwrites the `name` field of `<root>/package.json`, leaving every
/// other field as-is (key order included) and keeping the trailing newline.
pub fn patch_manifest_name(root: &Path, package_name: &str) -> Result<(), ScaffoldError> {
    let path = root.join("package.json");
    let raw = fs::read_to_string(&path).map_err(|e| ScaffoldError::manifest(&path, e))?;
    let mut manifest: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| ScaffoldError::manifest(&path, e))?;

    match manifest.as_object_mut() {
        Some(fields) => {
            fields.insert(
                "name".to_string(),
                serde_json::Value::String(package_name.to_string()),
            );
        }
        None => {
            let cause = std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "manifest is not a JSON object",
            );
            return Err(ScaffoldError::manifest(&path, cause));
        }
    }

    let serialized = serde_json::to_string_pretty(&manifest)
        .map_err(|e| ScaffoldError::manifest(&path, e))?;
    fs::write(&path, serialized + "\n").map_err(|e| ScaffoldError::manifest(&path, e))?;
    Ok(())
}

static REACT_PLUGIN_DEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""@vitejs/plugin-react": ".+?""#).unwrap());

/// Post-fetch patch for SWC-marked variants: swaps the default React build
/// plugin for its SWC-accelerated equivalent in package.json and the Vite
/// config. Best effort; a template without the expected files is left
/// alone.
pub fn setup_react_swc(root: &Path, is_ts: bool) -> Result<(), ScaffoldError> {
    let manifest_path = root.join("package.json");
    if let Ok(raw) = fs::read_to_string(&manifest_path) {
        let patched = REACT_PLUGIN_DEP
            .replace(&raw, r#""@vitejs/plugin-react-swc": "^3.5.0""#)
            .into_owned();
        fs::write(&manifest_path, patched)
            .map_err(|e| ScaffoldError::manifest(&manifest_path, e))?;
    }

    let config_path = root.join(if is_ts { "vite.config.ts" } else { "vite.config.js" });
    if let Ok(raw) = fs::read_to_string(&config_path) {
        let patched = raw.replace("@vitejs/plugin-react", "@vitejs/plugin-react-swc");
        fs::write(&config_path, patched)
            .map_err(|e| ScaffoldError::manifest(&config_path, e))?;
    }

    Ok(())
}
