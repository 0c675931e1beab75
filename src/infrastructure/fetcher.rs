use std::path::Path;
use std::process::Command;

use anyhow::Result;

use crate::application::ports::TemplateFetcher;
use crate::domain::error::ScaffoldError;

use super::fs_util::copy_dir;

/// The fixed remote repository holding one subtree per template identifier.
pub const TEMPLATE_REPO: &str = "https://github.com/mu-mx/qs-template.git";

/// Fetches templates by shallow-cloning the template repository into a
/// scratch directory and copying out the requested subtree. The scratch
/// directory is dropped on every path, success or failure.
pub struct GitTemplateFetcher {
    remote: String,
}

impl GitTemplateFetcher {
    pub fn new() -> Self {
        Self::with_remote(TEMPLATE_REPO)
    }

    /// Points the fetcher at an alternate remote (tests use a local
    /// fixture repository).
    pub fn with_remote(remote: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
        }
    }
}

impl Default for GitTemplateFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFetcher for GitTemplateFetcher {
    fn fetch(&self, template: &str, dest: &Path) -> Result<()> {
        let scratch = tempfile::tempdir()
            .map_err(|e| ScaffoldError::fetch(template, format!("scratch dir: {e}")))?;
        let checkout = scratch.path().join("repo");

        let output = Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg(&self.remote)
            .arg(&checkout)
            .output()
            .map_err(|e| ScaffoldError::fetch(template, format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(
                ScaffoldError::fetch(template, format!("git clone failed: {}", stderr.trim()))
                    .into(),
            );
        }

        let subtree = checkout.join(template);
        if !subtree.is_dir() {
            return Err(ScaffoldError::fetch(
                template,
                format!("template not found in {}", self.remote),
            )
            .into());
        }

        copy_dir(&subtree, dest)
            .map_err(|e| ScaffoldError::fetch(template, format!("copy failed: {e}")))?;
        Ok(())
    }
}
