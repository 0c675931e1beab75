use std::path::Path;

use anyhow::Result;

use crate::domain::catalog::{Framework, Variant};
use crate::domain::model::OverwriteDecision;

/// Interactive prompt seam. Every method returns `Ok(None)` when the user
/// cancels (Esc / Ctrl+C); the orchestrator unwinds to the cancelled
/// outcome without further side effects.
pub trait UserPrompt {
    fn input_project_name(&self, default: &str) -> Result<Option<String>>;

    fn select_overwrite(&self, target_dir: &str) -> Result<Option<OverwriteDecision>>;

    /// Prompts for a manifest-safe package name, pre-filled with
    /// `suggestion` and re-validated on submission.
    fn input_package_name(&self, suggestion: &str) -> Result<Option<String>>;

    /// When `invalid_template` is set, the prompt is headed by an error
    /// message naming the unrecognized `--template` value.
    fn select_framework(&self, invalid_template: Option<&str>)
        -> Result<Option<&'static Framework>>;

    fn select_variant(&self, framework: &'static Framework) -> Result<Option<&'static Variant>>;
}

/// Retrieves a named template's file tree into `dest`.
pub trait TemplateFetcher {
    fn fetch(&self, template: &str, dest: &Path) -> Result<()>;
}

/// Spawns an external generator command with inherited stdio and reports
/// its exit code (`None` when the child was killed by a signal).
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Option<i32>>;
}
