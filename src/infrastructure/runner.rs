use std::process::Command;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Runs external generator commands with inherited stdio so their own
/// prompts reach the terminal.
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run '{program}'"))?;
        Ok(status.code())
    }
}
