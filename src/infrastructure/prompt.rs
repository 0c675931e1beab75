use std::io;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::application::ports::UserPrompt;
use crate::domain::catalog::{Framework, Variant, FRAMEWORKS};
use crate::domain::model::OverwriteDecision;
use crate::domain::name::is_valid_package_name;

pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Ctrl+C surfaces as an interrupted I/O error from dialoguer; both that
/// and Esc (`Ok(None)` from `interact_opt`) mean "user cancelled".
fn cancellable<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn cancellable_select(result: dialoguer::Result<Option<usize>>) -> Result<Option<usize>> {
    match result {
        Ok(selection) => Ok(selection),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl UserPrompt for DialoguerPrompt {
    fn input_project_name(&self, default: &str) -> Result<Option<String>> {
        cancellable(
            Input::<String>::with_theme(&theme())
                .with_prompt("Project name")
                .default(default.to_string())
                .interact_text(),
        )
    }

    fn select_overwrite(&self, target_dir: &str) -> Result<Option<OverwriteDecision>> {
        let subject = if target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{target_dir}\"")
        };
        let choices = [
            "Remove existing files and continue",
            "Cancel operation",
            "Ignore files and continue",
        ];
        let selection = cancellable_select(
            Select::with_theme(&theme())
                .with_prompt(format!(
                    "{subject} is not empty. Please choose how to proceed"
                ))
                .items(&choices)
                .default(0)
                .interact_opt(),
        )?;
        Ok(selection.map(|index| match index {
            0 => OverwriteDecision::Clear,
            1 => OverwriteDecision::Cancel,
            _ => OverwriteDecision::Ignore,
        }))
    }

    fn input_package_name(&self, suggestion: &str) -> Result<Option<String>> {
        cancellable(
            Input::<String>::with_theme(&theme())
                .with_prompt("Package name")
                .with_initial_text(suggestion)
                .validate_with(|input: &String| {
                    if is_valid_package_name(input) {
                        Ok(())
                    } else {
                        Err("Invalid package.json name")
                    }
                })
                .interact_text(),
        )
    }

    fn select_framework(
        &self,
        invalid_template: Option<&str>,
    ) -> Result<Option<&'static Framework>> {
        let prompt = match invalid_template {
            Some(name) => format!("\"{name}\" isn't a valid template. Please choose from below"),
            None => "Select a framework".to_string(),
        };
        let items: Vec<String> = FRAMEWORKS
            .iter()
            .map(|f| style(f.display).fg(f.color).to_string())
            .collect();
        let selection = cancellable_select(
            Select::with_theme(&theme())
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt(),
        )?;
        Ok(selection.map(|index| &FRAMEWORKS[index]))
    }

    fn select_variant(&self, framework: &'static Framework) -> Result<Option<&'static Variant>> {
        let items: Vec<String> = framework
            .variants
            .iter()
            .map(|v| style(v.display).fg(v.color).to_string())
            .collect();
        let selection = cancellable_select(
            Select::with_theme(&theme())
                .with_prompt("Select a variant")
                .items(&items)
                .default(0)
                .interact_opt(),
        )?;
        Ok(selection.map(|index| &framework.variants[index]))
    }
}
