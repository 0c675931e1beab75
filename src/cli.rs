use clap::{Parser, ValueEnum};

use crate::domain::catalog::FRAMEWORKS;
use crate::domain::model::OverwriteDecision;

#[derive(Parser, Debug)]
#[command(
    name = "x-create",
    version,
    about = "Scaffold a new project from the shared template repository",
    after_help = template_help()
)]
pub struct Cli {
    /// Target directory for the new project
    pub target_dir: Option<String>,

    /// Use a specific template, skipping the framework prompts
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Pre-answer the prompt shown when the target directory is not empty
    #[arg(long, value_enum, value_name = "CHOICE")]
    pub overwrite: Option<OverwriteArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteArg {
    /// Remove existing files and continue
    Yes,
    /// Cancel the operation
    No,
    /// Ignore existing files and continue
    Ignore,
}

impl From<OverwriteArg> for OverwriteDecision {
    fn from(arg: OverwriteArg) -> Self {
        match arg {
            OverwriteArg::Yes => OverwriteDecision::Clear,
            OverwriteArg::No => OverwriteDecision::Cancel,
            OverwriteArg::Ignore => OverwriteDecision::Ignore,
        }
    }
}

fn template_help() -> String {
    let mut help = String::from("Available templates:\n");
    for framework in FRAMEWORKS {
        for variant in framework.variants {
            help.push_str("  ");
            help.push_str(variant.name);
            help.push('\n');
        }
    }
    help
}
