use clap::Parser;
use console::style;

use x_create::application::scaffold::{Outcome, ScaffoldArgs, ScaffoldUseCase};
use x_create::cli::Cli;
use x_create::infrastructure::fetcher::GitTemplateFetcher;
use x_create::infrastructure::prompt::DialoguerPrompt;
use x_create::infrastructure::runner::ProcessRunner;

fn main() {
    // dialoguer maps Ctrl+C to an interrupted read itself; the handler only
    // prevents an abrupt kill from leaving the terminal in raw mode.
    let _ = ctrlc::set_handler(|| {});

    let cli = Cli::parse();
    match run(cli) {
        Ok(Outcome::Scaffolded { .. }) => {}
        Ok(Outcome::Delegated { status }) => std::process::exit(status.unwrap_or(0)),
        Ok(Outcome::Cancelled) => {
            println!("{} Operation cancelled", style("✖").red());
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let use_case = ScaffoldUseCase::new(
        DialoguerPrompt::new(),
        GitTemplateFetcher::new(),
        ProcessRunner::new(),
    );
    let args = ScaffoldArgs {
        cwd: std::env::current_dir()?,
        target_dir: cli.target_dir,
        template: cli.template,
        overwrite: cli.overwrite.map(Into::into),
        user_agent: std::env::var("npm_config_user_agent").ok(),
    };
    use_case.execute(args)
}
