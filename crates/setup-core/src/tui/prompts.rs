//! Charm-style CLI prompts using cliclack

use crate::prompt::{AcceptDefaults, LinePrompter, Prompter};
use crate::profile::SetupProfile;
use crate::rewrite::{FileReport, RunResult};
use crate::setup::{run_setup, ConsoleReporter, Reporter, SetupOptions, SetupReport};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Project root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Default catalog path or URL
    pub catalog: Option<String>,

    /// Setup artifact offered for deletion (defaults to the running executable)
    pub script: Option<PathBuf>,

    /// Accept every default without asking (non-interactive mode)
    pub yes: bool,
}

impl SetupArgs {
    fn into_options(self) -> Result<SetupOptions> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let script = match self.script {
            Some(script) => script,
            None => std::env::current_exe().context("Failed to locate the setup executable")?,
        };
        Ok(SetupOptions {
            root,
            catalog: self.catalog,
            script,
        })
    }
}

/// Single-line input; empty answers are allowed and mean "accept default"
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, prompt: &str) -> std::io::Result<String> {
        cliclack::input(prompt).required(false).interact()
    }
}

/// Progress shown through cliclack's log lines
pub struct ClackReporter;

impl Reporter for ClackReporter {
    fn info(&mut self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warning(&mut self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn success(&mut self, message: &str) {
        let _ = cliclack::log::success(message);
    }

    fn file(&mut self, report: &FileReport) {
        let _ = match report.result {
            RunResult::Updated => {
                cliclack::log::success(format!("Updated {}", report.path.display()))
            }
            RunResult::SkippedMissing => cliclack::log::warning(format!(
                "Skipping {} (not found)",
                report.path.display()
            )),
        };
    }

    fn next_steps(&mut self, steps: &[String]) {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
        println!();
    }
}

/// Run the setup with interactive prompts
///
/// Uses cliclack on a terminal, plain line prompts when stdin is piped, and
/// no prompts at all with `yes`.
pub async fn run<C: SetupProfile>(config: &C, args: SetupArgs) -> Result<SetupReport> {
    let yes = args.yes;
    let options = args.into_options()?;

    if yes {
        println!("{} Setup (accepting defaults)", config.display_name());
        return run_setup(config, &options, &mut AcceptDefaults, &mut ConsoleReporter).await;
    }

    if !std::io::stdin().is_terminal() {
        println!("{} Setup", config.display_name());
        let mut prompter = LinePrompter::stdio();
        return run_setup(config, &options, &mut prompter, &mut ConsoleReporter).await;
    }

    cliclack::intro(format!("{} Setup", config.display_name()))?;

    let report = run_setup(config, &options, &mut ClackPrompter, &mut ClackReporter).await?;

    cliclack::outro("Happy coding!")?;

    Ok(report)
}
