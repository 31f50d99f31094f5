//! The setup run: defaults, questions, resolution, rewrite, cleanup

use crate::catalog::{CatalogSource, DefaultCatalog};
use crate::cleanup::{confirm_and_remove, CleanupOutcome};
use crate::profile::SetupProfile;
use crate::prompt::{collect_answers, Prompter};
use crate::resolve::{build_mapping, resolve, ReplacementMapping};
use crate::rewrite::{
    normalize_package_file, rewrite_targets, FileReport, RunResult, FALLBACK_PACKAGE_NAME,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Where progress of a run is shown
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn success(&mut self, message: &str);
    fn file(&mut self, report: &FileReport);
    fn next_steps(&mut self, steps: &[String]);
}

/// Plain colored lines on stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{}", message.blue());
    }

    fn warning(&mut self, message: &str) {
        println!("{}", message.yellow());
    }

    fn success(&mut self, message: &str) {
        println!("{}", message.green().bold());
    }

    fn file(&mut self, report: &FileReport) {
        println!("{}", file_line(report));
    }

    fn next_steps(&mut self, steps: &[String]) {
        println!();
        println!("{}", "Next steps:".blue());
        for (i, step) in steps.iter().enumerate() {
            println!("{}. {}", i + 1, step);
        }
        println!();
    }
}

/// Console line for one target outcome
pub fn file_line(report: &FileReport) -> String {
    match report.result {
        RunResult::Updated => format!("Updated {}", report.path.display())
            .green()
            .to_string(),
        RunResult::SkippedMissing => format!("Skipping {} (not found)", report.path.display())
            .yellow()
            .to_string(),
    }
}

/// Inputs of a run that do not come from the profile
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Project root the target paths are resolved against
    pub root: PathBuf,
    /// Catalog location overriding the environment and profile default
    pub catalog: Option<String>,
    /// Setup artifact offered for deletion at the end
    pub script: PathBuf,
}

/// Everything a completed run did
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub mapping: ReplacementMapping,
    pub files: Vec<FileReport>,
    pub package: Option<RunResult>,
    pub cleanup: CleanupOutcome,
}

/// Run the whole setup against `prompter`
///
/// Strictly sequential. The first failure aborts; earlier rewrites are kept.
pub async fn run_setup<C, P, R>(
    config: &C,
    options: &SetupOptions,
    prompter: &mut P,
    reporter: &mut R,
) -> Result<SetupReport>
where
    C: SetupProfile,
    P: Prompter + ?Sized,
    R: Reporter + ?Sized,
{
    let targets = config.targets().context("Invalid target file configuration")?;
    let defaults = load_defaults(config, options, reporter).await?;

    reporter.info("Please provide the following information to customize your project:");
    let answers = collect_answers(prompter, &config.questions(), &defaults)?;
    let mapping = build_mapping(&config.fields(), &answers, &defaults);
    log::debug!("Resolved {} placeholder value(s)", mapping.len());

    reporter.info("Updating project files...");
    let files = rewrite_targets(&options.root, &targets, &mapping, |report| {
        reporter.file(report)
    })
    .await?;

    let package = match config.package_manifest() {
        Some(manifest) => {
            let name = resolve([
                mapping.get(config.project_name_field()),
                Some(FALLBACK_PACKAGE_NAME),
            ])
            .unwrap_or_else(|| FALLBACK_PACKAGE_NAME.to_string());
            Some(normalize_package_file(&options.root, Path::new(manifest), &name).await?)
        }
        None => None,
    };

    reporter.success("Setup complete!");
    reporter.next_steps(&config.next_steps());

    let cleanup = confirm_and_remove(prompter, &options.script).await?;
    match cleanup {
        CleanupOutcome::Deleted => reporter.success("Setup script deleted"),
        CleanupOutcome::AlreadyGone => reporter.warning(&format!(
            "{} was already removed",
            options.script.display()
        )),
        CleanupOutcome::Kept => {}
    }

    Ok(SetupReport {
        mapping,
        files,
        package,
        cleanup,
    })
}

async fn load_defaults<C, R>(
    config: &C,
    options: &SetupOptions,
    reporter: &mut R,
) -> Result<DefaultCatalog>
where
    C: SetupProfile,
    R: Reporter + ?Sized,
{
    let source = CatalogSource::from_profile(config, &options.root, options.catalog.as_deref());
    match DefaultCatalog::load(&source, config.user_agent()).await? {
        Some(catalog) => {
            log::debug!("Using {} default(s) from {}", catalog.len(), source);
            Ok(catalog)
        }
        None => {
            reporter.warning(&format!(
                "No default catalog at {}, continuing without defaults",
                source
            ));
            Ok(DefaultCatalog::default())
        }
    }
}
