//! Vue Setup - Interactive customization of the Vue 3 project template

mod profile;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use profile::VueTemplate;
use setup_core::staging::default_stage_dir;
use setup_core::tui::SetupArgs;
use setup_core::SetupProfile;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "vue-setup")]
#[command(about = "Interactive setup for the Vue 3 project template")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the template placeholders (default)
    Setup(CliSetupArgs),
    /// Set every <lastmod> in sitemap.xml to today's date
    UpdateSitemap(RootArgs),
    /// Copy the template next to itself to try the setup on a clean checkout
    Stage(StageArgs),
    /// Check that no placeholders are left after setup
    Verify(RootArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliSetupArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Default catalog file or URL (overrides VUE_SETUP_CONFIG)
    #[arg(short, long)]
    pub config: Option<String>,

    /// File offered for deletion at the end (defaults to this executable)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Accept every default without prompting (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliSetupArgs> for SetupArgs {
    fn from(args: CliSetupArgs) -> Self {
        SetupArgs {
            root: args.root,
            catalog: args.config,
            script: args.script,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RootArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StageArgs {
    /// Template root to copy (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Destination (defaults to ../test-template-project)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    log::debug!("Parsed arguments: {:?}", args);

    let result = dispatch(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error during setup:").red(), e);
        std::process::exit(1);
    }
}

async fn dispatch(args: Args) -> Result<()> {
    let config = VueTemplate;

    match args.command {
        Some(Command::Setup(setup_args)) => setup(&config, setup_args).await,
        Some(Command::UpdateSitemap(root_args)) => {
            update_sitemap(&config, &project_root(root_args.root)?).await
        }
        Some(Command::Stage(stage_args)) => stage(&config, stage_args),
        Some(Command::Verify(root_args)) => verify(&config, &project_root(root_args.root)?).await,
        // No subcommand provided, default to setup behavior (interactive mode)
        None => setup(&config, CliSetupArgs::default()).await,
    }
}

async fn setup(config: &VueTemplate, args: CliSetupArgs) -> Result<()> {
    setup_core::run(config, args.into()).await?;
    Ok(())
}

async fn update_sitemap(config: &VueTemplate, root: &Path) -> Result<()> {
    let today = setup_core::sitemap::today();
    let stamp =
        setup_core::update_sitemap(root, Path::new(config.sitemap_path()), today).await?;
    println!(
        "{}",
        style(format!("Sitemap updated with date: {}", stamp)).green()
    );
    Ok(())
}

fn stage(config: &VueTemplate, args: StageArgs) -> Result<()> {
    let root = project_root(args.root)?;
    let destination = match args.output {
        Some(output) => output,
        None => default_stage_dir(&root)?,
    };

    println!("{}", style("Creating test template copy...").yellow());
    let report = setup_core::stage_template(&root, &destination, config.staging_excludes())?;

    if report.replaced_existing {
        println!("{}", style("Cleaned up previous test directory").green());
    }
    println!(
        "{}",
        style(format!(
            "Copied {} template files to {}",
            report.files_copied,
            report.destination.display()
        ))
        .green()
    );

    println!();
    println!("{}", style("Next steps to test:").blue());
    let steps = [
        format!("cd {}", report.destination.display()),
        "npm install".to_string(),
        "vue-setup setup (test the setup)".to_string(),
        "npm run dev (test the development server)".to_string(),
        "npm run test (run the unit tests)".to_string(),
    ];
    for (i, step) in steps.iter().enumerate() {
        println!("{}. {}", i + 1, style(step).cyan());
    }
    println!();
    println!(
        "Tip: remove {} when finished",
        style(report.destination.display()).cyan()
    );

    Ok(())
}

async fn verify(config: &VueTemplate, root: &Path) -> Result<()> {
    let checks = setup_core::verify_project(config, root).await?;

    for check in checks.iter() {
        if check.passed {
            println!("{} {}", style("PASS").green(), check.message);
        } else {
            println!("{} {}", style("FAIL").red(), check.message);
        }
    }

    println!();
    println!(
        "Total: {}, Passed: {}, Failed: {}",
        checks.total(),
        checks.passed(),
        checks.failed()
    );

    if !checks.all_passed() {
        anyhow::bail!("{} check(s) failed", checks.failed());
    }
    Ok(())
}
