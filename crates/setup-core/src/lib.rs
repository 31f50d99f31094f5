//! Setup Core - Shared library for placeholder-driven template setup
//!
//! This library turns a freshly copied project template into a named project:
//! it seeds defaults from a catalog, asks a fixed list of questions, resolves
//! the answers into placeholder values and rewrites the template's files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Catalog loading, resolution, rule application, file rewriting
//! - **Layer 2: Workflow Orchestration** - `SetupProfile` trait and `run_setup` for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use setup_core::{run_setup, ConsoleReporter, ScriptedPrompter, SetupOptions};
//!
//! let mut prompter = ScriptedPrompter::new(["My App", "", "n"]);
//! let report = run_setup(&MyTemplate, &options, &mut prompter, &mut ConsoleReporter).await?;
//! ```

pub mod catalog;
pub mod checks;
pub mod cleanup;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod resolve;
pub mod rewrite;
pub mod setup;
pub mod sitemap;
pub mod staging;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{CatalogEntry, CatalogSource, DefaultCatalog};
pub use checks::{verify_project, Check, Checks};
pub use cleanup::CleanupOutcome;
pub use error::{SetupError, SetupResult};
pub use profile::SetupProfile;
pub use prompt::{AcceptDefaults, Answers, LinePrompter, Prompter, Question, ScriptedPrompter};
pub use resolve::{FieldSpec, ReplacementMapping};
pub use rewrite::{FileReport, PatternFlags, ReplacementRule, RunResult, TargetFile};
pub use setup::{run_setup, ConsoleReporter, Reporter, SetupOptions, SetupReport};
pub use sitemap::update_sitemap;
pub use staging::{stage_template, StageReport};

#[cfg(feature = "tui")]
pub use tui::run;
