//! Placeholder rewriting of project files
//!
//! This module provides:
//! - Replacement rules, matchers and target file descriptors
//! - The in-place rewrite engine
//! - Package manifest normalization

pub mod engine;
pub mod package;
pub mod rule;

pub use engine::{apply_rules, rewrite_file, rewrite_targets, FileReport, RunResult};
pub use package::{normalize_package_file, slugify, split_keywords, FALLBACK_PACKAGE_NAME};
pub use rule::{Matcher, PatternFlags, ReplacementRule, Substitute, TargetFile};
