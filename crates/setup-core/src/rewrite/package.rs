//! Post-processing of the package manifest (`package.json`)
//!
//! Runs after the generic rewrite pass: the package name becomes a slug of
//! the project name and a comma-delimited `keywords` string becomes a list.
//! Both steps are idempotent.

use crate::error::{SetupError, SetupResult};
use crate::rewrite::engine::RunResult;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

/// Package name used when no project name was resolved
pub const FALLBACK_PACKAGE_NAME: &str = "my-vue-app";

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase and collapse every run of non `[a-z0-9]` characters into one `-`
pub fn slugify(name: &str) -> String {
    NON_ALPHANUMERIC_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Split on commas and trim each keyword; empty pieces are dropped
pub fn split_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize manifest text, returning the re-serialized document
pub fn normalize_manifest(content: &str, project_name: &str) -> Result<String, String> {
    let mut manifest: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    fields.insert("name".to_string(), Value::String(slugify(project_name)));

    let keywords = match fields.get("keywords") {
        Some(Value::String(keywords)) => Some(split_keywords(keywords)),
        _ => None,
    };
    if let Some(keywords) = keywords {
        let list = keywords.into_iter().map(Value::String).collect();
        fields.insert("keywords".to_string(), Value::Array(list));
    }

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())?;
    out.push('\n');
    Ok(out)
}

/// Normalize the manifest at `root/relative` if it exists
pub async fn normalize_package_file(
    root: &Path,
    relative: &Path,
    project_name: &str,
) -> SetupResult<RunResult> {
    let path = root.join(relative);

    let exists = fs::try_exists(&path)
        .await
        .map_err(|source| SetupError::Read {
            path: path.clone(),
            source,
        })?;
    if !exists {
        return Ok(RunResult::SkippedMissing);
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| SetupError::Read {
            path: path.clone(),
            source,
        })?;

    let normalized =
        normalize_manifest(&content, project_name).map_err(|message| SetupError::Parse {
            path: path.clone(),
            message,
        })?;

    fs::write(&path, normalized)
        .await
        .map_err(|source| SetupError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(RunResult::Updated)
}
