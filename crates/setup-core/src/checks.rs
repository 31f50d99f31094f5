//! Post-setup verification
//!
//! Checks accumulate in a [`Checks`] value. Every assertion consumes the
//! accumulator and hands back the extended one, so independent verifications
//! never share counters.

use crate::error::{SetupError, SetupResult};
use crate::profile::SetupProfile;
use crate::rewrite::slugify;
use regex::Regex;
use serde_json::Value;
use std::fmt::Debug;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static LEFTOVER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[A-Z][A-Z0-9_]*\]").unwrap());

/// One recorded assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub passed: bool,
    pub message: String,
}

/// Ordered record of assertions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checks {
    results: Vec<Check>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn assert(mut self, condition: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("{} {}", if condition { "pass" } else { "FAIL" }, message);
        self.results.push(Check {
            passed: condition,
            message,
        });
        self
    }

    #[must_use]
    pub fn assert_eq<T: PartialEq + Debug>(self, actual: T, expected: T, message: &str) -> Self {
        let passed = actual == expected;
        let message = if passed {
            message.to_string()
        } else {
            format!("{} (expected {:?}, got {:?})", message, expected, actual)
        };
        self.assert(passed, message)
    }

    /// Append another accumulator's results after this one's
    #[must_use]
    pub fn merge(mut self, other: Checks) -> Self {
        self.results.extend(other.results);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.results.iter()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Bracketed upper-case tokens still present in `content`, deduplicated in order
pub fn leftover_tokens(content: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for token in LEFTOVER_TOKEN.find_iter(content).map(|m| m.as_str()) {
        if !found.contains(&token) {
            found.push(token);
        }
    }
    found
}

/// Verify a project after setup: no leftover placeholders in any existing
/// target, and a normalized package manifest
pub async fn verify_project<C: SetupProfile>(config: &C, root: &Path) -> SetupResult<Checks> {
    let mut checks = Checks::new();

    for target in config.targets()? {
        let path = root.join(&target.path);
        let Some(content) = read_if_exists(&path).await? else {
            continue;
        };
        let leftovers = leftover_tokens(&content);
        let message = if leftovers.is_empty() {
            format!("{} has no leftover placeholders", target.path.display())
        } else {
            format!(
                "{} still contains {}",
                target.path.display(),
                leftovers.join(", ")
            )
        };
        checks = checks.assert(leftovers.is_empty(), message);
    }

    if let Some(manifest) = config.package_manifest() {
        let path = root.join(manifest);
        if let Some(content) = read_if_exists(&path).await? {
            checks = checks.merge(check_manifest(manifest, &content, &path)?);
        }
    }

    Ok(checks)
}

fn check_manifest(name: &str, content: &str, path: &Path) -> SetupResult<Checks> {
    let manifest: Value = serde_json::from_str(content).map_err(|e| SetupError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let package_name = manifest.get("name").and_then(Value::as_str).unwrap_or("");
    let keywords = manifest.get("keywords");

    Ok(Checks::new()
        .assert(!package_name.is_empty(), format!("{} has a name", name))
        .assert_eq(
            package_name.to_string(),
            slugify(package_name),
            &format!("{} name is a slug", name),
        )
        .assert(
            keywords.map_or(true, Value::is_array),
            format!("{} keywords is a list", name),
        ))
}

async fn read_if_exists(path: &Path) -> SetupResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SetupError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
