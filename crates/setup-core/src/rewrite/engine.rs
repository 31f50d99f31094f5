//! In-place rewriting of target files

use crate::error::{SetupError, SetupResult};
use crate::resolve::ReplacementMapping;
use crate::rewrite::rule::{ReplacementRule, TargetFile};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What happened to one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    Updated,
    SkippedMissing,
}

/// Outcome of one target, keyed by its path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: RunResult,
}

/// Apply `rules` in order, each one to the output of the previous
pub fn apply_rules<'c>(
    content: &'c str,
    rules: &[ReplacementRule],
    mapping: &ReplacementMapping,
) -> Cow<'c, str> {
    let mut current = Cow::Borrowed(content);
    for rule in rules {
        let replaced = match rule.apply(&current, mapping) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = replaced {
            current = Cow::Owned(next);
        }
    }
    current
}

/// Rewrite one target under `root`
///
/// A missing file is skipped before any rule runs. Otherwise the whole file
/// is read, every rule applied, and the result written back once.
pub async fn rewrite_file(
    root: &Path,
    target: &TargetFile,
    mapping: &ReplacementMapping,
) -> SetupResult<RunResult> {
    let path = root.join(&target.path);

    let exists = fs::try_exists(&path)
        .await
        .map_err(|source| SetupError::Read {
            path: path.clone(),
            source,
        })?;
    if !exists {
        log::debug!("{} not found, skipping", path.display());
        return Ok(RunResult::SkippedMissing);
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| SetupError::Read {
            path: path.clone(),
            source,
        })?;

    let rewritten = apply_rules(&content, &target.rules, mapping);
    log::debug!(
        "Applied {} rule(s) to {} ({})",
        target.rules.len(),
        path.display(),
        if matches!(rewritten, Cow::Owned(_)) {
            "changed"
        } else {
            "unchanged"
        }
    );

    fs::write(&path, rewritten.as_bytes())
        .await
        .map_err(|source| SetupError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(RunResult::Updated)
}

/// Rewrite every target in declaration order, reporting each outcome as it lands
///
/// The first I/O failure aborts the loop. Files rewritten before it stay rewritten.
pub async fn rewrite_targets<F>(
    root: &Path,
    targets: &[TargetFile],
    mapping: &ReplacementMapping,
    mut on_report: F,
) -> SetupResult<Vec<FileReport>>
where
    F: FnMut(&FileReport),
{
    let mut reports = Vec::with_capacity(targets.len());

    for target in targets {
        let result = rewrite_file(root, target, mapping).await?;
        let report = FileReport {
            path: target.path.clone(),
            result,
        };
        on_report(&report);
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::rule::{PatternFlags, ReplacementRule};

    fn mapping(pairs: &[(&str, &str)]) -> ReplacementMapping {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_rules_compose_sequentially() {
        // The second rule only matches text produced by the first
        let rules = vec![
            ReplacementRule::token("A"),
            ReplacementRule::literal("step-two", "B"),
        ];
        let out = apply_rules("x [A] y", &rules, &mapping(&[("A", "step-two"), ("B", "done")]));
        assert_eq!(out, "x done y");
    }

    #[test]
    fn test_rules_without_values_borrow() {
        let rules = vec![ReplacementRule::token("A"), ReplacementRule::token("B")];
        let out = apply_rules("[A][B]", &rules, &mapping(&[]));
        assert!(matches!(out, Cow::Borrowed("[A][B]")));
    }

    #[tokio::test]
    async fn test_missing_file_is_skipped_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = TargetFile::new("robots.txt").tokens(&["PROJECT_URL"]);

        let result = rewrite_file(dir.path(), &target, &mapping(&[("PROJECT_URL", "x")]))
            .await
            .unwrap();

        assert_eq!(result, RunResult::SkippedMissing);
        assert!(!dir.path().join("robots.txt").exists());
    }

    #[tokio::test]
    async fn test_existing_file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("robots.txt"),
            "Sitemap: [PROJECT_URL]/sitemap.xml\nHost: [PROJECT_URL]\n",
        )
        .unwrap();
        let target = TargetFile::new("robots.txt").tokens(&["PROJECT_URL"]);

        let result = rewrite_file(
            dir.path(),
            &target,
            &mapping(&[("PROJECT_URL", "https://acme.dev")]),
        )
        .await
        .unwrap();

        assert_eq!(result, RunResult::Updated);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("robots.txt")).unwrap(),
            "Sitemap: https://acme.dev/sitemap.xml\nHost: https://acme.dev\n"
        );
    }

    #[tokio::test]
    async fn test_targets_report_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/App.vue"), "<h1>[PROJECT_NAME]</h1>").unwrap();
        std::fs::write(dir.path().join("tailwind.config.js"), "primary: '#3B82F6'").unwrap();

        let targets = vec![
            TargetFile::new("missing.html").tokens(&["PROJECT_NAME"]),
            TargetFile::new("src/App.vue").tokens(&["PROJECT_NAME"]),
            TargetFile::new("tailwind.config.js").rule(
                ReplacementRule::pattern("#3b82f6", PatternFlags::case_insensitive(), "COLOR")
                    .unwrap(),
            ),
        ];
        let mut seen = Vec::new();

        let reports = rewrite_targets(
            dir.path(),
            &targets,
            &mapping(&[("PROJECT_NAME", "Acme"), ("COLOR", "#112233")]),
            |report| seen.push(report.path.clone()),
        )
        .await
        .unwrap();

        let results: Vec<_> = reports.iter().map(|r| r.result).collect();
        assert_eq!(
            results,
            [
                RunResult::SkippedMissing,
                RunResult::Updated,
                RunResult::Updated
            ]
        );
        assert_eq!(seen.len(), 3);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("src/App.vue")).unwrap(),
            "<h1>Acme</h1>"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap(),
            "primary: '#112233'"
        );
    }

    #[tokio::test]
    async fn test_unreadable_file_aborts_after_earlier_writes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "[X]").unwrap();
        // Invalid UTF-8 cannot be read as text
        std::fs::write(dir.path().join("b.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let targets = vec![
            TargetFile::new("a.txt").tokens(&["X"]),
            TargetFile::new("b.txt").tokens(&["X"]),
        ];
        let err = rewrite_targets(dir.path(), &targets, &mapping(&[("X", "done")]), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::Read { .. }));
        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "done");
    }
}
