//! Refreshing `<lastmod>` dates in a sitemap

use crate::error::{SetupError, SetupResult};
use crate::resolve::ReplacementMapping;
use crate::rewrite::{rewrite_file, PatternFlags, ReplacementRule, RunResult, TargetFile};
use chrono::NaiveDate;
use std::path::Path;

const LASTMOD_PLACEHOLDER: &str = "LASTMOD";
const LASTMOD_PATTERN: &str = r"<lastmod>\d{4}-\d{2}-\d{2}</lastmod>";

/// Today's date in UTC
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Rewrite every `<lastmod>YYYY-MM-DD</lastmod>` in `root/relative` to `date`
///
/// Unlike the setup pass, a missing sitemap is an error here.
pub async fn update_sitemap(root: &Path, relative: &Path, date: NaiveDate) -> SetupResult<String> {
    let stamp = date.format("%Y-%m-%d").to_string();

    let target = TargetFile::new(relative).rule(ReplacementRule::pattern(
        LASTMOD_PATTERN,
        PatternFlags::default(),
        LASTMOD_PLACEHOLDER,
    )?);
    let mapping: ReplacementMapping =
        [(LASTMOD_PLACEHOLDER, format!("<lastmod>{}</lastmod>", stamp))]
            .into_iter()
            .collect();

    match rewrite_file(root, &target, &mapping).await? {
        RunResult::Updated => Ok(stamp),
        RunResult::SkippedMissing => Err(SetupError::MissingFile(root.join(relative))),
    }
}
