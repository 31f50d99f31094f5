//! Staging a clean copy of the template to try the setup on
//!
//! Mirrors what a "use this template" copy would contain: VCS metadata,
//! dependencies, build output, logs and local env files are left behind.

use crate::error::{SetupError, SetupResult};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Entries never copied into a staged template
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    ".DS_Store",
    "*.log",
    ".env",
    ".env.local",
];

/// Directory name used next to the template root when none is given
pub const DEFAULT_STAGE_DIR: &str = "test-template-project";

/// Check a single path component against the exclusion patterns
fn matches_any(component: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| {
        if let Some(suffix) = pattern.strip_prefix('*') {
            // Suffix match: *.log matches npm-debug.log
            component.ends_with(suffix)
        } else {
            component == *pattern
        }
    })
}

/// Whether any component of a root-relative path is excluded
pub fn is_excluded(relative: &Path, patterns: &[&str]) -> bool {
    relative
        .components()
        .any(|c| matches_any(&c.as_os_str().to_string_lossy(), patterns))
}

fn canonical(path: &Path) -> SetupResult<PathBuf> {
    fs::canonicalize(path).map_err(|source| SetupError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Sibling directory of `root` used for staging
///
/// `root` is resolved first, so `.` stages next to the current directory
/// rather than inside it.
pub fn default_stage_dir(root: &Path) -> SetupResult<PathBuf> {
    let root = canonical(root)?;
    root.parent()
        .map(|parent| parent.join(DEFAULT_STAGE_DIR))
        .ok_or_else(|| SetupError::MissingFile(root.join("..")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub destination: PathBuf,
    pub files_copied: usize,
    /// A previous staged copy was removed first
    pub replaced_existing: bool,
}

/// Copy `root` into `destination`, replacing any previous copy
pub fn stage_template(
    root: &Path,
    destination: &Path,
    excludes: &[&str],
) -> SetupResult<StageReport> {
    let root = canonical(root)?;
    let replaced_existing = destination.exists();
    if replaced_existing {
        fs::remove_dir_all(destination).map_err(|source| SetupError::Remove {
            path: destination.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(destination).map_err(|source| SetupError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    // Both sides canonical so a destination inside the root is recognised
    let destination = canonical(destination)?;

    let mut files_copied = 0;
    let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
        if entry.path() == destination {
            return false;
        }
        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        !is_excluded(relative, excludes)
    });

    for entry in walker {
        let entry = entry.map_err(|err| SetupError::Read {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.clone()),
            source: std::io::Error::from(err),
        })?;

        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| SetupError::Write {
                path: target.clone(),
                source,
            })?;
        } else if entry.path().is_file() {
            fs::copy(entry.path(), &target).map_err(|source| SetupError::Write {
                path: target.clone(),
                source,
            })?;
            files_copied += 1;
        } else {
            log::debug!("Skipping non-file entry {}", entry.path().display());
        }
    }

    Ok(StageReport {
        destination,
        files_copied,
        replaced_existing,
    })
}
