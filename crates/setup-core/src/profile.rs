//! Template profile trait for setup binaries
//!
//! This trait defines the interface each project template must implement
//! to describe what its setup run asks, derives and rewrites.

use crate::error::SetupResult;
use crate::prompt::Question;
use crate::resolve::FieldSpec;
use crate::rewrite::TargetFile;
use crate::staging::DEFAULT_EXCLUDES;

/// Configuration trait for a project template
///
/// Each template implements this trait to define:
/// - Identity (name, display name)
/// - Where its default catalog lives
/// - The questions asked and how placeholder values are derived
/// - The files rewritten and the package manifest normalized afterwards
/// - Post-setup instructions
pub trait SetupProfile: Clone + Send + Sync + 'static {
    /// Internal template name (used for the user agent and logs)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default catalog location, relative to the project root or an http(s) URL
    fn catalog_location(&self) -> &'static str;

    /// Environment variable name for overriding the catalog location
    fn catalog_env(&self) -> &'static str;

    /// Questions asked, in order
    fn questions(&self) -> Vec<Question>;

    /// Every placeholder the run resolves and how
    fn fields(&self) -> Vec<FieldSpec>;

    /// Files rewritten, in reporting order
    fn targets(&self) -> SetupResult<Vec<TargetFile>>;

    /// Package manifest normalized after the rewrite pass
    fn package_manifest(&self) -> Option<&'static str> {
        Some("package.json")
    }

    /// Placeholder holding the project name the package slug is derived from
    fn project_name_field(&self) -> &'static str {
        "PROJECT_NAME"
    }

    /// Sitemap refreshed by `update-sitemap`
    fn sitemap_path(&self) -> &'static str {
        "sitemap.xml"
    }

    /// Entries left out when staging a copy of the template
    fn staging_excludes(&self) -> &'static [&'static str] {
        DEFAULT_EXCLUDES
    }

    /// "Next steps" shown after a successful run
    fn next_steps(&self) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
