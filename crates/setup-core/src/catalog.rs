//! Default catalog loading from a local file or a remote URL
//!
//! The catalog is an ordered list of `{search, replace}` records. Each
//! record's `search` names a placeholder and `replace` holds its default value.
//! A catalog that does not exist is not an error: the run simply has no defaults.

use crate::error::{SetupError, SetupResult};
use crate::profile::SetupProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// One seed record of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub search: String,
    pub replace: String,
}

/// Serialization format of a catalog resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Guess the format from a file name or URL path; JSON unless it ends in .yaml/.yml
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }

    pub fn parse(self, content: &str) -> Result<Vec<CatalogEntry>, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Where the default catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// Interpret a location: `http(s)://` URLs are remote, anything else is a
    /// path relative to `root` (absolute paths are kept as-is)
    pub fn parse(location: &str, root: &Path) -> Self {
        if let Ok(url) = Url::parse(location) {
            if matches!(url.scheme(), "http" | "https") {
                return Self::Remote(url);
            }
        }
        Self::Local(root.join(location))
    }

    /// Pick the catalog location: explicit override, then the profile's
    /// environment variable, then the profile default
    pub fn from_profile<C: SetupProfile>(config: &C, root: &Path, explicit: Option<&str>) -> Self {
        let env = std::env::var(config.catalog_env()).ok();
        Self::choose(config, root, explicit, env.as_deref())
    }

    /// Empty candidates are skipped at every step
    fn choose<C: SetupProfile>(
        config: &C,
        root: &Path,
        explicit: Option<&str>,
        env: Option<&str>,
    ) -> Self {
        let location = [explicit, env]
            .into_iter()
            .flatten()
            .find(|location| !location.is_empty())
            .unwrap_or(config.catalog_location());
        Self::parse(location, root)
    }

    fn format(&self) -> CatalogFormat {
        match self {
            Self::Remote(url) => CatalogFormat::from_name(url.path()),
            Self::Local(path) => CatalogFormat::from_name(&path.to_string_lossy()),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Placeholder name to default value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultCatalog {
    values: HashMap<String, String>,
}

impl DefaultCatalog {
    /// Build from records; a later record for the same name wins
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.search, entry.replace))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load the catalog, returning `None` when the resource does not exist
    pub async fn load(source: &CatalogSource, user_agent: &str) -> SetupResult<Option<Self>> {
        let content = match source {
            CatalogSource::Local(path) => match read_local(path).await? {
                Some(content) => content,
                None => return Ok(None),
            },
            CatalogSource::Remote(url) => match fetch_remote(url, user_agent).await? {
                Some(content) => content,
                None => return Ok(None),
            },
        };

        let entries = source
            .format()
            .parse(&content)
            .map_err(|message| SetupError::Parse {
                path: PathBuf::from(source.to_string()),
                message,
            })?;
        log::debug!("Loaded {} catalog entries from {}", entries.len(), source);

        Ok(Some(Self::from_entries(entries)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DefaultCatalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

async fn read_local(path: &Path) -> SetupResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SetupError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn fetch_remote(url: &Url, user_agent: &str) -> SetupResult<Option<String>> {
    let fetch_error = |message: String| SetupError::Fetch {
        url: url.to_string(),
        message,
    };

    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;
    Ok(Some(body))
}
