//! Turning raw answers and catalog defaults into the final replacement mapping

use crate::catalog::DefaultCatalog;
use crate::prompt::Answers;
use std::collections::BTreeMap;

/// Pick the first candidate that is present and non-empty
///
/// This is the single tie-break used everywhere a value can come from more
/// than one place (answer, catalog default, hard-coded fallback).
pub fn resolve<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.as_ref().is_empty())
        .map(|candidate| candidate.as_ref().to_string())
}

/// Strip every trailing slash from a URL
pub fn normalize_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// How a placeholder's value is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// The answer to the question of the same name, then the catalog default
    Asked,
    /// Only the catalog default; never asked
    DefaultOnly,
    /// Like `Asked`, then normalized with [`normalize_url`]
    Url,
    /// Copies the resolved value of another field
    FanOut(&'static str),
}

/// A placeholder name and how to derive its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub derivation: Derivation,
}

impl FieldSpec {
    pub const fn asked(name: &'static str) -> Self {
        Self {
            name,
            derivation: Derivation::Asked,
        }
    }

    pub const fn default_only(name: &'static str) -> Self {
        Self {
            name,
            derivation: Derivation::DefaultOnly,
        }
    }

    pub const fn url(name: &'static str) -> Self {
        Self {
            name,
            derivation: Derivation::Url,
        }
    }

    pub const fn fan_out(name: &'static str, from: &'static str) -> Self {
        Self {
            name,
            derivation: Derivation::FanOut(from),
        }
    }
}

/// Resolved placeholder values for one run
///
/// Only non-empty values are stored; a lookup miss means "leave the text".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMapping {
    values: BTreeMap<String, String>,
}

impl ReplacementMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; empty values are ignored
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(name.into(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}

/// Build the replacement mapping for the declared fields
///
/// Fan-out fields are resolved after every other field, so their source may
/// be declared anywhere in `fields`.
pub fn build_mapping(
    fields: &[FieldSpec],
    answers: &Answers,
    defaults: &DefaultCatalog,
) -> ReplacementMapping {
    let mut mapping = ReplacementMapping::new();

    for field in fields {
        let value = match field.derivation {
            Derivation::Asked => resolve([answers.get(field.name), defaults.get(field.name)]),
            Derivation::DefaultOnly => resolve([defaults.get(field.name)]),
            Derivation::Url => resolve([answers.get(field.name), defaults.get(field.name)])
                .map(|url| normalize_url(&url).to_string()),
            Derivation::FanOut(_) => continue,
        };
        if let Some(value) = value {
            mapping.insert(field.name, value);
        }
    }

    for field in fields {
        if let Derivation::FanOut(source) = field.derivation {
            if let Some(value) = mapping.get(source).map(str::to_string) {
                mapping.insert(field.name, value);
            }
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(pairs: &[(&str, &str)]) -> DefaultCatalog {
        pairs.iter().copied().collect()
    }

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_resolve_first_non_empty_wins() {
        assert_eq!(resolve([None, Some(""), Some("b"), Some("c")]), Some("b".into()));
        assert_eq!(resolve([Some("a"), Some("b")]), Some("a".into()));
        assert_eq!(resolve::<_, &str>([None, Some("")]), None);
    }

    #[test]
    fn test_empty_answer_accepts_default() {
        let fields = [FieldSpec::asked("PROJECT_NAME")];
        let mapping = build_mapping(
            &fields,
            &answers(&[("PROJECT_NAME", "")]),
            &defaults(&[("PROJECT_NAME", "Foo")]),
        );
        assert_eq!(mapping.get("PROJECT_NAME"), Some("Foo"));
    }

    #[test]
    fn test_answer_overrides_default() {
        let fields = [FieldSpec::asked("AUTHOR_NAME")];
        let mapping = build_mapping(
            &fields,
            &answers(&[("AUTHOR_NAME", "Ada")]),
            &defaults(&[("AUTHOR_NAME", "Someone")]),
        );
        assert_eq!(mapping.get("AUTHOR_NAME"), Some("Ada"));
    }

    #[test]
    fn test_color_fans_out() {
        let fields = [
            FieldSpec::fan_out("HEX_TILE_COLOR", "HEX_THEME_COLORS"),
            FieldSpec::asked("HEX_THEME_COLORS"),
            FieldSpec::fan_out("HEX_THEME_COLOR", "HEX_THEME_COLORS"),
        ];
        let mapping = build_mapping(
            &fields,
            &answers(&[("HEX_THEME_COLORS", "#112233")]),
            &defaults(&[("HEX_THEME_COLORS", "#3b82f6")]),
        );
        assert_eq!(mapping.get("HEX_TILE_COLOR"), Some("#112233"));
        assert_eq!(mapping.get("HEX_THEME_COLOR"), Some("#112233"));
    }

    #[test]
    fn test_default_only_ignores_answers() {
        let fields = [FieldSpec::default_only("PROJECT_KEYWORDS")];
        let mapping = build_mapping(
            &fields,
            &answers(&[("PROJECT_KEYWORDS", "ignored")]),
            &defaults(&[("PROJECT_KEYWORDS", "vue, spa")]),
        );
        assert_eq!(mapping.get("PROJECT_KEYWORDS"), Some("vue, spa"));
    }

    #[test]
    fn test_url_trailing_slashes_are_stripped() {
        assert_eq!(normalize_url("https://example.com///"), "https://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");

        let fields = [FieldSpec::url("PROJECT_URL")];
        let mapping = build_mapping(
            &fields,
            &answers(&[]),
            &defaults(&[("PROJECT_URL", "https://example.com/")]),
        );
        assert_eq!(mapping.get("PROJECT_URL"), Some("https://example.com"));
    }

    #[test]
    fn test_url_of_only_slashes_is_absent() {
        let fields = [FieldSpec::url("PROJECT_URL")];
        let mapping = build_mapping(&fields, &answers(&[("PROJECT_URL", "//")]), &defaults(&[]));
        assert!(!mapping.contains("PROJECT_URL"));
    }

    #[test]
    fn test_unresolvable_field_is_absent() {
        let fields = [
            FieldSpec::asked("GTM_ID"),
            FieldSpec::fan_out("HEX_TILE_COLOR", "HEX_THEME_COLORS"),
        ];
        let mapping = build_mapping(&fields, &answers(&[]), &defaults(&[]));
        assert!(mapping.is_empty());
    }
}
