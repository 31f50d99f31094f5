//! Replacement rules and target file descriptors

use crate::error::{SetupError, SetupResult};
use crate::resolve::ReplacementMapping;
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Text substitution capability the rewrite engine relies on
///
/// The engine never sees a concrete matcher, only this interface.
pub trait Substitute {
    /// Replace every occurrence in `haystack` with `value`, inserted verbatim
    fn substitute<'h>(&self, haystack: &'h str, value: &str) -> Cow<'h, str>;

    /// Whether at least one occurrence exists in `haystack`
    fn is_match(&self, haystack: &str) -> bool;
}

/// Flags applied when compiling a pattern matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl PatternFlags {
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }
}

/// How a rule finds the text it replaces
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact substring
    Literal(String),
    /// Compiled expression together with the flags it was built with
    Pattern { regex: Regex, flags: PatternFlags },
}

impl Matcher {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn pattern(expression: &str, flags: PatternFlags) -> SetupResult<Self> {
        let regex = RegexBuilder::new(expression)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .build()
            .map_err(|source| SetupError::Pattern {
                pattern: expression.to_string(),
                source,
            })?;
        Ok(Self::Pattern { regex, flags })
    }

    /// Source text of the matcher, for diagnostics
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Literal(text) => text,
            Matcher::Pattern { regex, .. } => regex.as_str(),
        }
    }
}

impl Substitute for Matcher {
    fn substitute<'h>(&self, haystack: &'h str, value: &str) -> Cow<'h, str> {
        match self {
            // An empty literal would match between every character
            Matcher::Literal(text) if text.is_empty() => Cow::Borrowed(haystack),
            Matcher::Literal(text) => {
                if haystack.contains(text.as_str()) {
                    Cow::Owned(haystack.replace(text.as_str(), value))
                } else {
                    Cow::Borrowed(haystack)
                }
            }
            Matcher::Pattern { regex, .. } => regex.replace_all(haystack, NoExpand(value)),
        }
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Matcher::Literal(text) => !text.is_empty() && haystack.contains(text.as_str()),
            Matcher::Pattern { regex, .. } => regex.is_match(haystack),
        }
    }
}

/// A matcher paired with the placeholder whose value replaces each match
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub matcher: Matcher,
    pub placeholder: String,
}

impl ReplacementRule {
    pub fn new(matcher: Matcher, placeholder: impl Into<String>) -> Self {
        Self {
            matcher,
            placeholder: placeholder.into(),
        }
    }

    /// Bracketed token rule: `[NAME]` is replaced by the value of `NAME`
    pub fn token(name: &str) -> Self {
        Self::new(Matcher::literal(format!("[{}]", name)), name)
    }

    pub fn literal(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::new(Matcher::literal(text), placeholder)
    }

    pub fn pattern(
        expression: &str,
        flags: PatternFlags,
        placeholder: impl Into<String>,
    ) -> SetupResult<Self> {
        Ok(Self::new(Matcher::pattern(expression, flags)?, placeholder))
    }

    /// Apply this rule once. Placeholders without a value leave the text as is.
    pub fn apply<'c>(&self, content: &'c str, mapping: &ReplacementMapping) -> Cow<'c, str> {
        match mapping.get(&self.placeholder) {
            Some(value) => self.matcher.substitute(content, value),
            None => {
                log::debug!(
                    "No value for {}, leaving '{}' untouched",
                    self.placeholder,
                    self.matcher.as_str()
                );
                Cow::Borrowed(content)
            }
        }
    }
}

/// A file under the project root and the ordered rules applied to it
#[derive(Debug, Clone)]
pub struct TargetFile {
    pub path: PathBuf,
    pub rules: Vec<ReplacementRule>,
}

impl TargetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: ReplacementRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append one bracketed-token rule per name, in order
    pub fn tokens(mut self, names: &[&str]) -> Self {
        self.rules
            .extend(names.iter().map(|name| ReplacementRule::token(name)));
        self
    }

    pub fn relative_path(&self) -> &Path {
        &self.path
    }
}
