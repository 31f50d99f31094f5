//! Line-oriented question/answer channel and the answer collector

use crate::catalog::DefaultCatalog;
use crate::error::{SetupError, SetupResult};
use std::collections::{HashMap, VecDeque};
use std::io::{self, BufRead, Write};

/// A blocking request/response channel: show a prompt, get one line back
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompter over any reader/writer pair (stdin/stdout when not on a terminal)
///
/// End of input is read as an empty answer, i.e. "accept the default".
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Answers every question with an empty line (non-interactive mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        log::debug!("Accepting default for: {}", prompt);
        Ok(String::new())
    }
}

/// Replays a fixed list of answers; running out is an error
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for '{}'", prompt),
            )
        })
    }
}

/// One named question of the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Field the answer is stored under
    pub field: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Question {
    pub const fn new(field: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { field, label, icon }
    }

    /// Prompt text with the current default shown for information only
    pub fn prompt_text(&self, default: Option<&str>) -> String {
        match default {
            Some(default) => format!("{} {} (default: \"{}\")", self.icon, self.label, default),
            None => format!("{} {}", self.icon, self.label),
        }
    }
}

/// Raw answers keyed by field name, exactly as typed (trimmed)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<String, String>,
}

impl Answers {
    pub fn insert(&mut self, field: impl Into<String>, answer: impl Into<String>) {
        self.values.insert(field.into(), answer.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = Self::default();
        for (field, answer) in iter {
            answers.insert(field, answer);
        }
        answers
    }
}

/// Ask every question in order and return the raw answers
///
/// Defaults are only displayed; an empty answer is stored as empty and left
/// for the resolver to fill in.
pub fn collect_answers<P: Prompter + ?Sized>(
    prompter: &mut P,
    questions: &[Question],
    defaults: &DefaultCatalog,
) -> SetupResult<Answers> {
    let mut answers = Answers::default();
    for question in questions {
        let prompt = question.prompt_text(defaults.get(question.field));
        let answer = prompter.ask(&prompt).map_err(SetupError::Prompt)?;
        answers.insert(question.field, answer.trim());
    }
    Ok(answers)
}
