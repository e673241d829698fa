//! Diagnostic reporting for translation passes
//!
//! A translation pass never fails; elements whose key cannot be resolved are
//! left untouched and the condition is handed to a `Reporter`. The sink is
//! chosen by the caller: stderr for interactive use, an in-memory recorder
//! for tests, or nothing at all.

use std::fmt;

/// Verbosity level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// No diagnostic output
    Silent = 0,
    /// Report missing translations (default)
    Normal = 1,
    /// Additionally report unmatched rule text
    Verbose = 2,
}

/// A non-fatal condition observed during a translation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A matched element's key has no entry under the active language
    MissingKey {
        key: String,
        /// Active language tag, if the source is language-keyed
        language: Option<String>,
    },
    /// An element carries a rule class but its text matched no rule
    UnmatchedText { class: String, text: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingKey {
                key,
                language: Some(language),
            } => write!(
                f,
                "Missing translation for key '{}' in language '{}'",
                key, language
            ),
            Diagnostic::MissingKey { key, language: None } => {
                write!(f, "Missing translation for key '{}'", key)
            }
            Diagnostic::UnmatchedText { class, text } => write!(
                f,
                "No rule matched text '{}' under class '{}'",
                text, class
            ),
        }
    }
}

/// Sink for diagnostics emitted during a translation pass
///
/// Implementations must not fail; reporting is best-effort by contract.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Reporter that writes warnings to stderr
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    verbosity: VerbosityLevel,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter {
            verbosity: VerbosityLevel::Normal,
        }
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        ConsoleReporter { verbosity }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        ConsoleReporter::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let threshold = match diagnostic {
            Diagnostic::MissingKey { .. } => VerbosityLevel::Normal,
            Diagnostic::UnmatchedText { .. } => VerbosityLevel::Verbose,
        };
        if self.verbosity >= threshold {
            eprintln!("[dom-i18n] {}", diagnostic);
        }
    }
}

/// Reporter that keeps every diagnostic in memory, for tests
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        RecordingReporter::default()
    }

    /// Keys of all recorded `MissingKey` diagnostics, in emission order
    pub fn missing_keys(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::MissingKey { key, .. } => Some(key.as_str()),
                Diagnostic::UnmatchedText { .. } => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Reporter that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
