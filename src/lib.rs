use std::collections::HashMap;

pub mod binder;
pub mod document;
pub mod error;
pub mod format;
pub mod loader;
pub mod locale;
pub mod report;
pub mod resolver;
pub mod rules;

// Re-export the working surface for convenient access
pub use binder::{Binder, DEFAULT_MARKER};
pub use document::{Document, DomTree, NodeId};
pub use error::{LoadError, LoadResult};
pub use format::{FormatBinder, MessageFormat, TableFormat};
pub use loader::{
    load_messages_from_file, load_rules_from_file, load_table_from_dir, load_table_from_file,
};
pub use locale::{canonicalize_tag, is_valid_tag};
pub use report::{
    ConsoleReporter, Diagnostic, RecordingReporter, Reporter, SilentReporter, VerbosityLevel,
};
pub use resolver::{Resolution, Resolver};
pub use rules::{TextRule, apply_rules};

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Flat key to text mapping for one language
#[derive(Debug, Clone)]
pub struct Messages(pub HashMap<String, String>);

impl Messages {
    pub fn new() -> Self {
        Messages(HashMap::new())
    }

    pub fn with_message(&mut self, key: &str, text: &str) -> &mut Self {
        self.0.insert(key.to_owned(), text.to_owned());
        self
    }

    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    /// Lookup echoing the key itself when no entry exists
    pub fn get(&self, key: &str) -> String {
        self.0.get(key).unwrap_or(&key.to_string()).to_string()
    }

    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.0.get(key).unwrap_or(&default.to_string()).to_string()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keyed accessor over these messages
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::new()
    }
}

impl FromIterator<(String, String)> for Messages {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Messages(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for Messages {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Mapping from language tag to that language's messages
pub type LanguageTable = HashMap<String, Messages>;
