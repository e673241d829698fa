use crate::document::Document;
use crate::locale::canonicalize_tag;
use crate::report::{Diagnostic, Reporter};
use crate::resolver::Resolver;
use crate::{DEFAULT_LANGUAGE, LanguageTable, Messages};

/// Marker attribute consulted when none is configured
pub const DEFAULT_MARKER: &str = "data-i18n";

/// Attribute-keyed text binder
///
/// Holds a language-keyed message table and one active language tag. A
/// `translate` pass finds every element carrying the marker attribute, reads
/// the translation key from it, and overwrites the element's text with the
/// resolved message. Elements whose key is unknown under the active language
/// are left untouched and reported, so a pass never fails and can be re-run
/// at any time.
///
/// # Example
///
/// ```ignore
/// let mut uk = Messages::new();
/// uk.with_message("greeting", "Привіт");
///
/// let mut binder = Binder::new();
/// binder
///     .with_messages_for_language("uk", uk)
///     .with_language("uk");
/// binder.translate(&mut doc, &mut ConsoleReporter::new());
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    table: LanguageTable,
    language: String,
    default_language: String,
    marker: String,
}

impl Binder {
    /// Binder with an empty table, active on the default language
    pub fn new() -> Self {
        Binder {
            table: LanguageTable::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Binder over a single language's messages
    ///
    /// The messages are stored under the default tag, which is also the
    /// active language.
    pub fn from_messages(messages: Messages) -> Self {
        let mut binder = Binder::new();
        binder.with_messages_for_language(DEFAULT_LANGUAGE, messages);
        binder
    }

    /// Binder over a language table with an initial tag
    ///
    /// The initial tag follows the construction fallback: empty or not
    /// present in the table, the default tag is used instead.
    pub fn from_table(table: LanguageTable, initial: &str) -> Self {
        let mut binder = Binder::new();
        for (tag, messages) in table {
            binder.with_messages_for_language(&tag, messages);
        }
        binder.with_language(initial);
        binder
    }

    /// Change the marker attribute holding translation keys
    pub fn with_marker(&mut self, marker: &str) -> &mut Self {
        self.marker = marker.to_string();
        self
    }

    /// Change the tag used when an initial tag cannot be honored
    pub fn with_default_language(&mut self, tag: &str) -> &mut Self {
        self.default_language = canonicalize_tag(tag);
        self
    }

    /// Store messages under a language tag, replacing any previous entry
    pub fn with_messages_for_language(&mut self, tag: &str, messages: Messages) -> &mut Self {
        self.table.insert(canonicalize_tag(tag), messages);
        self
    }

    /// Select the initial language, with construction fallback
    ///
    /// An empty tag, or a tag with no entry in the table, resolves to the
    /// default language. Contrast with `set_language`, which replaces the
    /// active tag unconditionally.
    pub fn with_language(&mut self, tag: &str) -> &mut Self {
        let canonical = canonicalize_tag(tag);
        if !canonical.is_empty() && self.table.contains_key(&canonical) {
            self.language = canonical;
        } else {
            self.language = self.default_language.clone();
        }
        self
    }

    /// Replace the active language unconditionally
    ///
    /// The tag is not checked against the table. A tag with no entry only
    /// surfaces on the next `translate` pass, where every key under it
    /// reports as missing.
    pub fn set_language(&mut self, tag: &str) {
        self.language = canonicalize_tag(tag);
    }

    /// The active language tag
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Keyed accessor over the active language's messages
    pub fn resolver(&self) -> Resolver<'_> {
        match self.table.get(&self.language) {
            Some(messages) => Resolver::new(messages),
            None => Resolver::detached(),
        }
    }

    /// Resolve every marked element against the active language
    ///
    /// Elements are visited in document order. A hit overwrites the
    /// element's text; a miss leaves it untouched and emits one diagnostic
    /// naming the key and the active language. Re-running with unchanged
    /// state reproduces the same document.
    pub fn translate(&self, doc: &mut dyn Document, reporter: &mut dyn Reporter) {
        let entry = self.table.get(&self.language);
        for node in doc.select_marked(&self.marker) {
            if let Some(key) = doc.attribute(node, &self.marker) {
                match entry.and_then(|messages| messages.get_message(&key)) {
                    Some(text) => doc.set_text(node, text),
                    None => reporter.report(Diagnostic::MissingKey {
                        key,
                        language: Some(self.language.clone()),
                    }),
                }
            }
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Binder::new()
    }
}
