//! Locale-keyed message formatting
//!
//! The `MessageFormat` trait is the seam to whatever renders a message for a
//! locale and a message id. The contract is deliberately narrow so that any
//! conforming implementation satisfies it; `TableFormat`, a plain table
//! lookup, is the one shipped here.

use crate::document::Document;
use crate::locale::canonicalize_tag;
use crate::report::{Diagnostic, Reporter};
use crate::{DEFAULT_LANGUAGE, LanguageTable};

use crate::binder::DEFAULT_MARKER;

/// Locale-aware message rendering capability
///
/// # Arguments to `render`
///
/// * `locale` - Locale tag the message should be rendered for
/// * `key` - Message identifier
/// * `args` - Positional arguments; implementations without interpolation
///   support ignore them
///
/// # Returns
///
/// The rendered text, or `None` when the locale or the key is unknown to
/// the formatter.
pub trait MessageFormat {
    fn render(&self, locale: &str, key: &str, args: &[String]) -> Option<String>;
}

/// `MessageFormat` backed by a language table
///
/// Renders a message by flat lookup and ignores arguments. Table tags are
/// canonicalized on construction so lookups and stored entries agree on
/// spelling.
#[derive(Debug, Clone, Default)]
pub struct TableFormat {
    table: LanguageTable,
}

impl TableFormat {
    pub fn new(table: LanguageTable) -> Self {
        let table = table
            .into_iter()
            .map(|(tag, messages)| (canonicalize_tag(&tag), messages))
            .collect();
        TableFormat { table }
    }
}

impl MessageFormat for TableFormat {
    fn render(&self, locale: &str, key: &str, _args: &[String]) -> Option<String> {
        self.table
            .get(&canonicalize_tag(locale))
            .and_then(|messages| messages.get_message(key))
            .cloned()
    }
}

/// Binder resolving marked elements through a `MessageFormat`
///
/// The attribute-keyed traversal is the same as `Binder`'s; resolution is
/// delegated to the formatter, keyed by the active locale. Since the
/// formatter is opaque, an initial tag can only fall back when it is empty;
/// an unknown locale is only observable as per-key misses on the next
/// `translate` pass, exactly like `set_locale` with an unknown tag.
pub struct FormatBinder<F> {
    format: F,
    locale: String,
    marker: String,
}

impl<F: MessageFormat> FormatBinder<F> {
    /// Bind a formatter to an initial locale
    ///
    /// An empty initial tag resolves to the default tag.
    pub fn new(format: F, initial: &str) -> Self {
        let canonical = canonicalize_tag(initial);
        FormatBinder {
            format,
            locale: if canonical.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                canonical
            },
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Change the marker attribute holding message identifiers
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self
    }

    /// Rebind the formatter to another locale's entries
    ///
    /// Unconditional; an unknown locale surfaces as per-key misses on the
    /// next `translate` pass.
    pub fn set_locale(&mut self, tag: &str) {
        self.locale = canonicalize_tag(tag);
    }

    /// The active locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Render every marked element's message id under the active locale
    ///
    /// Identical pass semantics to `Binder::translate`: hits overwrite the
    /// element text, misses leave it untouched and emit one diagnostic.
    /// Message ids are rendered with no arguments.
    pub fn translate(&self, doc: &mut dyn Document, reporter: &mut dyn Reporter) {
        for node in doc.select_marked(&self.marker) {
            if let Some(key) = doc.attribute(node, &self.marker) {
                match self.format.render(&self.locale, &key, &[]) {
                    Some(text) => doc.set_text(node, &text),
                    None => reporter.report(Diagnostic::MissingKey {
                        key,
                        language: Some(self.locale.clone()),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Messages;
    use crate::document::DomTree;
    use crate::report::RecordingReporter;

    fn greeting_format() -> TableFormat {
        let mut en = Messages::new();
        en.with_message("hello", "Hello");
        let mut uk = Messages::new();
        uk.with_message("hello", "Привіт");

        let mut table = LanguageTable::new();
        table.insert("en-US".to_string(), en);
        table.insert("uk-UA".to_string(), uk);
        TableFormat::new(table)
    }

    fn marked_doc() -> (DomTree, crate::document::NodeId) {
        let mut doc = DomTree::new();
        let heading = doc.add_element(doc.root(), "h1");
        doc.set_attribute(heading, "data-i18n", "hello");
        doc.set_text(heading, "placeholder");
        (doc, heading)
    }

    #[test]
    fn test_table_format_lookup() {
        let format = greeting_format();
        assert_eq!(
            format.render("uk-UA", "hello", &[]),
            Some("Привіт".to_string())
        );
        assert_eq!(format.render("uk-UA", "bye", &[]), None);
        assert_eq!(format.render("fr", "hello", &[]), None);
    }

    #[test]
    fn test_table_format_canonicalizes_tags() {
        let format = greeting_format();
        // Stored as "uk-UA", looked up as "uk-ua"
        assert_eq!(
            format.render("uk-ua", "hello", &[]),
            Some("Привіт".to_string())
        );
    }

    #[test]
    fn test_format_binder_translates() {
        let binder = FormatBinder::new(greeting_format(), "uk-UA");
        let (mut doc, heading) = marked_doc();
        let mut recorder = RecordingReporter::new();

        binder.translate(&mut doc, &mut recorder);
        assert_eq!(doc.text(heading), "Привіт");
        assert!(recorder.diagnostics.is_empty());
    }

    #[test]
    fn test_set_locale_rebinds() {
        let mut binder = FormatBinder::new(greeting_format(), "uk-UA");
        let (mut doc, heading) = marked_doc();
        let mut recorder = RecordingReporter::new();

        binder.translate(&mut doc, &mut recorder);
        assert_eq!(doc.text(heading), "Привіт");

        binder.set_locale("en-US");
        binder.translate(&mut doc, &mut recorder);
        assert_eq!(doc.text(heading), "Hello");
    }

    #[test]
    fn test_unknown_locale_cascades_as_misses() {
        let mut binder = FormatBinder::new(greeting_format(), "uk-UA");
        binder.set_locale("de-DE");
        assert_eq!(binder.locale(), "de-DE");

        let (mut doc, heading) = marked_doc();
        let mut recorder = RecordingReporter::new();
        binder.translate(&mut doc, &mut recorder);

        assert_eq!(doc.text(heading), "placeholder");
        assert_eq!(recorder.missing_keys(), vec!["hello"]);
    }

    #[test]
    fn test_empty_initial_tag_falls_back() {
        let binder = FormatBinder::new(greeting_format(), "");
        assert_eq!(binder.locale(), "en");
    }

    #[test]
    fn test_any_conforming_formatter_satisfies_the_binder() {
        // A formatter that shouts every key, no table behind it
        struct Upcase;
        impl MessageFormat for Upcase {
            fn render(&self, _locale: &str, key: &str, _args: &[String]) -> Option<String> {
                Some(key.to_uppercase())
            }
        }

        let binder = FormatBinder::new(Upcase, "en");
        let (mut doc, heading) = marked_doc();
        binder.translate(&mut doc, &mut RecordingReporter::new());
        assert_eq!(doc.text(heading), "HELLO");
    }
}
