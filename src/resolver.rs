//! Direct keyed lookup without a document pass
//!
//! Callers that manage their own elements can resolve keys one at a time and
//! write the text themselves. A failed lookup is an ordinary value, not an
//! error: it carries the key and renders as a visible placeholder.

use std::fmt;

use crate::Messages;

/// Outcome of resolving one translation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key resolved to localized text
    Found(String),
    /// No entry for the key; carries the key itself
    Missing(String),
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The resolved text, or a placeholder embedding the missing key
    ///
    /// Missing keys render in the MediaWiki style: `⧼key⧽`.
    pub fn into_text(self) -> String {
        match self {
            Resolution::Found(text) => text,
            Resolution::Missing(key) => format!("⧼{}⧽", key),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Found(text) => write!(f, "{}", text),
            Resolution::Missing(key) => write!(f, "⧼{}⧽", key),
        }
    }
}

/// Keyed accessor over one language's messages
///
/// Borrow one from `Messages::resolver` or `Binder::resolver`; it performs
/// no document traversal.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    messages: Option<&'a Messages>,
}

impl<'a> Resolver<'a> {
    pub fn new(messages: &'a Messages) -> Self {
        Resolver {
            messages: Some(messages),
        }
    }

    /// Resolver with no backing entry; every key reports missing
    pub(crate) fn detached() -> Self {
        Resolver { messages: None }
    }

    pub fn resolve(&self, key: &str) -> Resolution {
        match self.messages.and_then(|m| m.get_message(key)) {
            Some(text) => Resolution::Found(text.clone()),
            None => Resolution::Missing(key.to_string()),
        }
    }
}
