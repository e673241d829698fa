//! Class and text matched substitution
//!
//! Some pages carry no key attribute at all; the only handle on an element
//! is the class it belongs to and the text it currently shows. A rule list
//! pairs a class with a source text and the destination text to write in
//! its place. Rule files are plain JSON arrays, one object per rule.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::report::{Diagnostic, Reporter};

/// One record of a class/text substitution table
///
/// # Example
///
/// ```ignore
/// let rule: TextRule = serde_json::from_str(
///     r#"{"class": "menu-item", "source": "Steak", "destination": "Стейк"}"#,
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRule {
    /// Class the target elements carry
    pub class: String,
    /// Text to match against the element's current text, case-insensitively
    pub source: String,
    /// Replacement text
    pub destination: String,
}

impl TextRule {
    pub fn new(class: &str, source: &str, destination: &str) -> Self {
        TextRule {
            class: class.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }

    fn matches(&self, doc: &dyn Document, node: crate::document::NodeId) -> bool {
        doc.has_class(node, &self.class) && text_eq_ignore_case(&doc.text(node), &self.source)
    }
}

// Unicode-aware, "Pork Ribs" matches "PORK RIBS" and "Привіт" matches "ПРИВІТ".
fn text_eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Apply a rule list to a document
///
/// Each candidate element is visited once and the rule list is scanned in
/// order; the first rule whose class the element carries and whose source
/// text equals the element's current text wins, and its destination text is
/// written. An element that carries a rule class but matches no source text
/// is left untouched and reported as unmatched.
///
/// Matching always runs against the text the element had when it was
/// visited, and no element is visited twice, so a destination that happens
/// to equal another rule's source is not rewritten again within the pass.
pub fn apply_rules(doc: &mut dyn Document, rules: &[TextRule], reporter: &mut dyn Reporter) {
    let mut visited: Vec<crate::document::NodeId> = Vec::new();

    for rule in rules {
        for node in doc.select_class(&rule.class) {
            if visited.contains(&node) {
                continue;
            }
            visited.push(node);

            // First matching rule wins, in rule-list order
            match rules.iter().find(|candidate| candidate.matches(doc, node)) {
                Some(winner) => doc.set_text(node, &winner.destination),
                None => reporter.report(Diagnostic::UnmatchedText {
                    class: rule.class.clone(),
                    text: doc.text(node),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DomTree, NodeId};
    use crate::report::RecordingReporter;

    fn menu_doc() -> (DomTree, NodeId, NodeId) {
        let mut doc = DomTree::new();
        let list = doc.add_element(doc.root(), "ul");
        let ribs = doc.add_element(list, "li");
        doc.add_class(ribs, "menu-item");
        doc.set_text(ribs, "Pork Ribs");
        let steak = doc.add_element(list, "li");
        doc.add_class(steak, "menu-item");
        doc.set_text(steak, "Steak");
        (doc, ribs, steak)
    }

    fn menu_rules() -> Vec<TextRule> {
        vec![
            TextRule::new("menu-item", "Pork Ribs", "Свинині ребра"),
            TextRule::new("menu-item", "Steak", "Стейк"),
        ]
    }

    #[test]
    fn test_menu_substitution() {
        let (mut doc, ribs, steak) = menu_doc();
        let mut recorder = RecordingReporter::new();

        apply_rules(&mut doc, &menu_rules(), &mut recorder);

        assert_eq!(doc.text(ribs), "Свинині ребра");
        assert_eq!(doc.text(steak), "Стейк");
        assert!(recorder.diagnostics.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (mut doc, ribs, steak) = menu_doc();
        doc.set_text(ribs, "PORK RIBS");
        doc.set_text(steak, "steak");

        apply_rules(&mut doc, &menu_rules(), &mut RecordingReporter::new());

        assert_eq!(doc.text(ribs), "Свинині ребра");
        assert_eq!(doc.text(steak), "Стейк");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let (mut doc, ribs, _) = menu_doc();
        let rules = vec![
            TextRule::new("menu-item", "Pork Ribs", "перший"),
            TextRule::new("menu-item", "Pork Ribs", "другий"),
        ];

        apply_rules(&mut doc, &rules, &mut RecordingReporter::new());
        assert_eq!(doc.text(ribs), "перший");
    }

    #[test]
    fn test_unmatched_text_is_reported_and_untouched() {
        let (mut doc, _, steak) = menu_doc();
        doc.set_text(steak, "Salmon");
        let mut recorder = RecordingReporter::new();

        apply_rules(&mut doc, &menu_rules(), &mut recorder);

        assert_eq!(doc.text(steak), "Salmon");
        assert_eq!(
            recorder.diagnostics,
            vec![Diagnostic::UnmatchedText {
                class: "menu-item".to_string(),
                text: "Salmon".to_string(),
            }]
        );
    }

    #[test]
    fn test_destination_equal_to_other_source_is_not_rewritten() {
        // "Steak" -> "Pork Ribs" -> would match the second rule if elements
        // were visited twice; each element is rewritten at most once.
        let (mut doc, ribs, steak) = menu_doc();
        let rules = vec![
            TextRule::new("menu-item", "Steak", "Pork Ribs"),
            TextRule::new("menu-item", "Pork Ribs", "Стейк"),
        ];

        apply_rules(&mut doc, &rules, &mut RecordingReporter::new());

        assert_eq!(doc.text(ribs), "Стейк");
        assert_eq!(doc.text(steak), "Pork Ribs");
    }

    #[test]
    fn test_rules_spanning_classes() {
        let mut doc = DomTree::new();
        let title = doc.add_element(doc.root(), "h2");
        doc.add_class(title, "section-title");
        doc.set_text(title, "Menu");
        let list = doc.add_element(doc.root(), "ul");
        let item = doc.add_element(list, "li");
        doc.add_class(item, "menu-item");
        doc.set_text(item, "Steak");

        let rules = vec![
            TextRule::new("section-title", "Menu", "Меню"),
            TextRule::new("menu-item", "Steak", "Стейк"),
        ];
        apply_rules(&mut doc, &rules, &mut RecordingReporter::new());

        assert_eq!(doc.text(title), "Меню");
        assert_eq!(doc.text(item), "Стейк");
    }

    #[test]
    fn test_rule_deserialization() {
        let json = r#"[
            {"class": "menu-item", "source": "Pork Ribs", "destination": "Свинині ребра"},
            {"class": "menu-item", "source": "Steak", "destination": "Стейк"}
        ]"#;
        let rules: Vec<TextRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules, menu_rules());
    }
}
