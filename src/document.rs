//! Document tree access
//!
//! The binder never reaches for an ambient page. It is handed a `Document`
//! capability: enough of a tree to find elements by marker attribute or by
//! class and to overwrite their rendered text. A live DOM adapter and the
//! in-memory `DomTree` below both satisfy it, so every translation pass is
//! testable without a rendering engine.

use std::collections::HashMap;

/// Handle to one element inside a `Document`
///
/// Handles are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Capability to query and mutate a tree of elements
///
/// Enumeration methods return handles in depth-first document order, the
/// order a renderer would encounter the elements. Implementations are
/// synchronous and never fail; an unknown attribute or class simply yields
/// nothing.
pub trait Document {
    /// All elements carrying the attribute `marker`, in document order
    fn select_marked(&self, marker: &str) -> Vec<NodeId>;

    /// All elements carrying the class `class`, in document order
    fn select_class(&self, class: &str) -> Vec<NodeId>;

    /// Value of attribute `name` on `node`, if present
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Whether `node` carries the class `class`
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// The rendered text content of `node`
    fn text(&self, node: NodeId) -> String;

    /// Overwrite the rendered text content of `node`
    fn set_text(&mut self, node: NodeId, text: &str);
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    text: String,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }
}

/// In-memory element tree implementing `Document`
///
/// Nodes live in an arena and are addressed by `NodeId`; handles stay valid
/// for the life of the tree since nodes are never removed. Used by the demo
/// binary and as the test double for translation passes.
///
/// # Example
///
/// ```ignore
/// let mut doc = DomTree::new();
/// let heading = doc.add_element(doc.root(), "h1");
/// doc.set_attribute(heading, "data-i18n", "greeting");
/// ```
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Element>,
}

impl DomTree {
    /// Create a tree holding only a root element
    pub fn new() -> Self {
        DomTree {
            nodes: vec![Element::new("html")],
        }
    }

    /// Handle of the root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element under `parent` and return its handle
    pub fn add_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Tag name of `node`
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    // Preorder walk from the root, children in insertion order.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.walk_into(self.root(), &mut order);
        order
    }

    fn walk_into(&self, node: NodeId, order: &mut Vec<NodeId>) {
        order.push(node);
        for child in &self.nodes[node.0].children {
            self.walk_into(*child, order);
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        DomTree::new()
    }
}

impl Document for DomTree {
    fn select_marked(&self, marker: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| self.nodes[id.0].attributes.contains_key(marker))
            .collect()
    }

    fn select_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn text(&self, node: NodeId) -> String {
        self.nodes[node.0].text.clone()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }
}
