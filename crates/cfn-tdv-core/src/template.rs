//! Parsed template documents.
//!
//! A template is held as a tree of [`Node`]s: mappings, sequences, scalars and
//! tagged values. Tagged values keep the short-form intrinsic function tags
//! (`!ImportValue`, `!Sub`, `!Ref`, ...) distinguishable from plain data so that
//! `Fn::ImportValue: Name` and `!ImportValue Name` can be recognized as the same
//! construct.
//!
//! The [`Visitor`] trait walks a tree without copying it. Default method
//! implementations perform the full recursive traversal, so implementors only
//! override the callbacks they care about.

use indexmap::IndexMap;

/// A scalar leaf of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Numbers are kept in their textual form.
    Number(String),
    String(String),
}

/// A custom-tagged value such as `!ImportValue VpcId`.
///
/// The tag is stored without its leading `!`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    tag: String,
    value: Node,
}

impl Tagged {
    /// Create a tagged value. A leading `!` on `tag` is stripped.
    pub fn new(tag: impl Into<String>, value: Node) -> Self {
        let tag = tag.into();
        let tag = match tag.strip_prefix('!') {
            Some(stripped) => stripped.to_string(),
            None => tag,
        };
        Self { tag, value }
    }

    /// Returns the tag name without the leading `!`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the tagged value.
    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// A node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    /// Mapping entries in document order.
    Mapping(IndexMap<String, Node>),
    Tagged(Box<Tagged>),
}

impl Node {
    /// Create a string scalar node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(value.into()))
    }

    /// Create a tagged node.
    pub fn tagged(tag: impl Into<String>, value: Node) -> Self {
        Node::Tagged(Box::new(Tagged::new(tag, value)))
    }

    /// Create a mapping node from key/value pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns the string value if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the text of a string, number or boolean scalar.
    ///
    /// Intrinsic functions treat an unquoted `2024` or `true` as the literal
    /// name `"2024"` or `"true"`.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(value) | Scalar::Number(value)) => Some(value),
            Node::Scalar(Scalar::Bool(true)) => Some("true"),
            Node::Scalar(Scalar::Bool(false)) => Some("false"),
            _ => None,
        }
    }

    /// Returns the entries if this node is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` if this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// Returns `true` if this node is the null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Scalar::Null)
    }
}

/// One input template: its display name and its parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    name: String,
    root: Node,
}

impl TemplateDocument {
    /// Create a document from its display name (a file name, not a full path)
    /// and its root node.
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Returns the display name of the template.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the root node of the template.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Visitor trait for read-only traversal of a [`Node`] tree.
///
/// Each default method recurses into its children, so every reachable node
/// is visited no matter which key it sits under or how deep it is.
pub trait Visitor {
    /// Visit any node, dispatching on its variant.
    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Scalar(scalar) => self.visit_scalar(scalar),
            Node::Sequence(items) => self.visit_sequence(items),
            Node::Mapping(entries) => self.visit_mapping(entries),
            Node::Tagged(tagged) => self.visit_tagged(tagged),
        }
    }

    /// Visit a scalar leaf.
    fn visit_scalar(&mut self, scalar: &Scalar) {
        if let Scalar::String(value) = scalar {
            self.visit_string(value);
        }
    }

    /// Visit a string scalar.
    fn visit_string(&mut self, _value: &str) {}

    /// Visit every element of a sequence.
    fn visit_sequence(&mut self, items: &[Node]) {
        for item in items {
            self.visit_node(item);
        }
    }

    /// Visit every entry of a mapping.
    fn visit_mapping(&mut self, entries: &IndexMap<String, Node>) {
        for (key, value) in entries {
            self.visit_entry(key, value);
        }
    }

    /// Visit a single mapping entry.
    fn visit_entry(&mut self, _key: &str, value: &Node) {
        self.visit_node(value);
    }

    /// Visit a tagged value.
    fn visit_tagged(&mut self, tagged: &Tagged) {
        self.visit_node(tagged.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StringCollector {
        strings: Vec<String>,
        tags: Vec<String>,
    }

    impl Visitor for StringCollector {
        fn visit_string(&mut self, value: &str) {
            self.strings.push(value.to_string());
        }

        fn visit_tagged(&mut self, tagged: &Tagged) {
            self.tags.push(tagged.tag().to_string());
            self.visit_node(tagged.value());
        }
    }

    #[test]
    fn test_tagged_strips_bang() {
        let tagged = Tagged::new("!ImportValue", Node::string("VpcId"));
        assert_eq!(tagged.tag(), "ImportValue");

        let tagged = Tagged::new("Sub", Node::string("x"));
        assert_eq!(tagged.tag(), "Sub");
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::mapping([("Name", Node::string("VpcId"))]);

        assert_eq!(node.get("Name").and_then(Node::as_str), Some("VpcId"));
        assert!(node.get("Missing").is_none());
        assert!(Node::string("x").get("Name").is_none());
        assert!(Node::default().is_null());
    }

    #[test]
    fn test_as_literal() {
        assert_eq!(Node::string("VpcId").as_literal(), Some("VpcId"));
        assert_eq!(
            Node::Scalar(Scalar::Number("2024".to_string())).as_literal(),
            Some("2024")
        );
        assert_eq!(Node::Scalar(Scalar::Bool(true)).as_literal(), Some("true"));
        assert_eq!(Node::Scalar(Scalar::Bool(false)).as_literal(), Some("false"));
        assert_eq!(Node::default().as_literal(), None);
        assert_eq!(Node::tagged("Sub", Node::string("x")).as_literal(), None);
        assert_eq!(Node::Sequence(vec![]).as_literal(), None);
    }

    #[test]
    fn test_visitor_reaches_every_string() {
        let root = Node::mapping([
            (
                "Resources",
                Node::mapping([(
                    "Bucket",
                    Node::mapping([(
                        "Properties",
                        Node::mapping([(
                            "Tags",
                            Node::Sequence(vec![
                                Node::string("a"),
                                Node::tagged("!Sub", Node::string("b")),
                            ]),
                        )]),
                    )]),
                )]),
            ),
            ("Count", Node::Scalar(Scalar::Number("3".to_string()))),
            ("Description", Node::string("c")),
        ]);

        let mut collector = StringCollector::default();
        collector.visit_node(&root);

        assert_eq!(collector.strings, vec!["a", "b", "c"]);
        assert_eq!(collector.tags, vec!["Sub"]);
    }

    #[test]
    fn test_document_accessors() {
        let doc = TemplateDocument::new("vpc.yml", Node::default());
        assert_eq!(doc.name(), "vpc.yml");
        assert!(doc.root().is_null());
    }
}
