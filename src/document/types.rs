//! Core document types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, VareditError};

/// Attribute bag carried by nodes and marks.
pub type Attrs = Map<String, Value>;

/// Node type discriminator.
///
/// The set is closed for everything the serializer understands. Anything
/// else round-trips through [`NodeKind::Other`] and is serialized as a
/// pass-through of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Doc,
    Paragraph,
    Heading,
    BulletList,
    OrderedList,
    ListItem,
    Bold,
    Italic,
    Strike,
    Code,
    CodeBlock,
    Blockquote,
    TextStyle,
    Text,
    Variable,
    HardBreak,
    HorizontalRule,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Doc => "doc",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::BulletList => "bulletList",
            Self::OrderedList => "orderedList",
            Self::ListItem => "listItem",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strike => "strike",
            Self::Code => "code",
            Self::CodeBlock => "codeBlock",
            Self::Blockquote => "blockquote",
            Self::TextStyle => "textStyle",
            Self::Text => "text",
            Self::Variable => "variable",
            Self::HardBreak => "hardBreak",
            Self::HorizontalRule => "horizontalRule",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        match name {
            "doc" => Self::Doc,
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "bulletList" => Self::BulletList,
            "orderedList" => Self::OrderedList,
            "listItem" => Self::ListItem,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "strike" => Self::Strike,
            "code" => Self::Code,
            "codeBlock" => Self::CodeBlock,
            "blockquote" => Self::Blockquote,
            "textStyle" => Self::TextStyle,
            "text" => Self::Text,
            "variable" => Self::Variable,
            "hardBreak" => Self::HardBreak,
            "horizontalRule" => Self::HorizontalRule,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline mark applied to a text node (bold, italic, color...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
        }
    }

    /// A `textStyle` mark carrying a color.
    pub fn color(color: &str) -> Self {
        let mut attrs = Attrs::new();
        attrs.insert("color".to_string(), Value::String(color.to_string()));
        Self {
            kind: NodeKind::TextStyle,
            attrs,
        }
    }
}

/// One node of a structured document snapshot.
///
/// The shape matches the editing engine's JSON snapshot (`type`, `attrs`,
/// `content`, `text`, `marks`), so a snapshot deserializes directly. The
/// tree is read-only to this crate: mutations go through
/// [`crate::surface::EditingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Attrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl DocumentNode {
    /// Create a node with no attributes or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
            content: Vec::new(),
            text: None,
            marks: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn element(kind: NodeKind, content: Vec<Self>) -> Self {
        Self {
            content,
            ..Self::new(kind)
        }
    }

    pub fn doc(content: Vec<Self>) -> Self {
        Self::element(NodeKind::Doc, content)
    }

    pub fn paragraph(content: Vec<Self>) -> Self {
        Self::element(NodeKind::Paragraph, content)
    }

    pub fn heading(level: u8, content: Vec<Self>) -> Self {
        Self::element(NodeKind::Heading, content).with_attr("level", level)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    /// Inline variable placeholder carrying `{id, label}`.
    pub fn variable(id: &str, label: &str) -> Self {
        Self::new(NodeKind::Variable)
            .with_attr("id", id)
            .with_attr("label", label)
    }

    /// Parse an engine JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(VareditError::Snapshot)
    }

    #[must_use]
    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    /// String attribute, or `None` when absent or not a string.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        attr_str(&self.attrs, key)
    }

    /// Unsigned integer attribute. Numeric strings are accepted.
    pub fn attr_u64(&self, key: &str) -> Option<u64> {
        match self.attrs.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Text | NodeKind::Variable)
    }
}

pub(crate) fn attr_str<'a>(attrs: &'a Attrs, key: &str) -> Option<&'a str> {
    attrs.get(key).and_then(Value::as_str)
}
