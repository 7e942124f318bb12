//! Document-to-HTML serialization.
//!
//! A depth-first walk in document order. Each node type maps to a fixed
//! wrapper; types without one (the root `doc`, unknown types) contribute
//! only their children.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::document::types::{Attrs, DocumentNode, NodeKind, attr_str};
use crate::variables::VariableRegistry;

/// Glyph prefixed to variable labels in raw output.
pub const VARIABLE_GLYPH: &str = "❴•❵";

/// How variable placeholders are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlMode {
    /// Keep placeholders as visible `<span class="variable">` markers.
    Raw,
    /// Substitute each placeholder with its registry value.
    Rendered,
}

impl HtmlMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Rendered => "rendered",
        }
    }
}

/// Serialize `node` to an HTML fragment.
pub fn serialize(node: &DocumentNode, registry: &VariableRegistry, mode: HtmlMode) -> String {
    HtmlSerializer::new(registry, mode).serialize(node)
}

/// Serializer bound to a registry and a mode.
#[derive(Debug, Clone, Copy)]
pub struct HtmlSerializer<'a> {
    registry: &'a VariableRegistry,
    mode: HtmlMode,
}

impl<'a> HtmlSerializer<'a> {
    pub const fn new(registry: &'a VariableRegistry, mode: HtmlMode) -> Self {
        Self { registry, mode }
    }

    pub const fn mode(&self) -> HtmlMode {
        self.mode
    }

    pub fn serialize(&self, node: &DocumentNode) -> String {
        let mut out = String::new();
        self.write_node(node, None, &mut out);
        out
    }

    fn write_node(&self, node: &DocumentNode, parent: Option<&NodeKind>, out: &mut String) {
        match &node.kind {
            NodeKind::Text => self.write_text(node, parent, out),
            NodeKind::Variable => self.write_variable(node, out),
            NodeKind::HardBreak => out.push_str("<br>"),
            NodeKind::HorizontalRule => out.push_str("<hr>"),
            kind => {
                if let NodeKind::Other(name) = kind {
                    tracing::trace!(node_type = %name, "passing through unknown node type");
                }
                let markup = wrapper(kind, &node.attrs);
                if let Some((open, _)) = &markup {
                    out.push_str(open);
                }
                for child in &node.content {
                    self.write_node(child, Some(kind), out);
                }
                if let Some((_, close)) = &markup {
                    out.push_str(close);
                }
            }
        }
    }

    fn write_text(&self, node: &DocumentNode, parent: Option<&NodeKind>, out: &mut String) {
        let text = node.text.as_deref().unwrap_or_default();
        let wrappers: Vec<_> = node
            .marks
            .iter()
            .filter_map(|mark| wrapper(&mark.kind, &mark.attrs))
            .collect();

        for (open, _) in &wrappers {
            out.push_str(open);
        }
        if parent == Some(&NodeKind::CodeBlock) {
            out.push_str(&text.replace('\n', "<br>"));
        } else {
            out.push_str(text);
        }
        for (_, close) in wrappers.iter().rev() {
            out.push_str(close);
        }
    }

    fn write_variable(&self, node: &DocumentNode, out: &mut String) {
        match self.mode {
            HtmlMode::Raw => {
                let label = node.attr_str("label").unwrap_or_default();
                let _ = write!(out, r#"<span class="variable">{VARIABLE_GLYPH}{label}</span>"#);
            }
            HtmlMode::Rendered => {
                let id = node.attr_str("id").unwrap_or_default();
                match self.registry.get(id) {
                    Some(variable) => out.push_str(&variable.value),
                    None => tracing::debug!(id, "variable missing from registry, rendering empty"),
                }
            }
        }
    }
}

/// Opening and closing markup for container node types and marks.
fn wrapper(kind: &NodeKind, attrs: &Attrs) -> Option<(String, String)> {
    let simple = |tag: &str| Some((format!("<{tag}>"), format!("</{tag}>")));
    match kind {
        NodeKind::Paragraph => simple("p"),
        NodeKind::Heading => {
            let level = heading_level(attrs);
            Some((format!("<h{level}>"), format!("</h{level}>")))
        }
        NodeKind::BulletList => simple("ul"),
        NodeKind::OrderedList => simple("ol"),
        NodeKind::ListItem => simple("li"),
        NodeKind::Bold => simple("strong"),
        NodeKind::Italic => simple("em"),
        NodeKind::Strike => simple("s"),
        NodeKind::Code => simple("code"),
        NodeKind::Blockquote => simple("blockquote"),
        NodeKind::CodeBlock => {
            let open = match attr_str(attrs, "language").filter(|l| !l.is_empty()) {
                Some(language) => {
                    format!(r#"<div class="terminal"><pre><code class="language-{language}">"#)
                }
                None => r#"<div class="terminal"><pre><code>"#.to_string(),
            };
            Some((open, "</code></pre></div>".to_string()))
        }
        NodeKind::TextStyle => {
            let open = match attr_str(attrs, "color").filter(|c| !c.is_empty()) {
                Some(color) => format!(r#"<span style="color: {color}">"#),
                None => "<span>".to_string(),
            };
            Some((open, "</span>".to_string()))
        }
        NodeKind::Doc
        | NodeKind::Text
        | NodeKind::Variable
        | NodeKind::HardBreak
        | NodeKind::HorizontalRule
        | NodeKind::Other(_) => None,
    }
}

fn heading_level(attrs: &Attrs) -> u64 {
    attrs
        .get("level")
        .and_then(|v| v.as_u64().or_else(|| v.as_str()?.trim().parse().ok()))
        .unwrap_or(1)
        .clamp(1, 6)
}
