//! Standalone HTML export.
//!
//! Wraps serializer output in a page shell and packages it as a file. Export
//! is synchronous and pure over the snapshot; writing to disk is a separate,
//! optional step.

mod shell;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::{DocumentNode, HtmlMode, serialize};
use crate::variables::VariableRegistry;

pub use shell::page_shell;

/// MIME type of every export.
pub const MIME_TYPE: &str = "text/html";

/// An export ready to be handed to the host for download or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportedFile {
    /// Write the file into `dir`, returning its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export dir {}", dir.display()))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write export {}", path.display()))?;
        Ok(path)
    }
}

/// `exported_<mode>.html`
pub fn export_filename(mode: HtmlMode) -> String {
    format!("exported_{}.html", mode.as_str())
}

/// Serialize `root` and wrap it in the page shell for `mode`.
pub fn render_document(root: &DocumentNode, registry: &VariableRegistry, mode: HtmlMode) -> String {
    page_shell(&serialize(root, registry, mode), mode)
}

/// Produce the complete export for `root`.
pub fn export_document(
    root: &DocumentNode,
    registry: &VariableRegistry,
    mode: HtmlMode,
) -> ExportedFile {
    let content = render_document(root, registry, mode);
    tracing::debug!(mode = mode.as_str(), bytes = content.len(), "document exported");
    ExportedFile {
        filename: export_filename(mode),
        mime_type: MIME_TYPE,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::Variable;
    use tempfile::tempdir;

    fn registry() -> VariableRegistry {
        VariableRegistry::new(vec![Variable::new("v1", "Name", "Alice")]).unwrap()
    }

    fn doc() -> DocumentNode {
        DocumentNode::doc(vec![DocumentNode::paragraph(vec![
            DocumentNode::text("Hello "),
            DocumentNode::variable("v1", "Name"),
        ])])
    }

    #[test]
    fn test_export_filename_per_mode() {
        assert_eq!(export_filename(HtmlMode::Raw), "exported_raw.html");
        assert_eq!(export_filename(HtmlMode::Rendered), "exported_rendered.html");
    }

    #[test]
    fn test_export_raw_embeds_marker_and_style() {
        let file = export_document(&doc(), &registry(), HtmlMode::Raw);
        assert_eq!(file.filename, "exported_raw.html");
        assert_eq!(file.mime_type, "text/html");
        assert!(file.content.starts_with("<!DOCTYPE html>"));
        assert!(file.content.contains("<title>Exported Raw Content</title>"));
        assert!(file.content.contains(".variable {"));
        assert!(
            file.content
                .contains(r#"<p>Hello <span class="variable">❴•❵Name</span></p>"#)
        );
    }

    #[test]
    fn test_export_rendered_omits_variable_style() {
        let file = export_document(&doc(), &registry(), HtmlMode::Rendered);
        assert!(file.content.contains("<title>Exported Rendered Content</title>"));
        assert!(!file.content.contains(".variable"));
        assert!(file.content.contains("<p>Hello Alice</p>"));
    }

    #[test]
    fn test_write_to_creates_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out");
        let file = export_document(&doc(), &registry(), HtmlMode::Rendered);
        let path = file.write_to(&target).unwrap();
        assert_eq!(path, target.join("exported_rendered.html"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), file.content);
    }
}
