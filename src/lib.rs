// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. export::ExportedFile)
    clippy::module_name_repetitions
)]

//! # Varedit
//!
//! Variable placeholders for rich-text documents.
//!
//! Varedit is the core behind a rich-text editor that supports inline
//! variable tokens:
//! - Typing `{{` opens an autocomplete session over a variable registry
//! - Confirming a candidate replaces the typed query with a variable node
//! - Documents export to standalone HTML, raw (placeholders kept) or
//!   rendered (placeholders replaced by their values)
//!
//! The editing engine itself is external and plugs in through
//! [`surface::EditingSurface`].
//!
//! ## Modules
//!
//! - [`app`]: Editing session and message dispatch
//! - [`suggestion`]: Autocomplete state machine
//! - [`insertion`]: Trigger-range replacement
//! - [`document`]: Document tree and HTML serialization
//! - [`export`]: Page shell and export files
//! - [`variables`]: Variable registry
//! - [`config`]: Registry files
//! - [`logging`]: Tracing setup

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod insertion;
pub mod logging;
pub mod suggestion;
pub mod surface;
pub mod variables;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{Message, Session};
    pub use crate::document::{DocumentNode, HtmlMode, NodeKind};
    pub use crate::suggestion::Key;
    pub use crate::surface::{Coords, EditingSurface, Selection};
    pub use crate::variables::{Variable, VariableRegistry};
}
