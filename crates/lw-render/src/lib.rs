//! Entry tree rendering.
//!
//! Record bodies arrive as loosely typed JSON: strings, arrays of mixed
//! shapes, and objects discriminated by a `type` field. [`EntryNode::decode`]
//! turns any JSON value into an explicit tree without failing; the
//! [`EntryRenderer`] then walks that tree and produces Markdown text.
//!
//! # Example
//!
//! ```
//! use lw_render::{EntryNode, EntryRenderer};
//! use lw_tags::TagContext;
//! use serde_json::json;
//!
//! let node = EntryNode::decode(&json!({
//!     "type": "entries",
//!     "name": "Fey Ancestry",
//!     "entries": ["You have advantage on saving throws against being {@condition charmed}."]
//! }));
//! let result = EntryRenderer::new(TagContext::default()).render_document(&node, 1);
//!
//! assert_eq!(
//!     result.text,
//!     "## Fey Ancestry\n\nYou have advantage on saving throws against being [[Charmed]]."
//! );
//! assert!(result.warnings.is_empty());
//! ```

mod node;
mod renderer;
mod table;

pub use node::{AbilityFormula, Align, Cell, CrossRef, CrossRefKind, EntryNode, FormulaKind, Table};
pub use renderer::{EntryRenderer, RenderResult, render_value};

/// Deepest heading level emitted.
pub const MAX_HEADING_DEPTH: usize = 6;
