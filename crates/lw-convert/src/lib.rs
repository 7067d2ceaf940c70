//! Document assembly.
//!
//! An [`Engine`] converts the records of one content kind into
//! [`OutputDocument`]s: it projects each record's frontmatter through the
//! kind's field schema, checks the kind's validity gate, renders the body
//! through the kind's template and computes the document path.
//!
//! Batches never fail as a whole. Every record that is skipped, cannot be
//! assembled, or renders through a degraded path is reported as a
//! [`Diagnostic`] next to the documents.
//!
//! # Example
//!
//! ```
//! use lw_codes::Edition;
//! use lw_convert::{ContentKind, Engine};
//! use serde_json::json;
//!
//! let engine = Engine::new(ContentKind::Spell, Edition::Classic);
//! let batch = engine.convert_batch(&json!({"spell": [
//!     {"name": "Fire Bolt", "level": 0, "school": "V", "components": {"v": true, "s": true}}
//! ]}));
//!
//! assert_eq!(batch.documents[0].path, "Spells/Cantrips/Fire Bolt.md");
//! assert!(batch.documents[0].content.contains("### *Evocation Cantrip*"));
//! assert!(batch.diagnostics.is_empty());
//! ```

mod diagnostic;
mod document;
mod engine;
mod error;
mod kind;
mod source;
mod templates;

pub use diagnostic::{Diagnostic, DiagnosticKind, RecordId};
pub use document::{FRONTMATTER_MARKER, OutputDocument, compose, document_path};
pub use engine::{Assembly, Batch, Engine};
pub use error::{ConvertError, RecordError};
pub use kind::ContentKind;
pub use source::{SourceFile, SourceRecord};

/// Parse a content kind identifier.
pub fn parse_kind(id: &str) -> Result<ContentKind, ConvertError> {
    ContentKind::from_id(id).ok_or_else(|| ConvertError::UnknownKind(id.to_owned()))
}

/// Parse an edition identifier.
pub fn parse_edition(id: &str) -> Result<lw_codes::Edition, ConvertError> {
    lw_codes::Edition::from_id(id).ok_or_else(|| ConvertError::UnknownEdition(id.to_owned()))
}
