//! Declarative frontmatter projection.
//!
//! A [`FieldDefinition`] says how one canonical metadata field is derived: an
//! ordered list of candidate record keys (first present, non-null key wins)
//! and an optional converter that also sees the whole record. A
//! [`FieldCatalog`] holds every definition a content kind knows; a
//! [`FieldSchema`] is an ordered selection from a catalog, and projecting a
//! record onto it yields a [`MetadataMap`] in schema order.
//!
//! Selecting an unknown key is a [`SchemaError`], raised when the schema is
//! built rather than when records are projected.
//!
//! # Example
//!
//! ```
//! use lw_codes::Edition;
//! use lw_meta::{ProjectionContext, catalog};
//! use serde_json::json;
//!
//! let schema = catalog::spell().select(&["name", "level", "school"])?;
//! let record = json!({"name": "Fire Bolt", "level": 0, "school": "V"});
//! let map = schema.project_record(&record, &ProjectionContext::new(Edition::Classic));
//!
//! assert_eq!(map.serialize(), "name: \"Fire Bolt\"\nlevel: 0\nschool: \"Evocation\"");
//! # Ok::<(), lw_meta::SchemaError>(())
//! ```

pub mod catalog;
mod context;
pub mod convert;
mod field;
mod map;
mod schema;
mod value;

pub use context::{Projection, ProjectionContext, SourceNames};
pub use field::{Converter, DefaultIn, FieldDefinition};
pub use map::MetadataMap;
pub use schema::{FieldCatalog, FieldSchema, SchemaError};
pub use value::MetaValue;
