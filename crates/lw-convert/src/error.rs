//! Error types for document assembly.

use lw_meta::SchemaError;

/// A record that cannot be assembled at all.
///
/// Reported as a failed diagnostic for that record; the rest of the batch
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Record is not a JSON object.
    #[error("record is not an object (found {0})")]
    NotAnObject(&'static str),
    /// Record has no usable `name`.
    #[error("record has no name")]
    MissingName,
    /// Assembly panicked; holds the panic message.
    #[error("assembly panicked: {0}")]
    Panicked(String),
}

/// Engine construction error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Content kind identifier not recognised.
    #[error("unknown content kind \"{0}\" (expected one of: {kinds})", kinds = crate::ContentKind::IDS.join(", "))]
    UnknownKind(String),
    /// Edition identifier not recognised.
    #[error("unknown edition \"{0}\" (expected \"classic\" or \"one\")")]
    UnknownEdition(String),
    /// Configured field list does not match the field catalog.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}
