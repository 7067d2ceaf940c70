//! Per-record diagnostics returned with every batch.

use std::fmt;

use serde_json::Value;

/// Identity of a source record: its name and source code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId {
    pub name: String,
    pub source: Option<String>,
}

impl RecordId {
    /// Identity of `record`, falling back to its position in the batch when it
    /// has no name.
    #[must_use]
    pub fn of(record: &Value, index: usize) -> Self {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| format!("record #{index}"), str::to_owned);
        let source = record
            .get("source")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { name, source }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} ({source})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// What happened to a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Record failed a validity gate and produced no documents.
    Skipped { reason: String },
    /// Record could not be assembled and produced no documents.
    Failed { error: String },
    /// Record was assembled through a degraded path.
    Warning { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub record: RecordId,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Skipped { .. })
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Failed { .. })
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Warning { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Skipped { reason } => write!(f, "skipped {}: {reason}", self.record),
            DiagnosticKind::Failed { error } => write!(f, "failed {}: {error}", self.record),
            DiagnosticKind::Warning { message } => write!(f, "warning {}: {message}", self.record),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_id_display() {
        let id = RecordId::of(&json!({"name": "Goblin", "source": "MM"}), 0);
        assert_eq!(id.to_string(), "Goblin (MM)");
    }

    #[test]
    fn test_record_id_without_name() {
        let id = RecordId::of(&json!({"source": "MM"}), 4);
        assert_eq!(id.name, "record #4");
        let id = RecordId::of(&json!("not an object"), 2);
        assert_eq!(id.to_string(), "record #2");
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            record: RecordId {
                name: "Shade".to_owned(),
                source: None,
            },
            kind: DiagnosticKind::Skipped {
                reason: "missing AC and HP".to_owned(),
            },
        };
        assert!(diagnostic.is_skipped());
        assert_eq!(diagnostic.to_string(), "skipped Shade: missing AC and HP");
    }
}
