//! `lw convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lw_config::{CliSettings, Config};
use lw_convert::{DiagnosticKind, Engine, OutputDocument, parse_edition, parse_kind};
use lw_tags::LinkStyle;
use serde_json::Value;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Source JSON files, one batch per file.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Content kind: spell, creature, item, class, species, background or rules.
    #[arg(short, long)]
    kind: String,

    /// Ruleset edition: classic (2014) or one (2024).
    #[arg(short, long, env = "LW_EDITION", default_value = "classic")]
    edition: String,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Link style: wiki or plain (overrides config).
    #[arg(long, value_parser = super::parse_links)]
    links: Option<LinkStyle>,

    /// Print document paths without writing files.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover lorewright.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Per-run counters.
#[derive(Debug, Default, PartialEq, Eq)]
struct Totals {
    documents: usize,
    skipped: usize,
    failed: usize,
    warnings: usize,
}

impl Totals {
    fn count(&mut self, kind: &DiagnosticKind) {
        match kind {
            DiagnosticKind::Skipped { .. } => self.skipped += 1,
            DiagnosticKind::Failed { .. } => self.failed += 1,
            DiagnosticKind::Warning { .. } => self.warnings += 1,
        }
    }
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let kind = parse_kind(&self.kind)?;
        let edition = parse_edition(&self.edition)?;

        let cli_settings = CliSettings {
            out_dir: self.out,
            links: self.links,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let engine = Engine::from_config(&config, kind, edition)?;
        let out_dir = &config.output_resolved.dir;

        if !self.dry_run {
            output.info(&format!("Output: {}", out_dir.display()));
        }

        let mut totals = Totals::default();
        for file in &self.files {
            let root = read_json(file)?;
            let (documents, diagnostics) = engine.convert_batch(&root).into_parts();
            info!(
                file = %file.display(),
                documents = documents.len(),
                diagnostics = diagnostics.len(),
                "Converted file"
            );

            for document in &documents {
                if self.dry_run {
                    output.data(&document.path);
                } else {
                    write_document(out_dir, document)?;
                }
            }
            totals.documents += documents.len();

            for diagnostic in &diagnostics {
                totals.count(&diagnostic.kind);
                output.diagnostic(diagnostic);
            }
        }

        let verb = if self.dry_run { "Would write" } else { "Wrote" };
        output.success(&format!(
            "{verb} {} {kind} documents ({} skipped, {} failed, {} warnings)",
            totals.documents, totals.skipped, totals.failed, totals.warnings
        ));
        Ok(())
    }
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `document` under `out_dir`, creating parent directories.
fn write_document(out_dir: &Path, document: &OutputDocument) -> Result<PathBuf, CliError> {
    let mut path = out_dir.to_path_buf();
    path.extend(document.path.split('/'));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &document.content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_write_document_creates_parents() {
        let temp = tempfile::tempdir().unwrap();
        let document = OutputDocument {
            path: "Spells/Level 3/Fireball.md".to_owned(),
            content: "---\nname: \"Fireball\"\n---\n\n# Fireball\n".to_owned(),
        };
        let written = write_document(temp.path(), &document).unwrap();
        assert_eq!(written, temp.path().join("Spells").join("Level 3").join("Fireball.md"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), document.content);
    }

    #[test]
    fn test_totals_count_diagnostic_kinds() {
        let mut totals = Totals::default();
        totals.count(&DiagnosticKind::Skipped {
            reason: "missing AC and HP".to_owned(),
        });
        totals.count(&DiagnosticKind::Failed {
            error: "record has no name".to_owned(),
        });
        totals.count(&DiagnosticKind::Warning {
            message: "table row 1 has 1 cells".to_owned(),
        });
        totals.count(&DiagnosticKind::Skipped {
            reason: "missing AC and HP".to_owned(),
        });
        assert_eq!(
            totals,
            Totals {
                documents: 0,
                skipped: 2,
                failed: 1,
                warnings: 1,
            }
        );
    }

    #[test]
    fn test_read_json_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{\"spell\": [").unwrap();
        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));

        let err = read_json(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
