//! Conversion engine.

use std::panic::{self, AssertUnwindSafe};

use lw_codes::Edition;
use lw_config::{BestiaryConfig, Config};
use lw_meta::{FieldCatalog, FieldSchema, MetaValue, Projection, ProjectionContext, catalog};
use lw_render::EntryRenderer;
use lw_tags::{TagContext, strip_tags};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::diagnostic::{Diagnostic, DiagnosticKind, RecordId};
use crate::source::{SourceFile, SourceRecord};
use crate::templates::{self, Origin, Page, Settings};
use crate::{ContentKind, ConvertError, OutputDocument, RecordError};

/// Result of assembling one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assembly {
    /// Documents produced, with the degraded paths taken while rendering.
    Documents {
        documents: Vec<OutputDocument>,
        warnings: Vec<String>,
    },
    /// Record failed the kind's validity gate.
    Skipped { reason: String },
}

/// Documents and diagnostics of one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub documents: Vec<OutputDocument>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Batch {
    pub fn skipped(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_skipped())
    }

    pub fn failed(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_failed())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<OutputDocument>, Vec<Diagnostic>) {
        (self.documents, self.diagnostics)
    }
}

/// Converts records of one content kind under one edition.
///
/// Schemas are resolved when the engine is built, so a misconfigured field
/// list fails before any record is read. The engine holds no mutable state;
/// one engine can convert any number of batches, concurrently.
#[derive(Debug)]
pub struct Engine {
    kind: ContentKind,
    /// Frontmatter fields.
    schema: FieldSchema,
    /// Fields the body reads, independent of frontmatter overrides.
    summary: FieldSchema,
    subclass_schema: Option<FieldSchema>,
    context: ProjectionContext,
    tags: TagContext,
    settings: Settings,
}

impl Engine {
    /// Engine with built-in field lists and default options.
    #[must_use]
    pub fn new(kind: ContentKind, edition: Edition) -> Self {
        let catalog = catalog_for(kind);
        Self {
            kind,
            schema: catalog.default_schema(edition),
            summary: catalog.default_schema(edition),
            subclass_schema: (kind == ContentKind::Class)
                .then(|| catalog::subclass().default_schema(edition)),
            context: ProjectionContext::new(edition),
            tags: TagContext::default(),
            settings: Settings {
                edition,
                bestiary: BestiaryConfig::default(),
            },
        }
    }

    /// Engine configured from `lorewright.toml`.
    ///
    /// Every schema override in the configuration is checked, not only the
    /// ones for `kind`.
    pub fn from_config(
        config: &Config,
        kind: ContentKind,
        edition: Edition,
    ) -> Result<Self, ConvertError> {
        validate_overrides(config)?;

        let catalog = catalog_for(kind);
        let schema = resolve_schema(config, &catalog, edition)?;
        let subclass_schema = if kind == ContentKind::Class {
            Some(resolve_schema(config, &catalog::subclass(), edition)?)
        } else {
            None
        };

        let sources = config.sources.iter().collect();
        Ok(Self {
            kind,
            schema,
            summary: catalog.default_schema(edition),
            subclass_schema,
            context: ProjectionContext::new(edition).with_sources(sources),
            tags: TagContext::new(config.output_resolved.links),
            settings: Settings {
                edition,
                bestiary: config.bestiary.clone(),
            },
        })
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn edition(&self) -> Edition {
        self.settings.edition
    }

    /// Frontmatter field list.
    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Frontmatter field list of subclass documents, for class engines.
    #[must_use]
    pub fn subclass_schema(&self) -> Option<&FieldSchema> {
        self.subclass_schema.as_ref()
    }

    /// Assemble a standalone record.
    ///
    /// Class records see no feature collections this way; use
    /// [`Engine::convert_batch`] on the whole source file for those.
    pub fn assemble(&self, record: &Value) -> Result<Assembly, RecordError> {
        let file = SourceFile::new(record);
        self.assemble_record(
            SourceRecord {
                value: record,
                collection: None,
            },
            &file,
        )
    }

    /// Assemble a record read from `file`.
    pub fn assemble_record<'a>(
        &self,
        record: SourceRecord<'a>,
        file: &SourceFile<'a>,
    ) -> Result<Assembly, RecordError> {
        let value = record.value;
        if !value.is_object() {
            return Err(RecordError::NotAnObject(json_type(value)));
        }
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(strip_tags)
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .ok_or(RecordError::MissingName)?;

        let mut projection = Projection::new(value, &self.context);
        if let Some(collection) = record.collection {
            projection = projection.with_collection(collection);
        }

        let page = Page {
            record: value,
            collection: record.collection,
            name,
            summary: self.summary.project(&projection),
        };
        if let Some(reason) = templates::gate(self.kind, &page) {
            return Ok(Assembly::Skipped { reason });
        }

        let mut renderer = EntryRenderer::new(self.tags);
        let drafts = templates::render(self.kind, &page, file, &self.settings, &mut renderer);
        let page_meta = self.schema.project(&projection);

        let documents = drafts
            .into_iter()
            .map(|draft| {
                let (mut meta, tag) = match draft.origin {
                    Origin::Page => (page_meta.clone(), self.kind.tag()),
                    Origin::Subclass(subclass) => {
                        let schema = self.subclass_schema.as_ref().unwrap_or(&self.schema);
                        let projection = Projection::new(subclass, &self.context);
                        (schema.project(&projection), "subclass")
                    }
                };
                meta.append("tags", self.tags_for(tag));
                OutputDocument::new(&draft.folder, &draft.name, &meta, &draft.body)
            })
            .collect();

        Ok(Assembly::Documents {
            documents,
            warnings: renderer.into_warnings(),
        })
    }

    /// Convert every record of this engine's kind in a parsed source file.
    ///
    /// Records are assembled in parallel; documents and diagnostics keep the
    /// input order. A record that cannot be assembled becomes a diagnostic and
    /// never stops the batch.
    #[must_use]
    pub fn convert_batch(&self, root: &Value) -> Batch {
        let file = SourceFile::new(root);
        let records = file.records(self.kind);
        debug!(kind = %self.kind, records = records.len(), "Converting batch");

        let results: Vec<(RecordId, Result<Assembly, RecordError>)> = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| {
                (
                    RecordId::of(record.value, index),
                    isolated(|| self.assemble_record(*record, &file)),
                )
            })
            .collect();

        let mut batch = Batch::default();
        for (id, result) in results {
            match result {
                Ok(Assembly::Documents {
                    documents,
                    warnings,
                }) => {
                    batch.documents.extend(documents);
                    batch
                        .diagnostics
                        .extend(warnings.into_iter().map(|message| Diagnostic {
                            record: id.clone(),
                            kind: DiagnosticKind::Warning { message },
                        }));
                }
                Ok(Assembly::Skipped { reason }) => batch.diagnostics.push(Diagnostic {
                    record: id,
                    kind: DiagnosticKind::Skipped { reason },
                }),
                Err(error) => {
                    warn!(record = %id, error = %error, "Record could not be assembled");
                    batch.diagnostics.push(Diagnostic {
                        record: id,
                        kind: DiagnosticKind::Failed {
                            error: error.to_string(),
                        },
                    });
                }
            }
        }

        debug!(
            kind = %self.kind,
            documents = batch.documents.len(),
            diagnostics = batch.diagnostics.len(),
            "Batch converted"
        );
        batch
    }

    fn tags_for(&self, kind_tag: &str) -> MetaValue {
        MetaValue::List(vec![
            kind_tag.to_owned(),
            format!("edition/{}", self.settings.edition.id()),
        ])
    }
}

fn catalog_for(kind: ContentKind) -> FieldCatalog {
    match kind {
        ContentKind::Spell => catalog::spell(),
        ContentKind::Creature => catalog::creature(),
        ContentKind::Item => catalog::item(),
        ContentKind::Class => catalog::class(),
        ContentKind::Species => catalog::species(),
        ContentKind::Background => catalog::background(),
        ContentKind::RulesTopic => catalog::rules(),
    }
}

/// Configured field list for the catalog's kind, or its default.
fn resolve_schema(
    config: &Config,
    catalog: &FieldCatalog,
    edition: Edition,
) -> Result<FieldSchema, ConvertError> {
    match config.schema_fields(catalog.kind(), edition) {
        Some(fields) => Ok(catalog.select(fields)?),
        None => Ok(catalog.default_schema(edition)),
    }
}

/// Check every override table against its catalog.
fn validate_overrides(config: &Config) -> Result<(), ConvertError> {
    for (kind, fields) in config.schema_overrides() {
        let catalog =
            catalog::by_name(kind).ok_or_else(|| ConvertError::UnknownKind(kind.to_owned()))?;
        catalog.select(fields)?;
    }
    Ok(())
}

/// Run one record's assembly, turning a panic into a [`RecordError`].
fn isolated<F>(assemble: F) -> Result<Assembly, RecordError>
where
    F: FnOnce() -> Result<Assembly, RecordError>,
{
    panic::catch_unwind(AssertUnwindSafe(assemble)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_owned());
        Err(RecordError::Panicked(message))
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
