//! `lw schema` command implementation.

use std::path::PathBuf;

use clap::Args;
use lw_config::Config;
use lw_convert::{Engine, parse_edition, parse_kind};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the schema command.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Content kind: spell, creature, item, class, species, background or rules.
    #[arg(short, long)]
    kind: String,

    /// Ruleset edition: classic (2014) or one (2024).
    #[arg(short, long, env = "LW_EDITION", default_value = "classic")]
    edition: String,

    /// Path to configuration file (default: auto-discover lorewright.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SchemaArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let kind = parse_kind(&self.kind)?;
        let edition = parse_edition(&self.edition)?;
        let config = Config::load(self.config.as_deref(), None)?;
        let engine = Engine::from_config(&config, kind, edition)?;

        output.heading(&format!("{kind} ({})", edition.id()));
        for key in engine.schema().keys() {
            output.data(key);
        }
        if let Some(subclass) = engine.subclass_schema() {
            output.heading(&format!("subclass ({})", edition.id()));
            for key in subclass.keys() {
                output.data(key);
            }
        }
        Ok(())
    }
}
