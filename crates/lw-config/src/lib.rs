//! Configuration management for lorewright.
//!
//! Loads `lorewright.toml` from the current directory or its parents, or from
//! an explicit path. String values may reference environment variables:
//!
//! - `${VAR}` expands to the value of VAR and fails when it is unset
//! - `${VAR:-default}` falls back to `default`
//!
//! Expansion applies to `output.dir`, `output.links` and every `[sources]`
//! value.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lw_codes::Edition;
use lw_tags::LinkStyle;
use serde::Deserialize;

/// CLI settings that override configuration file values.
#[derive(Debug, Default, Clone)]
pub struct CliSettings {
    /// Output directory override.
    pub out_dir: Option<PathBuf>,
    /// Link style override.
    pub links: Option<LinkStyle>,
}

/// Configuration file name.
pub const CONFIG_FILENAME: &str = "lorewright.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration (raw, before path resolution).
    output: OutputConfigRaw,
    /// Creature placement configuration.
    pub bestiary: BestiaryConfig,
    /// Extra source-code expansions, keyed by source code.
    pub sources: BTreeMap<String, String>,
    /// Field list overrides keyed by content kind, for every edition.
    pub schema: BTreeMap<String, SchemaOverride>,
    /// Edition-specific overrides keyed by edition identifier.
    pub editions: BTreeMap<String, EditionConfig>,
    /// Resolved output configuration.
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the loaded config file (if any).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Output configuration as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    links: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory documents are written under.
    pub dir: PathBuf,
    /// Cross-reference style.
    pub links: LinkStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            links: LinkStyle::default(),
        }
    }
}

const DEFAULT_OUTPUT_DIR: &str = "vault";

/// Creature placement configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BestiaryConfig {
    /// Creature names filed under "Story NPCs".
    pub story_npcs: Vec<String>,
}

impl BestiaryConfig {
    /// Whether `name` is listed as a story NPC. Matching ignores ASCII case.
    #[must_use]
    pub fn is_story_npc(&self, name: &str) -> bool {
        let name = name.trim();
        self.story_npcs
            .iter()
            .any(|npc| npc.trim().eq_ignore_ascii_case(name))
    }
}

/// Field list override for one content kind.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchemaOverride {
    /// Canonical field keys, in output order.
    pub fields: Vec<String>,
}

/// Overrides that apply to one edition only.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EditionConfig {
    /// Field list overrides keyed by content kind.
    pub schema: BTreeMap<String, SchemaOverride>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`VAULT_DIR`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lorewright.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(out_dir) = &settings.out_dir {
            self.output_resolved.dir.clone_from(out_dir);
        }
        if let Some(links) = settings.links {
            self.output_resolved.links = links;
        }
    }

    /// Field list configured for `kind` under `edition`.
    ///
    /// An `[editions.<id>.schema.<kind>]` table wins over `[schema.<kind>]`.
    /// Returns `None` when neither is set, meaning the built-in order applies.
    #[must_use]
    pub fn schema_fields(&self, kind: &str, edition: Edition) -> Option<&[String]> {
        self.editions
            .iter()
            .filter(|(id, _)| Edition::from_id(id) == Some(edition))
            .find_map(|(_, overrides)| overrides.schema.get(kind))
            .or_else(|| self.schema.get(kind))
            .map(|o| o.fields.as_slice())
    }

    /// Every configured schema override as `(kind, fields)`, in file order of
    /// kinds, edition tables last.
    pub fn schema_overrides(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.schema
            .iter()
            .chain(self.editions.values().flat_map(|e| e.schema.iter()))
            .map(|(kind, o)| (kind.as_str(), o.fields.as_slice()))
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            output: OutputConfigRaw::default(),
            bestiary: BestiaryConfig::default(),
            sources: BTreeMap::new(),
            schema: BTreeMap::new(),
            editions: BTreeMap::new(),
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                links: LinkStyle::default(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Field keys inside schema overrides are checked by the conversion
    /// engine, which owns the field catalogs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_editions()?;
        self.validate_schema()?;
        Ok(())
    }

    fn validate_editions(&self) -> Result<(), ConfigError> {
        for id in self.editions.keys() {
            if Edition::from_id(id).is_none() {
                return Err(ConfigError::Validation(format!(
                    "unknown edition \"{id}\" in [editions] (expected \"classic\" or \"one\")"
                )));
            }
        }
        Ok(())
    }

    fn validate_schema(&self) -> Result<(), ConfigError> {
        for (kind, fields) in self.schema_overrides() {
            if fields.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "schema.{kind}.fields cannot be empty"
                )));
            }
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        if let Some(ref links) = self.output.links {
            self.output.links = Some(expand::expand_env(links, "output.links")?);
        }
        for (code, name) in &mut self.sources {
            *name = expand::expand_env(name, &format!("sources.{code}"))?;
        }
        Ok(())
    }

    /// Resolve raw values: relative paths join onto the config directory and
    /// the link style is parsed.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let dir = match self.output.dir.as_deref() {
            Some(dir) => {
                require_non_empty(dir, "output.dir")?;
                config_dir.join(dir.trim())
            }
            None => config_dir.join(DEFAULT_OUTPUT_DIR),
        };

        let links = match self.output.links.as_deref() {
            Some(id) => LinkStyle::from_id(id).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "output.links must be \"wiki\" or \"plain\", got \"{id}\""
                ))
            })?,
            None => LinkStyle::default(),
        };

        self.output_resolved = OutputConfig { dir, links };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/vault"));
        assert_eq!(config.output_resolved.links, LinkStyle::Wiki);
        assert!(config.bestiary.story_npcs.is_empty());
        assert!(config.schema_fields("spell", Edition::Classic).is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.sources.is_empty());
        assert!(config.schema.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[output]
dir = "notes"
links = "plain"

[bestiary]
story_npcs = ["Strahd von Zarovich"]

[sources]
HB = "Homebrew Compendium"

[schema.spell]
fields = ["name", "level", "school"]

[editions.one.schema.spell]
fields = ["name", "level", "school", "sources"]
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output_resolved.dir, temp.path().join("notes"));
        assert_eq!(config.output_resolved.links, LinkStyle::Plain);
        assert!(config.bestiary.is_story_npc("strahd von zarovich"));
        assert_eq!(config.sources["HB"], "Homebrew Compendium");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_edition_schema_wins() {
        let config: Config = toml::from_str(
            r#"
[schema.spell]
fields = ["name", "level"]

[editions.2024.schema.spell]
fields = ["name", "level", "sources"]
"#,
        )
        .unwrap();

        assert_eq!(
            config.schema_fields("spell", Edition::Classic),
            Some(["name".to_owned(), "level".to_owned()].as_slice())
        );
        assert_eq!(
            config.schema_fields("spell", Edition::One),
            Some(
                [
                    "name".to_owned(),
                    "level".to_owned(),
                    "sources".to_owned()
                ]
                .as_slice()
            )
        );
        assert!(config.schema_fields("item", Edition::One).is_none());
    }

    #[test]
    fn test_schema_overrides_lists_all_tables() {
        let config: Config = toml::from_str(
            r#"
[schema.item]
fields = ["name"]

[editions.classic.schema.spell]
fields = ["name"]
"#,
        )
        .unwrap();
        let kinds: Vec<&str> = config.schema_overrides().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec!["item", "spell"]);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = Config::load(Some(&missing), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_links_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[output]\nlinks = \"html\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.links"));
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[output]\ndir = \"  \"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("output.dir cannot be empty"));
    }

    #[test]
    fn test_unknown_edition_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            "[editions.third.schema.spell]\nfields = [\"name\"]\n",
        );
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("unknown edition \"third\""));
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[schema.spell]\nfields = []\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("schema.spell.fields"));
    }

    #[test]
    fn test_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[output\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_expansion_in_output_dir() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LW_TEST_CONFIG_VAULT");
        }
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            "[output]\ndir = \"${LW_TEST_CONFIG_VAULT:-compendium}\"\n",
        );
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output_resolved.dir, temp.path().join("compendium"));
    }

    #[test]
    fn test_env_expansion_missing_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LW_TEST_CONFIG_SOURCE");
        }
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[sources]\nHB = \"${LW_TEST_CONFIG_SOURCE}\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
    }

    #[test]
    fn test_cli_settings_override() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[output]\ndir = \"notes\"\nlinks = \"wiki\"\n");
        let settings = CliSettings {
            out_dir: Some(PathBuf::from("/elsewhere")),
            links: Some(LinkStyle::Plain),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.output_resolved.dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.output_resolved.links, LinkStyle::Plain);
    }

    #[test]
    fn test_discover_from_parent() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "");
        let nested = temp.path().join("data").join("spells");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(Config::discover_from(&nested), Some(path));
    }
}
