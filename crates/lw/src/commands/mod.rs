//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod schema;

pub(crate) use convert::ConvertArgs;
pub(crate) use schema::SchemaArgs;

use lw_tags::LinkStyle;

/// Parse a `--links` value.
pub(crate) fn parse_links(value: &str) -> Result<LinkStyle, String> {
    LinkStyle::from_id(value).ok_or_else(|| format!("expected \"wiki\" or \"plain\", got \"{value}\""))
}
