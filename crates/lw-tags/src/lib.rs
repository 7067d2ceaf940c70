//! Inline reference-tag interpolation.
//!
//! Source text embeds tokens of the form `{@tag arg1|arg2|...}`. This crate
//! resolves them in a single left-to-right scan: each token is located by
//! balanced-brace matching, classified once by its tag name and replaced once.
//! Nested tokens inside the arguments of content-retaining tags
//! (`{@note see {@spell fireball}}`) are resolved recursively on the argument
//! slice, never on already-produced output.
//!
//! The output never contains `{@`, so interpolation is idempotent:
//!
//! ```
//! use lw_tags::{TagContext, interpolate};
//!
//! let ctx = TagContext::default();
//! let once = interpolate("{@spell fireball} deals {@damage 8d6} damage", &ctx);
//! assert_eq!(once, "[[Fireball]] deals 8d6 damage");
//! assert_eq!(interpolate(&once, &ctx), once);
//! ```

mod case;
mod links;
mod scan;
mod tag;

use serde_json::Value;

pub use case::title_case;
pub use links::{LinkStyle, class_document_name, link, sanitize_name, subclass_document_name};
pub use tag::TagKind;

/// Rendering options for interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagContext {
    /// How cross-document references are written.
    pub links: LinkStyle,
}

impl TagContext {
    /// Context with the given link style.
    #[must_use]
    pub fn new(links: LinkStyle) -> Self {
        Self { links }
    }

    /// Copy of this context that writes plain labels instead of links.
    #[must_use]
    pub fn plain(self) -> Self {
        Self {
            links: LinkStyle::Plain,
        }
    }
}

/// Resolve every `{@...}` token in `text`.
#[must_use]
pub fn interpolate(text: &str, ctx: &TagContext) -> String {
    if !text.contains("{@") {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    scan::interpolate_into(&mut out, text, ctx);
    // A token may resolve to text starting with `@` right after a literal `{`.
    while out.contains("{@") {
        out = out.replace("{@", "{");
    }
    out
}

/// Interpolate an arbitrary JSON value.
///
/// Strings are interpolated directly, arrays are interpolated element-wise and
/// space-joined, `null` yields an empty string, and any other value is
/// stringified first.
#[must_use]
pub fn interpolate_value(value: &Value, ctx: &TagContext) -> String {
    match value {
        Value::String(s) => interpolate(s, ctx),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| interpolate_value(item, ctx))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        other => interpolate(&other.to_string(), ctx),
    }
}

/// Remove all tokens, keeping only the visible label text.
///
/// Used for titles and metadata values where links are unwanted.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    interpolate(text, &TagContext::default().plain())
}
