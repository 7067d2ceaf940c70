//! Output documents.

use lw_meta::MetadataMap;
use lw_tags::sanitize_name;

/// Marker line before and after the metadata block.
pub const FRONTMATTER_MARKER: &str = "---";

/// One rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDocument {
    /// Relative, forward-slash path (`Spells/Level 3/Fireball.md`).
    pub path: String,
    pub content: String,
}

impl OutputDocument {
    /// Assemble a document from its folder, display name, metadata and body.
    #[must_use]
    pub fn new(folder: &str, name: &str, meta: &MetadataMap, body: &str) -> Self {
        Self {
            path: document_path(folder, name),
            content: compose(meta, body),
        }
    }
}

/// `---`, metadata, `---`, blank line, body, trailing newline.
#[must_use]
pub fn compose(meta: &MetadataMap, body: &str) -> String {
    let meta = meta.serialize();
    let body = body.trim_end();
    let mut out = String::with_capacity(meta.len() + body.len() + 16);
    out.push_str(FRONTMATTER_MARKER);
    out.push('\n');
    if !meta.is_empty() {
        out.push_str(&meta);
        out.push('\n');
    }
    out.push_str(FRONTMATTER_MARKER);
    out.push_str("\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

/// `{folder}/{name}.md` with the name sanitized. Folder segments are
/// sanitized one by one.
#[must_use]
pub fn document_path(folder: &str, name: &str) -> String {
    let mut path = String::new();
    for segment in folder.split('/').filter(|s| !s.trim().is_empty()) {
        path.push_str(&sanitize_name(segment));
        path.push('/');
    }
    path.push_str(&sanitize_name(name));
    path.push_str(".md");
    path
}
