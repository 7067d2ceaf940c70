//! Token scanning.

use crate::TagContext;
use crate::tag::resolve;

/// Append `text` to `out` with every token resolved.
pub(crate) fn interpolate_into(out: &mut String, text: &str, ctx: &TagContext) {
    let mut rest = text;
    while let Some(start) = rest.find("{@") {
        out.push_str(&rest[..start]);
        let Some(end) = find_close(&rest[start..]) else {
            // Unterminated token: drop everything after it.
            return;
        };
        let inner = &rest[start + 2..start + end];
        let (name, body) = split_name(inner);
        resolve(out, name, body, ctx);
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);
}

/// Find the byte offset of the brace closing the one at offset 0.
fn find_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split token contents into the tag name and the argument text.
fn split_name(inner: &str) -> (&str, &str) {
    match inner.find(char::is_whitespace) {
        Some(i) => (&inner[..i], inner[i..].trim_start()),
        None => (inner, ""),
    }
}

/// Split argument text on `|`, ignoring separators inside nested tokens.
pub(crate) fn split_args(body: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut from = 0;
    for (i, b) in body.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => {
                args.push(&body[from..i]);
                from = i + 1;
            }
            _ => {}
        }
    }
    args.push(&body[from..]);
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_close_nested() {
        assert_eq!(find_close("{@a {@b c}}"), Some(10));
        assert_eq!(find_close("{@a {@b c}"), None);
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("spell fireball|phb"), ("spell", "fireball|phb"));
        assert_eq!(split_name("h"), ("h", ""));
        assert_eq!(split_name("dice  1d6"), ("dice", "1d6"));
    }

    #[test]
    fn test_split_args_respects_nesting() {
        assert_eq!(split_args("a|b||c"), vec!["a", "b", "", "c"]);
        assert_eq!(split_args("see {@item rope|phb}|x"), vec!["see {@item rope|phb}", "x"]);
        assert_eq!(split_args(""), vec![""]);
    }
}
