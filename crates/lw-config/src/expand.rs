//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Bare `$VAR` syntax is left alone; only the braced form is expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("LW_TEST_EXPAND_SET", "tomes");
        }
        let result = expand_env("${LW_TEST_EXPAND_SET}", "output.dir").unwrap();
        assert_eq!(result, "tomes");
        unsafe {
            std::env::remove_var("LW_TEST_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LW_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${LW_TEST_EXPAND_UNSET:-vault}", "output.dir").unwrap();
        assert_eq!(result, "vault");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("LW_TEST_EXPAND_HOME", "/srv");
        }
        let result = expand_env("${LW_TEST_EXPAND_HOME}/notes/dnd", "output.dir").unwrap();
        assert_eq!(result, "/srv/notes/dnd");
        unsafe {
            std::env::remove_var("LW_TEST_EXPAND_HOME");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LW_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${LW_TEST_EXPAND_MISSING}", "sources.HB").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("LW_TEST_EXPAND_MISSING"));
        assert!(message.contains("sources.HB"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("$HOME is not braced", "output.dir").unwrap();
        assert_eq!(result, "$HOME is not braced");
    }
}
