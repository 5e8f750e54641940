//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// An unset `${VAR}` without a default is an error naming `field`. Bare
/// `$VAR` is left as is, so paths containing a literal `$` survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that could not be resolved.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_EXPAND_HOME", "/srv/blog");
        }
        let result = expand_env("${FOLIO_TEST_EXPAND_HOME}/content", "content.dir").unwrap();
        assert_eq!(result, "/srv/blog/content");
        unsafe {
            std::env::remove_var("FOLIO_TEST_EXPAND_HOME");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${FOLIO_TEST_EXPAND_UNSET:-posts}", "content.dir").unwrap();
        assert_eq!(result, "posts");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${FOLIO_TEST_EXPAND_MISSING}", "content.dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("content.dir"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("content", "content.dir").unwrap(), "content");
        assert_eq!(expand_env("$HOME/posts", "content.dir").unwrap(), "$HOME/posts");
    }
}
