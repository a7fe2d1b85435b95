/// Prefix marking a row as a comment
pub const COMMENT_PREFIX: &str = "//";

/// Cell value meaning "intentionally untranslated". Matched exactly.
pub const NON_VALUE: &str = "_N/A";

/// Whether a row should contribute nothing to the build
pub fn should_skip(key_path: Option<&str>, value: &str) -> bool {
    match key_path {
        None => true,
        Some(key) => key.is_empty() || key.starts_with(COMMENT_PREFIX) || value == NON_VALUE,
    }
}
