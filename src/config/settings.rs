use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "i18nconfig.json";
pub const DEFAULT_TARGET_DIR: &str = "./locales";
pub const DEFAULT_LANGUAGES: [&str; 2] = ["ko", "en"];

/// Printed to stderr when the configuration file is missing or invalid
pub const CONFIG_EXAMPLE: &str = r#"{
  "GOOGLE_API_KEY": "YOUR_GOOGLE_API_KEY",
  "GOOGLE_SHEET_ID": "YOUR_GOOGLE_SPREADSHEET_ID",
  "targetDir": "./locales",
  "languages": ["ko", "en"]
}"#;

pub const CONFIG_DOCS_URL: &str =
    "https://github.com/actionpower/i18n-spreadsheet-to-json?tab=readme-ov-file#i18nconfigjson";

/// On-disk shape of `i18nconfig.json`
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "GOOGLE_API_KEY")]
    google_api_key: Option<String>,
    #[serde(rename = "GOOGLE_SHEET_ID")]
    google_sheet_id: Option<String>,
    #[serde(rename = "targetDir")]
    target_dir: Option<PathBuf>,
    languages: Option<Vec<String>>,
    #[serde(rename = "customIncludedSheets")]
    custom_included_sheets: Option<Vec<String>>,
    #[serde(default)]
    strict: bool,
}

/// Resolved converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    pub api_key: String,
    pub sheet_id: String,
    /// Root directory receiving `<locale>/<sheet>.json`
    pub target_dir: PathBuf,
    /// Locale codes in spreadsheet column order
    pub languages: Vec<String>,
    /// Sheets processed when no sheet is named on the command line
    pub custom_included_sheets: Option<Vec<String>>,
    /// Report rows whose paths disagree about node shape
    pub strict: bool,
}

impl I18nConfig {
    /// Create a configuration with default target dir and languages
    pub fn new(api_key: impl Into<String>, sheet_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            sheet_id: sheet_id.into(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            custom_included_sheets: None,
            strict: false,
        }
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<PathBuf>) -> Self {
        self.target_dir = target_dir.into();
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_custom_included_sheets(mut self, sheets: Vec<String>) -> Self {
        self.custom_included_sheets = Some(sheets);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::invalid_config(path, format!("Failed to read file: {}", e)),
        })?;

        Self::from_json_str(&content, path)
    }

    /// Parse configuration content; `path` is only used in error messages
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(content)
            .map_err(|e| ConvertError::invalid_config(path, format!("Invalid JSON syntax: {}", e)))?;

        let api_key = non_empty(file.google_api_key);
        let sheet_id = non_empty(file.google_sheet_id);
        let (Some(api_key), Some(sheet_id)) = (api_key, sheet_id) else {
            return Err(ConvertError::MissingCredentials {
                path: path.to_path_buf(),
            });
        };

        let mut config = Self::new(api_key, sheet_id).with_strict(file.strict);

        if let Some(target_dir) = file.target_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            config = config.with_target_dir(target_dir);
        }

        if let Some(languages) = file.languages {
            if languages.is_empty() {
                return Err(ConvertError::invalid_config(
                    path,
                    "\"languages\" must list at least one locale",
                ));
            }
            config = config.with_languages(languages);
        }

        if let Some(sheets) = file.custom_included_sheets {
            config = config.with_custom_included_sheets(sheets);
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<I18nConfig> {
        I18nConfig::from_json_str(content, Path::new(DEFAULT_CONFIG_FILE))
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(r#"{"GOOGLE_API_KEY": "key", "GOOGLE_SHEET_ID": "sheet"}"#).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.sheet_id, "sheet");
        assert_eq!(config.target_dir, PathBuf::from("./locales"));
        assert_eq!(config.languages, vec!["ko", "en"]);
        assert!(config.custom_included_sheets.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"{
                "GOOGLE_API_KEY": "key",
                "GOOGLE_SHEET_ID": "sheet",
                "targetDir": "public/i18n",
                "languages": ["en", "ja", "ko"],
                "customIncludedSheets": ["common"],
                "strict": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.target_dir, PathBuf::from("public/i18n"));
        assert_eq!(config.languages, vec!["en", "ja", "ko"]);
        assert_eq!(config.custom_included_sheets, Some(vec!["common".to_string()]));
        assert!(config.strict);
    }

    #[test]
    fn test_missing_credentials() {
        let err = parse(r#"{"GOOGLE_API_KEY": "key"}"#).unwrap_err();
        assert!(matches!(err, ConvertError::MissingCredentials { .. }));

        let err = parse(r#"{"GOOGLE_API_KEY": " ", "GOOGLE_SHEET_ID": "sheet"}"#).unwrap_err();
        assert!(matches!(err, ConvertError::MissingCredentials { .. }));
    }

    #[test]
    fn test_empty_languages_rejected() {
        let err = parse(r#"{"GOOGLE_API_KEY": "k", "GOOGLE_SHEET_ID": "s", "languages": []}"#)
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfig { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse("{ GOOGLE_API_KEY: 'key' }").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON syntax"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = I18nConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConvertError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"GOOGLE_API_KEY": "k", "GOOGLE_SHEET_ID": "s"}"#).unwrap();

        let config = I18nConfig::load(&path).unwrap();
        assert_eq!(config, I18nConfig::new("k", "s"));
    }

    #[test]
    fn test_example_config_is_loadable() {
        let config = parse(CONFIG_EXAMPLE).unwrap();
        assert_eq!(config.languages, vec!["ko", "en"]);
    }
}
