pub mod cli;
pub mod defaults;
pub mod file;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Main configuration struct that combines CLI and file configs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory that API test files are mirrored under
    pub integration_root: String,

    /// Command used to open the scaffolded test file
    pub editor_command: String,

    /// Chat interface the browser is pointed at
    pub chat_url: String,

    /// Only print the assembled prompt; skip the editor, clipboard and browser
    pub print_only: bool,

    /// Skip opening the scaffolded file in an editor
    pub no_edit: bool,

    /// Path to a file replacing the built-in unit test example
    pub unit_example: Option<String>,

    /// Path to a file replacing the built-in API test example
    pub api_example: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            integration_root: defaults::defaults::INTEGRATION_TEST_ROOT.to_string(),
            editor_command: defaults::defaults::EDITOR_COMMAND.to_string(),
            chat_url: defaults::defaults::CHAT_URL.to_string(),
            print_only: defaults::defaults::PRINT_ONLY,
            no_edit: defaults::defaults::NO_EDIT,
            unit_example: None,
            api_example: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;

        // Parse based on file extension
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            other => Err(ConfigError::ParseError(format!(
                "Unsupported file format: {:?}",
                other
            ))),
        }
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(&mut self, other: &Config) {
        // Only override non-default values
        if other.integration_root != defaults::defaults::INTEGRATION_TEST_ROOT {
            self.integration_root = other.integration_root.clone();
        }
        if other.editor_command != defaults::defaults::EDITOR_COMMAND {
            self.editor_command = other.editor_command.clone();
        }
        if other.chat_url != defaults::defaults::CHAT_URL {
            self.chat_url = other.chat_url.clone();
        }
        if other.print_only {
            self.print_only = other.print_only;
        }
        if other.no_edit {
            self.no_edit = other.no_edit;
        }
        if other.unit_example.is_some() {
            self.unit_example = other.unit_example.clone();
        }
        if other.api_example.is_some() {
            self.api_example = other.api_example.clone();
        }
    }

    /// Apply CLI argument overrides on top of this configuration
    pub fn apply_args(&mut self, args: &cli::Args) {
        if let Some(root) = &args.root {
            self.integration_root = root.clone();
        }
        if let Some(editor) = &args.editor {
            self.editor_command = editor.clone();
        }
        if args.print_only {
            self.print_only = true;
        }
        if args.no_edit {
            self.no_edit = true;
        }
        if let Some(example) = &args.example {
            // A single override file applies to whichever kind is selected
            self.unit_example = Some(example.clone());
            self.api_example = Some(example.clone());
        }
    }

    /// Resolved integration root as a path
    pub fn integration_root(&self) -> &Path {
        Path::new(&self.integration_root)
    }

    /// Load configuration from all sources (global, project)
    pub fn load() -> Result<Self, ConfigError> {
        // Start with default config
        let mut config = Self::default();

        // Try to load global config
        if let Some(global_config_path) = file::global_config_file() {
            if global_config_path.exists() {
                if let Ok(global_config) = Self::from_file(&global_config_path) {
                    config.merge(&global_config);
                }
            }
        }

        // Try to load project config
        if let Some(project_config_path) = file::find_project_config() {
            if let Ok(project_config) = Self::from_file(&project_config_path) {
                config.merge(&project_config);
            }
        }

        Ok(config)
    }

    /// Example file path for the given kind, when configured
    pub fn example_override(&self, kind: crate::paths::TestKind) -> Option<PathBuf> {
        match kind {
            crate::paths::TestKind::Unit => self.unit_example.as_ref().map(PathBuf::from),
            crate::paths::TestKind::Api => self.api_example.as_ref().map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::TestKind;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.integration_root, "__integration-tests__/server");
        assert_eq!(config.editor_command, "code");
        assert!(!config.print_only);
        assert!(config.unit_example.is_none());
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let mut base = Config::default();
        let other = Config {
            integration_root: "itest".to_string(),
            print_only: true,
            ..Default::default()
        };

        base.merge(&other);
        assert_eq!(base.integration_root, "itest");
        assert!(base.print_only);
        // Untouched fields keep their defaults
        assert_eq!(base.editor_command, "code");
    }

    #[test]
    fn test_merge_keeps_existing_when_other_is_default() {
        let mut base = Config {
            editor_command: "vim".to_string(),
            ..Default::default()
        };
        base.merge(&Config::default());
        assert_eq!(base.editor_command, "vim");
    }

    #[test]
    fn test_apply_args_overrides() {
        let args = cli::Args::new_from(
            ["mktest", "--root", "custom-root", "--print-only", "--no-edit"]
                .iter()
                .map(ToString::to_string),
        );

        let mut config = Config::default();
        config.apply_args(&args);

        assert_eq!(config.integration_root, "custom-root");
        assert!(config.print_only);
        assert!(config.no_edit);
    }

    #[test]
    fn test_example_override_applies_to_both_kinds() {
        let args = cli::Args::new_from(
            ["mktest", "--example", "custom.spec.ts"]
                .iter()
                .map(ToString::to_string),
        );

        let mut config = Config::default();
        config.apply_args(&args);

        assert_eq!(
            config.example_override(TestKind::Unit),
            Some(PathBuf::from("custom.spec.ts"))
        );
        assert_eq!(
            config.example_override(TestKind::Api),
            Some(PathBuf::from("custom.spec.ts"))
        );
    }

    #[test]
    fn test_example_config_parses_as_toml() {
        let parsed: Result<Config, _> = toml::from_str(&defaults::example_config());
        assert!(parsed.is_ok());
        let config = parsed.unwrap();
        assert_eq!(config.editor_command, "code");
    }
}
