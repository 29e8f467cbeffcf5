/// Default values for configuration
pub mod defaults {
    // Path conventions
    pub const TEST_DIR_NAME: &str = "__tests__";
    pub const SPEC_SUFFIX: &str = "spec";
    pub const INTEGRATION_TEST_ROOT: &str = "__integration-tests__/server";

    // External tools
    pub const EDITOR_COMMAND: &str = "code";
    pub const CHAT_URL: &str = "https://chat.openai.com/";

    // Behavior defaults
    pub const PRINT_ONLY: bool = false;
    pub const NO_EDIT: bool = false;

    // File paths
    pub const DEFAULT_CONFIG_FILENAME: &str = ".mktest.toml";
    pub const GLOBAL_CONFIG_DIRNAME: &str = ".config/mktest";
    pub const GLOBAL_CONFIG_FILENAME: &str = "config.toml";
}

/// Example configuration for initialization
pub fn example_config() -> String {
    format!(
        r#"# mktest configuration file

# Path conventions
# integration_root = "{}"  # Uncomment to relocate API test mirrors

# External tools
editor_command = "{}"
chat_url = "{}"

# Behavior
print_only = {}
no_edit = {}

# Custom worked examples (paths to files replacing the built-in ones)
# unit_example = "testing/examples/unit.spec.ts"
# api_example = "testing/examples/api.spec.ts"
"#,
        defaults::INTEGRATION_TEST_ROOT,
        defaults::EDITOR_COMMAND,
        defaults::CHAT_URL,
        defaults::PRINT_ONLY,
        defaults::NO_EDIT,
    )
}
