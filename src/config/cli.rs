use clap::Parser;

use crate::paths::TestKind;

/// A CLI tool that drafts AI prompts for writing unit and API tests
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the source file to write tests for (prompted for when omitted)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Kind of test to generate (prompted for when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<TestKind>,

    /// Only print the assembled prompt; skip the editor, clipboard and browser
    #[arg(long, default_value_t = false)]
    pub print_only: bool,

    /// Do not open the scaffolded test file in an editor
    #[arg(long, default_value_t = false)]
    pub no_edit: bool,

    /// Open the chat interface in a browser without asking
    #[arg(long, default_value_t = false)]
    pub open_browser: bool,

    /// Never open a browser (skips the confirmation prompt)
    #[arg(long, default_value_t = false, conflicts_with = "open_browser")]
    pub no_browser: bool,

    /// Root directory for API test mirrors
    #[arg(long)]
    pub root: Option<String>,

    /// Command used to open the scaffolded test file
    #[arg(long)]
    pub editor: Option<String>,

    /// Path to a file replacing the built-in worked example
    #[arg(long)]
    pub example: Option<String>,

    /// Create a new configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Path to save the configuration file (defaults to .mktest.toml in current directory)
    #[arg(long)]
    pub config_path: Option<String>,
}

impl Args {
    pub fn new_from(args: impl Iterator<Item = String>) -> Self {
        Self::parse_from(args)
    }
}
