pub use crate::config::cli::Args;
pub use crate::config::{Config, ConfigError};
pub use crate::paths::{derive_test_path, PathError, TestKind};
pub use crate::templates::{TemplateError, TemplateStore};

pub mod browser;
pub mod clipboard;
pub mod config;
pub mod interactive;
pub mod paths;
pub mod prompts;
pub mod scaffold;
pub mod templates;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal pipeline error type.
///
/// Advisory failures (editor, clipboard, browser) are not represented here;
/// the CLI driver handles those locally and the run continues.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
    #[error("failed to read source file '{path}': {source}")]
    SourceRead { path: PathBuf, source: io::Error },
    #[error("failed to read example file '{path}': {source}")]
    ExampleRead { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Result of a prompt-generation run.
#[derive(Debug)]
pub struct GeneratedPrompt {
    /// The fully assembled prompt text
    pub prompt: String,
    /// Where the scaffolded test file lives
    pub test_path: PathBuf,
    /// Whether the test file was created by this run
    pub created: bool,
}

/// Run the core pipeline: derive the test path, scaffold the test file,
/// read the source under test and assemble the prompt.
///
/// Opening the editor, clipboard and browser are left to the caller since
/// their failures are advisory rather than fatal.
pub fn generate_test_prompt(
    source_path: &Path,
    kind: TestKind,
    config: &Config,
) -> Result<GeneratedPrompt, RunError> {
    let test_path = derive_test_path(source_path, kind, config.integration_root())?;
    let created = scaffold::ensure_test_file(&test_path)?;

    let source_text = fs::read_to_string(source_path).map_err(|e| RunError::SourceRead {
        path: source_path.to_path_buf(),
        source: e,
    })?;

    let store = TemplateStore::new()?;
    let prompt = match config.example_override(kind) {
        Some(example_path) => {
            let example =
                fs::read_to_string(&example_path).map_err(|e| RunError::ExampleRead {
                    path: example_path.clone(),
                    source: e,
                })?;
            store.assemble_prompt_with_example(kind, &source_text, &example)?
        }
        None => store.assemble_prompt(kind, &source_text)?,
    };

    Ok(GeneratedPrompt {
        prompt,
        test_path,
        created,
    })
}
