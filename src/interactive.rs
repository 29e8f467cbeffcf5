//! Interactive stdin prompts for the CLI driver.
//!
//! Parsing is split from terminal I/O so selection handling can be tested
//! without a tty.

use std::io::{self, BufRead, Write};

use colored::*;
use thiserror::Error;

use crate::paths::TestKind;

/// Interactive input error type
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("invalid selection: '{input}' (expected a number between 1 and {max})")]
    InvalidSelection { input: String, max: usize },
    #[error("no source path provided")]
    EmptyPath,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Ask for the path of the file to write tests for.
pub fn ask_source_path() -> Result<String, PromptError> {
    print!("Enter the path of the file to write tests for: ");
    io::stdout().flush()?;

    let line = read_line()?;
    let path = line.trim();
    if path.is_empty() {
        return Err(PromptError::EmptyPath);
    }
    Ok(path.to_string())
}

/// Show the numbered test-kind menu and return the selection.
pub fn ask_test_kind() -> Result<TestKind, PromptError> {
    println!("Available test types:");
    for (idx, kind) in TestKind::ALL.iter().enumerate() {
        println!("{}. {}", idx + 1, kind);
    }
    print!("Select test type by number: ");
    io::stdout().flush()?;

    let line = read_line()?;
    parse_kind_selection(line.trim())
}

/// Ask a yes/no question; anything other than y/yes is a no.
pub fn confirm(question: &str) -> Result<bool, PromptError> {
    print!("{} {} ", question, "y/n".dimmed());
    io::stdout().flush()?;

    let line = read_line()?;
    Ok(parse_confirmation(line.trim()))
}

fn parse_kind_selection(input: &str) -> Result<TestKind, PromptError> {
    let invalid = || PromptError::InvalidSelection {
        input: input.to_string(),
        max: TestKind::ALL.len(),
    };

    let selection: usize = input.parse().map_err(|_| invalid())?;
    selection
        .checked_sub(1)
        .and_then(|idx| TestKind::ALL.get(idx))
        .copied()
        .ok_or_else(invalid)
}

fn parse_confirmation(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "y" | "yes")
}

fn read_line() -> Result<String, io::Error> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selections() {
        assert_eq!(parse_kind_selection("1").unwrap(), TestKind::Unit);
        assert_eq!(parse_kind_selection("2").unwrap(), TestKind::Api);
    }

    #[test]
    fn test_out_of_range_selection() {
        let result = parse_kind_selection("5");
        match result {
            Err(PromptError::InvalidSelection { input, max }) => {
                assert_eq!(input, "5");
                assert_eq!(max, 2);
            }
            other => panic!("Expected InvalidSelection, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_selection_is_invalid() {
        assert!(matches!(
            parse_kind_selection("0"),
            Err(PromptError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_non_numeric_selection_is_invalid() {
        assert!(matches!(
            parse_kind_selection("unit"),
            Err(PromptError::InvalidSelection { .. })
        ));
        assert!(matches!(
            parse_kind_selection(""),
            Err(PromptError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_confirmation_parsing() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("yes"));
        assert!(parse_confirmation("YES"));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("no"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("maybe"));
    }
}
