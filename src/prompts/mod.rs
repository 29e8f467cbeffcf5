//! Fixed prompt texts, embedded at compile time.
//!
//! The original workflow kept near-duplicate copies of these strings in
//! every entry point. They live here exactly once and are referenced by
//! the template store.

pub static SYSTEM_PROMPT: &str = include_str!("system_prompt.txt");
pub static PROJECT_BRIEF: &str = include_str!("project_brief.txt");
pub static COMMON_GENERATORS: &str = include_str!("common_generators.txt");
pub static FINAL_INSTRUCTION: &str = include_str!("final_instruction.txt");

pub static UNIT_EXAMPLE: &str = include_str!("unit_example.txt");
pub static API_EXAMPLE: &str = include_str!("api_example.txt");

pub static UNIT_PROMPT_TEMPLATE: &str = include_str!("unit_prompt.hbs");
pub static API_PROMPT_TEMPLATE: &str = include_str!("api_prompt.hbs");

/// Role preamble plus project brief, the part shared by every prompt.
pub fn base_prompt() -> String {
    format!("{}\n\n{}", SYSTEM_PROMPT.trim(), PROJECT_BRIEF.trim())
}
