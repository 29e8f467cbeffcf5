use std::env;
use std::path::Path;
use std::process;

use colored::*;

use mktest::scaffold::{self, EditorError, EDITOR_REMEDIATION};
use mktest::{browser, clipboard, interactive, Args, Config, TestKind};

fn main() {
    let args = Args::new_from(env::args());

    if args.init_config {
        match mktest::config::file::create_config_file(args.config_path.as_deref()) {
            Ok(path) => {
                println!("{} {}", "Created configuration file at".green(), path.display());
                return;
            }
            Err(e) => {
                eprintln!("{}", "Error creating configuration file:".red().bold());
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", "Error loading configuration:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    config.apply_args(&args);

    let source_path = match resolve_source_path(&args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", "Error:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let kind = match resolve_kind(&args) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{}", "Error:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let generated = match mktest::generate_test_prompt(Path::new(&source_path), kind, &config) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("{}", "Error generating test prompt:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // In print-only mode stdout carries nothing but the prompt so the
    // output can be piped.
    if config.print_only {
        print!("{}", generated.prompt);
        return;
    }

    if generated.created {
        println!("Created {} test file at {}", kind, generated.test_path.display());
    } else {
        println!(
            "{} test file already exists at {}",
            kind,
            generated.test_path.display()
        );
    }

    // Editor and clipboard failures are advisory: the prompt is the
    // deliverable and it already exists at this point.
    if !config.no_edit {
        match scaffold::open_in_editor(&config.editor_command, &generated.test_path) {
            Ok(()) => {}
            Err(EditorError::NotFound(command)) => {
                eprintln!(
                    "{}",
                    format!("Could not find the '{}' command. Here is a potential fix.", command)
                        .yellow()
                        .bold()
                );
                eprintln!("{}", EDITOR_REMEDIATION);
            }
            Err(e) => {
                eprintln!("{} {}", "Warning:".yellow().bold(), e);
            }
        }
    }

    match clipboard::copy(&generated.prompt) {
        Ok(()) => println!("{}", "Copied prompt to clipboard".green().bold()),
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            eprintln!("Re-run with --print-only to get the prompt on stdout");
        }
    }

    if should_open_browser(&args) {
        println!("Opening browser");
        if let Err(e) = browser::open(&config.chat_url) {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
        }
    } else {
        println!("Goodbye for now");
    }
}

fn resolve_source_path(args: &Args) -> Result<String, interactive::PromptError> {
    match &args.path {
        Some(path) => Ok(path.clone()),
        None => interactive::ask_source_path(),
    }
}

fn resolve_kind(args: &Args) -> Result<TestKind, interactive::PromptError> {
    match args.kind {
        Some(kind) => Ok(kind),
        None => interactive::ask_test_kind(),
    }
}

fn should_open_browser(args: &Args) -> bool {
    if args.open_browser {
        return true;
    }
    if args.no_browser {
        return false;
    }
    interactive::confirm("Open the chat interface in your browser?").unwrap_or(false)
}
