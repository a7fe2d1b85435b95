use colored::Colorize;
use std::path::Path;

use crate::config::{CONFIG_DOCS_URL, CONFIG_EXAMPLE};

/// Console logger for the converter
///
/// Progress goes to stdout, problems to stderr. `quiet` silences stdout
/// output, `verbose` enables debug lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    verbose: bool,
    quiet: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", format!("✨ {}", message).green());
        }
    }

    pub fn folder_created(&self, path: &Path) {
        if !self.quiet {
            println!("📁 {} Folder created.", path.display());
        }
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message.dimmed());
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    /// Explain how to write a configuration file
    pub fn config_guide(&self) {
        eprintln!(
            "{}",
            "Please create an i18nconfig.json file in your project root with the following structure:"
                .yellow()
        );
        eprintln!("{}", CONFIG_EXAMPLE);
        eprintln!("{}", "For more information, please refer to:".yellow());
        eprintln!("{}", CONFIG_DOCS_URL.cyan());
    }
}
