use anyhow::Context;
use clap::Parser;
use i18n_sheet::config::DEFAULT_CONFIG_FILE;
use i18n_sheet::{
    run_generate, ConvertError, GoogleSheetsClient, I18nConfig, LocaleWriter, Logger,
    SheetSelector,
};
use std::path::PathBuf;
use std::process;

/// i18n-sheet - Convert a translation spreadsheet into per-locale JSON files
#[derive(Parser, Debug)]
#[command(name = "i18n-sheet")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Sheet to convert (default: customIncludedSheets, or every sheet)
    #[arg(value_name = "SHEET", conflicts_with = "all", value_parser = validate_sheet_name)]
    sheet: Option<String>,

    /// Convert every sheet, ignoring customIncludedSheets
    #[arg(long)]
    all: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Warn when rows disagree about whether a key holds a value, an object or a list
    #[arg(long)]
    strict: bool,

    /// Print requested ranges and per-locale build details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn selector(&self) -> SheetSelector {
        match (&self.sheet, self.all) {
            (Some(name), _) => SheetSelector::Named(name.clone()),
            (None, true) => SheetSelector::All,
            (None, false) => SheetSelector::Configured,
        }
    }
}

/// Validate that a sheet name is not blank
fn validate_sheet_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("sheet name cannot be empty".to_string());
    }
    Ok(s.to_string())
}

fn main() {
    let cli = Cli::parse();
    let logger = Logger::new().with_verbose(cli.verbose);

    if let Err(err) = run(&cli, &logger) {
        match err.downcast_ref::<ConvertError>() {
            Some(config_err) if config_err.is_config_error() => {
                logger.error(&format!("Error: 🔺{}", config_err));
                logger.config_guide();
            }
            _ => logger.error(&format!("Error generating i18n files: {:#}", err)),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli, logger: &Logger) -> anyhow::Result<()> {
    let mut config = I18nConfig::load(&cli.config)?;
    if cli.strict {
        config.strict = true;
    }

    let client = GoogleSheetsClient::new(&config).context("could not prepare the Sheets client")?;
    let writer = LocaleWriter::new(&config.target_dir).with_logger(*logger);

    let report = run_generate(&config, &cli.selector(), &client, &writer, logger)?;
    logger.debug(&format!(
        "{} files written, {} shape collisions",
        report.files.len(),
        report.collisions.len()
    ));

    Ok(())
}
