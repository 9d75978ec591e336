//! nestmenu CLI - pick from a paged menu in the terminal
//!
//! Usage: nestmenu [OPTIONS] [ITEMS]...
//!
//! Prints the chosen name(s) on stdout. Exit status is 0 when something was
//! selected or executed, 1 when the menu was cancelled and 2 on errors.

use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use nestmenu::presentation::{write_outcome, Cli, OutputFormat};
use nestmenu::{config, load_source, CrosstermTerminal, EntrySource, Menu, MenuOutcome};

const EXIT_CANCELLED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(EXIT_ERROR);
    }

    match run(&cli) {
        Ok(MenuOutcome::Cancelled) => ExitCode::from(EXIT_CANCELLED),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "nestmenu failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<MenuOutcome> {
    let (config, warnings) =
        config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    let source = match &cli.file {
        Some(path) => load_source(path)
            .with_context(|| format!("cannot load menu document {}", path.display()))?,
        None => EntrySource::sequence(cli.items.iter().cloned()),
    };

    // Validate before touching the terminal.
    let menu = Menu::new(source, cli.apply_to(config.menu_options()))
        .context("cannot build menu")?;
    let mut executor = config.executor();

    let outcome = {
        let mut terminal = CrosstermTerminal::open()?;
        menu.run(&mut terminal, &mut executor)?
    };

    write_outcome(
        &mut io::stdout().lock(),
        OutputFormat::from_json_flag(cli.json),
        &outcome,
        &executor.take_output(),
    )
    .context("failed to write result")?;

    Ok(outcome)
}

/// Logs never go to the menu's screen: they are written to `--log-file`, or
/// to stderr only when `-v` was given.
fn init_logging(cli: &Cli) -> Result<()> {
    if cli.log_file.is_none() && cli.verbose == 0 {
        return Ok(());
    }

    let default_level = match cli.verbose {
        0 | 1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("NESTMENU_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("nestmenu={default_level}")));

    let registry = tracing_subscriber::registry().with(filter);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .init();
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}
