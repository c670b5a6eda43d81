// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! optica - command-line tokenizer for the Optica modeling language
//!
//! This is the main entry point for the optica CLI/REPL.
//!
//! ## Features
//!
//! - Token dumps of model files, pretty or JSON
//! - Per-kind token statistics
//! - Interactive REPL with keyword highlighting and history
//! - Async file loading with tokio, parallel tokenizing with rayon

mod cli;
mod config;
mod error;
mod output;
mod repl;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, LexArgs, StatsArgs};
use config::{Config, OutputFormat};
use error::{CliError, Result};
use optica_lexer::tokenize_all;
use output::{normalize_newlines, paint, print_error, render_stats, render_tokens};

/// Main entry point - uses tokio runtime for async file loading.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            print_error(&err, !cli.no_color);
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);

    let result = match &cli.command {
        Some(Commands::Lex(args)) => run_lex(args, &config).await,
        Some(Commands::Stats(args)) => run_stats(args, &config).await,
        Some(Commands::Version) => {
            println!("{}", version_text(config.color));
            Ok(())
        }
        Some(Commands::Repl) | None => run_repl(config.clone()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, config.color);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the verbosity flags.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Start the interactive REPL
fn run_repl(config: Config) -> Result<()> {
    let mut repl = repl::Repl::new(config)?;
    repl.run()
}

/// Tokenize files (or `--eval` text) and print the tokens.
///
/// Files are read concurrently and tokenized in parallel; output follows
/// argument order and stops at the first failure.
async fn run_lex(args: &LexArgs, config: &Config) -> Result<()> {
    let (paths, sources) = match &args.eval {
        Some(source) => (
            vec![PathBuf::from("<eval>")],
            vec![normalize_newlines(source.clone())],
        ),
        None => (args.files.clone(), read_sources(&args.files).await?),
    };

    info!(files = paths.len(), "tokenizing");
    let (sources, results) = tokio::task::spawn_blocking(move || {
        let results = tokenize_all(&sources);
        (sources, results)
    })
    .await
    .map_err(|err| CliError::Io(std::io::Error::other(err)))?;

    let show_headers = paths.len() > 1 && config.format == OutputFormat::Pretty;
    for ((path, text), result) in paths.iter().zip(sources).zip(results) {
        let tokens = result.map_err(|source| CliError::Lex {
            path: path.clone(),
            text,
            source,
        })?;

        if show_headers {
            print_header(path, config);
        }
        println!("{}", render_tokens(&tokens, config)?);
    }

    Ok(())
}

/// Print token counts per kind for one file.
async fn run_stats(args: &StatsArgs, config: &Config) -> Result<()> {
    let text = read_source(&args.file).await?;

    let tokens = optica_lexer::tokenize(&text).map_err(|source| CliError::Lex {
        path: args.file.clone(),
        text: text.clone(),
        source,
    })?;

    println!("{}", render_stats(&tokens, config)?);
    Ok(())
}

/// Reads all files concurrently, preserving order.
async fn read_sources(paths: &[PathBuf]) -> Result<Vec<String>> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { read_source(&path).await }))
        .collect();

    let mut sources = Vec::with_capacity(handles.len());
    for handle in handles {
        let source = handle
            .await
            .map_err(|err| CliError::Io(std::io::Error::other(err)))??;
        sources.push(source);
    }
    Ok(sources)
}

/// Reads one source file and normalises its line endings.
async fn read_source(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(normalize_newlines(text))
}

fn print_header(path: &Path, config: &Config) {
    let header = format!("==> {} <==", path.display());
    println!("{}", paint(&header, config.color, |s| s.white().bold().to_string()));
}

/// Version banner for `optica version`.
fn version_text(color: bool) -> String {
    let name = paint("optica", color, |s| s.bright_cyan().bold().to_string());
    let version = paint(env!("CARGO_PKG_VERSION"), color, |s| s.yellow().to_string());
    let label = paint("lexer tab width", color, |s| s.dimmed().to_string());

    format!("{name} {version}\n{label} {}", optica_lexer::lexer::TAB_WIDTH)
}
