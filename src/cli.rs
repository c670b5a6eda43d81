// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for optica.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, OutputFormat};

/// optica - tokenizer for the Optica optimization modeling language
#[derive(Parser, Debug)]
#[command(name = "optica")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, env = "OPTICA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Token dump format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize files (or a string) and print the tokens
    #[command(alias = "l")]
    Lex(LexArgs),

    /// Print token counts per kind
    Stats(StatsArgs),

    /// Start the interactive tokenizer REPL
    Repl,

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default, Clone)]
pub struct LexArgs {
    /// Source files to tokenize
    #[arg(value_name = "FILE", required_unless_present = "eval")]
    pub files: Vec<PathBuf>,

    /// Tokenize this source text instead of files
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "files")]
    pub eval: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Source file to analyse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_color {
            config.color = false;
        }
    }

    /// Default log directive derived from `--verbose`/`--quiet`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
