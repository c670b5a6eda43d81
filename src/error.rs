// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the optica CLI.

use std::path::PathBuf;

use optica_lexer::LexicalError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Main error type for the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// A source file failed to tokenize
    #[error("{}:{}:{}: {}", path.display(), source.line, source.column, source.message())]
    Lex {
        /// File (or `<eval>`/`<repl>`) the source came from
        path: PathBuf,
        /// The normalised source text, kept for the caret display
        text: String,
        /// The lexical error
        source: LexicalError,
    },

    /// Source file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file that failed to parse
        path: PathBuf,
        /// TOML error
        source: toml::de::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// REPL line editor error
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CliError {
    /// The offending source line and a caret under the error column,
    /// for lexical errors only.
    pub fn caret_snippet(&self) -> Option<(String, String)> {
        let CliError::Lex { text, source, .. } = self else {
            return None;
        };

        let line = text.lines().nth(source.line.saturating_sub(1)).unwrap_or("");
        // Tabs stay tabs so the caret lines up with the echoed source
        let pad: String = line
            .chars()
            .take(source.column.saturating_sub(1))
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();

        Some((line.to_string(), format!("{pad}^")))
    }
}
