// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Rendering of token dumps, statistics and errors.

use std::collections::BTreeMap;

use optica_lexer::{Token, TokenKind};
use owo_colors::OwoColorize;

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};

/// Applies `style` to `text` only when colour is enabled.
pub fn paint<F>(text: &str, color: bool, style: F) -> String
where
    F: FnOnce(&str) -> String,
{
    if color { style(text) } else { text.to_string() }
}

/// Normalises CRLF line endings to LF.
pub fn normalize_newlines(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

/// Renders a token sequence according to the configured format.
pub fn render_tokens(tokens: &[Token], config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Pretty => Ok(tokens
            .iter()
            .filter(|t| config.show_structural || !t.kind.is_structural())
            .map(|t| format_token(t, config.color))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Formats one token as `L<line>:<col> KIND value`.
pub fn format_token(token: &Token, color: bool) -> String {
    let position = format!("L{}:{}", token.line, token.column);
    let name = token.kind.name();
    let value = token_value(&token.kind);

    if !color {
        return match value {
            Some(value) => format!("{position:<10} {name:<12} {value}"),
            None => format!("{position:<10} {name}"),
        };
    }

    let position = format!("{position:<10}");
    let name = format!("{name:<12}");
    let name = match &token.kind {
        kind if kind.is_keyword() => name.magenta().bold().to_string(),
        kind if kind.is_literal() => name.green().to_string(),
        kind if kind.is_operator() => name.cyan().to_string(),
        kind if kind.is_structural() => name.dimmed().to_string(),
        _ => name.yellow().to_string(),
    };

    match value {
        Some(value) => format!("{} {} {}", position.dimmed(), name, value.white()),
        None => format!("{} {}", position.dimmed(), name.trim_end()),
    }
}

/// The decoded value shown after a token's kind, if it carries one.
fn token_value(kind: &TokenKind) -> Option<String> {
    match kind {
        TokenKind::Integer(n) => Some(n.to_string()),
        TokenKind::Real(n) => Some(format!("{n:?}")),
        TokenKind::String(s) => Some(format!("{s:?}")),
        TokenKind::Identifier(s) => Some(s.clone()),
        TokenKind::Indent(width) => Some(width.to_string()),
        _ => None,
    }
}

/// Counts tokens per kind name, sorted by descending count then name.
pub fn token_stats(tokens: &[Token]) -> Vec<(&'static str, usize)> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind.name()).or_default() += 1;
    }

    let mut stats: Vec<_> = counts.into_iter().collect();
    stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    stats
}

/// Renders the statistics table.
pub fn render_stats(tokens: &[Token], config: &Config) -> Result<String> {
    let stats = token_stats(tokens);

    if config.format == OutputFormat::Json {
        let histogram: BTreeMap<_, _> = stats.iter().copied().collect();
        let value = serde_json::json!({
            "total": tokens.len(),
            "kinds": histogram,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut lines = Vec::with_capacity(stats.len() + 1);
    let total = format!("{} tokens", tokens.len());
    lines.push(if config.color {
        total.white().bold().to_string()
    } else {
        total
    });

    for (name, count) in stats {
        let row = format!("  {name:<12} {count:>6}");
        lines.push(if config.color { row.cyan().to_string() } else { row });
    }

    Ok(lines.join("\n"))
}

/// Prints an error to stderr, with a source excerpt for lexical errors.
pub fn print_error(error: &CliError, color: bool) {
    if color {
        eprintln!("{}: {}", "Error".red().bold(), error);
    } else {
        eprintln!("Error: {error}");
    }

    if let Some((line, caret)) = error.caret_snippet() {
        eprintln!("    {line}");
        if color {
            eprintln!("    {}", caret.red().bold());
        } else {
            eprintln!("    {caret}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica_lexer::tokenize;

    fn plain() -> Config {
        Config {
            color: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_paint_respects_color() {
        let style = |s: &str| s.red().to_string();
        assert_eq!(paint("Error", false, style), "Error");
        assert!(paint("Error", true, style).contains("\x1b["));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\r\n".into()), "a\nb\n");
        assert_eq!(normalize_newlines("a\nb".into()), "a\nb");
        assert_eq!(normalize_newlines("a\rb".into()), "a\rb");
    }

    #[test]
    fn test_pretty_dump() {
        let tokens = tokenize("x = 2.5").unwrap();
        let out = render_tokens(&tokens, &plain()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "L1:1       IDENTIFIER   x");
        assert_eq!(lines[1], "L1:3       EQ");
        assert_eq!(lines[2], "L1:5       REAL         2.5");
        assert_eq!(lines[3], "L1:8       END");
    }

    #[test]
    fn test_hide_structural() {
        let tokens = tokenize("a:\n    b\n").unwrap();
        let config = Config {
            show_structural: false,
            ..plain()
        };
        let out = render_tokens(&tokens, &config).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(!out.contains("INDENT"));
    }

    #[test]
    fn test_json_dump() {
        let tokens = tokenize("set S").unwrap();
        let config = Config {
            format: OutputFormat::Json,
            ..plain()
        };
        let out = render_tokens(&tokens, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["kind"], "Set");
        assert_eq!(array[1]["kind"]["Identifier"], "S");
        assert_eq!(array[1]["column"], 5);
        assert_eq!(array[2]["raw_text"], "");
    }

    #[test]
    fn test_string_value_is_quoted() {
        let tokens = tokenize("'a\\tb'").unwrap();
        assert_eq!(format_token(&tokens[0], false), "L1:1       STRING       \"a\\tb\"");
    }

    #[test]
    fn test_stats_ordering() {
        let tokens = tokenize("a b c + + 1").unwrap();
        let stats = token_stats(&tokens);
        assert_eq!(
            stats,
            vec![("IDENTIFIER", 3), ("PLUS", 2), ("END", 1), ("INTEGER", 1)]
        );
    }

    #[test]
    fn test_stats_json() {
        let tokens = tokenize("x x").unwrap();
        let config = Config {
            format: OutputFormat::Json,
            ..plain()
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_stats(&tokens, &config).unwrap()).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["kinds"]["IDENTIFIER"], 2);
    }
}
