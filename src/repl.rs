// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that tokenizes Optica source as you type.

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

use optica_lexer::{TokenKind, tokenize};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{normalize_newlines, paint, print_error, render_tokens};

const HISTORY_FILE: &str = ".optica_history";

/// Reserved words of the language, offered for completion.
const KEYWORDS: &[&str] = &[
    "model", "set", "param", "var", "maximize", "minimize", "subject", "to", "forall", "sum",
    "in", "binary", "int", "real",
];

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize an Optica source file"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct OpticaHelper {
    /// Keywords and REPL commands for completion
    words: Vec<&'static str>,
    color: bool,
}

impl OpticaHelper {
    fn new(color: bool) -> Self {
        let words = KEYWORDS
            .iter()
            .copied()
            .chain([".help", ".exit", ".clear", ".version", ".load"])
            .collect();

        Self { words, color }
    }
}

/// Start of the word that ends at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '.')
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl Completer for OpticaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.to_string(),
                replacement: kw[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for OpticaHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        let rest = self
            .words
            .iter()
            .find(|kw| kw.starts_with(word) && kw.len() > word.len())
            .map(|kw| &kw[word.len()..])?;

        Some(if self.color {
            rest.dimmed().to_string()
        } else {
            rest.to_string()
        })
    }
}

impl Highlighter for OpticaHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.color {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut current_word = String::new();
        let mut in_string: Option<char> = None;

        for c in line.chars() {
            if let Some(quote) = in_string {
                result.push_str(&c.to_string().green().to_string());
                if c == quote {
                    in_string = None;
                }
                continue;
            }

            if c.is_alphanumeric() || c == '_' || (c == '.' && is_number(&current_word)) {
                current_word.push(c);
                continue;
            }

            if !current_word.is_empty() {
                result.push_str(&highlight_word(&current_word));
                current_word.clear();
            }

            let colored = match c {
                '(' | ')' | '[' | ']' | '{' | '}' => c.to_string().yellow().to_string(),
                '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | ':' | ',' => {
                    c.to_string().cyan().to_string()
                }
                '"' | '\'' => {
                    in_string = Some(c);
                    c.to_string().green().to_string()
                }
                '.' if line.starts_with('.') => c.to_string().magenta().to_string(),
                _ => c.to_string(),
            };
            result.push_str(&colored);
        }

        if !current_word.is_empty() {
            result.push_str(&highlight_word(&current_word));
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.color
    }
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn highlight_word(word: &str) -> String {
    if TokenKind::keyword(word).is_some() {
        word.magenta().bold().to_string()
    } else if is_number(word) {
        word.yellow().to_string()
    } else {
        word.to_string()
    }
}

impl Validator for OpticaHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Decides whether an entry is ready to tokenize.
///
/// Dot commands are always complete. An entry that opens a block (a
/// line ending in `:`) stays open until a blank line is entered, and
/// unbalanced brackets keep the entry open too.
fn is_complete(input: &str) -> bool {
    if input.trim_start().starts_with('.') {
        return true;
    }

    if !is_balanced(input) {
        return false;
    }

    let opens_block = input.lines().any(|line| line.trim_end().ends_with(':'));
    let last_line = input.rsplit('\n').next().unwrap_or("");

    !opens_block || last_line.trim().is_empty()
}

/// Check if brackets, braces, and parentheses are balanced
fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = None;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string.is_some() {
            escape_next = true;
            continue;
        }

        match in_string {
            Some(quote) if c == quote => in_string = None,
            // A raw newline ends the literal; the lexer reports it
            Some(_) if c == '\n' => in_string = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => in_string = Some(c),
                '(' => stack.push(')'),
                '[' => stack.push(']'),
                '{' => stack.push('}'),
                ')' | ']' | '}' => {
                    if stack.pop() != Some(c) {
                        return true; // Let the tokenizer report the stray bracket
                    }
                }
                _ => {}
            },
        }
    }

    stack.is_empty()
}

impl Helper for OpticaHelper {}

/// The interactive tokenizer REPL
pub struct Repl {
    editor: Editor<OpticaHelper, DefaultHistory>,
    history_path: PathBuf,
    config: Config,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(config: Config) -> Result<Self> {
        let editor_config = rustyline::Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(editor_config)?;
        editor.set_helper(Some(OpticaHelper::new(config.color)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("optica")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                debug!(%err, "cannot create history directory");
            }
        }

        if editor.load_history(&history_path).is_err() {
            debug!(path = %history_path.display(), "no REPL history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            config,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(entry) => {
                    if entry.trim().is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&entry) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.tokenize_and_print(Path::new("<repl>"), entry);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", paint("^C", self.config.color, |s| s.dimmed().to_string()));
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", paint("^D", self.config.color, |s| s.dimmed().to_string()));
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Err(err) = self.editor.save_history(&self.history_path) {
            debug!(%err, "cannot save REPL history");
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        println!("{}", banner_text(self.config.color));
    }

    fn format_prompt(&self) -> String {
        let prompt = paint("optica>", self.config.color, |s| {
            s.bright_green().bold().to_string()
        });
        format!("{prompt} ")
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => println!("{}", version_line(self.config.color)),
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!("{}", missing_path_message(self.config.color)),
            },
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!("{}", help_text(self.config.color));
    }

    fn load_file(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(text) => self.tokenize_and_print(path, text),
            Err(source) => print_error(
                &CliError::Read {
                    path: path.to_path_buf(),
                    source,
                },
                self.config.color,
            ),
        }
    }

    fn tokenize_and_print(&self, path: &Path, text: String) {
        let text = normalize_newlines(text);
        let rendered = tokenize(&text)
            .map_err(|source| CliError::Lex {
                path: path.to_path_buf(),
                text: text.clone(),
                source,
            })
            .and_then(|tokens| render_tokens(&tokens, &self.config));

        match rendered {
            Ok(out) => println!("{out}"),
            Err(err) => print_error(&err, self.config.color),
        }
    }
}

fn banner_text(color: bool) -> String {
    let dim = |s: &str| s.dimmed().to_string();
    let title = paint("Optica Tokenizer", color, |s| s.bright_cyan().bold().to_string());
    let version = paint(env!("CARGO_PKG_VERSION"), color, |s| {
        s.bright_yellow().to_string()
    });

    [
        String::new(),
        format!("  {title} {} {version}", paint("v", color, dim)),
        format!(
            "  {}",
            paint("Blocks opened with ':' continue until a blank line", color, dim)
        ),
        String::new(),
        format!(
            "  {} {} {}",
            paint("Type", color, dim),
            paint(".help", color, |s| s.cyan().to_string()),
            paint("for available commands", color, dim)
        ),
        String::new(),
    ]
    .join("\n")
}

fn help_text(color: bool) -> String {
    let dim = |s: &str| s.dimmed().to_string();
    let heading = |s: &str| s.white().bold().to_string();
    // Pad before painting so escape codes don't eat the column width
    let row = |key: &str, desc: &str, key_style: fn(&str) -> String| {
        format!(
            "  {} {}",
            paint(&format!("{key:16}"), color, key_style),
            paint(desc, color, dim)
        )
    };

    let mut lines = vec![String::new(), paint("REPL Commands:", color, heading), String::new()];
    for &(cmd, desc) in ReplCommand::all_commands() {
        lines.push(row(cmd, desc, |s| s.cyan().to_string()));
    }

    lines.push(String::new());
    lines.push(paint("Keyboard Shortcuts:", color, heading));
    lines.push(String::new());
    for (key, desc) in [
        ("Ctrl+C", "Cancel current input"),
        ("Ctrl+D", "Exit REPL"),
        ("Tab", "Complete keyword"),
        ("↑/↓", "Navigate history"),
    ] {
        lines.push(row(key, desc, |s| s.yellow().to_string()));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn version_line(color: bool) -> String {
    format!(
        "{}: {}",
        paint("optica", color, |s| s.bright_cyan().bold().to_string()),
        paint(env!("CARGO_PKG_VERSION"), color, |s| s.yellow().to_string())
    )
}

fn missing_path_message(color: bool) -> String {
    format!(
        "{}: {} {}",
        paint("Error", color, |s| s.red().bold().to_string()),
        paint(".load", color, |s| s.cyan().to_string()),
        paint("requires a file path", color, |s| s.dimmed().to_string())
    )
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}
