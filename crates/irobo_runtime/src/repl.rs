//! The interactive parser REPL.

use std::io::{self, Write};

use irobo_foundation::{Error, Result};
use irobo_script::parse_with_locale;
use irobo_translations::Locale;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::json::to_json_pretty;

/// The interactive REPL.
///
/// Each complete input is parsed with the configured keyword locale and its
/// syntax tree is printed as JSON. Input that opens a brace or parenthesis
/// continues on the next line until it balances.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Keyword locale for parsing.
    locale: Locale,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor and locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Self::with_locale(Locale::default())
    }

    /// Creates a new REPL parsing with the given keyword locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn with_locale(locale: Locale) -> Result<Self> {
        let editor = RustylineEditor::new(locale)?;
        Ok(Self::with_editor(editor, locale))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and locale.
    pub fn with_editor(editor: E, locale: Locale) -> Self {
        Self {
            editor,
            locale,
            show_banner: true,
            prompt: "irobo> ".to_string(),
            continuation_prompt: "... ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the keyword locale this REPL parses with.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        // Read input
        let Some(input) = self.read_input()? else {
            return Ok(false); // EOF
        };

        // Skip empty lines
        if input.trim().is_empty() {
            return Ok(true);
        }

        // Add to history
        self.editor.add_history(&input);

        // Eval and print
        match self.eval(&input) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                self.print_error(&e);
            }
        }

        Ok(true)
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push('\n');
                        input.push_str(&line);
                    }

                    // Check if input is complete
                    if self.is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    } else {
                        println!();
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::io("unexpected EOF in multi-line input"));
                }
            }
        }
    }

    /// Checks if input is syntactically complete (balanced braces).
    #[allow(clippy::unused_self)]
    fn is_complete(&self, input: &str) -> bool {
        let mut depth = 0i32;
        let mut in_comment = false;

        for c in input.chars() {
            match c {
                '\n' => in_comment = false,
                '#' => in_comment = true,
                '(' | '{' if !in_comment => depth += 1,
                ')' | '}' if !in_comment => depth -= 1,
                _ => {}
            }
        }

        depth <= 0
    }

    /// Parses input and renders its syntax tree as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or rendering fails.
    pub fn eval(&self, input: &str) -> Result<String> {
        let script = parse_with_locale(input, self.locale)?;
        to_json_pretty(&script)
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("  _           _           ");
        println!(" (_)_ __ ___ | |__   ___  ");
        println!(" | | '__/ _ \\| '_ \\ / _ \\ ");
        println!(" | | | | (_) | |_) | (_) |");
        println!(" |_|_|  \\___/|_.__/ \\___/ ");
        println!("\x1b[0m");
        println!(
            "Welcome to irobo REPL v{} (language: {})",
            env!("CARGO_PKG_VERSION"),
            self.locale
        );
        println!("Scripts parse to their JSON syntax tree. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
