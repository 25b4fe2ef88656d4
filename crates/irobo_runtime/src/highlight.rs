//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use irobo_foundation::Result;
use irobo_translations::{Lexicon, Locale, WordRole};

/// Highlighter for irobo script syntax.
///
/// Words are classified through the lexicon of the locale the highlighter
/// was built for, so `herhaal` lights up exactly like `repeat` does.
pub struct IroboHighlighter {
    lexicon: Lexicon,
}

impl IroboHighlighter {
    /// Creates a highlighter for the given keyword locale.
    ///
    /// # Errors
    /// Returns a configuration error if the locale's table is malformed.
    pub fn new(locale: Locale) -> Result<Self> {
        Ok(Self {
            lexicon: Lexicon::new(locale)?,
        })
    }

    /// Highlights a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut in_comment = false;

        while let Some(c) = chars.next() {
            if in_comment {
                result.push(c);
                continue;
            }

            match c {
                // Comments
                '#' => {
                    in_comment = true;
                    result.push_str("\x1b[2;3m"); // dim italic
                    result.push(c);
                }

                // Numbers
                c if c.is_ascii_digit() => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() || next == '.' {
                            result.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                }

                // Delimiters - bright
                '(' | ')' | '{' | '}' => {
                    result.push_str("\x1b[1m"); // bold
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Words
                c if c.is_alphabetic() || c == '_' => {
                    let mut word = String::new();
                    word.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() || next == '_' {
                            word.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    // Color based on word role
                    let color = match self.lexicon.resolve(&word) {
                        Some(entry) => match entry.role {
                            WordRole::Keyword => "\x1b[32m", // green
                            WordRole::Atom => "\x1b[34m",    // blue
                            WordRole::Builtin => "\x1b[36m", // cyan
                        },
                        None => match word.as_str() {
                            "and" | "or" | "not" => "\x1b[1m", // bold
                            _ => "",
                        },
                    };

                    if color.is_empty() {
                        result.push_str(&word);
                    } else {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str("\x1b[0m");
                    }
                }

                _ => result.push(c),
            }
        }

        // Reset at end
        if in_comment {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}
