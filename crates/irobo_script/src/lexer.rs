//! Lexer for irobo scripts.
//!
//! The lexer converts source text into a stream of tokens, resolving each
//! word against the lexicon as it goes. Comments run from `#` to the end of
//! the line and are emitted as trivia tokens.

use irobo_translations::Lexicon;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for irobo script source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Lexicon used to resolve word tokens.
    lexicon: &'src Lexicon,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over `source`, resolving words through `lexicon`.
    #[must_use]
    pub fn new(source: &'src str, lexicon: &'src Lexicon) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            lexicon,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '-' => {
                self.advance();
                TokenKind::Minus
            }
            '|' => {
                self.advance();
                TokenKind::Pipe
            }
            '#' => self.scan_comment(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_word_start(c) => self.scan_word(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character '{c}'"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes the whole source, including trivia and the final EOF token.
    #[must_use]
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a comment from `#` to end of line.
    fn scan_comment(&mut self) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        TokenKind::Comment
    }

    /// Scans a number (integer or float).
    ///
    /// Signs are separate tokens; `-1` lexes as `-` followed by `1`.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        let mut has_dot = false;

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.'
                && !has_dot
                && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
            {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.position];

        if has_dot {
            match text.parse::<f64>() {
                Ok(n) => TokenKind::Float(n),
                Err(e) => TokenKind::Error(format!("invalid float '{text}': {e}")),
            }
        } else {
            match text.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                Err(e) => TokenKind::Error(format!("invalid integer '{text}': {e}")),
            }
        }
    }

    /// Scans a word and resolves it through the lexicon.
    ///
    /// The operator words `and`, `or`, and `not` belong to the grammar in
    /// every locale and are recognized before the table lookup.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if is_word_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        let surface = &self.source[start..self.position];

        match surface {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            _ => TokenKind::Word {
                surface: surface.to_string(),
                canonical: self.lexicon.resolve(surface),
            },
        }
    }
}

/// Returns true if `c` can start a word.
fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can appear in a word (not at start).
fn is_word_char(c: char) -> bool {
    is_word_start(c) || c.is_ascii_digit()
}
