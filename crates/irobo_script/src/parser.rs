//! Parser for irobo scripts.
//!
//! Recursive descent with a single token of lookahead. Every grammar rule is
//! its own method, and binary operators are handled by one precedence level
//! per method (`or` below `and` below `+`, unary operators binding tightest).
//!
//! The parser also enforces the elementary semantic rules that belong to the
//! front end: `break` is only legal inside a loop body, and assignment may
//! not target a word that resolves through the lexicon.

use irobo_foundation::{Error, Result};
use irobo_translations::{CanonicalWord, Lexicon, Locale, WordRole};

use crate::ast::{
    CallExpression, ConditionalBranch, Expression, LiteralValue, Operator, OperatorKind, Script,
    Statement,
};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for irobo script source.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for operator spellings).
    source: &'src str,
    /// Number of loop bodies the descent is currently inside.
    loop_depth: u32,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source and lexicon.
    #[must_use]
    pub fn new(source: &'src str, lexicon: &'src Lexicon) -> Self {
        let mut lexer = Lexer::new(source, lexicon);
        let mut current = lexer.next_token();
        while current.kind.is_trivia() {
            current = lexer.next_token();
        }
        Self {
            lexer,
            current,
            source,
            loop_depth: 0,
        }
    }

    /// Parses the whole source as a script.
    ///
    /// # Errors
    /// Returns a syntax error describing the first violation found.
    pub fn parse_script(&mut self) -> Result<Script> {
        let mut body = Vec::new();
        while self.current.kind != TokenKind::Eof {
            body.push(self.parse_statement()?);
        }
        Ok(Script { body })
    }

    /// Parses a single statement.
    fn parse_statement(&mut self) -> Result<Statement> {
        if let TokenKind::Word {
            canonical: Some(word),
            ..
        } = &self.current.kind
        {
            match word.name {
                "procedure" => return self.parse_procedure(),
                "repeat" => return self.parse_repeat(),
                "repeatWhile" => return self.parse_repeat_while(),
                "if" => return self.parse_conditional(),
                "else" => return Err(self.error("'else' without a matching 'if'")),
                "break" if self.loop_depth == 0 => {
                    return Err(self.error("'break' outside of a loop"));
                }
                _ => {}
            }
        }

        match &self.current.kind {
            TokenKind::Word { .. } => self.parse_word_statement(),
            TokenKind::Error(message) => Err(self.error(&message.clone())),
            _ => Err(self.error_expected("a statement", self.current.kind.name())),
        }
    }

    /// Parses a statement that starts with a word: an assignment or a call.
    fn parse_word_statement(&mut self) -> Result<Statement> {
        let (surface, canonical, span) = self.take_word()?;

        if self.current.kind == TokenKind::Equals {
            if canonical.is_some() {
                return Err(
                    self.error_at(span, &format!("cannot assign to built-in word '{surface}'"))
                );
            }
            self.advance();
            let value = self.parse_expression()?;
            return Ok(Statement::Assignment {
                name: surface,
                value,
            });
        }

        let expr = self.parse_call_tail(surface, canonical, span)?;
        Ok(Statement::Call { expr })
    }

    /// Parses `repeat { ... }` or `repeat(count) { ... }`.
    fn parse_repeat(&mut self) -> Result<Statement> {
        self.advance();

        if self.current.kind == TokenKind::LParen {
            self.advance();
            let count = self.parse_expression()?;
            if self.current.kind == TokenKind::Comma {
                return Err(self.error("'repeat' takes a single count"));
            }
            self.expect(&TokenKind::RParen)?;
            let body = self.parse_loop_body()?;
            return Ok(Statement::CountLoop { count, body });
        }

        let body = self.parse_loop_body()?;
        Ok(Statement::InfiniteLoop { body })
    }

    /// Parses `repeatWhile(test) { ... }`.
    fn parse_repeat_while(&mut self) -> Result<Statement> {
        self.advance();
        self.expect(&TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_loop_body()?;
        Ok(Statement::WhileLoop { test, body })
    }

    /// Parses an `if` chain with optional `else if` arms and `else` body.
    fn parse_conditional(&mut self) -> Result<Statement> {
        self.advance();
        let mut tests = vec![self.parse_branch()?];
        let mut otherwise = Vec::new();

        while self.current_is_keyword("else") {
            self.advance();
            if self.current_is_keyword("if") {
                self.advance();
                tests.push(self.parse_branch()?);
            } else {
                otherwise = self.parse_block()?;
                break;
            }
        }

        Ok(Statement::Conditional { tests, otherwise })
    }

    /// Parses one `(test) { then }` arm of a conditional.
    fn parse_branch(&mut self) -> Result<ConditionalBranch> {
        self.expect(&TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let then = self.parse_block()?;
        Ok(ConditionalBranch { test, then })
    }

    /// Parses `procedure name(params) { ... }`.
    fn parse_procedure(&mut self) -> Result<Statement> {
        self.advance();

        let (name, canonical, span) = self.take_word()?;
        if canonical.is_some() {
            return Err(
                self.error_at(span, &format!("'{name}' cannot be used as a procedure name"))
            );
        }

        let mut arguments = Vec::new();
        if self.current.kind == TokenKind::LParen {
            self.advance();
            if self.current.kind != TokenKind::RParen {
                arguments.push(self.parse_parameter()?);
                while self.current.kind == TokenKind::Comma {
                    self.advance();
                    arguments.push(self.parse_parameter()?);
                }
            }
            self.expect(&TokenKind::RParen)?;
        }

        let body = self.parse_block()?;
        Ok(Statement::Procedure {
            name,
            arguments,
            body,
        })
    }

    /// Parses a procedure parameter name.
    fn parse_parameter(&mut self) -> Result<String> {
        let (name, canonical, span) = self.take_word()?;
        if canonical.is_some() {
            return Err(
                self.error_at(span, &format!("'{name}' cannot be used as a parameter name"))
            );
        }
        Ok(name)
    }

    /// Parses a `{ ... }` block of statements.
    fn parse_block(&mut self) -> Result<Vec<Statement>> {
        let open_span = self.current.span;
        self.expect(&TokenKind::LBrace)?;

        let mut body = Vec::new();
        while self.current.kind != TokenKind::RBrace {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(open_span, "unterminated block"));
            }
            body.push(self.parse_statement()?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(body)
    }

    /// Parses a block as a loop body, tracking the depth `break` checks.
    fn parse_loop_body(&mut self) -> Result<Vec<Statement>> {
        self.loop_depth += 1;
        let body = self.parse_block();
        self.loop_depth -= 1;
        body
    }

    /// Parses an expression.
    fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_or()
    }

    /// Parses disjunction, spelled `or` or `|`.
    fn parse_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_and()?;
        while matches!(self.current.kind, TokenKind::Or | TokenKind::Pipe) {
            let operator = self.operator(OperatorKind::Or);
            self.advance();
            let right = self.parse_and()?;
            left = Expression::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Parses conjunction.
    fn parse_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_additive()?;
        while self.current.kind == TokenKind::And {
            let operator = self.operator(OperatorKind::And);
            self.advance();
            let right = self.parse_additive()?;
            left = Expression::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Parses addition.
    fn parse_additive(&mut self) -> Result<Expression> {
        let mut left = self.parse_unary()?;
        while self.current.kind == TokenKind::Plus {
            let operator = self.operator(OperatorKind::Plus);
            self.advance();
            let right = self.parse_unary()?;
            left = Expression::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Parses unary `not` and `-`, which bind tighter than any binary
    /// operator.
    fn parse_unary(&mut self) -> Result<Expression> {
        let kind = match self.current.kind {
            TokenKind::Not => Some(OperatorKind::Not),
            TokenKind::Minus => Some(OperatorKind::Minus),
            _ => None,
        };

        if let Some(kind) = kind {
            let operator = self.operator(kind);
            self.advance();
            let value = self.parse_unary()?;
            return Ok(Expression::Unary {
                operator,
                value: Box::new(value),
            });
        }

        self.parse_primary()
    }

    /// Parses a literal, a call, or a parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expression> {
        match &self.current.kind {
            TokenKind::Int(n) => {
                let n = *n;
                self.advance();
                Ok(Expression::Literal {
                    value: LiteralValue::Int(n),
                })
            }
            TokenKind::Float(n) => {
                let n = *n;
                self.advance();
                Ok(Expression::Literal {
                    value: LiteralValue::Float(n),
                })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Word { .. } => {
                let (surface, canonical, span) = self.take_word()?;
                if canonical.is_some_and(|word| word.role == WordRole::Keyword) {
                    return Err(self.error_at(
                        span,
                        &format!("keyword '{surface}' cannot be used as a value"),
                    ));
                }
                let expr = self.parse_call_tail(surface, canonical, span)?;
                Ok(Expression::Call(expr))
            }
            TokenKind::Error(message) => Err(self.error(&message.clone())),
            _ => Err(self.error_expected("an expression", self.current.kind.name())),
        }
    }

    /// Parses the optional argument list of a call whose name token has
    /// already been consumed.
    fn parse_call_tail(
        &mut self,
        surface: String,
        canonical: Option<CanonicalWord>,
        span: Span,
    ) -> Result<CallExpression> {
        let mut arguments = Vec::new();
        if self.current.kind == TokenKind::LParen {
            self.advance();
            if self.current.kind != TokenKind::RParen {
                arguments.push(self.parse_expression()?);
                while self.current.kind == TokenKind::Comma {
                    self.advance();
                    arguments.push(self.parse_expression()?);
                }
            }
            self.expect(&TokenKind::RParen)?;
        }

        Ok(CallExpression {
            name: surface,
            native_name: canonical.map(|word| word.name.to_string()),
            arguments,
            line: span.line,
            column: span.column,
        })
    }

    /// Builds an operator for the current token, keeping its spelling.
    fn operator(&self, kind: OperatorKind) -> Operator {
        Operator {
            kind,
            raw: self.current.text(self.source).to_string(),
        }
    }

    /// Consumes the current token, which must be a word.
    fn take_word(&mut self) -> Result<(String, Option<CanonicalWord>, Span)> {
        match &self.current.kind {
            TokenKind::Word { surface, canonical } => {
                let surface = surface.clone();
                let canonical = *canonical;
                let span = self.current.span;
                self.advance();
                Ok((surface, canonical, span))
            }
            TokenKind::Error(message) => Err(self.error(&message.clone())),
            _ => Err(self.error_expected("a name", self.current.kind.name())),
        }
    }

    /// Advances to the next non-trivia token.
    fn advance(&mut self) {
        loop {
            self.current = self.lexer.next_token();
            if !self.current.kind.is_trivia() {
                break;
            }
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            self.advance();
            return Ok(());
        }
        if let TokenKind::Error(message) = &self.current.kind {
            return Err(self.error(&message.clone()));
        }
        Err(self.error_expected(expected.name(), self.current.kind.name()))
    }

    /// Returns true if the current token is a word resolving to `name`.
    fn current_is_keyword(&self, name: &str) -> bool {
        matches!(
            &self.current.kind,
            TokenKind::Word {
                canonical: Some(word),
                ..
            } if word.name == name
        )
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(message, span.line, span.column)
    }

    /// Creates an expected/found syntax error at the current position.
    fn error_expected(&self, expected: &str, found: &str) -> Error {
        Error::syntax_expected(
            expected,
            found,
            self.current.span.line,
            self.current.span.column,
        )
    }
}

/// Parses a script using the default locale (`en`).
///
/// # Errors
/// Returns a syntax error describing the first violation found.
pub fn parse(source: &str) -> Result<Script> {
    parse_with_locale(source, Locale::default())
}

/// Parses a script written in the given locale.
///
/// # Errors
/// Returns a configuration error if the locale's table is malformed, or a
/// syntax error describing the first violation found.
pub fn parse_with_locale(source: &str, locale: Locale) -> Result<Script> {
    let lexicon = Lexicon::new(locale)?;
    Parser::new(source, &lexicon).parse_script()
}
