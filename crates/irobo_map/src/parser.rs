//! Parser for the map mini-language.
//!
//! Maps are line-oriented: a header line opens a section, every following
//! non-blank line belongs to it. Sections are optional but must appear in
//! `map:`, `extra:`, `paint:` order, and the grammar stops at the first
//! malformed line.

use irobo_foundation::{Error, Result};

use crate::ast::{MapAst, PaintMark, Placement};
use crate::codes;

/// The three sections, in the order they must appear.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Section {
    Map,
    Extra,
    Paint,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "map:" => Some(Self::Map),
            "extra:" => Some(Self::Extra),
            "paint:" => Some(Self::Paint),
            _ => None,
        }
    }

    fn header(self) -> &'static str {
        match self {
            Self::Map => "map:",
            Self::Extra => "extra:",
            Self::Paint => "paint:",
        }
    }
}

/// Parser for map source.
pub struct Parser<'src> {
    /// Source text.
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Parses the whole source as a map.
    ///
    /// # Errors
    /// Returns a syntax error describing the first malformed line.
    pub fn parse_map(&self) -> Result<MapAst> {
        let mut ast = MapAst::default();
        let mut section = None;
        let mut number: u32 = 0;

        // str::lines strips a trailing \r, which covers CRLF map files.
        for line in self.source.lines() {
            number += 1;
            if line.is_empty() {
                continue;
            }

            if let Some(next) = Section::from_header(line) {
                if section.is_some_and(|current| next <= current) {
                    return Err(Error::syntax(
                        &format!("section '{}' out of order", next.header()),
                        number,
                        1,
                    ));
                }
                section = Some(next);
                continue;
            }

            match section {
                None => {
                    return Err(Error::syntax_expected(
                        "a section header",
                        &format!("'{line}'"),
                        number,
                        1,
                    ));
                }
                Some(Section::Map) => ast.map.push(line.to_string()),
                Some(Section::Extra) => ast.extra.push(parse_placement(line, number)?),
                Some(Section::Paint) => ast.paint.push(parse_paint_mark(line, number)?),
            }
        }

        Ok(ast)
    }
}

/// Parses an `extra:` record of the form `name@x,y`.
fn parse_placement(line: &str, number: u32) -> Result<Placement> {
    let Some((name, rest)) = line.split_once('@') else {
        return Err(Error::syntax_expected(
            "a placement 'name@x,y'",
            &format!("'{line}'"),
            number,
            1,
        ));
    };
    if name.is_empty() {
        return Err(Error::syntax("placement name is empty", number, 1));
    }

    let mut column = width(name) + 2;
    let Some((x_text, y_text)) = rest.split_once(',') else {
        return Err(Error::syntax_expected(
            "coordinates 'x,y'",
            &format!("'{rest}'"),
            number,
            column,
        ));
    };
    let x = parse_coordinate(x_text, number, column)?;
    column += width(x_text) + 1;
    let y = parse_coordinate(y_text, number, column)?;

    Ok(Placement {
        name: name.to_string(),
        x,
        y,
    })
}

/// Parses a `paint:` record of the form `(color,stroke,x,y)`.
fn parse_paint_mark(line: &str, number: u32) -> Result<PaintMark> {
    let record = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'));
    let Some(inner) = record else {
        return Err(Error::syntax_expected(
            "a paint mark '(color,stroke,x,y)'",
            &format!("'{line}'"),
            number,
            1,
        ));
    };

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 4 {
        return Err(Error::syntax_expected(
            "a paint mark '(color,stroke,x,y)'",
            &format!("'{line}'"),
            number,
            1,
        ));
    }

    let mut column = 2;
    let color = codes::color(fields[0], number, column)?;
    column += width(fields[0]) + 1;
    let kind = codes::stroke(fields[1], number, column)?;
    column += width(fields[1]) + 1;
    let x = parse_coordinate(fields[2], number, column)?;
    column += width(fields[2]) + 1;
    let y = parse_coordinate(fields[3], number, column)?;

    Ok(PaintMark { color, kind, x, y })
}

/// Parses a zero-based grid coordinate: plain decimal digits only.
fn parse_coordinate(text: &str, line: u32, column: u32) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::syntax(
            &format!("invalid coordinate '{text}'"),
            line,
            column,
        ));
    }
    text.parse().map_err(|_| {
        Error::syntax(
            &format!("coordinate '{text}' is out of range"),
            line,
            column,
        )
    })
}

/// Character width of a field, for column arithmetic.
fn width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

/// Parses map source.
///
/// # Errors
/// Returns a syntax error describing the first malformed line.
pub fn parse(source: &str) -> Result<MapAst> {
    Parser::new(source).parse_map()
}
