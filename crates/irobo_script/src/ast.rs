//! Abstract syntax tree for irobo scripts.
//!
//! Statements carry no positions of their own; every call expression is
//! stamped with the 1-based line/column of its name token, which is all the
//! provenance downstream tools consume.
//!
//! With the `serde` feature enabled, trees serialize to the JSON shapes
//! downstream robot tooling consumes: nodes are tagged with a `"type"` field
//! and the canonical name field is spelled `nativeName`.

/// A parsed script.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Script {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}

impl Script {
    /// Returns true if the script contains no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the number of top-level statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Script", 2)?;
        state.serialize_field("type", "Script")?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Statement {
    /// A call in statement position, e.g. `forward(2)`.
    #[cfg_attr(feature = "serde", serde(rename = "CallStatement"))]
    Call {
        /// The called expression.
        expr: CallExpression,
    },

    /// A variable assignment, e.g. `a = 3`.
    #[cfg_attr(feature = "serde", serde(rename = "AssignmentStatement"))]
    Assignment {
        /// The assigned variable name as written.
        name: String,
        /// The assigned value.
        value: Expression,
    },

    /// `repeat { ... }` without a count.
    #[cfg_attr(feature = "serde", serde(rename = "InfiniteLoopStatement"))]
    InfiniteLoop {
        /// Loop body.
        body: Vec<Statement>,
    },

    /// `repeat(count) { ... }`.
    #[cfg_attr(feature = "serde", serde(rename = "CountLoopStatement"))]
    CountLoop {
        /// Number of iterations.
        count: Expression,
        /// Loop body.
        body: Vec<Statement>,
    },

    /// `repeatWhile(test) { ... }`.
    #[cfg_attr(feature = "serde", serde(rename = "WhileLoopStatement"))]
    WhileLoop {
        /// Loop condition.
        test: Expression,
        /// Loop body.
        body: Vec<Statement>,
    },

    /// `if (test) { ... } else if (test) { ... } else { ... }`.
    #[cfg_attr(feature = "serde", serde(rename = "ConditionalStatement"))]
    Conditional {
        /// One branch per `if`/`else if` test, in source order.
        tests: Vec<ConditionalBranch>,
        /// The `else` body, empty when absent.
        otherwise: Vec<Statement>,
    },

    /// `procedure name(params) { ... }`.
    #[cfg_attr(feature = "serde", serde(rename = "ProcedureStatement"))]
    Procedure {
        /// Procedure name as written.
        name: String,
        /// Parameter names as written.
        arguments: Vec<String>,
        /// Procedure body.
        body: Vec<Statement>,
    },
}

/// One `if`/`else if` arm of a conditional statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConditionalBranch {
    /// The branch condition.
    pub test: Expression,
    /// Statements run when the condition holds.
    pub then: Vec<Statement>,
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Expression {
    /// A numeric literal.
    Literal {
        /// The literal value.
        value: LiteralValue,
    },

    /// A unary operator application, e.g. `not x` or `-1`.
    #[cfg_attr(feature = "serde", serde(rename = "UnaryExpression"))]
    Unary {
        /// The operator.
        operator: Operator,
        /// The operand.
        value: Box<Expression>,
    },

    /// A binary operator application, e.g. `a + 1`.
    #[cfg_attr(feature = "serde", serde(rename = "BinaryExpression"))]
    Binary {
        /// The operator.
        operator: Operator,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },

    /// A call, e.g. `frontIsClear()` or a bare variable reference.
    #[cfg_attr(feature = "serde", serde(untagged))]
    Call(CallExpression),
}

/// A numeric literal value.
///
/// Boolean words (`true`, `waar`, ...) are not literals; they resolve
/// through the lexicon and parse as call expressions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LiteralValue {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
}

/// A call expression: a word with optional arguments.
///
/// `native_name` is the canonical name when the word resolved through the
/// active lexicon, `None` for plain identifiers. `line` and `column` point
/// at the first character of the name token.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    /// The name exactly as written in the source.
    pub name: String,
    /// The canonical name, if the word resolved.
    pub native_name: Option<String>,
    /// Argument expressions.
    pub arguments: Vec<Expression>,
    /// 1-based line of the name token.
    pub line: u32,
    /// 1-based column of the name token.
    pub column: u32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for CallExpression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CallExpression", 6)?;
        state.serialize_field("type", "CallExpression")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("nativeName", &self.native_name)?;
        state.serialize_field("arguments", &self.arguments)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.end()
    }
}

/// An operator with its source spelling.
///
/// `raw` distinguishes the two spellings of disjunction: `or` and `|` both
/// have kind [`OperatorKind::Or`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operator {
    /// The canonical operator.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: OperatorKind,
    /// The operator text exactly as written.
    pub raw: String,
}

/// Canonical operator kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OperatorKind {
    /// Disjunction (`or` or `|`).
    #[cfg_attr(feature = "serde", serde(rename = "or"))]
    Or,
    /// Conjunction.
    #[cfg_attr(feature = "serde", serde(rename = "and"))]
    And,
    /// Logical negation.
    #[cfg_attr(feature = "serde", serde(rename = "not"))]
    Not,
    /// Addition.
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Plus,
    /// Numeric negation.
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus,
}
