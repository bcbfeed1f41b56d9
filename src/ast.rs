use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source code: numbers and quoted strings. It is used in the AST to represent
/// literal expressions and as a convenient container for constants during
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal, optionally signed in source.
    Number(f64),
    /// A string literal with its surrounding quotes stripped. The language has
    /// no escape sequences, so the content is stored exactly as written.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms: literals, identifier references,
/// binary operations, anonymous function definitions, and function calls.
/// Each variant carries the source line it was parsed from for error
/// reporting. Nodes are immutable once constructed and form an acyclic tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function by name.
    Identifier {
        /// Name of the binding being referenced.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An anonymous function definition, e.g. `\(x, y) { x + y }`.
    ///
    /// Evaluating this expression produces a function value; nothing from the
    /// definition site is captured.
    FunctionDefinition {
        /// The shared definition (parameters and body).
        def:  Rc<FunctionDef>,
        /// Line number in the source code.
        line: usize,
    },
    /// A function call expression, e.g. `square(3)`.
    FunctionCall {
        /// Name of the binding holding the function being called.
        name:      String,
        /// Arguments to the function, each a full expression.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use scrawl::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionDefinition { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents an anonymous function definition.
///
/// A function binds an ordered list of parameter names to a statement
/// sequence. Parameter names need not be unique; a later duplicate shadows an
/// earlier one when arguments are bound. Functions are first-class values but
/// capture nothing from their definition site — each call extends the scope
/// chain that is live at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a top-level or function-body statement.
///
/// A program (and a function body) is an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A binding statement, written `name != value` (`!=` is the assignment
    /// operator at statement level, distinct from the not-equal comparison
    /// operator inside expressions).
    Assignment {
        /// The name of the binding.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mod, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            // No escapes exist, so pick whichever quote the content does not
            // contain. Content holding both cannot be represented.
            Self::Str(s) if s.contains('"') => write!(f, "'{s}'"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl std::fmt::Display for Expr {
    /// Pretty-prints the expression as parseable source.
    ///
    /// Binary operations are fully parenthesized so that re-parsing the
    /// printed form reproduces an equivalent tree regardless of operator
    /// precedence.
    ///
    /// ## Example
    /// ```
    /// use scrawl::parse;
    ///
    /// let statements = parse("a + b * c").unwrap();
    /// assert_eq!(statements[0].to_string(), "(a + (b * c))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionDefinition { def, .. } => write!(f, "{def}"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;

                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{argument}")?;
                }

                write!(f, ")")
            },
        }
    }
}

impl std::fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\\(")?;

        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{param}")?;
        }

        write!(f, ") {{")?;
        for statement in &self.body {
            write!(f, " {statement};")?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Assignment { name, value, .. } => write!(f, "{name} != {value}"),
        }
    }
}
