use std::rc::Rc;

/// A location in the source text.
///
/// Both fields are 1-based. `column` counts characters (not bytes) from the
/// start of the line, which is what a user sees in an editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::Position;
    ///
    /// let position = Position::new(3, 7);
    /// assert_eq!(position.to_string(), "line 3, column 7");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant carries the [`Position`] of the token that introduced it.
/// For binary operations this is the operator token, so diagnostics such as
/// division by zero point at the `/` rather than at the left operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value:    f64,
        /// Location in the source code.
        position: Position,
    },
    /// Reference to a bound name in value position.
    Identifier {
        /// Name being referenced.
        name:     String,
        /// Location in the source code.
        position: Position,
    },
    /// A unary operation (currently only negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Location in the source code.
        position: Position,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator token.
        position: Position,
    },
    /// Conditional (`if ... then ... else ...`) expression.
    IfExpr {
        /// The condition; any nonzero number counts as true.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Location of the `if` keyword.
        position:    Position,
    },
    /// Function call expression (e.g. `fact(n - 1)`).
    Call {
        /// Name of the function being called.
        callee:    String,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Location of the callee name.
        position:  Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::{Expr, Position};
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: Position::new(5, 1), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Identifier { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::IfExpr { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }

    /// Moves the direct children of `self` onto `pending`, leaving
    /// placeholder literals in their slots.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        fn take(slot: &mut Expr) -> Expr {
            std::mem::replace(slot, Expr::Number { value:    0.0,
                                                   position: Position::default(), })
        }

        match self {
            Self::Number { .. } | Self::Identifier { .. } => {},
            Self::UnaryOp { operand, .. } => pending.push(take(operand)),
            Self::BinaryOp { left, right, .. } => {
                pending.push(take(left));
                pending.push(take(right));
            },
            Self::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                pending.push(take(condition));
                pending.push(take(then_branch));
                pending.push(take(else_branch));
            },
            Self::Call { arguments, .. } => pending.append(arguments),
        }
    }
}

// Nesting depth is unbounded, so subtrees are freed from a worklist rather
// than by recursive drop glue.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Represents a user-defined function definition.
///
/// The body sits behind an `Rc` so that the closure created when the
/// definition runs can share it with the AST instead of copying the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:     String,
    /// The parameter names, in declaration order.
    pub params:   Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:     Rc<Expr>,
    /// Location of the `fn` keyword.
    pub position: Position,
}

/// Represents a top-level statement.
///
/// Every statement occupies exactly one logical line of source.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let`.
    Let {
        /// The name being bound.
        name:     String,
        /// The expression whose value is bound.
        value:    Expr,
        /// Location of the `let` keyword.
        position: Position,
    },
    /// A user-defined function declaration using `fn`.
    Function(FunctionDef),
    /// A `print` statement, writing one line of output.
    Print {
        /// The expression to evaluate and print.
        expr:     Expr,
        /// Location of the `print` keyword.
        position: Position,
    },
}

impl Statement {
    /// Gets the source position of the statement's leading keyword.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Let { position, .. } | Self::Print { position, .. } => *position,
            Self::Function(def) => def.position,
        }
    }
}

/// A parsed program: its top-level statements in source order.
pub type Program = Vec<Statement>;

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
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
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the comparison operators, which share one
    /// non-associative precedence level.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
