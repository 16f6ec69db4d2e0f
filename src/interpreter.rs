/// The evaluator module reduces an AST to a number.
///
/// The evaluator walks the tree bottom-up, applies every operator and builtin
/// function with its numeric-safety checks, and either produces a finite
/// `f64` or reports the first failure.
///
/// # Responsibilities
/// - Rejects NaN and infinite operands at every operator node.
/// - Reports division by zero, overflow, domain violations and invalid
///   bitwise operands as `EvalError`s.
/// - Dispatches function calls through a fixed builtin table.
pub mod evaluator;
/// The lexer module tokenizes an expression string.
///
/// The lexer reads the raw text and produces a sequence of tokens (numbers,
/// identifiers, operators, parentheses and bitwise keywords), each tagged with
/// the byte offset where it starts, terminated by a single `End` token.
///
/// # Responsibilities
/// - Enforces the input and lexeme length limits.
/// - Validates number literals and resolves the `pi` and `e` constants.
/// - Reports lexical errors with the offending position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level, from
/// bitwise OR (loosest) down to primaries.
///
/// # Responsibilities
/// - Encodes operator precedence and associativity in the tree shape.
/// - Requires the whole token sequence to be consumed.
/// - Bounds the nesting depth so deep input cannot exhaust the stack.
pub mod parser;
