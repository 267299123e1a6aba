/// Position-tracking reader shared by the lexer and the parser.
///
/// A generic cursor over characters or tokens with one-symbol lookahead, a
/// total end-of-stream sentinel, and a record of the symbols passed over.
pub mod cursor;
/// The evaluator reduces expression trees to numbers.
///
/// Arithmetic follows IEEE-754. The only runtime failure is evaluating an
/// operation the parser had to synthesize because an operator was missing.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of operators,
/// parentheses and numeric literals. Malformed literals become `Error` tokens
/// and lexing continues at the next space.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Validates numeric literals against the literal grammar.
/// - Recovers from lexical errors without aborting the pass.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a recursive-descent precedence parser that collects
/// diagnostics instead of stopping at the first problem, repairing the tree
/// where it can so a single pass reports every syntax error it finds.
///
/// # Responsibilities
/// - Converts tokens into `Expression` trees with correct precedence and
///   left-associativity.
/// - Records positioned diagnostics for missing operators, operands and
///   parentheses.
/// - Re-enters the grammar after trailing tokens instead of discarding them.
pub mod parser;
/// Token kinds and tokens.
pub mod token;
