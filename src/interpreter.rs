/// The lexer module tokenizes a statement for further parsing.
///
/// The scanner reads raw source text and produces a stream of tokens, each
/// carrying its kind, original lexeme, byte position and, for scan
/// failures, the error. Both the logical glyphs (`∧`, `∨`, `¬`, `⊕`, `≡`,
/// `→`) and their ASCII aliases are admitted.
///
/// # Responsibilities
/// - Converts the input rune stream into classified tokens with positions.
/// - Disambiguates the ASCII `v` disjunction from identifier runs.
/// - Attaches scan errors to tokens instead of aborting.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser processes the token stream with a cursor and a global error
/// accumulator, producing a statement node plus every error it found; it
/// never stops at the first problem.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Embeds structured errors in the tree and collects them in a post-pass.
/// - Reports trailing input after a complete statement.
pub mod parser;
/// The evaluator module executes AST nodes against an environment.
///
/// The evaluator realizes the language's value semantics: late-bound
/// bindings, first-class gates with captured environments, sequence
/// indexing and freezing, and the built-in operator catalogue.
///
/// # Responsibilities
/// - Evaluates statements and expressions, accumulating errors into lists.
/// - Manages gate calls: arity checks, environment splicing, freezing.
/// - Resolves identifiers with parent-retry for shadowed parameters.
pub mod evaluator;
/// Nested scopes for bindings and gates.
///
/// Environments chain through parent references walked outward on lookup;
/// writes are always local. Gate calls temporarily splice the caller in as
/// the captured environment's parent.
pub mod environment;
/// The value module defines the three runtime value kinds.
///
/// Booleans, sequences of unevaluated expressions, and non-negative
/// numbers, plus the conversions the built-ins rely on.
pub mod value;
