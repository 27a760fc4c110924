/// Parser state and the `parse` entry point.
///
/// Holds the token cursor, the EOL sentinel and the global error
/// accumulator shared by all productions.
pub mod core;

/// Statement productions.
///
/// Parses bindings, binding continuations and gate declarations, recording
/// missing keywords into the global error list.
pub mod statement;

/// The binary operator tier.
///
/// All nine binary operators share a single left-associative precedence
/// level.
pub mod binary;

/// Unary and primary productions.
///
/// Parses negation, literals, identifiers, calls, groupings and sequence
/// literals, embedding structured errors for unexpected tokens.
pub mod unary;

/// Shared list-parsing helpers.
pub mod utils;
