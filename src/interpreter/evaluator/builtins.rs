/// The built-in table and operator dispatch.
///
/// Operators resolve to built-ins by name through a static table; absent
/// entries surface as unknown-operator errors.
pub mod core;

/// Logical built-ins: `and`, `or`, `mi`, `xor`, `not`.
pub mod logic;

/// Relational built-ins: `ge`, `gt`, `le`, `lt`.
///
/// Booleans order as `false < true`.
pub mod comparison;

/// The equality built-in: deep, kind-strict comparison.
pub mod equality;
