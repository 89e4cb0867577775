pub mod formatter;
pub mod parser;

/// Separates rows, e.g. `1 0,\n0 1;`.
pub const ROW_SEPARATOR: char = ',';
/// Ends a submitted block.
pub const TERMINATOR: char = ';';
