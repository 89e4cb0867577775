use thiserror::Error;

/// A cell of the input notation that is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to convert value '{text}' of cell [{column}, {row}] to a number")]
pub struct ParseError {
    pub text: String,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("matrix must have at least 1 row and 1 column")]
    Empty,
    #[error("matrix must be rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Everything that can reject a submission before elimination runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EchelonError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Grid(#[from] GridError),
}
