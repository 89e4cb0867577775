use crate::{
    elimination::eliminate,
    error::EchelonError,
    grid::{Dimensions, Matrix},
    notation::{formatter, parser},
};

/// A submission that made it through elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub dimensions: Dimensions,
    pub matrix: Matrix,
}

impl Reduction {
    pub fn render(&self, terminated: bool) -> String {
        formatter::format(&self.matrix, terminated)
    }
}

/// Parses, validates and eliminates one block of input. Nothing partial is
/// returned when the block is rejected.
pub fn reduce(text: &str) -> Result<Reduction, EchelonError> {
    let rows = parser::parse(text)?;
    let mut matrix = Matrix::from_rows(&rows)?;
    let dimensions = matrix.dimensions();
    log::debug!(
        "reducing {}x{} matrix",
        dimensions.height,
        dimensions.width
    );
    eliminate(&mut matrix);
    Ok(Reduction { dimensions, matrix })
}
