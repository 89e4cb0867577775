use std::fmt;

use itertools::Itertools;

use crate::grid::Matrix;

use super::{ROW_SEPARATOR, TERMINATOR};

/// Renders the grid in the input notation: cells joined by a space, rows
/// joined by a comma and a newline. `f64`'s `Display` is shortest round-trip,
/// so parsing the output recovers the same values.
pub fn format(matrix: &Matrix, terminated: bool) -> String {
    let mut out = matrix.to_string();
    if terminated {
        out.push(TERMINATOR);
    }
    out
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("{ROW_SEPARATOR}\n");
        let body = self.rows().map(|row| row.iter().join(" ")).join(&separator);
        f.write_str(&body)
    }
}
