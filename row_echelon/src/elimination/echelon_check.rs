use crate::grid::Matrix;

/// Column of the first nonzero cell of every row, `None` for zero rows.
pub fn leading_columns(m: &Matrix) -> Vec<Option<usize>> {
    m.rows()
        .map(|row| row.iter().position(|cell| *cell != 0.0))
        .collect()
}

// each leading entry strictly right of the one above, zero rows only at the bottom.
// a skipped degenerate column can leave the output short of this shape.
pub fn is_in_row_echelon_form(m: &Matrix) -> bool {
    let mut previous: Option<usize> = None;
    let mut seen_zero_row = false;
    for lead in leading_columns(m) {
        match (lead, previous) {
            (None, _) => seen_zero_row = true,
            (Some(_), _) if seen_zero_row => return false,
            (Some(column), Some(above)) if column <= above => return false,
            (Some(column), _) => previous = Some(column),
        }
    }
    true
}
