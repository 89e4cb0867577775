use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Number of diagonal steps elimination walks through.
    pub fn diagonal_len(&self) -> usize {
        self.width.min(self.height)
    }
}

/// Confirms a parsed grid has at least one cell and that every row is as
/// long as the first one.
pub fn validate(rows: &[Vec<f64>]) -> Result<Dimensions, GridError> {
    let Some(first) = rows.first() else {
        return Err(GridError::Empty);
    };
    let width = first.len();
    if width == 0 {
        return Err(GridError::Empty);
    }
    if let Some((row, found)) = rows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, r)| (idx, r.len()))
        .find(|(_, len)| *len != width)
    {
        return Err(GridError::Ragged {
            row,
            expected: width,
            found,
        });
    }
    Ok(Dimensions {
        width,
        height: rows.len(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rectangular_grid_reports_width_then_height() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            validate(&rows),
            Ok(Dimensions {
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn no_rows_is_empty() {
        assert_eq!(validate(&[]), Err(GridError::Empty));
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(validate(&[vec![], vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn first_short_row_is_reported() {
        let rows = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0], vec![6.0]];
        assert_eq!(
            validate(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn longer_row_is_ragged_too() {
        let rows = vec![vec![1.0], vec![2.0], vec![3.0, 4.0]];
        assert_eq!(
            validate(&rows),
            Err(GridError::Ragged {
                row: 2,
                expected: 1,
                found: 2
            })
        );
    }
}
