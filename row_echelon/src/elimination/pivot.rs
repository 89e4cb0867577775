use crate::grid::Matrix;

/// Picks the row at or below `start_row` whose entry in `column` has the
/// smallest nonzero magnitude. `start_row` is the default even when its own
/// entry is zero; later rows only win with a strictly smaller nonzero
/// magnitude, so the earliest of equal candidates is kept.
///
/// This is deliberately the smallest, not the largest, magnitude.
pub fn pivot_index(matrix: &Matrix, column: usize, start_row: usize) -> usize {
    let mut min_index = start_row;
    let mut min_value = matrix[(start_row, column)].abs();
    for row in start_row + 1..matrix.height() {
        let value = matrix[(row, column)].abs();
        if value != 0.0 && (min_value == 0.0 || value < min_value) {
            min_index = row;
            min_value = value;
        }
    }
    min_index
}

#[cfg(test)]
mod test {
    use super::*;

    fn column(values: &[f64]) -> Matrix {
        let rows: Vec<Vec<f64>> = values.iter().map(|v| vec![*v]).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn smallest_nonzero_magnitude_wins() {
        assert_eq!(pivot_index(&column(&[0.0, 5.0, 2.0, 0.0, 3.0]), 0, 0), 2);
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(pivot_index(&column(&[4.0, -1.0, 2.0]), 0, 0), 1);
    }

    #[test]
    fn current_row_kept_when_nothing_smaller() {
        assert_eq!(pivot_index(&column(&[1.0, 3.0, 0.0, 7.0]), 0, 0), 0);
    }

    #[test]
    fn all_zero_column_keeps_start_row() {
        assert_eq!(pivot_index(&column(&[0.0, 0.0, 0.0]), 0, 0), 0);
    }

    #[test]
    fn earliest_of_equal_magnitudes() {
        assert_eq!(pivot_index(&column(&[6.0, 2.0, -2.0, 2.0]), 0, 0), 1);
        assert_eq!(pivot_index(&column(&[2.0, 2.0, -2.0]), 0, 0), 0);
    }

    #[test]
    fn rows_above_start_are_not_considered() {
        assert_eq!(pivot_index(&column(&[1.0, 9.0, 4.0, 8.0]), 0, 1), 2);
    }

    #[test]
    fn scans_the_requested_column() {
        let m = Matrix::from_rows(&[vec![1.0, 9.0], vec![5.0, 3.0], vec![2.0, 0.0]]).unwrap();
        assert_eq!(pivot_index(&m, 0, 0), 0);
        assert_eq!(pivot_index(&m, 1, 1), 1);
    }
}
