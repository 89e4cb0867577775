use crate::grid::Matrix;

use super::pivot::pivot_index;

/// Walks the diagonal of an owned matrix, reducing one column per step.
pub struct GaussianElimination {
    matrix: Matrix,
    active_diagonal: usize,
    diagonal_len: usize,
}

impl GaussianElimination {
    pub fn new(matrix: Matrix) -> Self {
        let diagonal_len = matrix.dimensions().diagonal_len();
        Self {
            matrix,
            active_diagonal: 0,
            diagonal_len,
        }
    }

    pub fn go_to_echelon_form(&mut self) {
        while self.is_not_in_echelon_form() {
            self.pivot_active_diagonal();
            self.go_to_next_diagonal();
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    fn is_not_in_echelon_form(&self) -> bool {
        self.active_diagonal < self.diagonal_len
    }

    fn pivot_active_diagonal(&mut self) {
        let i = self.active_diagonal;
        let pivot_row = pivot_index(&self.matrix, i, i);
        self.matrix.swap_rows(i, pivot_row);
        let pivot = self.matrix[(i, i)];
        log::trace!("diagonal {i}: pivot row {pivot_row}, pivot value {pivot}");
        // the whole column is zero from the diagonal down; nothing to eliminate with
        if pivot == 0.0 {
            return;
        }
        for y in i + 1..self.matrix.height() {
            self.reduce_row_with_pivot(y, i, pivot);
        }
    }

    fn reduce_row_with_pivot(&mut self, y: usize, i: usize, pivot: f64) {
        let factor = self.matrix[(y, i)] / pivot;
        for x in 0..self.matrix.width() {
            let delta = self.matrix[(i, x)] * factor;
            self.matrix[(y, x)] -= delta;
        }
        // clear rounding residue so later pivot searches never pick it up
        if self.matrix[(y, i)].is_finite() {
            self.matrix[(y, i)] = 0.0;
        }
    }

    fn go_to_next_diagonal(&mut self) {
        self.active_diagonal += 1;
    }
}

/// Reduces `matrix` to row-echelon form in place.
pub fn eliminate(matrix: &mut Matrix) {
    let mut ge = GaussianElimination::new(std::mem::replace(matrix, Matrix::zeroes(0, 0)));
    ge.go_to_echelon_form();
    *matrix = ge.into_matrix();
}
