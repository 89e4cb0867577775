use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{EchelonError, GridError};
use crate::notation::parser;

use super::validator::{validate, Dimensions};

/// Row-major grid of doubles with a fixed, validated shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl Matrix {
    pub fn zeroes(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width * height],
        }
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GridError> {
        let Dimensions { width, height } = validate(rows)?;
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1))
    }

    // exchanges every column of the two rows, not just the pivot column.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (low, high) = (a.min(b), a.max(b));
        let width = self.width;
        let (head, tail) = self.cells.split_at_mut(high * width);
        head[low * width..(low + 1) * width].swap_with_slice(&mut tail[..width]);
    }

    /// Jagged copy of the grid, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(row, column)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, column);
        &mut self.cells[offset]
    }
}

impl FromStr for Matrix {
    type Err = EchelonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = parser::parse(s)?;
        Ok(Self::from_rows(&rows)?)
    }
}
