use crate::error::ParseError;

use super::{ROW_SEPARATOR, TERMINATOR};

/// Splits a block into rows of numbers. Rows may differ in length; that is
/// left for the validator to reject.
pub fn parse(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let trimmed = text.trim_end();
    let body = trimmed.strip_suffix(TERMINATOR).unwrap_or(trimmed);
    if body.trim().is_empty() {
        return Ok(vec![]);
    }
    body.split(ROW_SEPARATOR)
        .enumerate()
        .map(|(row, row_text)| parse_row(row, row_text))
        .collect()
}

fn parse_row(row: usize, row_text: &str) -> Result<Vec<f64>, ParseError> {
    row_text
        .split_whitespace()
        .enumerate()
        .map(|(column, cell)| {
            let value = cell.trim();
            value.parse::<f64>().map_err(|_| ParseError {
                text: value.to_string(),
                row,
                column,
            })
        })
        .collect()
}
