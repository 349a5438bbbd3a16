use crate::utils::error::{Result, WarmupError};

/// Transposes an `M x N` matrix into a new `N x M` matrix.
///
/// The input must have at least one row and every row must be as long as
/// the first; otherwise the argument is not a matrix and a type failure is
/// returned. A single empty row (`[[]]`) transposes to an empty matrix.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let columns = matrix_width(matrix)?;

    Ok((0..columns)
        .map(|column| matrix.iter().map(|row| row[column].clone()).collect())
        .collect())
}

fn matrix_width<T>(matrix: &[Vec<T>]) -> Result<usize> {
    let Some(first) = matrix.first() else {
        return Err(WarmupError::type_error(
            "matrix",
            "a non-empty two-dimensional array",
            "an empty array",
        ));
    };

    let width = first.len();
    if let Some(index) = matrix.iter().position(|row| row.len() != width) {
        return Err(WarmupError::type_error(
            "matrix",
            "rows of equal length",
            &format!("row {} with length {}", index, matrix[index].len()),
        ));
    }

    Ok(width)
}
