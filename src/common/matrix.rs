//! Index arithmetic for a symmetric matrix stored as its lower triangle.
//!
//! Row `r` holds the columns `0..=r`, so the rows are laid out one after
//! another as 1 + 2 + 3 + ... cells. Growing the matrix only appends rows,
//! which means the existing cells keep their positions.

/// Number of cells needed for a matrix with `capacity` rows.
pub fn size_of(capacity: usize) -> usize {
    capacity * (capacity + 1) / 2
}

pub fn index(row: usize, col: usize) -> usize {
    // Make sure that the coordinates are in the lower triangle.
    let (row, col) = if row >= col { (row, col) } else { (col, row) };
    // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
    row * (row + 1) / 2 + col
}

pub fn coords(index: usize) -> (usize, usize) {
    // index = row * (row + 1) / 2 + col => 2 * (index - col) = row^2 + row
    //
    // Quadratic equation for row. We don't know col so we use just index =>
    // discriminant is generally not an integer, we need to round down. The
    // difference between index and start of the row is the column.
    let d = (1. + 8. * index as f64).sqrt().floor() as usize;
    let row = (d - 1) / 2;
    let col = index - row * (row + 1) / 2;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_symmetric() {
        for row in 0..16 {
            for col in 0..16 {
                assert_eq!(index(row, col), index(col, row));
            }
        }
    }

    #[test]
    fn coords_inverse_to_index() {
        for row in 0..64 {
            for col in 0..=row {
                assert_eq!(coords(index(row, col)), (row, col));
            }
        }
    }

    #[test]
    fn indices_fill_triangle() {
        let capacity = 8;
        let mut indices = (0..capacity)
            .flat_map(|row| (0..=row).map(move |col| index(row, col)))
            .collect::<Vec<_>>();
        indices.sort_unstable();

        assert_eq!(indices, (0..size_of(capacity)).collect::<Vec<_>>());
    }
}
