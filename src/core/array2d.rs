use anyhow::{bail, Result};

use crate::core::errors::*;

/// Row-major `height x width` array. Read-only source for the 2D broadcast
/// fills of [`Array4D`](crate::Array4D).
#[derive(Clone, Debug, PartialEq)]
pub struct Array2D<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

impl<T: Copy> Array2D<T> {
    pub fn new(data: &[T], height: usize, width: usize) -> Result<Array2D<T>> {
        let data_length = data.len();
        let array_size = height
            .checked_mul(width)
            .ok_or_else(|| SizeOverflowError {
                sizes: vec![height, width],
            })?;

        if data_length != array_size {
            bail!(ShapeMismatchError::DataLength {
                data_length,
                array_size
            });
        }

        Ok(Array2D {
            data: data.to_vec(),
            height,
            width,
        })
    }

    pub fn from_rows(rows: &[Vec<T>]) -> Result<Array2D<T>> {
        let width = rows.first().map_or(0, Vec::len);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                bail!(RaggedShapeError {
                    level: "row",
                    path: vec![row],
                    expected: width,
                    found: values.len(),
                });
            }
        }

        Ok(Array2D {
            data: rows.concat(),
            height: rows.len(),
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.height {
            bail!(IndexError::OutOfRange {
                index: row,
                dimension: 0,
                size: self.height
            });
        }
        if col >= self.width {
            bail!(IndexError::OutOfRange {
                index: col,
                dimension: 1,
                size: self.width
            });
        }

        Ok(self.idx(row, col))
    }

    pub(crate) fn idx(&self, row: usize, col: usize) -> T {
        self.data[row * self.width + col]
    }
}
