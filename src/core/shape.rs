use crate::core::errors::*;
use anyhow::Result;

pub const RANK: usize = 4;

/// Sizes of the four axes, major to minor (plane, depth, height, width),
/// with the matching row-major strides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Shape {
    pub sizes: [usize; RANK],
    pub strides: [usize; RANK],
}

impl Shape {
    pub fn new(sizes: [usize; RANK]) -> Result<Shape> {
        let overflow = || SizeOverflowError {
            sizes: sizes.to_vec(),
        };

        // Every partial product is checked, a zero-sized axis included.
        let mut current = 1usize;
        let mut strides = [0; RANK];
        for (stride, &size) in strides.iter_mut().zip(sizes.iter()).rev() {
            *stride = current;
            current = current.checked_mul(size).ok_or_else(overflow)?;
        }

        Ok(Shape { sizes, strides })
    }

    pub(crate) fn numel(&self) -> usize {
        self.sizes.iter().product()
    }

    // --- Indexing ---

    // p*(n2*n3*n4) + d*(n3*n4) + h*n4 + w
    pub(crate) fn idx(&self, indices: &[usize; RANK]) -> usize {
        indices
            .iter()
            .zip(self.strides.iter())
            .map(|(index, stride)| index * stride)
            .sum()
    }

    pub(crate) fn index(&self, indices: &[usize; RANK]) -> Result<usize, IndexError> {
        self.valid_indices(indices)?;
        Ok(self.idx(indices))
    }

    // --- Validation ---

    pub(crate) fn valid_indices(&self, indices: &[usize; RANK]) -> Result<(), IndexError> {
        match indices
            .iter()
            .zip(self.sizes.iter())
            .position(|(index, size)| index >= size)
        {
            Some(dimension) => Err(IndexError::OutOfRange {
                index: indices[dimension],
                dimension,
                size: self.sizes[dimension],
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn valid_data_length(&self, data_length: usize) -> Result<(), ShapeMismatchError> {
        let array_size = self.numel();
        if data_length == array_size {
            Ok(())
        } else {
            Err(ShapeMismatchError::DataLength {
                data_length,
                array_size,
            })
        }
    }

    pub(crate) fn valid_same(&self, rhs: &Shape) -> Result<(), ShapeMismatchError> {
        if self.sizes == rhs.sizes {
            Ok(())
        } else {
            Err(ShapeMismatchError::Sizes {
                lhs_sizes: self.sizes,
                rhs_sizes: rhs.sizes,
            })
        }
    }
}
