use anyhow::{bail, Result};
use log::trace;
use num_traits::{One, ToPrimitive, Zero};

use crate::core::{
    errors::*,
    iters::Indexer,
    shape::{Shape, RANK},
};

/// Absolute tolerance used by `==` on arrays.
pub const TOLERANCE: f64 = 1e-6;

/// Dense 4D array with row-major layout.
///
/// Axes, major to minor:
///
/// | axis | names |
/// |------|-------|
/// | 0 | plane, batch, `n1` |
/// | 1 | depth, feature, `n2` |
/// | 2 | height, `n3` |
/// | 3 | width, `n4` |
///
/// `(p, d, h, w)` lives at `p*(n2*n3*n4) + d*(n3*n4) + h*n4 + w` in the
/// backing buffer.
#[derive(Clone)]
pub struct Array4D<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Shape,
}

impl<T: Copy> Array4D<T> {
    pub(crate) fn init(data: Vec<T>, shape: Shape) -> Result<Array4D<T>> {
        shape.valid_data_length(data.len())?;
        Ok(Array4D { data, shape })
    }

    pub fn new(data: &[T], sizes: [usize; RANK]) -> Result<Array4D<T>> {
        Array4D::from_vec(data.to_vec(), sizes)
    }

    pub fn from_vec(data: Vec<T>, sizes: [usize; RANK]) -> Result<Array4D<T>> {
        Array4D::init(data, Shape::new(sizes)?)
    }

    pub fn from_iter_sized<I>(values: I, sizes: [usize; RANK]) -> Result<Array4D<T>>
    where
        I: IntoIterator<Item = T>,
    {
        Array4D::from_vec(values.into_iter().collect(), sizes)
    }

    pub fn same(element: T, sizes: [usize; RANK]) -> Result<Array4D<T>> {
        let shape = Shape::new(sizes)?;
        Array4D::init(vec![element; shape.numel()], shape)
    }

    pub fn default_sized(sizes: [usize; RANK]) -> Result<Array4D<T>>
    where
        T: Default,
    {
        Array4D::same(T::default(), sizes)
    }

    pub fn zeroes(sizes: [usize; RANK]) -> Result<Array4D<T>>
    where
        T: Zero,
    {
        Array4D::same(T::zero(), sizes)
    }

    pub fn ones(sizes: [usize; RANK]) -> Result<Array4D<T>>
    where
        T: One,
    {
        Array4D::same(T::one(), sizes)
    }

    /// Builds an array from planes of depths of rows of values.
    ///
    /// Sizes come from the first list at each level; every sibling list must
    /// have the same length as its first sibling.
    pub fn from_nested(values: &[Vec<Vec<Vec<T>>>]) -> Result<Array4D<T>> {
        let planes = values.len();
        let depth = values.first().map_or(0, Vec::len);
        let height = values
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let width = values
            .first()
            .and_then(|plane| plane.first())
            .and_then(|rows| rows.first())
            .map_or(0, Vec::len);

        let shape = Shape::new([planes, depth, height, width])?;
        trace!("nested literal sizes: {:?}", shape.sizes);

        let mut data = Vec::with_capacity(shape.numel());
        for (p, values_in_plane) in values.iter().enumerate() {
            valid_sibling("depth", &[p], depth, values_in_plane.len())?;

            for (d, values_in_depth) in values_in_plane.iter().enumerate() {
                valid_sibling("height", &[p, d], height, values_in_depth.len())?;

                for (h, values_in_height) in values_in_depth.iter().enumerate() {
                    valid_sibling("width", &[p, d, h], width, values_in_height.len())?;
                    data.extend_from_slice(values_in_height);
                }
            }
        }

        Array4D::init(data, shape)
    }

    /// Replaces every element. The array is left untouched if the number of
    /// values does not match.
    pub fn set_values<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = values.into_iter().collect();
        self.shape.valid_data_length(data.len())?;

        self.data = data;
        Ok(())
    }

    // --- Elements ---

    pub fn get(&self, indices: [usize; RANK]) -> Result<T> {
        Ok(self.data[self.shape.index(&indices)?])
    }

    pub fn set(&mut self, indices: [usize; RANK], value: T) -> Result<()> {
        let offset = self.shape.index(&indices)?;
        self.data[offset] = value;
        Ok(())
    }

    pub(crate) fn idx(&self, indices: &[usize; RANK]) -> T {
        self.data[self.shape.idx(indices)]
    }
}

fn valid_sibling(level: &'static str, path: &[usize], expected: usize, found: usize) -> Result<()> {
    if expected != found {
        bail!(RaggedShapeError {
            level,
            path: path.to_vec(),
            expected,
            found,
        });
    }
    Ok(())
}

impl<T: Copy> TryFrom<Vec<Vec<Vec<Vec<T>>>>> for Array4D<T> {
    type Error = anyhow::Error;

    fn try_from(values: Vec<Vec<Vec<Vec<T>>>>) -> Result<Self> {
        Array4D::from_nested(&values)
    }
}

impl<T> Array4D<T> {
    // --- References ---

    pub fn at(&self, plane: usize, depth: usize, height: usize, width: usize) -> Result<&T> {
        let offset = self.shape.index(&[plane, depth, height, width])?;
        Ok(&self.data[offset])
    }

    pub fn at_mut(
        &mut self,
        plane: usize,
        depth: usize,
        height: usize,
        width: usize,
    ) -> Result<&mut T> {
        let offset = self.shape.index(&[plane, depth, height, width])?;
        Ok(&mut self.data[offset])
    }

    pub fn flatten(&self) -> &[T] {
        &self.data
    }

    pub fn flatten_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn indices(&self) -> Indexer {
        Indexer::new(self.shape.sizes)
    }

    // --- Shape Attributes ---

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn sizes(&self) -> [usize; RANK] {
        self.shape.sizes
    }

    pub fn planes(&self) -> usize {
        self.shape.sizes[0]
    }

    pub fn depth(&self) -> usize {
        self.shape.sizes[1]
    }

    pub fn height(&self) -> usize {
        self.shape.sizes[2]
    }

    pub fn width(&self) -> usize {
        self.shape.sizes[3]
    }

    // Numeric aliases, matching the axis numbering.

    pub fn n1(&self) -> usize {
        self.planes()
    }

    pub fn n2(&self) -> usize {
        self.depth()
    }

    pub fn n3(&self) -> usize {
        self.height()
    }

    pub fn n4(&self) -> usize {
        self.width()
    }
}

impl<T: Copy + ToPrimitive> PartialEq for Array4D<T> {
    fn eq(&self, rhs: &Array4D<T>) -> bool {
        self.shape.sizes == rhs.shape.sizes
            && self
                .data
                .iter()
                .zip(rhs.data.iter())
                .all(|(lhs_elem, rhs_elem)| match (lhs_elem.to_f64(), rhs_elem.to_f64()) {
                    (Some(l), Some(r)) => (l - r).abs() < TOLERANCE,
                    _ => false,
                })
    }
}
