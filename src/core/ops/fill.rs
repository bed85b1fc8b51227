use anyhow::{bail, Result};
use log::info;
use num_traits::{FromPrimitive, NumCast, One};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::{fmt::Display, ops::Add};

use crate::{
    core::{
        errors::*,
        iters::Indexer,
        utils::{cast_numeric, cast_usize},
    },
    Array2D, Array4D,
};

/// Seed used by [`Array4D::fill_random`].
pub const DEFAULT_SEED: u64 = 12345;

/// Mean used by [`Array4D::fill_random`].
pub const DEFAULT_MEAN: f64 = 0.0;

impl<T> Array4D<T>
where
    T: Copy,
{
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Element `i` of the flat buffer becomes `start + i`.
    pub fn fill_iota(&mut self, start: T)
    where
        T: Add<Output = T> + One,
    {
        let mut current = start;
        for (i, elem) in self.data.iter_mut().enumerate() {
            if i > 0 {
                current = current + T::one();
            }
            *elem = current;
        }
    }

    /// Normal samples with deviation `stddev`, mean [`DEFAULT_MEAN`] and
    /// seed [`DEFAULT_SEED`].
    pub fn fill_random(&mut self, stddev: f64) -> Result<()>
    where
        T: NumCast,
    {
        self.fill_random_with(stddev, DEFAULT_MEAN, DEFAULT_SEED)
    }

    /// Fills with samples of `Normal(mean, stddev)`. The same seed always
    /// yields the same elements.
    pub fn fill_random_with(&mut self, stddev: f64, mean: f64, seed: u64) -> Result<()>
    where
        T: NumCast,
    {
        if !stddev.is_finite() || stddev < 0.0 {
            bail!(DeviationError(stddev));
        }

        let normal = Normal::new(mean, stddev)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let data = (0..self.numel())
            .map(|_| cast_numeric(normal.sample(&mut rng)))
            .collect::<Result<Vec<T>, CastError>>()?;

        self.data = data;
        Ok(())
    }

    /// Element `i` of the flat buffer becomes `i * multiplier`.
    ///
    /// Products are taken in `f64`, so a product `T` cannot hold is an error
    /// rather than an overflow.
    pub fn fill_with_multiples(&mut self, multiplier: T) -> Result<()>
    where
        T: NumCast + Display,
    {
        let multiplier: f64 = cast_numeric(multiplier)?;

        let data = (0..self.numel())
            .map(|i| cast_numeric(i as f64 * multiplier))
            .collect::<Result<Vec<T>, CastError>>()?;

        self.data = data;
        Ok(())
    }

    /// Calls `f` with the coordinates and a mutable reference of every
    /// element, in storage order.
    pub fn each(&mut self, mut f: impl FnMut([usize; 4], &mut T)) {
        for (indices, elem) in Indexer::new(self.shape.sizes).zip(self.data.iter_mut()) {
            f(indices, elem);
        }
    }

    /// Copies `value`, indexed by `(height, width)`, into every
    /// `(plane, depth)` slice.
    pub fn fill_with_yx(&mut self, value: &Array2D<T>) -> Result<()> {
        let target_sizes = [self.height(), self.width()];
        let source_sizes = [value.height(), value.width()];

        if source_sizes != target_sizes {
            bail!(ShapeMismatchError::Broadcast {
                source_sizes,
                target_sizes,
                axes: "height x width",
            });
        }

        self.each(|[_, _, h, w], elem| *elem = value.idx(h, w));
        Ok(())
    }

    /// Copies `value`, indexed by `(plane, depth)`, into every
    /// `(height, width)` position.
    pub fn fill_with_pz(&mut self, value: &Array2D<T>) -> Result<()> {
        let target_sizes = [self.planes(), self.depth()];
        let source_sizes = [value.height(), value.width()];

        if source_sizes != target_sizes {
            bail!(ShapeMismatchError::Broadcast {
                source_sizes,
                target_sizes,
                axes: "planes x depth",
            });
        }

        self.each(|[p, d, _, _], elem| *elem = value.idx(p, d));
        Ok(())
    }

    /// Fills each minor `(height, width)` matrix with its flattened
    /// `(plane, depth)` number, `p * n2 + d`.
    pub fn fill_with_minor_dim_num(&mut self) -> Result<()>
    where
        T: FromPrimitive,
    {
        info!("width: {}", self.width());
        info!("height: {}", self.height());
        info!("depth: {}", self.depth());
        info!("planes: {}", self.planes());

        let depth = self.depth();
        let data = self
            .indices()
            .map(|[p, d, _, _]| cast_usize(p * depth + d))
            .collect::<Result<Vec<T>, CastError>>()?;

        self.data = data;
        Ok(())
    }
}
