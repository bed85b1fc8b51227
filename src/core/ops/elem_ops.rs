use anyhow::Result;
use num_traits::{AsPrimitive, NumCast, ToPrimitive};
use std::{
    fmt::Display,
    ops::{Mul, MulAssign},
};

use crate::{
    core::{errors::CastError, utils::cast_numeric},
    Array4D,
};

// --- Maps and Zips ---

impl<T> Array4D<T>
where
    T: Copy,
{
    pub fn map<R>(&self, f: impl Fn(T) -> R) -> Array4D<R> {
        Array4D {
            data: self.data.iter().map(|&elem| f(elem)).collect(),
            shape: self.shape,
        }
    }

    pub fn zip<R>(&self, rhs: &Array4D<T>, f: impl Fn(T, T) -> R) -> Result<Array4D<R>> {
        self.shape.valid_same(&rhs.shape)?;

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&lhs_elem, &rhs_elem)| f(lhs_elem, rhs_elem))
            .collect();

        Ok(Array4D {
            data,
            shape: self.shape,
        })
    }

    /// Multiplies every element by `multiplier`, in place.
    pub fn scale(&mut self, multiplier: T)
    where
        T: MulAssign,
    {
        for elem in self.data.iter_mut() {
            *elem *= multiplier;
        }
    }

    /// Multiplies by the matching elements of `rhs`, in place. Sizes must
    /// match on all four axes.
    pub fn mul_assign_elementwise(&mut self, rhs: &Array4D<T>) -> Result<()>
    where
        T: MulAssign,
    {
        self.shape.valid_same(&rhs.shape)?;

        for (lhs_elem, &rhs_elem) in self.data.iter_mut().zip(rhs.data.iter()) {
            *lhs_elem *= rhs_elem;
        }
        Ok(())
    }

    // --- Conversion ---

    /// Copies into an array of `U`, with `as` cast semantics.
    pub fn convert<U>(&self) -> Array4D<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|elem| elem.as_())
    }

    /// Copies into an array of `U`, failing on the first element `U` cannot
    /// represent.
    pub fn try_convert<U>(&self) -> Result<Array4D<U>>
    where
        T: ToPrimitive + Display,
        U: NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&elem| cast_numeric(elem))
            .collect::<Result<Vec<U>, CastError>>()?;

        Ok(Array4D {
            data,
            shape: self.shape,
        })
    }
}

// --- Elementwise product ---

macro_rules! binary_ops {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T> $trait for Array4D<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array4D<T>>;
            fn $method(self, rhs: Array4D<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait for &Array4D<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array4D<T>>;
            fn $method(self, rhs: &Array4D<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<Array4D<T>> for &Array4D<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array4D<T>>;
            fn $method(self, rhs: Array4D<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<&Array4D<T>> for Array4D<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array4D<T>>;
            fn $method(self, rhs: &Array4D<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }
    };
}

binary_ops!(Mul, mul, *);
