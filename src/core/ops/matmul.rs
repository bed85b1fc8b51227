use crate::{core::errors::ShapeMismatchError, Array4D};
use anyhow::{bail, Result};
use log::debug;
use num_traits::Zero;
use std::ops::Mul;

/// `result(b, d, i, j) = sum_r lhs(b, d, i, r) * rhs(b, d, r, j)`
///
/// Planes and depth are batch axes, height and width are the matrix axes.
/// Every size is checked before `result` is written.
pub fn batched_matmul<T>(lhs: &Array4D<T>, rhs: &Array4D<T>, result: &mut Array4D<T>) -> Result<()>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let [lhs_planes, lhs_depth, m, n1] = lhs.sizes();
    let [rhs_planes, rhs_depth, n2, l] = rhs.sizes();
    let [result_planes, result_depth, result_m, result_l] = result.sizes();

    if n1 != n2 {
        bail!(ShapeMismatchError::MatmulInner { n1, n2 });
    }

    if m != result_m || l != result_l {
        bail!(ShapeMismatchError::MatmulResult {
            m,
            l,
            result_m,
            result_l
        });
    }

    let (lhs_batch, rhs_batch, result_batch) = (
        [lhs_planes, lhs_depth],
        [rhs_planes, rhs_depth],
        [result_planes, result_depth],
    );
    if lhs_batch != rhs_batch || rhs_batch != result_batch {
        bail!(ShapeMismatchError::MatmulBatch {
            lhs_batch,
            rhs_batch,
            result_batch
        });
    }

    debug!("batched matmul {lhs_batch:?} x [{m} x {n1}] @ [{n2} x {l}]");

    // O(planes * depth * m * l * n1)
    for (offset, [b, d, i, j]) in result.indices().enumerate() {
        let mut prodsum = T::zero();
        for r in 0..n1 {
            prodsum = prodsum + lhs.idx(&[b, d, i, r]) * rhs.idx(&[b, d, r, j]);
        }
        result.data[offset] = prodsum;
    }

    Ok(())
}

/// Allocates a `(lhs.n1, lhs.n2, lhs.n3, rhs.n4)` result and fills it with
/// [`batched_matmul`].
pub fn make_batched_matmul<T>(lhs: &Array4D<T>, rhs: &Array4D<T>) -> Result<Array4D<T>>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let (lhs_batch, rhs_batch) = ([lhs.n1(), lhs.n2()], [rhs.n1(), rhs.n2()]);
    if lhs_batch != rhs_batch {
        bail!(ShapeMismatchError::MatmulBatch {
            lhs_batch,
            rhs_batch,
            result_batch: lhs_batch
        });
    }

    let mut result = Array4D::zeroes([lhs.n1(), lhs.n2(), lhs.n3(), rhs.n4()])?;
    batched_matmul(lhs, rhs, &mut result)?;

    Ok(result)
}

impl<T> Array4D<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    pub fn matmul(&self, rhs: &Array4D<T>) -> Result<Array4D<T>> {
        make_batched_matmul(self, rhs)
    }
}
