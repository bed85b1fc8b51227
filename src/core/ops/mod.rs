mod elem_ops;
mod fill;
mod matmul;

pub use fill::{DEFAULT_MEAN, DEFAULT_SEED};
pub use matmul::{batched_matmul, make_batched_matmul};
