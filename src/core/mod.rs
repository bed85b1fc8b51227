mod array2d;
mod array4d;
mod display;
mod errors;
mod iters;
mod ops;
mod shape;
mod utils;

pub use array2d::Array2D;
pub use array4d::{Array4D, TOLERANCE};
pub use errors::*;
pub use iters::Indexer;
pub use ops::{batched_matmul, make_batched_matmul, DEFAULT_MEAN, DEFAULT_SEED};
pub use shape::RANK;
