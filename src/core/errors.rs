use thiserror::Error;

// --- Shape ---

#[derive(Error, Debug, PartialEq)]
pub enum ShapeMismatchError {
    #[error("Data length ({data_length}) does not match size of array ({array_size}).")]
    DataLength {
        data_length: usize,
        array_size: usize,
    },

    #[error("Sizes {lhs_sizes:?} and {rhs_sizes:?} do not match.")]
    Sizes {
        lhs_sizes: [usize; 4],
        rhs_sizes: [usize; 4],
    },

    #[error("2D source of size {source_sizes:?} cannot fill the {axes} axes of size {target_sizes:?}.")]
    Broadcast {
        source_sizes: [usize; 2],
        target_sizes: [usize; 2],
        axes: &'static str,
    },

    #[error("Cannot be matrix multiplied. [.. m x n1] @ [.. n2 x l], n1 ({n1}) != n2 ({n2}).")]
    MatmulInner { n1: usize, n2: usize },

    #[error("Result of size [.. {result_m} x {result_l}] cannot hold product of size [.. {m} x {l}].")]
    MatmulResult {
        m: usize,
        l: usize,
        result_m: usize,
        result_l: usize,
    },

    #[error("Batch sizes (planes x depth) {lhs_batch:?}, {rhs_batch:?} and {result_batch:?} do not match.")]
    MatmulBatch {
        lhs_batch: [usize; 2],
        rhs_batch: [usize; 2],
        result_batch: [usize; 2],
    },
}

#[derive(Error, Debug, PartialEq)]
#[error("Product of sizes {sizes:?} overflows `usize`.")]
pub struct SizeOverflowError {
    pub sizes: Vec<usize>,
}

#[derive(Error, Debug, PartialEq)]
#[error("Ragged {level} list at {path:?}: expected length {expected}, found {found}.")]
pub struct RaggedShapeError {
    pub level: &'static str,
    pub path: Vec<usize>,
    pub expected: usize,
    pub found: usize,
}

// --- Index ---

#[derive(Error, Debug, PartialEq)]
pub enum IndexError {
    #[error("Index {index} is out of range for dimension {dimension}, of size {size}.")]
    OutOfRange {
        index: usize,
        dimension: usize,
        size: usize,
    },
}

// --- Misc ---

#[derive(Error, Debug, PartialEq)]
#[error("Standard deviation ({0}) should be finite and non-negative.")]
pub struct DeviationError(pub f64);

#[derive(Error, Debug, PartialEq)]
#[error("Cannot convert {value} to type {dtype}.")]
pub struct CastError {
    pub value: String,
    pub dtype: &'static str,
}
