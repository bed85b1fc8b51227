/*!
Dense 4D numerical arrays with row-major `(plane, depth, height, width)`
layout, for describing convolution-style data in tests.

```
use array4d::{make_batched_matmul, Array4D};

let lhs = Array4D::new(&[1, 2, 3, 4, 5, 6], [1, 1, 2, 3])?;
let rhs = Array4D::new(&[7, 8, 9, 10, 11, 12], [1, 1, 3, 2])?;

let product = make_batched_matmul(&lhs, &rhs)?;
assert_eq!(product.flatten(), &[58, 64, 139, 154]);
# Ok::<(), anyhow::Error>(())
```
*/

mod core;

pub use crate::core::*;
