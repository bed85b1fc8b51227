use prettytable::{format::consts::FORMAT_BOX_CHARS, Cell, Row, Table};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::Array4D;

impl<T> Debug for Array4D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Array4D")
            .field("dtype", &type_name::<T>())
            .field("sizes", &self.sizes())
            .field("elems", &self.numel())
            .finish()
    }
}

// p=1,z=1,y=1,x=2
// [
//   {
//     {
//       {0, 1, },
//     },
//   },
// ]
impl<T: Display + Copy> Display for Array4D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let [planes, depth, height, width] = self.sizes();
        writeln!(f, "p={},z={},y={},x={}", planes, depth, height, width)?;
        writeln!(f, "[")?;

        for p in 0..planes {
            writeln!(f, "  {{")?;
            for d in 0..depth {
                writeln!(f, "    {{")?;
                for h in 0..height {
                    write!(f, "      {{")?;
                    for w in 0..width {
                        write!(f, "{}, ", self.idx(&[p, d, h, w]))?;
                    }
                    writeln!(f, "}},")?;
                }
                writeln!(f, "    }},")?;
            }
            writeln!(f, "  }},")?;
        }

        write!(f, "]")
    }
}

impl<T: Display + Copy> Array4D<T> {
    /// Box-drawn table: one row per plane, one column per depth, each cell a
    /// `height x width` matrix.
    pub fn to_table(&self) -> Table {
        let rows = (0..self.planes())
            .map(|p| {
                Row::new(
                    (0..self.depth())
                        .map(|d| Cell::new(&self.matrix_table(p, d).to_string()))
                        .collect(),
                )
            })
            .collect();

        set_style(Table::init(rows))
    }

    fn matrix_table(&self, plane: usize, depth: usize) -> Table {
        let rows = (0..self.height())
            .map(|h| {
                Row::new(
                    (0..self.width())
                        .map(|w| Cell::new(&self.idx(&[plane, depth, h, w]).to_string()))
                        .collect(),
                )
            })
            .collect();

        set_style(Table::init(rows))
    }
}

fn set_style(mut table: Table) -> Table {
    table.set_format(*FORMAT_BOX_CHARS);
    table
}
