use anyhow::Result;
use array4d::{make_batched_matmul, Array4D};

fn main() -> Result<()> {
    let mut a = Array4D::<i64>::zeroes([2, 2, 2, 3])?;
    a.fill_iota(0);
    let mut b = Array4D::<i64>::zeroes([2, 2, 3, 2])?;
    b.fill_with_multiples(2)?;
    println!("{}", a);
    println!("{}", b);

    let c = make_batched_matmul(&a, &b)?;
    println!("{}", c.to_table());

    Ok(())
}
