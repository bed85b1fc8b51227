use anyhow::Result;
use array4d::{Array2D, Array4D};

fn main() -> Result<()> {
    let now = std::time::Instant::now();

    let yx = Array2D::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let mut a = Array4D::<f32>::zeroes([2, 2, 2, 3])?;
    a.fill_with_yx(&yx)?;
    println!("{}", a.to_table());

    let mut b = Array4D::<f32>::zeroes([2, 3, 2, 2])?;
    b.fill_with_minor_dim_num()?;
    println!("{}", b.to_table());

    let mut c = Array4D::<f64>::zeroes([1, 2, 2, 2])?;
    c.fill_random_with(1.0, 0.0, 42)?;
    println!("{}", c);

    let end = now.elapsed();
    println!("{:?}", end);

    Ok(())
}
