use array4d::Array4D;

fn main() -> anyhow::Result<()> {
    let a = Array4D::from_nested(&[
        vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]],
        vec![vec![vec![9, 10], vec![11, 12]], vec![vec![13, 14], vec![15, 16]]],
    ])?;

    println!("{:?}", a);
    println!("{}", a);
    println!("{}", a.to_table());

    Ok(())
}
