//! Builds a small scalar graph, runs backward, and prints every gradient.
//!
//! loss = (a + b) * d with a = 1, b = 2, d = 4.

use scalargrad_core::{add_op, mul_op, ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = add_op(&[a.clone(), b.clone()])?;
    let d = Value::new(4.0);
    let loss = mul_op(&[c.clone(), d.clone()])?;

    println!("loss = (a + b) * d = {}", loss.data());

    loss.backward()?;

    for (name, node) in [("a", &a), ("b", &b), ("c", &c), ("d", &d), ("loss", &loss)] {
        println!(
            "{:>4}: data = {:>6}, grad = {:>6}",
            name,
            node.data(),
            node.grad()
        );
    }
    Ok(())
}
