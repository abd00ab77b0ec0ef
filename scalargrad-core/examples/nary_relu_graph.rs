//! Exercises the n-ary operations and the ReLU gate end to end.
//!
//! loss = relu((a + b + c) * e * f) with a = 3, b = 7, c = 10, e = 5, f = 1.

use scalargrad_core::{add_op, mul_op, relu_op, ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let b = Value::new(7.0);
    let c = Value::new(10.0);
    let d = add_op(&[a.clone(), b.clone(), c.clone()])?;
    let e = Value::new(5.0);
    let f = Value::new(1.0);
    let g = mul_op(&[d.clone(), e.clone(), f.clone()])?;
    let loss = relu_op(&g);

    println!("d = a + b + c   = {}", d.data());
    println!("g = d * e * f   = {}", g.data());
    println!("loss = relu(g)  = {}", loss.data());

    loss.backward()?;

    let named = [
        ("a", &a),
        ("b", &b),
        ("c", &c),
        ("d", &d),
        ("e", &e),
        ("f", &f),
        ("g", &g),
        ("loss", &loss),
    ];
    for (name, node) in named {
        println!(
            "{:>4}: data = {:>6}, grad = {:>6}",
            name,
            node.data(),
            node.grad()
        );
    }
    Ok(())
}
