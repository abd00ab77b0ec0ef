use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::autograd::grad_check::{check_grad, GradCheckError};
use scalargrad_core::{add_op, mul_op, relu_op, sub_op, ScalarGradError, Value};

const EPSILON: f64 = 1e-5;
const TOLERANCE: f64 = 1e-6;

#[test]
fn test_check_grad_sum() -> Result<(), GradCheckError> {
    check_grad(|inputs| add_op(inputs), &[1.0, -2.5, 3.75], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_difference() -> Result<(), GradCheckError> {
    check_grad(|inputs| sub_op(inputs), &[4.0, 1.5, -2.25], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_product() -> Result<(), GradCheckError> {
    check_grad(|inputs| mul_op(inputs), &[1.5, -0.75, 2.0], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_relu_away_from_boundary() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(relu_op(&inputs[0]));
    check_grad(func, &[2.0], EPSILON, TOLERANCE)?;
    check_grad(func, &[-1.5], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_composite_expression() -> Result<(), GradCheckError> {
    // f(a, b, c) = relu(a * b + c) * (a - c), evaluated well inside the
    // active region of the gate.
    let func = |inputs: &[Value]| -> Result<Value, ScalarGradError> {
        let prod = mul_op(&[inputs[0].clone(), inputs[1].clone()])?;
        let gated = relu_op(&add_op(&[prod, inputs[2].clone()])?);
        let diff = sub_op(&[inputs[0].clone(), inputs[2].clone()])?;
        mul_op(&[gated, diff])
    };
    check_grad(func, &[1.5, 2.0, 0.5], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_shared_subexpression() -> Result<(), GradCheckError> {
    // f(x) = x * x + x, built over a single shared leaf.
    let func = |inputs: &[Value]| -> Result<Value, ScalarGradError> {
        let square = mul_op(&[inputs[0].clone(), inputs[0].clone()])?;
        add_op(&[square, inputs[0].clone()])
    };
    check_grad(func, &[1.75], EPSILON, TOLERANCE)
}

#[test]
fn test_check_grad_random_graphs() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let inputs: Vec<f64> = (0..4).map(|_| rng.gen_range(0.5..2.0)).collect();
        let picks: Vec<u8> = (0..6).map(|_| rng.gen_range(0..3)).collect();

        // The shape is fixed by `picks`, so each re-evaluation inside
        // check_grad rebuilds the same expression.
        let func = move |leaves: &[Value]| -> Result<Value, ScalarGradError> {
            let mut pool: Vec<Value> = leaves.to_vec();
            for (step, &pick) in picks.iter().enumerate() {
                let x = pool[step % pool.len()].clone();
                let y = pool[(step + 1) % pool.len()].clone();
                let combined = match pick {
                    0 => add_op(&[x, y])?,
                    1 => sub_op(&[x, y])?,
                    _ => mul_op(&[x, y])?,
                };
                pool.push(combined);
            }
            add_op(&pool)
        };
        check_grad(func, &inputs, EPSILON, TOLERANCE)?;
    }
    Ok(())
}
