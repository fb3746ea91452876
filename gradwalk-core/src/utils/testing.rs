use crate::scalar::Scalar;

/// Checks that `actual` holds a derivative within `tolerance` of `expected`.
/// Panics if no derivative was deposited or if it differs significantly.
pub fn check_grad_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let grad = match actual.grad() {
        Some(grad) => grad,
        None => panic!("No gradient deposited on {:?}", actual),
    };
    let diff = (grad - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}

/// Checks the forward value of `actual` against `expected` within `tolerance`.
pub fn check_value_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.value(),
            expected,
            diff,
            tolerance
        );
    }
}
