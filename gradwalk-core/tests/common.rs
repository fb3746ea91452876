use gradwalk_core::Scalar;

// Shared by the integration test crates, not all of which use every helper.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::new(v)).collect()
}

#[allow(dead_code)]
pub fn grads(scalars: &[Scalar]) -> Vec<Option<f64>> {
    scalars.iter().map(Scalar::grad).collect()
}
