use approx::assert_relative_eq;
use gradwalk_core::autograd::grad_check::{central_difference, check_grad, GradCheckOptions, DEFAULT_EPSILON};
use gradwalk_core::utils::testing::{check_grad_near, check_value_near};
use gradwalk_core::{topological_sort, AutodiffError, Scalar, Variable};

mod common;
use common::{grads, leaves};

#[test]
fn test_polynomial_gradients_match_central_difference() {
    let xs = leaves(&[2.0, 3.0]);
    let f = &(&xs[0] * &xs[1]) + &xs[0];
    check_value_near(&f, 8.0, 1e-12);
    f.backward().unwrap();

    let forward = |v: &[f64]| v[0] * v[1] + v[0];
    for arg in 0..2 {
        let numerical = central_difference(forward, &[2.0, 3.0], arg, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(xs[arg].grad().unwrap(), numerical, max_relative = 1e-4);
    }
    assert_eq!(grads(&xs), vec![Some(4.0), Some(2.0)]);
}

#[test]
fn test_reused_intermediate_sums_contributions() {
    // y = h * h + h with h = x * x: dy/dx = (2h + 1) * 2x
    let x = Scalar::new(1.5);
    let h = &x * &x;
    let y = &(&h * &h) + &h;
    y.backward().unwrap();
    let h_val = 2.25;
    check_grad_near(&x, (2.0 * h_val + 1.0) * 3.0, 1e-12);
    // Intermediates never receive a deposit.
    assert_eq!(h.grad(), None);
}

#[test]
fn test_linearized_order_of_scalar_graph() {
    let a = Scalar::new(1.0);
    let b = a.exp();
    let c = &b * &a;
    let order = topological_sort(&c);
    let ids: Vec<_> = order.iter().map(Variable::unique_id).collect();
    assert_eq!(ids, vec![c.id(), b.id(), a.id()]);
}

#[test]
fn test_constants_are_pruned_from_scalar_graph() {
    let x = Scalar::new(2.0);
    let k = Scalar::constant(10.0);
    let y = &(&k * &x) + 1.0;
    let order = topological_sort(&y);
    assert!(order.iter().all(|node| !node.is_constant()));
    assert_eq!(order.len(), 3);

    y.backward().unwrap();
    check_grad_near(&x, 10.0, 1e-12);
    assert_eq!(k.grad(), None);
}

#[test]
fn test_detached_branch_contributes_nothing() {
    let x = Scalar::new(0.4);
    let y = &x.sigmoid() + &x.detach().exp();
    y.backward().unwrap();
    let s = 1.0 / (1.0 + (-0.4_f64).exp());
    check_grad_near(&x, s * (1.0 - s), 1e-12);
}

#[test]
fn test_backward_with_seed_scales_gradients() {
    let x = Scalar::new(3.0);
    let y = &x * 4.0;
    y.backward_with(0.5).unwrap();
    check_grad_near(&x, 2.0, 1e-12);
}

#[test]
fn test_backward_on_constant_fails() {
    let y = Scalar::constant(3.0).exp();
    assert_eq!(y.backward(), Err(AutodiffError::RequiresGradNotMet));
}

#[test]
fn test_single_neuron_gradient_check() {
    // sigmoid(w * x + b) followed by a squared error against 1.0
    let build = |p: &[Scalar]| {
        let z = &(&p[0] * &p[1]) + &p[2];
        let err = &z.sigmoid() - 1.0;
        &err * &err
    };
    check_grad(build, &[0.8, -1.3, 0.2], &GradCheckOptions::default()).unwrap();
}

#[test]
fn test_gradient_descent_reduces_loss() {
    // Minimise (w - 3)^2 with plain gradient steps.
    let mut w_value = 0.0;
    let loss_at = |w: f64| (w - 3.0) * (w - 3.0);
    let initial_loss = loss_at(w_value);
    for _ in 0..20 {
        let w = Scalar::new(w_value);
        let diff = &w - 3.0;
        let loss = &diff * &diff;
        loss.backward().unwrap();
        w_value -= 0.1 * w.grad().unwrap();
    }
    assert!(loss_at(w_value) < initial_loss * 1e-3);
}
