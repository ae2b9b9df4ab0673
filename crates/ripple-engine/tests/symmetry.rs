//! Integration test: a centred source in a square closed tank keeps the
//! field symmetric under the tank's reflections at every step.

use ripple_core::BoundaryCondition;
use ripple_test_utils::{assert_grids_close, closed_square_tank, mirror_x, mirror_y, transpose};

const TOL: f64 = 1e-8;

#[test]
fn closed_tank_field_is_symmetric() {
    let tank = closed_square_tank(41, 5.0);
    assert_eq!(tank.boundary(), BoundaryCondition::Closed);
    let out = tank.simulate_steps(200);
    assert!(out.metrics.is_finite());
    assert!(out.metrics.peak_amplitude > 0.0);

    for i in 0..out.steps() {
        let u = out.frame(i).unwrap();
        assert_grids_close(u, mirror_x(u).view(), TOL);
        assert_grids_close(u, mirror_y(u).view(), TOL);
        assert_grids_close(u, transpose(u).view(), TOL);
    }
}

#[test]
fn closed_borders_keep_initial_value() {
    let tank = closed_square_tank(21, 5.0);
    let out = tank.simulate_steps(150);
    let first = out.frame(0).unwrap();
    let n = 21;
    for i in 1..out.steps() {
        let u = out.frame(i).unwrap();
        for k in 0..n {
            assert_eq!(u[[0, k]], first[[0, k]]);
            assert_eq!(u[[n - 1, k]], first[[n - 1, k]]);
            assert_eq!(u[[k, 0]], first[[k, 0]]);
            assert_eq!(u[[k, n - 1]], first[[k, n - 1]]);
        }
    }
}
