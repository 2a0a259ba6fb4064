// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::{array, Array3};

use super::*;
use crate::c64;

#[test]
fn test_linear_1d_nodes_and_interior() {
    let x = [1.0, 2.0, 4.0];
    let y = array![10.0, 20.0, 40.0];

    let out = linear_1d(&x, y.view(), &[1.0, 1.5, 2.0, 3.0, 4.0], 0.0);
    // Queries on a node return the node sample exactly.
    assert_eq!(out[0], 10.0);
    assert_eq!(out[2], 20.0);
    assert_eq!(out[4], 40.0);
    assert_abs_diff_eq!(out[1], 15.0);
    assert_abs_diff_eq!(out[3], 30.0);
}

#[test]
fn test_linear_1d_fills_strictly_outside() {
    let x = [1.0, 2.0, 4.0];
    let y = array![10.0, 20.0, 40.0];

    let out = linear_1d(&x, y.view(), &[-5.0, 0.999, 4.001, 100.0], -1.0);
    assert_eq!(out[0], -1.0);
    assert_eq!(out[1], -1.0);
    assert_eq!(out[2], -1.0);
    assert_eq!(out[3], -1.0);
}

#[test]
fn test_linear_1d_singleton_axis() {
    let x = [5.0];
    let y = array![7.0];

    let out = linear_1d(&x, y.view(), &[5.0, 4.9, 5.1], -1.0);
    assert_eq!(out[0], 7.0);
    assert_eq!(out[1], -1.0);
    assert_eq!(out[2], -1.0);
}

#[test]
fn test_linear_1d_complex_blend() {
    let x = [0.0, 2.0];
    let y = array![c64::new(1.0, -1.0), c64::new(3.0, 1.0)];

    let out = linear_1d(&x, y.view(), &[1.0], c64::new(0.0, 0.0));
    assert_abs_diff_eq!(out[0].re, 2.0);
    assert_abs_diff_eq!(out[0].im, 0.0);
}

/// A field that is linear in both angles is reproduced exactly by the
/// bilinear blend.
fn linear_field(az_axis: &[f64], zen_axis: &[f64], nf: usize) -> Array3<f64> {
    Array3::from_shape_fn((az_axis.len(), zen_axis.len(), nf), |(a, z, f)| {
        az_axis[a] + 10.0 * zen_axis[z] + 100.0 * f as f64
    })
}

#[test]
fn test_at_direction_reproduces_linear_field() {
    let az_axis = [0.0, 2.0];
    let zen_axis = [10.0, 20.0];
    let values = linear_field(&az_axis, &zen_axis, 3);

    let out = at_direction(&az_axis, &zen_axis, values.view(), 1.0, 15.0, 0.0);
    assert_eq!(out.len(), 3);
    for f in 0..3 {
        assert_abs_diff_eq!(out[f], 1.0 + 150.0 + 100.0 * f as f64);
    }
}

#[test]
fn test_at_direction_corners_and_edges() {
    let az_axis = [0.0, 2.0];
    let zen_axis = [10.0, 20.0];
    let values = linear_field(&az_axis, &zen_axis, 2);

    let corner = at_direction(&az_axis, &zen_axis, values.view(), 0.0, 10.0, 0.0);
    assert_abs_diff_eq!(corner[0], 100.0);
    assert_abs_diff_eq!(corner[1], 200.0);

    let corner = at_direction(&az_axis, &zen_axis, values.view(), 2.0, 20.0, 0.0);
    assert_abs_diff_eq!(corner[0], 202.0);
    assert_abs_diff_eq!(corner[1], 302.0);

    let edge = at_direction(&az_axis, &zen_axis, values.view(), 0.5, 10.0, 0.0);
    assert_abs_diff_eq!(edge[0], 100.5);
    assert_abs_diff_eq!(edge[1], 200.5);
}

#[test]
fn test_at_direction_outside_domain_yields_fill() {
    let az_axis = [0.0, 2.0];
    let zen_axis = [10.0, 20.0];
    let values = linear_field(&az_axis, &zen_axis, 4);

    for (az, zen) in [(-0.1, 15.0), (1.0, 9.9), (2.1, 15.0), (1.0, 20.1)] {
        let out = at_direction(&az_axis, &zen_axis, values.view(), az, zen, -1.0);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&v| v == -1.0));
    }
}

#[test]
fn test_at_direction_singleton_angle_axis() {
    let az_axis = [1.0];
    let zen_axis = [10.0, 20.0];
    let values = linear_field(&az_axis, &zen_axis, 2);

    // A singleton axis admits only exact-match queries.
    let out = at_direction(&az_axis, &zen_axis, values.view(), 1.0, 15.0, 0.0);
    assert_abs_diff_eq!(out[0], 151.0);
    assert_abs_diff_eq!(out[1], 251.0);

    let out = at_direction(&az_axis, &zen_axis, values.view(), 1.1, 15.0, -1.0);
    assert!(out.iter().all(|&v| v == -1.0));
}

#[test]
fn test_at_direction_complex_values() {
    let az_axis = [0.0, 1.0];
    let zen_axis = [0.0, 1.0];
    let values = Array3::from_shape_fn((2, 2, 1), |(a, z, _)| {
        c64::new(a as f64, z as f64)
    });

    let out = at_direction(&az_axis, &zen_axis, values.view(), 0.25, 0.75, c64::new(0.0, 0.0));
    assert_abs_diff_eq!(out[0].re, 0.25);
    assert_abs_diff_eq!(out[0].im, 0.75);
}
