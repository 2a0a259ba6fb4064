// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Linear interpolation on strictly ascending sample axes.
//!
//! Queries strictly outside an axis resolve to a caller-supplied fill value
//! rather than being extrapolated; queries on a sample return that sample
//! exactly. Axes are expected to be strictly ascending (the pattern validator
//! enforces this before any interpolation runs).

#[cfg(test)]
mod tests;

use std::ops::{Add, Mul};

use ndarray::{Array1, ArrayView1, ArrayView3, Axis};

/// Find the samples of `axis` bracketing `q`, along with the blend weight of
/// the upper sample. `None` means `q` lies strictly outside the axis. A
/// singleton axis brackets only its own value.
fn bracket(axis: &[f64], q: f64) -> Option<(usize, usize, f64)> {
    let last = axis.len() - 1;
    if q < axis[0] || q > axis[last] {
        return None;
    }
    if last == 0 {
        return Some((0, 0, 0.0));
    }

    // The first index whose sample is not below q. Clamping keeps both the
    // q == axis[0] and q == axis[last] cases on a real pair.
    let hi = axis.partition_point(|&v| v < q).clamp(1, last);
    let lo = hi - 1;
    let t = (q - axis[lo]) / (axis[hi] - axis[lo]);
    Some((lo, hi, t))
}

/// Linearly interpolate the samples `y` (defined on the axis `x`) at each of
/// the query points `xq`. Queries strictly outside `x` yield `fill`.
pub(crate) fn linear_1d<T>(x: &[f64], y: ArrayView1<T>, xq: &[f64], fill: T) -> Array1<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    Array1::from_iter(xq.iter().map(|&q| match bracket(x, q) {
        Some((lo, hi, t)) => y[lo] * (1.0 - t) + y[hi] * t,
        None => fill,
    }))
}

/// Bilinearly interpolate `values` (indexed azimuth, zenith, frequency) at
/// the direction (`azimuth`, `zenith`), for every frequency index. A
/// direction outside the angular domain yields `fill` across the whole
/// frequency axis.
pub(crate) fn at_direction<T>(
    az_axis: &[f64],
    zen_axis: &[f64],
    values: ArrayView3<T>,
    azimuth: f64,
    zenith: f64,
    fill: T,
) -> Array1<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let nf = values.len_of(Axis(2));
    let (az, zen) = match (bracket(az_axis, azimuth), bracket(zen_axis, zenith)) {
        (Some(az), Some(zen)) => (az, zen),
        _ => return Array1::from_elem(nf, fill),
    };

    let (a_lo, a_hi, ta) = az;
    let (z_lo, z_hi, tz) = zen;
    let w00 = (1.0 - ta) * (1.0 - tz);
    let w01 = (1.0 - ta) * tz;
    let w10 = ta * (1.0 - tz);
    let w11 = ta * tz;
    Array1::from_shape_fn(nf, |f| {
        values[[a_lo, z_lo, f]] * w00
            + values[[a_lo, z_hi, f]] * w01
            + values[[a_hi, z_lo, f]] * w10
            + values[[a_hi, z_hi, f]] * w11
    })
}
