// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::c64;
use crate::constants::{PI, TAU};

/// Complex exponential. The argument is assumed to be purely imaginary.
///
/// This function doesn't actually use complex numbers; it just returns the real
/// and imag components from Euler's formula (i.e. e^{ix} = cos{x} + i sin{x}).
///
/// # Examples
///
/// `assert_abs_diff_eq!(cexp(PI), c64::new(-1.0, 0.0));`
#[inline]
pub(crate) fn cexp(x: f64) -> c64 {
    let (im, re) = x.sin_cos();
    c64::new(re, im)
}

/// Wrap a phase into the principal interval (-pi, pi].
///
/// This is a single-value correction, not a sequential unwrap; the result
/// differs from the input by an integer multiple of 2 pi.
#[inline]
pub(crate) fn wrap_phase(theta: f64) -> f64 {
    let mut wrapped = theta % TAU;
    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped
}

/// Convert a dB figure into a voltage-domain scale factor.
///
/// # Examples
///
/// `assert_abs_diff_eq!(db_to_voltage(-6.0), 0.501187, epsilon = 1e-6);`
#[inline]
pub(crate) fn db_to_voltage(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}
