// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Effective apertures derived from directivity.
//!
//! Characterisation records do not always carry complex effective apertures.
//! When either polarisation's array is missing, both are derived here: the
//! magnitude is the aperture-directivity relation A = lambda^2 / (4 pi) D,
//! split between the polarisations by their share of the received field
//! power, and the phase is carried over from the corresponding field
//! component so that delay compensation treats apertures and fields alike.


use log::debug;
use ndarray::{Array3, ArrayView3, Axis, Zip};

use crate::{c64, constants::PI};

/// Derive both complex effective apertures from the absolute directivity and
/// the far-field components. All arrays are indexed (azimuth, zenith,
/// frequency); `freq` must have the length of the last axis.
///
/// Samples at non-positive frequencies, and samples where both field
/// components vanish, yield zero apertures.
pub fn effective_apertures(
    freq: &[f64],
    ep: ArrayView3<c64>,
    et: ArrayView3<c64>,
    dir_abs: ArrayView3<f64>,
    vel_c: f64,
) -> (Array3<c64>, Array3<c64>) {
    debug!(
        "Deriving effective apertures over {} frequencies",
        freq.len()
    );

    let mut aeff_p = Array3::zeros(ep.raw_dim());
    let mut aeff_t = Array3::zeros(ep.raw_dim());
    for (i, &f) in freq.iter().enumerate() {
        if f <= 0.0 {
            continue;
        }
        let lambda = vel_c / f;
        let scale = lambda * lambda / (4.0 * PI);
        Zip::from(aeff_p.index_axis_mut(Axis(2), i))
            .and(aeff_t.index_axis_mut(Axis(2), i))
            .and(ep.index_axis(Axis(2), i))
            .and(et.index_axis(Axis(2), i))
            .and(dir_abs.index_axis(Axis(2), i))
            .for_each(|aeff_p, aeff_t, e_p, e_t, &dir| {
                let pow_p = e_p.norm_sqr();
                let pow_t = e_t.norm_sqr();
                let pow_sum = pow_p + pow_t;
                if pow_sum == 0.0 {
                    return;
                }
                let total = scale * dir;
                *aeff_p = c64::from_polar(total * pow_p / pow_sum, e_p.arg());
                *aeff_t = c64::from_polar(total * pow_t / pow_sum, e_t.arg());
            });
    }
    (aeff_p, aeff_t)
}
