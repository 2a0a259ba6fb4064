// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Group-delay estimation over the native frequency grid.

Each adjacent frequency pair contributes one estimate per direction and
polarisation: the phase of `ref_phasor * X(f_{i+1}) * conj(X(f_i))` is
wrapped into the principal interval and divided by the pair's angular
width, then offset by the fixed and reference-distance delays. The wrap is
a single-value correction; no running unwrap is carried along the axis.
*/

mod error;

pub use error::GroupDelayError;

use log::debug;
use ndarray::{Array3, ArrayView1, ArrayViewMut1, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    c64,
    constants::{Propagation, TAU},
    math::{cexp, wrap_phase},
    pattern::AntennaPattern,
};

/// Per-direction group-delay estimates \[seconds\]. Derived from an
/// [`AntennaPattern`] by [`estimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDelayField {
    /// The phi-polarisation estimate, indexed by (azimuth, zenith, frequency
    /// interval); interval i spans native samples i and i + 1.
    pub gd_p: Array3<f64>,

    /// The theta-polarisation estimate, same indexing.
    pub gd_t: Array3<f64>,
}

/// Estimate the group delay of both polarisation components at every
/// direction of the native angular grid.
///
/// The estimate is differential, so the pattern needs at least two frequency
/// samples; the output's last axis is one shorter than the pattern's
/// frequency axis. Directions are processed in parallel.
pub fn estimate(
    pattern: &AntennaPattern,
    propagation: Propagation,
) -> Result<GroupDelayField, GroupDelayError> {
    pattern.validate()?;

    let nf = pattern.freq.len();
    if nf < 2 {
        return Err(GroupDelayError::InsufficientFreqSamples { got: nf });
    }

    let delay_ref = propagation.ref_delay();
    let base_delay = pattern.fixed_delay + delay_ref;
    // The angular width of each interval and the reference-distance phasor
    // spanning it are shared by all directions; compute them once.
    let deltas: Vec<(f64, c64)> = pattern
        .freq
        .windows(2)
        .map(|pair| {
            let d_omega = TAU * (pair[1] - pair[0]);
            (d_omega, cexp(d_omega * delay_ref))
        })
        .collect();

    let (n_az, n_zen) = (pattern.azimuth.len(), pattern.zenith.len());
    debug!(
        "Estimating group delay over {} x {} directions, {} frequency intervals",
        n_az,
        n_zen,
        nf - 1
    );

    let mut gd_p = Array3::zeros((n_az, n_zen, nf - 1));
    let mut gd_t = Array3::zeros((n_az, n_zen, nf - 1));
    gd_p.axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(gd_t.axis_iter_mut(Axis(0)).into_par_iter())
        .zip(pattern.ep.axis_iter(Axis(0)).into_par_iter())
        .zip(pattern.et.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(((mut gd_p, mut gd_t), ep), et)| {
            gd_p.outer_iter_mut()
                .zip(gd_t.outer_iter_mut())
                .zip(ep.outer_iter())
                .zip(et.outer_iter())
                .for_each(|(((gd_p, gd_t), ep), et)| {
                    estimate_lane(&deltas, base_delay, ep, et, gd_p, gd_t);
                });
        });

    Ok(GroupDelayField { gd_p, gd_t })
}

/// Fill one (azimuth, zenith) lane of both output arrays.
fn estimate_lane(
    deltas: &[(f64, c64)],
    base_delay: f64,
    ep: ArrayView1<c64>,
    et: ArrayView1<c64>,
    mut gd_p: ArrayViewMut1<f64>,
    mut gd_t: ArrayViewMut1<f64>,
) {
    for (i, &(d_omega, ref_phasor)) in deltas.iter().enumerate() {
        let rel_p = wrap_phase((ref_phasor * ep[i + 1] * ep[i].conj()).arg());
        let rel_t = wrap_phase((ref_phasor * et[i + 1] * et[i].conj()).arg());
        gd_p[i] = base_delay + rel_p / d_omega;
        gd_t[i] = base_delay + rel_t / d_omega;
    }
}
