// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Building a time-domain-ready spectrum along one observation direction.
//!
//! The pipeline interpolates the pattern at the requested direction, extends
//! the band edges with synthetic zero samples, compensates the reference
//! propagation delay and the flat loss, resamples everything onto the uniform
//! one-sided frequency grid of a real time-domain signal, and finally removes
//! the residual linear phase of the delay convention. The inverse transform
//! itself is left to the caller.

mod error;

pub use error::TimeDomainError;

use std::ops::Range;

use itertools::izip;
use log::{debug, trace};
use ndarray::{s, Array1};
use serde::{Deserialize, Serialize};

use crate::{
    c64,
    constants::{Propagation, F_PAD_OFFSET_HZ, TAU},
    interp,
    math::{cexp, db_to_voltage},
    pattern::{AntennaPattern, DirectionCut},
};

/// The scalar parameters of a time-domain synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomainRequest {
    /// The desired observation window length \[seconds\]
    pub tmax: f64,

    /// The desired time-domain sample spacing \[seconds\]
    pub ts: f64,

    /// The observation azimuth, in the unit of the pattern's azimuth axis.
    pub azimuth: f64,

    /// The observation zenith angle, in the unit of the pattern's zenith
    /// axis.
    pub zenith: f64,

    /// Overrides the pattern's own fixed delay when present \[seconds\]
    #[serde(default)]
    pub fixed_delay: Option<f64>,

    /// Overrides the pattern's own loss figure when present \[dB\]
    #[serde(default)]
    pub loss_db: Option<f64>,
}

/// An antenna pattern along one direction, compensated and resampled onto
/// the uniform one-sided frequency grid of a real time-domain signal of
/// `n_ffts` samples spaced `ts` apart. Every per-bin array has the length of
/// `freqs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDomainSlice {
    /// The uniform one-sided frequency grid: bin k sits at k / (n_ffts ts)
    /// \[Hz\]
    pub freqs: Array1<f64>,

    /// The phi-polarised far-field component per bin.
    pub ep: Array1<c64>,

    /// The theta-polarised far-field component per bin.
    pub et: Array1<c64>,

    /// The phi-polarised effective aperture per bin.
    pub aeff_p: Array1<c64>,

    /// The theta-polarised effective aperture per bin.
    pub aeff_t: Array1<c64>,

    /// Absolute directivity per bin.
    pub dir_abs: Array1<f64>,

    /// The azimuth this slice was taken at.
    pub azimuth: f64,

    /// The zenith angle this slice was taken at.
    pub zenith: f64,

    /// The requested observation window \[seconds\]
    pub tmax: f64,

    /// The requested sample spacing \[seconds\]
    pub ts: f64,

    /// The length of the corresponding real time-domain signal \[samples\];
    /// floor(tmax / ts).
    pub n_ffts: usize,

    /// The fixed delay that was compensated \[seconds\]
    pub fixed_delay: f64,

    /// The loss figure that was applied \[dB\]
    pub loss_db: f64,
}

/// Build the time-domain-ready spectrum of `pattern` at the direction and on
/// the grid given by `request`.
///
/// The one-sided grid has floor(n/2) + 1 bins for a window of n =
/// floor(tmax / ts) samples, so the highest bin never exceeds the Nyquist
/// frequency 1 / (2 ts). Directions outside the pattern's angular domain
/// yield all-zero spectra. The compensated delay is the reference-distance
/// delay minus the fixed delay; the loss figure comes from the request,
/// falling back to the pattern and then to 0 dB.
pub fn build_slice(
    pattern: &AntennaPattern,
    request: &TimeDomainRequest,
    propagation: Propagation,
) -> Result<TimeDomainSlice, TimeDomainError> {
    pattern.validate()?;
    if !request.ts.is_finite() || request.ts <= 0.0 {
        return Err(TimeDomainError::NonPositiveStep { ts: request.ts });
    }
    if !request.azimuth.is_finite() || !request.zenith.is_finite() {
        return Err(TimeDomainError::NonFiniteDirection {
            azimuth: request.azimuth,
            zenith: request.zenith,
        });
    }
    let n = (request.tmax / request.ts).floor();
    if !n.is_finite() || n < 1.0 {
        return Err(TimeDomainError::EmptyWindow {
            tmax: request.tmax,
            ts: request.ts,
        });
    }
    let n_ffts = n as usize;
    // The one-sided bin count of a real signal, excluding bin 0.
    let n_bins = n_ffts / 2;
    let df = 1.0 / (n_ffts as f64 * request.ts);
    let f_nyq = 1.0 / (2.0 * request.ts);

    let fixed_delay = request.fixed_delay.unwrap_or(pattern.fixed_delay);
    let loss_db = request.loss_db.or(pattern.loss_db).unwrap_or(0.0);
    let delay = propagation.ref_delay() - fixed_delay;
    let loss_factor = db_to_voltage(loss_db);

    debug!(
        "Time-domain grid: {} bins spaced {:.6e} Hz, window of {} samples",
        n_bins + 1,
        df,
        n_ffts
    );
    trace!(
        "Compensating a delay of {:e} s with loss factor {}",
        delay,
        loss_factor
    );

    let cut = pattern.direction_cut(request.azimuth, request.zenith, propagation);
    let mut padded = pad_band_edges(&pattern.freq, cut, df, f_nyq);
    compensate_reference(&mut padded, delay, loss_factor);

    let target: Vec<f64> = (0..=n_bins).map(|k| k as f64 * df).collect();
    let zero = c64::new(0.0, 0.0);
    let mut ep = interp::linear_1d(&padded.freq, padded.ep.view(), &target, zero);
    let mut et = interp::linear_1d(&padded.freq, padded.et.view(), &target, zero);
    let mut aeff_p = interp::linear_1d(&padded.freq, padded.aeff_p.view(), &target, zero);
    let mut aeff_t = interp::linear_1d(&padded.freq, padded.aeff_t.view(), &target, zero);
    let dir_abs = interp::linear_1d(&padded.freq, padded.dir_abs.view(), &target, 0.0);

    // Padding and compensation ran in a positive-delay convention; rotate
    // the resampled bins back onto the output grid's time origin.
    let ramp = phase_ramp(n_bins + 1, df, delay);
    ep *= &ramp;
    et *= &ramp;
    aeff_p *= &ramp;
    aeff_t *= &ramp;

    Ok(TimeDomainSlice {
        freqs: Array1::from_vec(target),
        ep,
        et,
        aeff_p,
        aeff_t,
        dir_abs,
        azimuth: request.azimuth,
        zenith: request.zenith,
        tmax: request.tmax,
        ts: request.ts,
        n_ffts,
        fixed_delay,
        loss_db,
    })
}

/// A direction cut extended with synthetic band-edge samples. `native` spans
/// the positions of the original samples inside the padded axis.
#[derive(Debug)]
struct PaddedSpectrum {
    freq: Vec<f64>,
    ep: Array1<c64>,
    et: Array1<c64>,
    aeff_p: Array1<c64>,
    aeff_t: Array1<c64>,
    dir_abs: Array1<f64>,
    native: Range<usize>,
}

/// Extend a direction cut with zero-valued samples near DC and the Nyquist
/// frequency, so that the resampler finds defined values at every target bin
/// instead of extrapolating. A side is left alone when the native band
/// already covers it: the low side when the band starts below the first
/// non-zero target bin, the high side when the band reaches `f_nyq`.
///
/// The padded axis is strictly ascending for any valid input.
fn pad_band_edges(freq: &[f64], cut: DirectionCut, df: f64, f_nyq: f64) -> PaddedSpectrum {
    let nf = freq.len();
    let fmin = freq[0];
    let fmax = freq[nf - 1];
    let extra_low = if fmin < df { 0 } else { 2 };
    let extra_high = if fmax >= f_nyq { 0 } else { 2 };
    debug!(
        "Padding the band edges with {} low and {} high samples",
        extra_low, extra_high
    );

    let mut padded_freq = Vec::with_capacity(nf + extra_low + extra_high);
    if extra_low == 2 {
        padded_freq.push(0.0);
        padded_freq.push((fmin - F_PAD_OFFSET_HZ).max(fmin / 2.0));
    }
    padded_freq.extend_from_slice(freq);
    if extra_high == 2 {
        padded_freq.push((fmax + F_PAD_OFFSET_HZ).min((fmax + f_nyq) / 2.0));
        padded_freq.push(f_nyq);
    }

    let native = extra_low..extra_low + nf;
    let total = padded_freq.len();
    let mut ep = Array1::zeros(total);
    let mut et = Array1::zeros(total);
    let mut aeff_p = Array1::zeros(total);
    let mut aeff_t = Array1::zeros(total);
    let mut dir_abs = Array1::zeros(total);
    ep.slice_mut(s![native.clone()]).assign(&cut.ep);
    et.slice_mut(s![native.clone()]).assign(&cut.et);
    aeff_p.slice_mut(s![native.clone()]).assign(&cut.aeff_p);
    aeff_t.slice_mut(s![native.clone()]).assign(&cut.aeff_t);
    dir_abs.slice_mut(s![native.clone()]).assign(&cut.dir_abs);

    PaddedSpectrum {
        freq: padded_freq,
        ep,
        et,
        aeff_p,
        aeff_t,
        dir_abs,
        native,
    }
}

/// Multiply every native sample by the loss factor and the reference-delay
/// phasor exp(i 2 pi f delay). Synthetic padding samples stay at zero; the
/// directivity is a magnitude and is not compensated.
fn compensate_reference(spectrum: &mut PaddedSpectrum, delay: f64, loss_factor: f64) {
    let native = spectrum.native.clone();
    for (&f, e_p, e_t, a_p, a_t) in izip!(
        &spectrum.freq[native.clone()],
        spectrum.ep.slice_mut(s![native.clone()]),
        spectrum.et.slice_mut(s![native.clone()]),
        spectrum.aeff_p.slice_mut(s![native.clone()]),
        spectrum.aeff_t.slice_mut(s![native]),
    ) {
        let comp = cexp(TAU * f * delay) * loss_factor;
        *e_p *= comp;
        *e_t *= comp;
        *a_p *= comp;
        *a_t *= comp;
    }
}

/// The rotating phasor that removes the residual linear phase of the delay
/// convention: element k holds exp(-i 2 pi df delay)^k, built by recurrence
/// with a single complex multiplication per bin.
fn phase_ramp(len: usize, df: f64, delay: f64) -> Array1<c64> {
    let step = cexp(-TAU * df * delay);
    let mut rot = c64::new(1.0, 0.0);
    Array1::from_iter((0..len).map(|_| {
        let current = rot;
        rot *= step;
        current
    }))
}
