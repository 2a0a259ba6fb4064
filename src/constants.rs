// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.
//!
//! All constants are double precision; every calculation in this crate is
//! done in double precision.

pub use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Speed of light in vacuum \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// The far-field reference distance assumed when compensating propagation
/// delay \[metres\]
pub const DEFAULT_REF_DISTANCE_M: f64 = 1.0;

/// Nominal offset between a synthetic band-edge sample and the nearest native
/// frequency sample \[Hz\]. The padder clamps it whenever the full offset
/// would cross DC or the Nyquist frequency.
pub const F_PAD_OFFSET_HZ: f64 = 1e9;

/// Propagation quantities shared by the time-domain and group-delay
/// derivations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Propagation {
    /// Far-field reference distance \[metres\]
    pub ref_distance_m: f64,

    /// Propagation speed \[metres/second\]
    pub vel_c: f64,
}

impl Default for Propagation {
    fn default() -> Self {
        Propagation {
            ref_distance_m: DEFAULT_REF_DISTANCE_M,
            vel_c: VEL_C,
        }
    }
}

impl Propagation {
    /// The one-way delay over the reference distance \[seconds\]
    pub fn ref_delay(self) -> f64 {
        self.ref_distance_m / self.vel_c
    }
}
