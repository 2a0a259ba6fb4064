// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with building a time-domain-ready spectrum.

use thiserror::Error;

use crate::pattern::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeDomainError {
    #[error("The sample spacing must be positive and finite, but ts = {ts}")]
    NonPositiveStep { ts: f64 },

    #[error("The window tmax = {tmax} does not hold a single complete sample of ts = {ts}")]
    EmptyWindow { tmax: f64, ts: f64 },

    #[error("The requested direction (azimuth {azimuth}, zenith {zenith}) is not finite")]
    NonFiniteDirection { azimuth: f64, zenith: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
