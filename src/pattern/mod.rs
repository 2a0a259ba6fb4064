// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Antenna pattern structures.

mod error;

pub use error::ValidationError;

use log::debug;
use ndarray::{Array1, Array3, ArrayView3, CowArray, Ix3};
use serde::{Deserialize, Serialize};
use vec1::Vec1;

use crate::{
    aperture, c64,
    constants::Propagation,
    group_delay::{self, GroupDelayError, GroupDelayField},
    interp,
    time_domain::{self, TimeDomainError, TimeDomainRequest, TimeDomainSlice},
};

/// A frequency-domain far-field characterisation of one antenna over a grid
/// of directions.
///
/// All three-dimensional arrays are indexed (azimuth, zenith, frequency) and
/// must share the axis lengths of `azimuth`, `zenith` and `freq`;
/// [`AntennaPattern::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaPattern {
    /// The native frequency axis \[Hz\]. Strictly ascending and non-negative.
    pub freq: Vec1<f64>,

    /// The azimuth angle axis. Strictly ascending; the unit only has to agree
    /// with the directions later queried against this pattern.
    pub azimuth: Vec1<f64>,

    /// The zenith angle axis. Strictly ascending; same unit caveat as
    /// `azimuth`.
    pub zenith: Vec1<f64>,

    /// The phi-polarised complex far-field component.
    pub ep: Array3<c64>,

    /// The theta-polarised complex far-field component.
    pub et: Array3<c64>,

    /// The phi-polarised complex effective aperture. When this or `aeff_t` is
    /// absent, both are derived from `dir_abs` and the field components.
    #[serde(default)]
    pub aeff_p: Option<Array3<c64>>,

    /// The theta-polarised complex effective aperture.
    #[serde(default)]
    pub aeff_t: Option<Array3<c64>>,

    /// Absolute directivity.
    pub dir_abs: Array3<f64>,

    /// A constant system delay to compensate \[seconds\]
    pub fixed_delay: f64,

    /// A flat loss figure applied during time-domain synthesis \[dB\]
    #[serde(default)]
    pub loss_db: Option<f64>,
}

impl AntennaPattern {
    /// The expected shape of every per-direction, per-frequency array.
    fn expected_shape(&self) -> [usize; 3] {
        [self.azimuth.len(), self.zenith.len(), self.freq.len()]
    }

    /// Check the structural soundness of the pattern: strictly ascending
    /// finite axes, non-negative frequencies, agreeing array shapes and
    /// finite contents. Both derivations run this before touching the
    /// numbers; nothing is computed from a pattern that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_axis("azimuth", &self.azimuth)?;
        check_axis("zenith", &self.zenith)?;
        check_axis("frequency", &self.freq)?;
        for (index, &value) in self.freq.iter().enumerate() {
            if value < 0.0 {
                return Err(ValidationError::NegativeFrequency { index, value });
            }
        }

        let expected = self.expected_shape();
        check_complex_array("ep", &self.ep, expected)?;
        check_complex_array("et", &self.et, expected)?;
        if let Some(aeff_p) = &self.aeff_p {
            check_complex_array("aeff_p", aeff_p, expected)?;
        }
        if let Some(aeff_t) = &self.aeff_t {
            check_complex_array("aeff_t", aeff_t, expected)?;
        }
        check_real_array("dir_abs", &self.dir_abs, expected)?;

        if !self.fixed_delay.is_finite() {
            return Err(ValidationError::NonFiniteScalar {
                field: "fixed_delay",
                value: self.fixed_delay,
            });
        }
        if let Some(loss_db) = self.loss_db {
            if !loss_db.is_finite() {
                return Err(ValidationError::NonFiniteScalar {
                    field: "loss_db",
                    value: loss_db,
                });
            }
        }

        Ok(())
    }

    /// Interpolate the pattern at a single (azimuth, zenith) direction,
    /// producing per-native-frequency values. Directions outside the angular
    /// domain yield zeros. Patterns without effective apertures have them
    /// derived first (see the [`aperture`] module); `propagation` supplies
    /// the wave speed for that derivation.
    ///
    /// The axes are assumed to be structurally sound; callers that cannot
    /// guarantee this should [`AntennaPattern::validate`] first.
    pub fn direction_cut(
        &self,
        azimuth: f64,
        zenith: f64,
        propagation: Propagation,
    ) -> DirectionCut {
        let (aeff_p, aeff_t): (CowArray<c64, Ix3>, CowArray<c64, Ix3>) =
            match (&self.aeff_p, &self.aeff_t) {
                (Some(aeff_p), Some(aeff_t)) => (aeff_p.view().into(), aeff_t.view().into()),
                _ => {
                    debug!("Effective apertures are missing; deriving them from the directivity");
                    let (aeff_p, aeff_t) = aperture::effective_apertures(
                        &self.freq,
                        self.ep.view(),
                        self.et.view(),
                        self.dir_abs.view(),
                        propagation.vel_c,
                    );
                    (aeff_p.into(), aeff_t.into())
                }
            };

        let zero = c64::new(0.0, 0.0);
        let cut = |values: ArrayView3<c64>| {
            interp::at_direction(&self.azimuth, &self.zenith, values, azimuth, zenith, zero)
        };
        DirectionCut {
            ep: cut(self.ep.view()),
            et: cut(self.et.view()),
            aeff_p: cut(aeff_p.view()),
            aeff_t: cut(aeff_t.view()),
            dir_abs: interp::at_direction(
                &self.azimuth,
                &self.zenith,
                self.dir_abs.view(),
                azimuth,
                zenith,
                0.0,
            ),
        }
    }
}

/// An [`AntennaPattern`] evaluated along one observation direction: one value
/// per native frequency sample. Every array has the length of the pattern's
/// frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionCut {
    /// The phi-polarised far-field component.
    pub ep: Array1<c64>,

    /// The theta-polarised far-field component.
    pub et: Array1<c64>,

    /// The phi-polarised effective aperture.
    pub aeff_p: Array1<c64>,

    /// The theta-polarised effective aperture.
    pub aeff_t: Array1<c64>,

    /// Absolute directivity.
    pub dir_abs: Array1<f64>,
}

/// An antenna pattern together with the products derived from it. The
/// derivations only ever write the `Option` fields; the pattern itself is
/// never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaRecord {
    /// The source characterisation.
    pub pattern: AntennaPattern,

    /// The time-domain-ready spectrum along one direction, once built.
    #[serde(default)]
    pub time_domain: Option<TimeDomainSlice>,

    /// The group-delay estimate over the full angular grid, once computed.
    #[serde(default)]
    pub group_delay: Option<GroupDelayField>,
}

impl AntennaRecord {
    /// Wrap a pattern with no derived products.
    pub fn new(pattern: AntennaPattern) -> AntennaRecord {
        AntennaRecord {
            pattern,
            time_domain: None,
            group_delay: None,
        }
    }

    /// Build the time-domain-ready spectrum for the direction and grid in
    /// `request`, replacing any previously built one. See
    /// [`time_domain::build_slice`] for the semantics.
    pub fn build_time_domain(
        &mut self,
        request: &TimeDomainRequest,
        propagation: Propagation,
    ) -> Result<(), TimeDomainError> {
        self.time_domain = Some(time_domain::build_slice(&self.pattern, request, propagation)?);
        Ok(())
    }

    /// Estimate the group delay over the whole angular grid, replacing any
    /// previous estimate. See [`group_delay::estimate`] for the semantics.
    pub fn compute_group_delay(
        &mut self,
        propagation: Propagation,
    ) -> Result<(), GroupDelayError> {
        self.group_delay = Some(group_delay::estimate(&self.pattern, propagation)?);
        Ok(())
    }
}

fn check_axis(axis: &'static str, values: &[f64]) -> Result<(), ValidationError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteAxis { axis, index });
        }
        if index > 0 && value <= values[index - 1] {
            return Err(ValidationError::AxisNotAscending {
                axis,
                index,
                value,
                previous: values[index - 1],
            });
        }
    }
    Ok(())
}

fn check_complex_array(
    field: &'static str,
    values: &Array3<c64>,
    expected: [usize; 3],
) -> Result<(), ValidationError> {
    let (a, z, f) = values.dim();
    if [a, z, f] != expected {
        return Err(ValidationError::ShapeMismatch {
            field,
            expected,
            got: [a, z, f],
        });
    }
    for ((a, z, f), value) in values.indexed_iter() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                field,
                index: [a, z, f],
            });
        }
    }
    Ok(())
}

fn check_real_array(
    field: &'static str,
    values: &Array3<f64>,
    expected: [usize; 3],
) -> Result<(), ValidationError> {
    let (a, z, f) = values.dim();
    if [a, z, f] != expected {
        return Err(ValidationError::ShapeMismatch {
            field,
            expected,
            got: [a, z, f],
        });
    }
    for ((a, z, f), value) in values.indexed_iter() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                field,
                index: [a, z, f],
            });
        }
    }
    Ok(())
}
