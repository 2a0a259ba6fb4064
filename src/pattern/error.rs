// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with the structure of an antenna pattern.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("The {axis} axis is not strictly ascending at index {index}: {value} follows {previous}")]
    AxisNotAscending {
        axis: &'static str,
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("The {axis} axis has a non-finite value at index {index}")]
    NonFiniteAxis { axis: &'static str, index: usize },

    #[error("The frequency axis has a negative value at index {index}: {value}")]
    NegativeFrequency { index: usize, value: f64 },

    #[error("Expected {field} to have shape {expected:?}, but its shape is {got:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: [usize; 3],
        got: [usize; 3],
    },

    #[error("{field} has a non-finite value at index {index:?}")]
    NonFinite {
        field: &'static str,
        index: [usize; 3],
    },

    #[error("{field} is not finite: {value}")]
    NonFiniteScalar { field: &'static str, value: f64 },
}
