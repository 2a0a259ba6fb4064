// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with group-delay estimation.

use thiserror::Error;

use crate::pattern::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupDelayError {
    #[error("Estimating group delay takes at least two frequency samples, but the pattern has {got}")]
    InsufficientFreqSamples { got: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
