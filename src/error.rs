// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type covering every derivation in this crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FarFieldError {
    #[error("{0}")]
    Validation(#[from] crate::pattern::ValidationError),

    #[error("{0}")]
    TimeDomain(#[from] crate::time_domain::TimeDomainError),

    #[error("{0}")]
    GroupDelay(#[from] crate::group_delay::GroupDelayError),
}
