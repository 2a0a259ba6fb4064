// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Time-domain synthesis and group-delay estimation for wideband antenna
far-field characterisations.

A characterised antenna arrives as an [`AntennaPattern`]: complex far-field
components on an (azimuth, zenith, frequency) grid, together with absolute
directivity and, optionally, complex effective apertures. Two products are
derived from it:

- [`TimeDomainSlice`]: the pattern along one observation direction,
  reference-delay and loss compensated, resampled onto the uniform one-sided
  frequency grid of a real time-domain signal. An inverse transform is not
  performed here; the slice is laid out so that one can be applied directly.
- [`GroupDelayField`]: a per-direction, per-frequency-interval group-delay
  estimate for both polarisation components.

[`AntennaRecord`] owns a pattern and the optional derived products, and is
the usual entry point:

```rust,no_run
# fn get_pattern() -> uwb_farfield::AntennaPattern { unimplemented!() }
use uwb_farfield::{AntennaRecord, Propagation, TimeDomainRequest};

let mut record = AntennaRecord::new(get_pattern());
record.compute_group_delay(Propagation::default())?;
record.build_time_domain(
    &TimeDomainRequest {
        tmax: 20e-9,
        ts: 10e-12,
        azimuth: 0.0,
        zenith: 90.0,
        fixed_delay: None,
        loss_db: None,
    },
    Propagation::default(),
)?;
# Ok::<(), uwb_farfield::FarFieldError>(())
```
 */

pub mod aperture;
pub mod constants;
pub mod error;
pub mod group_delay;
pub(crate) mod interp;
pub(crate) mod math;
pub mod pattern;
pub mod time_domain;

// Re-exports.
pub use constants::Propagation;
pub use error::FarFieldError;
pub use group_delay::{GroupDelayError, GroupDelayField};
pub use pattern::{AntennaPattern, AntennaRecord, DirectionCut, ValidationError};
pub use time_domain::{TimeDomainError, TimeDomainRequest, TimeDomainSlice};

/// A shorthand for a double-precision complex number.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex<f64>;
