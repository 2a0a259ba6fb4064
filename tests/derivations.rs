// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Integration tests running both derivations through [`AntennaRecord`].
 */

use ndarray::Array3;
use vec1::vec1;

use uwb_farfield::{
    c64, AntennaPattern, AntennaRecord, FarFieldError, GroupDelayError, Propagation,
    TimeDomainError, TimeDomainRequest,
};

/// A 2 x 2 direction grid over five frequency samples, without effective
/// apertures so that the time-domain derivation has to complete them.
fn characterised_pattern() -> AntennaPattern {
    let freq = vec1![2e9, 3e9, 4e9, 5e9, 6e9];
    let shape = (2, 2, freq.len());
    let ep = Array3::from_shape_fn(shape, |(a, _, i)| {
        c64::from_polar(1.0 + a as f64, -2e-8 * freq[i])
    });
    let et = Array3::from_shape_fn(shape, |(_, z, i)| {
        c64::from_polar(0.5 + z as f64, -2e-8 * freq[i])
    });
    AntennaPattern {
        freq,
        azimuth: vec1![0.0, 90.0],
        zenith: vec1![45.0, 90.0],
        ep,
        et,
        aeff_p: None,
        aeff_t: None,
        dir_abs: Array3::from_elem(shape, 1.5),
        fixed_delay: 0.0,
        loss_db: None,
    }
}

#[test]
fn test_record_accumulates_both_derivations() {
    let pattern = characterised_pattern();
    let mut record = AntennaRecord::new(pattern.clone());
    let propagation = Propagation::default();

    record.compute_group_delay(propagation).unwrap();
    let request = TimeDomainRequest {
        tmax: 10.375e-9,
        ts: 0.25e-9,
        azimuth: 45.0,
        zenith: 67.5,
        fixed_delay: None,
        loss_db: None,
    };
    record.build_time_domain(&request, propagation).unwrap();

    let gd = record.group_delay.as_ref().unwrap();
    assert_eq!(gd.gd_p.dim(), (2, 2, 4));
    assert_eq!(gd.gd_t.dim(), (2, 2, 4));

    // floor(tmax / ts) = 41 samples, so the one-sided grid has 21 bins.
    let slice = record.time_domain.as_ref().unwrap();
    assert_eq!(slice.n_ffts, 41);
    assert_eq!(slice.freqs.len(), 21);
    assert_eq!(slice.ep.len(), 21);
    assert!(slice.freqs[20] <= 1.0 / (2.0 * request.ts));
    assert_eq!(slice.azimuth, 45.0);
    assert_eq!(slice.zenith, 67.5);
    assert_eq!(slice.tmax, 10.375e-9);
    assert_eq!(slice.ts, 0.25e-9);

    // The source characterisation is never touched by either derivation.
    assert_eq!(record.pattern, pattern);
}

#[test]
fn test_rebuilding_replaces_the_previous_slice() {
    let mut record = AntennaRecord::new(characterised_pattern());
    let propagation = Propagation::default();
    let mut request = TimeDomainRequest {
        tmax: 10.375e-9,
        ts: 0.25e-9,
        azimuth: 0.0,
        zenith: 45.0,
        fixed_delay: None,
        loss_db: None,
    };

    record.build_time_domain(&request, propagation).unwrap();
    request.azimuth = 90.0;
    record.build_time_domain(&request, propagation).unwrap();

    assert_eq!(record.time_domain.as_ref().unwrap().azimuth, 90.0);
}

#[test]
fn test_failures_convert_to_the_crate_error() {
    fn estimate_without_intervals(record: &mut AntennaRecord) -> Result<(), FarFieldError> {
        record.compute_group_delay(Propagation::default())?;
        Ok(())
    }

    fn synthesise_without_a_window(record: &mut AntennaRecord) -> Result<(), FarFieldError> {
        let request = TimeDomainRequest {
            tmax: 10e-9,
            ts: 0.0,
            azimuth: 0.0,
            zenith: 90.0,
            fixed_delay: None,
            loss_db: None,
        };
        record.build_time_domain(&request, Propagation::default())?;
        Ok(())
    }

    let mut record = AntennaRecord::new(AntennaPattern {
        freq: vec1![1e9],
        azimuth: vec1![0.0],
        zenith: vec1![90.0],
        ep: Array3::from_elem((1, 1, 1), c64::new(1.0, 0.0)),
        et: Array3::from_elem((1, 1, 1), c64::new(1.0, 0.0)),
        aeff_p: None,
        aeff_t: None,
        dir_abs: Array3::ones((1, 1, 1)),
        fixed_delay: 0.0,
        loss_db: None,
    });

    assert!(matches!(
        estimate_without_intervals(&mut record),
        Err(FarFieldError::GroupDelay(
            GroupDelayError::InsufficientFreqSamples { got: 1 }
        ))
    ));
    assert!(record.group_delay.is_none());

    assert!(matches!(
        synthesise_without_a_window(&mut record),
        Err(FarFieldError::TimeDomain(TimeDomainError::NonPositiveStep {
            ..
        }))
    ));
    assert!(record.time_domain.is_none());
}
