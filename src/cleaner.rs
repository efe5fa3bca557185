use rinex::prelude::Epoch;

use crate::error::Exclusion;

/// Cleaned Doppler samples of one satellite, one per epoch.
/// Missing samples are NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DopplerSeries {
    samples: Vec<f64>,
}

impl DopplerSeries {
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Pairs each sample with its sampling [Epoch]
    pub fn points<'a>(&'a self, epochs: &'a [Epoch]) -> impl Iterator<Item = (Epoch, f64)> + 'a {
        epochs.iter().copied().zip(self.samples.iter().copied())
    }

    /// (min, max) of the valid samples
    pub fn range(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .filter(|y| !y.is_nan())
            .fold(None, |range, y| match range {
                None => Some((*y, *y)),
                Some((min, max)) => Some((min.min(*y), max.max(*y))),
            })
    }
}

/// Truncates the raw samples to the common length with the timeline,
/// replaces the exact zeros ("no lock") with NaN, and excludes
/// series that have no valid sample left.
pub fn align_and_clean(raw: &[f64], epochs: &[Epoch]) -> Result<DopplerSeries, Exclusion> {
    let n = raw.len().min(epochs.len());

    if n == 0 {
        return Err(Exclusion::Empty);
    }

    let raw = &raw[..n];

    if raw.iter().all(|y| y.is_nan()) {
        return Err(Exclusion::Degenerate);
    }

    let samples = raw
        .iter()
        .map(|y| if *y == 0.0 { f64::NAN } else { *y })
        .collect::<Vec<_>>();

    if samples.iter().all(|y| y.is_nan()) {
        return Err(Exclusion::Degenerate);
    }

    Ok(DopplerSeries { samples })
}
