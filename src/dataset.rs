use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use log::debug;

use rinex::prelude::{Epoch, Observable, Rinex, SV};

use crate::error::Error;

/// Observation content, accessed by (observable, satellite).
/// Each sample sequence is indexed by epoch.
pub trait ObservationDataset {
    /// Returns the samples for this (observable, satellite) pair, if any
    fn fetch(&self, observable: &Observable, sv: &SV) -> Option<&[f64]>;

    /// Satellites described by this dataset
    fn satellites(&self) -> Vec<SV>;
}

/// Sampling instants, shared by all satellites of one file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline(Vec<Epoch>);

impl Timeline {
    pub fn new(epochs: Vec<Epoch>) -> Self {
        Self(epochs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<Epoch> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Epoch> {
        self.0.last().copied()
    }

    pub fn epochs(&self) -> &[Epoch] {
        &self.0
    }
}

/// Loads an Observation RINEX. Files terminated with ".gz" are decompressed.
pub fn load(path: &str) -> Result<Rinex, Error> {
    let rinex = if path.ends_with(".gz") {
        Rinex::from_gzip_file(path)?
    } else {
        Rinex::from_file(path)?
    };

    if !rinex.is_observation_rinex() {
        return Err(Error::NotObservationRinex);
    }

    Ok(rinex)
}

/// Doppler observations of one Observation RINEX, as a dense grid.
/// Epochs where a satellite was not observed are NaN.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    timeline: Timeline,
    satellites: BTreeSet<SV>,
    grid: HashMap<(Observable, SV), Vec<f64>>,
}

impl Dataset {
    pub fn from_rinex(rinex: &Rinex) -> Self {
        let epochs = rinex.epoch_iter().dedup().collect::<Vec<_>>();

        let index = epochs
            .iter()
            .enumerate()
            .map(|(i, epoch)| (*epoch, i))
            .collect::<HashMap<_, _>>();

        let mut satellites = BTreeSet::new();
        let mut grid = HashMap::<(Observable, SV), Vec<f64>>::new();

        for (key, signal) in rinex.signal_observations_iter() {
            satellites.insert(signal.sv);

            if !signal.observable.is_doppler_observable() {
                continue;
            }

            let Some(i) = index.get(&key.epoch) else {
                continue;
            };

            let samples = grid
                .entry((signal.observable.clone(), signal.sv))
                .or_insert_with(|| vec![f64::NAN; epochs.len()]);

            samples[*i] = signal.value;
        }

        debug!(
            "{} epochs - {} satellites - {} doppler series",
            epochs.len(),
            satellites.len(),
            grid.len()
        );

        Self {
            timeline: Timeline::new(epochs),
            satellites,
            grid,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl ObservationDataset for Dataset {
    fn fetch(&self, observable: &Observable, sv: &SV) -> Option<&[f64]> {
        self.grid
            .get(&(observable.clone(), *sv))
            .map(|samples| samples.as_slice())
    }

    fn satellites(&self) -> Vec<SV> {
        self.satellites.iter().copied().collect()
    }
}
