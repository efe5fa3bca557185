use std::collections::BTreeMap;

use log::debug;

use rinex::prelude::SV;

use crate::{
    cleaner::{DopplerSeries, align_and_clean},
    dataset::{ObservationDataset, Timeline},
    error::Exclusion,
    selector::{SelectionTable, select, select_id},
};

/// Gathers the cleaned [DopplerSeries] of each satellite.
pub struct Collecter<'a, D: ObservationDataset> {
    /// Observations
    dataset: &'a D,

    /// Shared [Timeline]
    timeline: &'a Timeline,

    /// [SelectionTable]
    table: &'a SelectionTable,
}

impl<'a, D: ObservationDataset> Collecter<'a, D> {
    /// Builds new [Collecter]
    pub fn new(dataset: &'a D, timeline: &'a Timeline, table: &'a SelectionTable) -> Self {
        Self {
            dataset,
            timeline,
            table,
        }
    }

    /// Collects all satellites of the dataset
    pub fn collect(&self) -> BTreeMap<SV, DopplerSeries> {
        let mut collected = BTreeMap::new();

        for sv in self.dataset.satellites() {
            match self.process(&sv) {
                Ok(series) => {
                    collected.insert(sv, series);
                },
                Err(e) => {
                    debug!("{} - excluded: {}", sv, e);
                },
            }
        }

        collected
    }

    /// Collects the satellites designated by these identifiers only
    pub fn collect_ids(&self, ids: &[String]) -> BTreeMap<SV, DopplerSeries> {
        let mut collected = BTreeMap::new();

        for id in ids {
            let series = select_id(self.table, self.dataset, id).and_then(|(sv, selection)| {
                let series = align_and_clean(selection.samples, self.timeline.epochs())?;
                Ok((sv, series))
            });

            match series {
                Ok((sv, series)) => {
                    collected.insert(sv, series);
                },
                Err(e) => {
                    debug!("{} - excluded: {}", id, e);
                },
            }
        }

        collected
    }

    fn process(&self, sv: &SV) -> Result<DopplerSeries, Exclusion> {
        let selection = select(self.table, self.dataset, sv)?;

        debug!(
            "{} - {} ({} samples)",
            sv,
            selection.observable,
            selection.samples.len()
        );

        align_and_clean(selection.samples, self.timeline.epochs())
    }
}
