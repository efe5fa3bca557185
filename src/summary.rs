use log::{info, warn};

use rinex::prelude::{Constellation, Duration, Epoch, Header};

use crate::dataset::Timeline;

/// Header and time span report, displayed right after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// RINEX revision
    pub version: String,

    /// RINEX type
    pub rinex_type: String,

    /// Possible [Constellation] describing the file
    pub constellation: Option<Constellation>,

    /// Possible publishing software
    pub program: Option<String>,

    /// Possible observer
    pub observer: Option<String>,

    /// Possible agency
    pub agency: Option<String>,

    /// First [Epoch]
    pub first_epoch: Option<Epoch>,

    /// Last [Epoch]
    pub last_epoch: Option<Epoch>,

    /// Total number of epochs
    pub epochs: usize,

    /// Total number of satellites
    pub satellites: usize,
}

impl Summary {
    pub fn new(header: &Header, timeline: &Timeline, satellites: usize) -> Self {
        Self {
            version: header.version.to_string(),
            rinex_type: header.rinex_type.to_string(),
            constellation: header.constellation,
            program: header.program.clone(),
            observer: header.observer.clone(),
            agency: header.agency.clone(),
            first_epoch: timeline.first(),
            last_epoch: timeline.last(),
            epochs: timeline.len(),
            satellites,
        }
    }

    /// Time span
    pub fn duration(&self) -> Option<Duration> {
        Some(self.last_epoch? - self.first_epoch?)
    }

    pub fn log(&self) {
        info!(
            "header parsed: version {} - {}",
            self.version, self.rinex_type
        );

        if let Some(constellation) = &self.constellation {
            info!("constellation: {}", constellation);
        }
        if let Some(program) = &self.program {
            info!("program: {}", program);
        }
        if let Some(observer) = &self.observer {
            info!("observer: {}", observer);
        }
        if let Some(agency) = &self.agency {
            info!("agency: {}", agency);
        }

        match (self.first_epoch, self.last_epoch) {
            (Some(first), Some(last)) => {
                info!("start time: {}", first);
                info!("end time:   {}", last);
                if let Some(dt) = self.duration() {
                    info!("time span:  {}", dt);
                }
            },
            _ => {
                warn!("no epoch found");
            },
        }

        info!("total epochs: {}", self.epochs);
        info!("total satellites: {}", self.satellites);
    }
}

#[cfg(test)]
mod test {
    use super::Summary;
    use crate::dataset::{Dataset, ObservationDataset, load};

    use rinex::prelude::{Constellation, Duration};
    use std::path::Path;

    #[test]
    fn file_summary() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("MIXD00FRA_R_20201770000_01M_30S_MO.rnx");

        let rinex = load(&path.to_string_lossy()).unwrap();
        let dataset = Dataset::from_rinex(&rinex);

        let summary = Summary::new(
            &rinex.header,
            dataset.timeline(),
            dataset.satellites().len(),
        );

        assert!(summary.version.starts_with('3'));
        assert_eq!(summary.rinex_type, "OBS DATA");
        assert_eq!(summary.constellation, Some(Constellation::Mixed));
        assert_eq!(summary.epochs, 3);
        assert_eq!(summary.satellites, 4);
        assert_eq!(summary.duration(), Some(Duration::from_seconds(60.0)));
    }
}
