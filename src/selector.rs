use std::str::FromStr;

use itertools::Itertools;

use rinex::prelude::{Constellation, Observable, SV};

use crate::{
    dataset::ObservationDataset,
    error::{Error, Exclusion},
};

/// Policy that tells which Doppler [Observable] is valid,
/// for satellites of a given [Constellation].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionTable {
    entries: Vec<(Observable, Constellation)>,
}

impl SelectionTable {
    /// Standard Doppler policy: D1C for GPS, Glonass and QZSS,
    /// D1X for Galileo, D2X for BeiDou.
    pub fn default_entries() -> Vec<(Observable, Constellation)> {
        let d1c = Observable::Doppler("D1C".to_string());
        let d1x = Observable::Doppler("D1X".to_string());
        let d2x = Observable::Doppler("D2X".to_string());

        vec![
            (d1c.clone(), Constellation::GPS),
            (d1c.clone(), Constellation::Glonass),
            (d1c, Constellation::QZSS),
            (d1x, Constellation::Galileo),
            (d2x, Constellation::BeiDou),
        ]
    }

    /// Builds a custom [SelectionTable].
    /// Fails if one [Constellation] is mapped to more than one [Observable].
    pub fn new(entries: Vec<(Observable, Constellation)>) -> Result<Self, Error> {
        for (constellation, codes) in entries
            .iter()
            .unique()
            .into_group_map_by(|(_, constellation)| *constellation)
        {
            if codes.len() > 1 {
                return Err(Error::AmbiguousSelection(
                    constellation,
                    codes[0].0.clone(),
                    codes[1].0.clone(),
                ));
            }
        }

        Ok(Self {
            entries: entries.into_iter().unique().collect(),
        })
    }

    /// Returns the [Observable] to use for this [Constellation], if any
    pub fn observable(&self, constellation: Constellation) -> Option<&Observable> {
        self.entries
            .iter()
            .find(|(_, c)| *c == constellation)
            .map(|(observable, _)| observable)
    }

    /// (Observable, Constellation) entries
    pub fn entries(&self) -> &[(Observable, Constellation)] {
        &self.entries
    }
}

/// Raw samples picked for one satellite
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// [Observable] that was picked
    pub observable: &'a Observable,

    /// Raw samples, one per epoch, not cleaned yet
    pub samples: &'a [f64],
}

/// Picks the raw Doppler samples of this [SV], according to the [SelectionTable].
pub fn select<'a, D: ObservationDataset>(
    table: &'a SelectionTable,
    dataset: &'a D,
    sv: &SV,
) -> Result<Selection<'a>, Exclusion> {
    let observable = table
        .observable(sv.constellation)
        .ok_or(Exclusion::Unmapped)?;

    let samples = dataset
        .fetch(observable, sv)
        .ok_or_else(|| Exclusion::MissingObservable(observable.clone()))?;

    Ok(Selection {
        observable,
        samples,
    })
}

/// [select] for a satellite described in its textual form, like "G01".
/// Identifiers that cannot be interpreted are [Exclusion::Unmapped].
pub fn select_id<'a, D: ObservationDataset>(
    table: &'a SelectionTable,
    dataset: &'a D,
    id: &str,
) -> Result<(SV, Selection<'a>), Exclusion> {
    let id = id.trim();

    // constellation prefix must be a single byte
    if id.is_empty() || !id.is_char_boundary(1) {
        return Err(Exclusion::Unmapped);
    }

    let sv = SV::from_str(id).map_err(|_| Exclusion::Unmapped)?;
    let selection = select(table, dataset, &sv)?;
    Ok((sv, selection))
}

#[cfg(test)]
mod test {
    use super::{SelectionTable, select, select_id};
    use crate::{dataset::test::MockDataset, error::Exclusion};

    use rinex::prelude::{Constellation, Observable, SV};
    use std::str::FromStr;

    fn doppler(code: &str) -> Observable {
        Observable::from_str(code).unwrap()
    }

    #[test]
    fn default_table() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();

        assert_eq!(table.entries().len(), 5);

        for (constellation, code) in [
            (Constellation::GPS, "D1C"),
            (Constellation::Glonass, "D1C"),
            (Constellation::QZSS, "D1C"),
            (Constellation::Galileo, "D1X"),
            (Constellation::BeiDou, "D2X"),
        ] {
            assert_eq!(
                table.observable(constellation),
                Some(&doppler(code)),
                "wrong code for {}",
                constellation
            );
        }

        assert!(table.observable(Constellation::SBAS).is_none());
        assert!(table.observable(Constellation::IRNSS).is_none());
    }

    #[test]
    fn default_table_is_not_ambiguous() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();
        assert_eq!(table.entries(), SelectionTable::default_entries().as_slice());
    }

    #[test]
    fn ambiguous_table() {
        let entries = vec![
            (doppler("D1C"), Constellation::BeiDou),
            (doppler("D1I"), Constellation::BeiDou),
        ];
        assert!(SelectionTable::new(entries).is_err());

        // duplicated entries are not ambiguous
        let entries = vec![
            (doppler("D1I"), Constellation::BeiDou),
            (doppler("D1I"), Constellation::BeiDou),
            (doppler("D1I"), Constellation::QZSS),
        ];
        let table = SelectionTable::new(entries).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.observable(Constellation::QZSS), Some(&doppler("D1I")));
    }

    #[test]
    fn galileo_gps_and_unknown_prefix() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();

        let dataset = MockDataset::default()
            .with("D1X", "E05", &[1.0, 2.0])
            .with("D1C", "E05", &[9.0, 9.0])
            .with("D1C", "G05", &[3.0, 4.0])
            .with("D1X", "G05", &[8.0, 8.0]);

        let (sv, selection) = select_id(&table, &dataset, "E05").unwrap();
        assert_eq!(sv, SV::from_str("E05").unwrap());
        assert_eq!(selection.observable, &doppler("D1X"));
        assert_eq!(selection.samples, &[1.0, 2.0]);

        let (_, selection) = select_id(&table, &dataset, "G05").unwrap();
        assert_eq!(selection.observable, &doppler("D1C"));
        assert_eq!(selection.samples, &[3.0, 4.0]);

        assert_eq!(
            select_id(&table, &dataset, "X05").err(),
            Some(Exclusion::Unmapped)
        );
    }

    #[test]
    fn malformed_ids() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();
        let dataset = MockDataset::default().with("D1C", "G01", &[1.0]);

        for id in ["", " ", "é01", "€", "G"] {
            assert_eq!(
                select_id(&table, &dataset, id).err(),
                Some(Exclusion::Unmapped),
                "\"{}\" should be unmapped",
                id
            );
        }
    }

    #[test]
    fn unmapped_constellation() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();
        let dataset = MockDataset::default().with("D1C", "S23", &[1.0]);

        let sv = SV::from_str("S23").unwrap();
        assert_eq!(
            select(&table, &dataset, &sv).err(),
            Some(Exclusion::Unmapped)
        );
    }

    #[test]
    fn missing_observable() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();
        let dataset = MockDataset::default().with("D1I", "C10", &[1.0, 2.0]);

        let sv = SV::from_str("C10").unwrap();
        assert_eq!(
            select(&table, &dataset, &sv).err(),
            Some(Exclusion::MissingObservable(doppler("D2X")))
        );
    }

    #[test]
    fn independent_satellites() {
        let table = SelectionTable::new(SelectionTable::default_entries()).unwrap();

        let dataset = MockDataset::default()
            .with("D1C", "G01", &[1.0, 1.5])
            .with("D1C", "R01", &[-2.0, -2.5, -3.0]);

        let g01 = SV::from_str("G01").unwrap();
        let r01 = SV::from_str("R01").unwrap();

        let g = select(&table, &dataset, &g01).unwrap();
        let r = select(&table, &dataset, &r01).unwrap();

        assert_eq!(g.observable, r.observable);
        assert_eq!(g.samples, &[1.0, 1.5]);
        assert_eq!(r.samples, &[-2.0, -2.5, -3.0]);
    }
}
