use thiserror::Error;

use rinex::{
    error::ParsingError,
    prelude::{Constellation, Observable},
};

/// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum Error {
    #[error("rinex parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("not an observation rinex")]
    NotObservationRinex,

    #[error("ambiguous selection: {0} is mapped to both {1} and {2}")]
    AmbiguousSelection(Constellation, Observable, Observable),

    #[error("no doppler series left to plot")]
    NoData,

    #[error("plot rendering error: {0}")]
    Plot(String),
}

/// Reasons for excluding one satellite from the final mapping.
/// None of these are fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Exclusion {
    #[error("no doppler observable mapped to this constellation")]
    Unmapped,

    #[error("no {0} data")]
    MissingObservable(Observable),

    #[error("no samples after alignment")]
    Empty,

    #[error("only missing samples")]
    Degenerate,
}
