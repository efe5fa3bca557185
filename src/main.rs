#![doc(
    html_logo_url = "https://raw.githubusercontent.com/nav-solutions/.github/master/logos/logo2.jpg"
)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * RINEX-DOPPLER is part of the nav-solutions framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al,
 * (cf. https://github.com/nav-solutions/rinex/graphs/contributors)
 * This framework is shipped under Mozilla Public V2 license.
 *
 * Documentation: https://github.com/nav-solutions/rinex-doppler
 */

use env_logger::{Builder, Env, Target};

use log::{debug, error, info};

mod cleaner;
mod cli;
mod collecter;
mod dataset;
mod error;
mod plot;
mod selector;
mod settings;
mod summary;

use crate::{
    cli::Cli,
    collecter::Collecter,
    dataset::{Dataset, ObservationDataset},
    error::Error,
    plot::plot_dopplers,
    selector::SelectionTable,
    settings::Settings,
    summary::Summary,
};

fn run(settings: &Settings) -> Result<(), Error> {
    let rinex = dataset::load(&settings.input)?;
    let dataset = Dataset::from_rinex(&rinex);

    let summary = Summary::new(
        &rinex.header,
        dataset.timeline(),
        dataset.satellites().len(),
    );

    info!("[###] {}", settings.input);
    summary.log();

    if settings.summary_only {
        return Ok(());
    }

    let table = SelectionTable::new(SelectionTable::default_entries())?;

    for (observable, constellation) in table.entries() {
        debug!("{} - selecting {}", constellation, observable);
    }

    let collecter = Collecter::new(&dataset, dataset.timeline(), &table);

    let dopplers = match &settings.satellites {
        Some(ids) => collecter.collect_ids(ids),
        None => collecter.collect(),
    };

    info!(
        "{} satellites retained (out of {})",
        dopplers.len(),
        summary.satellites
    );

    let path = plot_dopplers(settings, dataset.timeline(), &dopplers)?;
    info!("Saved plot to {}", path);

    Ok(())
}

pub fn main() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let settings = cli.settings();

    if let Err(e) = run(&settings) {
        error!("{}", e);
        std::process::exit(1);
    }
}
