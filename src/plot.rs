use std::{collections::BTreeMap, str::FromStr};

use hifitime::{efmt::Format, prelude::Formatter};
use itertools::Itertools;
use log::debug;
use plotters::prelude::*;

use rinex::prelude::{Duration, SV};

use crate::{cleaner::DopplerSeries, dataset::Timeline, error::Error, settings::Settings};

type DynError = Box<dyn std::error::Error>;

/// X axis labels
const EPOCH_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FONT: &str = "sans-serif";

/// Renders one line per satellite, in a single SVG file.
/// Returns the path of the generated file.
pub fn plot_dopplers(
    settings: &Settings,
    timeline: &Timeline,
    dopplers: &BTreeMap<SV, DopplerSeries>,
) -> Result<String, Error> {
    if dopplers.is_empty() {
        return Err(Error::NoData);
    }

    let path = settings.output_path();

    render(&path, settings, timeline, dopplers).map_err(|e| Error::Plot(e.to_string()))?;

    Ok(path)
}

/// (min, max) Doppler shift, accross all satellites
fn y_range(dopplers: &BTreeMap<SV, DopplerSeries>) -> Option<(f64, f64)> {
    dopplers
        .values()
        .filter_map(|series| series.range())
        .reduce(|(min, max), (y_min, y_max)| (min.min(y_min), max.max(y_max)))
}

fn render(
    path: &str,
    settings: &Settings,
    timeline: &Timeline,
    dopplers: &BTreeMap<SV, DopplerSeries>,
) -> Result<(), DynError> {
    let t0 = timeline.first().ok_or("empty timeline")?;
    let t1 = timeline.last().ok_or("empty timeline")?;

    let x_max = match (t1 - t0).to_seconds() {
        dt if dt > 0.0 => dt,
        _ => 1.0,
    };

    let (y_min, y_max) = y_range(dopplers).ok_or("no valid doppler sample")?;
    let margin = ((y_max - y_min) * 0.05).max(1.0);

    let format =
        Format::from_str(EPOCH_FORMAT).map_err(|e| format!("invalid epoch format: {}", e))?;

    let x_label = |x: &f64| Formatter::new(t0 + Duration::from_seconds(*x), format.clone()).to_string();

    let root = SVGBackend::new(path, settings.dimensions).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(settings.title(), (FONT, 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, (y_min - margin)..(y_max + margin))?;

    chart
        .configure_mesh()
        .x_desc("Timestamp")
        .y_desc("Doppler (Hz)")
        .x_labels(6)
        .x_label_formatter(&x_label)
        .label_style((FONT, 12).into_font())
        .axis_desc_style((FONT, 14).into_font())
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for (index, (sv, series)) in dopplers.iter().enumerate() {
        let color = Palette99::pick(index).mix(0.9);

        // missing samples split the line, gaps are never bridged
        let segments = series
            .points(timeline.epochs())
            .map(|(t, y)| ((t - t0).to_seconds(), y))
            .chunk_by(|(_, y)| !y.is_nan());

        let mut labelled = false;

        for (valid, segment) in &segments {
            if !valid {
                continue;
            }

            let annotation =
                chart.draw_series(LineSeries::new(segment, color.stroke_width(1)))?;

            if !labelled {
                annotation.label(sv.to_string()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
                labelled = true;
            }
        }

        debug!("{} - plotted", sv);
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font((FONT, 12).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}
