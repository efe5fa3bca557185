use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, value_parser};

use crate::settings::{DEFAULT_OUTPUT, Settings};

pub struct Cli {
    /// Arguments passed by user
    matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }

    fn command() -> Command {
        Command::new("rinex-doppler")
            .author("Guillaume W. Bres, <guillaume.bressaix@gmail.com>")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Doppler shifts of all satellites, from Observation RINEX")
            .color(ColorChoice::Always)
            .arg_required_else_help(true)
            .next_help_heading("Input")
            .arg(
                Arg::new("file")
                    .long("file")
                    .short('f')
                    .value_name("FILENAME")
                    .action(ArgAction::Set)
                    .required(true)
                    .help("Observation RINEX to analyze. Gzip files are supported but they must be terminated with '.gz'"),
            )
            .arg(
                Arg::new("summary")
                    .long("summary")
                    .action(ArgAction::SetTrue)
                    .help("Summarize the file (header, time span) and exit. Nothing is plotted."),
            )
            .next_help_heading("Satellite selection")
            .arg(
                Arg::new("sv")
                    .long("sv")
                    .value_name("SV")
                    .value_delimiter(',')
                    .action(ArgAction::Append)
                    .help("Restrict the plot to these satellites, for example \"G01,E05,C10\".
Satellites of constellations that have no Doppler mapping are ignored."),
            )
            .next_help_heading("Output")
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("NAME")
                    .action(ArgAction::Set)
                    .help(format!("Custom output file name. Default is \"{}\"", DEFAULT_OUTPUT)),
            )
            .arg(
                Arg::new("prefix")
                    .long("prefix")
                    .required(false)
                    .help("Custom directory prefix for output products. Default is none!"),
            )
            .arg(
                Arg::new("width")
                    .long("width")
                    .value_parser(value_parser!(u32))
                    .help("Figure width in pixels. Default is 1200."),
            )
            .arg(
                Arg::new("height")
                    .long("height")
                    .value_parser(value_parser!(u32))
                    .help("Figure height in pixels. Default is 700."),
            )
    }

    /// Input file path
    pub fn filepath(&self) -> &str {
        self.matches
            .get_one::<String>("file")
            .map(|fp| fp.as_str())
            .unwrap_or_default()
    }

    fn satellites(&self) -> Option<Vec<String>> {
        let ids = self.matches.get_many::<String>("sv")?;
        Some(
            ids.map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(|id| id.to_string())
                .collect(),
        )
    }

    pub fn settings(&self) -> Settings {
        let default = Settings::default();

        Settings {
            input: self.filepath().to_string(),
            output: if let Some(output) = self.matches.get_one::<String>("output") {
                output.to_string()
            } else {
                default.output
            },
            prefix: self.matches.get_one::<String>("prefix").cloned(),
            dimensions: (
                self.matches
                    .get_one::<u32>("width")
                    .copied()
                    .unwrap_or(default.dimensions.0),
                self.matches
                    .get_one::<u32>("height")
                    .copied()
                    .unwrap_or(default.dimensions.1),
            ),
            satellites: self.satellites(),
            summary_only: self.matches.get_flag("summary"),
        }
    }
}
