use std::path::Path;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "dopplers_all.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Observation RINEX to analyze
    pub input: String,

    /// Output file name
    pub output: String,

    /// Custom output directory prefix
    pub prefix: Option<String>,

    /// Figure dimensions, in pixels
    pub dimensions: (u32, u32),

    /// Restrict the plot to these satellites
    pub satellites: Option<Vec<String>>,

    /// Summarize the input file only, do not plot.
    pub summary_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: Default::default(),
            output: DEFAULT_OUTPUT.to_string(),
            prefix: None,
            dimensions: (1200, 700),
            satellites: None,
            summary_only: false,
        }
    }
}

impl Settings {
    /// Output file path
    pub fn output_path(&self) -> String {
        let mut filepath = if let Some(prefix) = &self.prefix {
            format!("{}/", prefix.trim_end_matches('/'))
        } else {
            "".to_string()
        };

        filepath.push_str(&self.output);
        filepath
    }

    /// Plot title
    pub fn title(&self) -> String {
        let name = Path::new(&self.input)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input.clone());

        format!("Doppler vs Time - all satellites from {}", name)
    }
}
