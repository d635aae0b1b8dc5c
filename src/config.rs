//! Configuration handling for csvcompare

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for one comparison invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Single-character field delimiter used when parsing both inputs
    pub delimiter: char,
    /// Also report keys present in only one input, using sentinel markers
    pub report_unmatched: bool,
    /// Output format for serialized results
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: ',',
            report_unmatched: false,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a config with default settings (comma delimiter, mismatches only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable reporting of keys present in only one input
    pub fn with_report_unmatched(mut self, report: bool) -> Self {
        self.report_unmatched = report;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
