use clap::ValueEnum;

/// Output format for the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with menus and prompts (default)
    #[default]
    Human,
    /// One JSON object per result line, no menus or prompts
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = campus_core::error::CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(campus_core::error::CampusError::UnknownFormat(
                other.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
