use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Get the default config file location for recon-view
/// Uses platform-specific config directories:
/// - Linux: ~/.config/recon-view/config.toml
/// - macOS: ~/Library/Application Support/recon-view/config.toml
/// - Windows: %APPDATA%/recon-view/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("recon-view").join("config.toml"))
}

/// Which fragment(s) to render
#[derive(ValueEnum, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Insight blocks only
    Insights,
    /// Error list only
    Errors,
    /// Insights followed by the error list
    #[default]
    All,
}

impl Section {
    pub fn includes_insights(&self) -> bool {
        matches!(self, Section::Insights | Section::All)
    }

    pub fn includes_errors(&self) -> bool {
        matches!(self, Section::Errors | Section::All)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "recon-view")]
#[command(about = "Render reconciliation results as HTML insight and error-list fragments")]
#[command(version)]
pub struct CliArgs {
    /// Reconciliation result JSON file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the HTML fragment to this file instead of stdout
    #[arg(long = "output-html", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Which fragment(s) to render
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Number of errors shown in detail before the "more errors" summary (default: 3)
    #[arg(long, value_name = "N")]
    pub max_errors: Option<usize>,

    /// Output the fragments as a JSON object instead of raw HTML
    #[arg(long)]
    pub json: bool,

    /// Export the complete error list as JSON
    #[arg(long, value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Export the complete error list as a Markdown table
    #[arg(long, value_name = "PATH")]
    pub export_markdown: Option<PathBuf>,

    /// TOML configuration file
    /// Default: $RECON_VIEW_CONFIG, then ~/.config/recon-view/config.toml if present
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.max_errors == Some(0) {
            return Err("--max-errors must be at least 1".to_string());
        }

        if let Some(ref input) = self.input
            && !self.reads_stdin()
            && !input.exists()
        {
            return Err(format!("Input file not found: {}", input.display()));
        }

        if let Some(ref config) = self.config
            && !config.exists()
        {
            return Err(format!("Config file not found: {}", config.display()));
        }

        Ok(())
    }

    /// Should the input be read from stdin?
    pub fn reads_stdin(&self) -> bool {
        match self.input {
            None => true,
            Some(ref p) => p.as_os_str() == "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            input: None,
            output: None,
            section: None,
            max_errors: None,
            json: false,
            export_json: None,
            export_markdown: None,
            config: None,
        }
    }

    #[test]
    fn test_validate_defaults_succeeds() {
        assert!(base_args().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_max_errors_fails() {
        let args = CliArgs { max_errors: Some(0), ..base_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_missing_input_fails() {
        let args = CliArgs { input: Some(PathBuf::from("./does-not-exist.json")), ..base_args() };
        let err = args.validate().unwrap_err();
        assert!(err.contains("does-not-exist.json"));
    }

    #[test]
    fn test_dash_reads_stdin() {
        assert!(base_args().reads_stdin());
        let args = CliArgs { input: Some(PathBuf::from("-")), ..base_args() };
        assert!(args.reads_stdin());
        assert!(args.validate().is_ok());
        let args = CliArgs { input: Some(PathBuf::from("result.json")), ..base_args() };
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_parse_from_flags() {
        let args = CliArgs::try_parse_from([
            "recon-view",
            "result.json",
            "--section",
            "errors",
            "--max-errors",
            "5",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("result.json")));
        assert_eq!(args.section, Some(Section::Errors));
        assert_eq!(args.max_errors, Some(5));
        assert!(args.json);
    }

    #[test]
    fn test_section_includes() {
        assert!(Section::All.includes_insights() && Section::All.includes_errors());
        assert!(Section::Insights.includes_insights() && !Section::Insights.includes_errors());
        assert!(!Section::Errors.includes_insights() && Section::Errors.includes_errors());
    }
}
