/// Configuration resolution module
///
/// This module handles:
/// - Locating and parsing the optional TOML config file
/// - Merging config file values with CLI flags (CLI wins)
/// - Validating the resulting render settings
use crate::cli::{self, CliArgs, Section};
use crate::report;
use log::debug;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "RECON_VIEW_CONFIG";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub section: Section,
    pub max_errors: usize,
    pub json: bool,
    pub export_json: Option<PathBuf>,
    pub export_markdown: Option<PathBuf>,
}

/// On-disk config file layout
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    pub max_errors: Option<usize>,
    pub section: Option<Section>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    pub json: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
}

/// Build a complete RenderConfig from CLI arguments
///
/// Reads the config file (if any) once, so the caller receives fully
/// resolved settings.
pub fn build_render_config(args: &CliArgs) -> Result<RenderConfig, String> {
    let file = match locate_config_file(args) {
        Some(path) => {
            debug!("Using config file {:?}", path);
            load_config_file(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            ConfigFile::default()
        }
    };

    merge(args, file)
}

/// Combine CLI flags with config file values
pub fn merge(args: &CliArgs, file: ConfigFile) -> Result<RenderConfig, String> {
    let max_errors = args.max_errors.or(file.render.max_errors).unwrap_or(report::DEFAULT_DISPLAY_LIMIT);
    if max_errors == 0 {
        return Err("max_errors must be at least 1".to_string());
    }

    let input = if args.reads_stdin() { None } else { args.input.clone() };

    let config = RenderConfig {
        input,
        output: args.output.clone(),
        section: args.section.or(file.render.section).unwrap_or_default(),
        max_errors,
        json: args.json,
        export_json: args.export_json.clone().or(file.export.json),
        export_markdown: args.export_markdown.clone().or(file.export.markdown),
    };

    check_output_collisions(&config)?;

    Ok(config)
}

/// Reject runs where two outputs would be written to the same file
fn check_output_collisions(config: &RenderConfig) -> Result<(), String> {
    let outputs: Vec<&Path> = [&config.output, &config.export_json, &config.export_markdown]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .collect();

    for (i, path) in outputs.iter().enumerate() {
        if outputs[i + 1..].contains(path) {
            return Err(format!("The same path is used for more than one output: {}", path.display()));
        }
    }

    Ok(())
}

/// Find the config file: --config, then $RECON_VIEW_CONFIG, then the user config dir
fn locate_config_file(args: &CliArgs) -> Option<PathBuf> {
    if let Some(ref path) = args.config {
        return Some(path.clone());
    }

    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }

    cli::default_config_path().filter(|p| p.exists())
}

/// Parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
    parse_config(&text).map_err(|e| format!("Invalid config file {}: {}", path.display(), e))
}

/// Parse config file contents
pub fn parse_config(text: &str) -> Result<ConfigFile, String> {
    toml::from_str(text).map_err(|e| format!("Failed to parse TOML: {}", e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
