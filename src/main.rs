// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod ui;

use log::info;
use recon_view::{ReconciliationSummary, cli, config, render, report};
use std::fs;
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve settings from flags and config file
    let config = match config::build_render_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load the reconciliation result
    let summary = match load_summary(&config) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded reconciliation: {} employees, {} errors listed, {}% error rate",
        summary.total_employees,
        summary.errors.len(),
        summary.error_rate
    );

    // Render and emit the fragment
    let output = match render::render_output(&summary, &config) {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(&output, &config) {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Exports never change the exit code
    write_exports(&summary, &config);
}

/// Read and parse the input file, or stdin when no file was given
fn load_summary(config: &config::RenderConfig) -> Result<ReconciliationSummary, String> {
    let text = match config.input {
        Some(ref path) => {
            fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };

    ReconciliationSummary::from_json(&text)
}

/// Write the rendered fragment to the output file or stdout
fn write_output(output: &str, config: &config::RenderConfig) -> Result<(), String> {
    match config.output {
        Some(ref path) => {
            fs::write(path, output).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            ui::status(&format!("HTML fragment saved to: {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("Failed to write to stdout: {}", e))?;
        }
    }
    Ok(())
}

/// Write the complete error list exports that were requested
fn write_exports(summary: &ReconciliationSummary, config: &config::RenderConfig) {
    if let Some(ref path) = config.export_json {
        match report::export_json_report(summary, path) {
            Ok(_) => ui::status(&format!("JSON export saved to: {}", path.display())),
            Err(e) => ui::print_warning(&format!("Failed to save JSON export: {}", e)),
        }
    }

    if let Some(ref path) = config.export_markdown {
        match report::export_markdown_report(summary, path) {
            Ok(_) => ui::status(&format!("Markdown export saved to: {}", path.display())),
            Err(e) => ui::print_warning(&format!("Failed to save Markdown export: {}", e)),
        }
    }
}
