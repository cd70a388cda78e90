//! The spritesheet command

use std::process::ExitCode;

use super::{Cli, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::loader::{load_config, merge_cli_overrides, validate_config, CliOverrides};
use crate::pipeline::{run_batch, SheetOptions};

/// Build the batch options from config file, defaults and CLI flags.
///
/// Settings are validated once, after the CLI flags are merged in.
pub(crate) fn resolve_options(cli: &Cli) -> Result<SheetOptions, String> {
    let mut config = load_config(cli.config.as_deref())
        .map_err(|e| format!("Error loading config: {}", e))?;

    let overrides = CliOverrides {
        input: cli.input.clone(),
        output: cli.output.clone(),
        padding: cli.padding,
        jobs: cli.jobs.map(usize::from),
    };
    merge_cli_overrides(&mut config, &overrides);

    validate_config(&config).map_err(|e| format!("Invalid settings: {}", e))?;

    Ok(SheetOptions::from(&config).with_dry_run(cli.dry_run))
}

/// Run one spritesheet batch and map the outcome to an exit code.
pub(crate) fn run_sheet(cli: &Cli) -> ExitCode {
    let options = match resolve_options(cli) {
        Ok(options) => options,
        Err(message) => {
            log::error!("{}", message);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match run_batch(&options) {
        Ok(report) => {
            if !report.failures.is_empty() {
                log::warn!(
                    "Packed {} of {} images ({} skipped)",
                    report.packed(),
                    report.discovered.len(),
                    report.failures.len()
                );
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
