//! Show command - Prints the effective configuration.
//!
//! Secrets are redacted in text output and omitted from JSON output.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::{registry, Settings};
use crate::errors::ConfigResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: Settings) -> ConfigResult<()> {
    match args.format {
        OutputFormat::Text => {
            println!("{:#?}", settings);
            println!("installed_apps: {:?}", registry::installed_apps());
            println!("middleware: {:?}", registry::MIDDLEWARE);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
