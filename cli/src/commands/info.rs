//! `ievo-sdk info`: show package details.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::package_info;
use crate::output::json;

/// Arguments for the info command.
#[derive(Args)]
pub struct InfoArgs {
    /// Agent package directory
    pub dir: PathBuf,
}

/// Run the info command.
///
/// # Errors
///
/// Returns an error if `agent.yaml` is missing or unparsable.
pub fn run(app: &AppContext, args: &InfoArgs) -> Result<ExitCode> {
    let info = package_info::package_info(&app.fs, &args.dir)?;
    if app.is_json() {
        println!("{}", json::to_pretty(&info)?);
    } else {
        app.renderer().render_info(&info);
    }
    Ok(ExitCode::SUCCESS)
}
