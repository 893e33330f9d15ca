//! `ievo-sdk validate`: check an agent package.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, package_validate};
use crate::infra::schema;
use crate::output::json;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Agent package directory
    pub dir: PathBuf,

    /// JSON schema for deep manifest validation (overrides `IEVO_SCHEMA`)
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// Run the validate command.
///
/// Exits 0 when the package has no errors, 1 otherwise.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or a package file
/// exists but cannot be read.
pub fn run(app: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let schema_path =
        schema::resolve_schema_path(args.schema.as_deref(), config.validation.schema.as_deref());
    let strategy = schema::load_strategy(schema_path.as_deref());

    let result = package_validate::validate_package(&app.fs, &strategy, &args.dir)?;

    if app.is_json() {
        println!("{}", json::to_pretty(&result)?);
    } else {
        app.renderer().render_validation(&result);
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
