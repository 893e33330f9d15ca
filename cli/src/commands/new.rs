//! `ievo-sdk new`: scaffold a new agent package.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use ievo_common::{Category, ModelTier};

use crate::app::AppContext;
use crate::application::services::{config_service, scaffold};
use crate::domain::scaffold::AgentSpec;
use crate::infra::assets::EmbeddedTemplates;
use crate::output::json;
use crate::output::reporter::{SilentReporter, TerminalReporter};

/// Arguments for the new command.
#[derive(Args)]
pub struct NewArgs {
    /// Agent name (lowercase letters, digits and hyphens)
    pub name: String,

    /// Parent directory for the package
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// One-line description
    #[arg(long)]
    pub description: Option<String>,

    /// Package category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Primary model tier
    #[arg(long, value_enum)]
    pub model: Option<ModelTier>,

    /// Fallback model tier
    #[arg(long, value_enum)]
    pub fallback: Option<ModelTier>,

    /// What the agent specialises in
    #[arg(long)]
    pub specialty: Option<String>,

    /// Package author (defaults to `defaults.author`)
    #[arg(long)]
    pub author: Option<String>,

    /// Agent this one consumes work from
    #[arg(long)]
    pub upstream: Option<String>,

    /// Other agent packages this one depends on
    #[arg(long = "depends-on", value_name = "AGENT")]
    pub depends_on: Vec<String>,
}

/// Run the new command.
///
/// # Errors
///
/// Returns an error if the name is invalid, a prompt fails, or the package
/// cannot be written.
pub fn run(app: &AppContext, args: NewArgs) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let mut spec = AgentSpec::new(&args.name);
    spec.check_name()?;

    if !app.is_json() && !app.non_interactive {
        app.output.header(&format!("Scaffolding agent: {}", args.name));
    }

    spec.description = match args.description {
        Some(d) => d,
        None => app.prompt("Description", &format!("A custom {} agent", args.name))?,
    };
    spec.category = match args.category {
        Some(c) => c,
        None => app.select("Category", &Category::ALL, config.defaults.category)?,
    };
    spec.model = match args.model {
        Some(m) => m,
        None => app.select("Model tier", &ModelTier::ALL, config.defaults.model)?,
    };
    spec.specialty = match args.specialty {
        Some(s) => s,
        None => app.prompt("Specialty", &args.name.replace('-', " "))?,
    };
    spec.fallback = args.fallback;
    spec.author = args.author.unwrap_or(config.defaults.author);
    spec.upstream_agent = args.upstream.unwrap_or_default();
    spec.dependencies = args.depends_on;

    let agent_dir = if app.is_json() {
        scaffold::scaffold_agent(&app.fs, &EmbeddedTemplates, &SilentReporter, &spec, &args.dir)?
    } else {
        let reporter = TerminalReporter::new(&app.output);
        scaffold::scaffold_agent(&app.fs, &EmbeddedTemplates, &reporter, &spec, &args.dir)?
    };

    if app.is_json() {
        let out = serde_json::json!({
            "name": spec.name,
            "path": agent_dir.display().to_string(),
        });
        println!("{}", json::to_pretty(&out)?);
    } else {
        app.renderer().render_scaffold(&agent_dir);
    }
    Ok(ExitCode::SUCCESS)
}
