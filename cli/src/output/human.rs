//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::services::package_info::PackageInfo;
use crate::domain::config::{SdkConfig, VALID_CONFIG_KEYS};
use crate::domain::package::ValidationResult;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("ievo-sdk {version}");
    }

    /// Render a validation result: verdict, then errors, warnings and notes.
    ///
    /// Errors are shown even when `quiet`; a valid package prints nothing then.
    pub fn render_validation(&self, result: &ValidationResult) {
        if result.is_valid() && self.ctx.quiet {
            return;
        }
        let styles = &self.ctx.styles;
        println!();
        if result.is_valid() {
            println!("  {}", "✓ Valid agent package".style(styles.success));
            println!();
        } else {
            let n = result.errors().len();
            println!(
                "  {} {}",
                "✗ Validation failed:".style(styles.error),
                format!("{n} error(s)").style(styles.bold)
            );
            println!();
            for e in result.errors() {
                println!("  {} {e}", "✗".style(styles.error));
            }
        }

        for w in result.warnings() {
            self.ctx.warn(w);
        }
        for i in result.info() {
            self.ctx.info(i);
        }
        println!();
    }

    /// Render package details as a key/value table.
    pub fn render_info(&self, info: &PackageInfo) {
        let unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| "?".to_string());

        println!();
        self.ctx.header(&format!("Agent: {}", unknown(&info.name)));
        println!();
        self.ctx.kv("Version", &unknown(&info.version));
        self.ctx.kv("Description", info.description.as_deref().unwrap_or(""));
        self.ctx.kv("Category", &unknown(&info.category));
        self.ctx.kv("Author", &unknown(&info.author));
        if let Some(model) = &info.model {
            self.ctx.kv("Model", model);
        }
        let deps = if info.dependencies.is_empty() {
            "none".to_string()
        } else {
            info.dependencies.join(", ")
        };
        self.ctx.kv("Dependencies", &deps);
        self.ctx.kv(
            "Files",
            &format!(
                "{} total ({} .md, {} .yaml)",
                info.files.total, info.files.markdown, info.files.yaml
            ),
        );
        if let Some(count) = info.evolutions {
            let evolutions = if count == 0 {
                "none yet".to_string()
            } else {
                count.to_string()
            };
            self.ctx.kv("Evolutions", &evolutions);
        }
        println!();
    }

    /// Render the follow-up hints after `ievo-sdk new`.
    pub fn render_scaffold(&self, agent_dir: &Path) {
        if self.ctx.quiet {
            return;
        }
        let code = self.ctx.styles.code;
        let dir = agent_dir.display();
        println!();
        self.ctx.success(&format!(
            "Agent created at {}",
            dir.to_string().style(self.ctx.styles.bold)
        ));
        println!("    Edit {} to define behavior", "ROLE.md".style(code));
        println!("    Edit {} to configure settings", "agent.yaml".style(code));
        println!(
            "    Run {} to check",
            format!("ievo-sdk validate {dir}").style(code)
        );
        println!();
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &SdkConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        for key in VALID_CONFIG_KEYS {
            let value = config.get(key).unwrap_or_default();
            println!("  {:<20} {value}", format!("{key}:"));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["IEVO_CONFIG", "IEVO_SCHEMA", "IEVO_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
