//! Application context: unified state passed to every command handler.
//!
//! Adding a new cross-cutting concern requires only one field change here;
//! command signatures stay the same.

use anyhow::{Context, Result};

use crate::infra::config::YamlConfigStore;
use crate::infra::fs::LocalFs;
use crate::output::{HumanRenderer, OutputContext};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `IEVO_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Production filesystem.
    pub fs: LocalFs,
    /// User configuration file.
    pub config_store: YamlConfigStore,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `IEVO_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("IEVO_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env || flags.output.json;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            fs: LocalFs,
            config_store: YamlConfigStore,
            non_interactive,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Human renderer over this context's output settings.
    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }

    /// Ask the user for a line of text.
    ///
    /// When `non_interactive` is `true`, returns `default` immediately
    /// without prompting. An empty answer also yields `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn prompt(&self, label: &str, default: &str) -> Result<String> {
        if self.non_interactive {
            return Ok(default.to_string());
        }
        let value: String = dialoguer::Input::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()
            .with_context(|| format!("reading {label}"))?;
        let value = value.trim();
        Ok(if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        })
    }

    /// Ask the user to pick one of `choices`.
    ///
    /// When `non_interactive` is `true`, returns `default` immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn select<T: Copy + PartialEq + std::fmt::Display>(
        &self,
        label: &str,
        choices: &[T],
        default: T,
    ) -> Result<T> {
        if self.non_interactive {
            return Ok(default);
        }
        let start = choices.iter().position(|c| *c == default).unwrap_or(0);
        let idx = dialoguer::Select::new()
            .with_prompt(label)
            .items(choices)
            .default(start)
            .interact()
            .with_context(|| format!("selecting {label}"))?;
        Ok(choices[idx])
    }
}
