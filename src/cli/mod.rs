//! CLI module for Routewise
//!
//! Provides commands:
//! - `models`: list the model catalog
//! - `analyze`: show how a prompt is classified
//! - `select`: show which model would answer a prompt, and why
//! - `ask`: answer one prompt with the selected model
//! - `chat`: answer prompts read line by line from stdin
//! - `prefs`: manage the stored manual-model preference

use crate::preferences::PreferenceStore;
use crate::settings::{AppConfig, ModeSetting, SelectionConfig};
use clap::{Args, Parser, Subcommand};
use routewise_llm::{Catalog, SelectionMode};
use tracing::{debug, warn};

pub mod analyze;
pub mod ask;
pub mod models;
pub mod prefs;
pub mod select;

/// Routewise CLI
#[derive(Parser, Debug)]
#[command(name = "routewise")]
#[command(about = "Pick the right LLM for each prompt")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available models by tier
    Models,
    /// Analyze a prompt
    Analyze {
        /// Prompt text
        prompt: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Select a model without calling it
    Select {
        /// Prompt text
        prompt: String,
        #[command(flatten)]
        mode: ModeArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer a prompt with the selected model
    Ask {
        /// Prompt text
        prompt: String,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Answer prompts read from stdin, one per line
    Chat {
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Manage the manual-model preference
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// Selection mode flags shared by `select`, `ask` and `chat`
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Skip automatic selection
    #[arg(long)]
    pub manual: bool,
    /// Use this model id (implies --manual)
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Show the stored preference
    Show,
    /// Store a model id
    Set {
        /// Model id from `routewise models`
        id: String,
    },
    /// Remove the stored preference
    Clear,
}

/// Run the CLI command
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Models) => models::run(),
        Some(Commands::Analyze { prompt, json }) => analyze::run(&prompt, json),
        Some(Commands::Select { prompt, mode, json }) => {
            remember_model_choice(&mode);
            let mode = resolve_mode(&mode, &config.selection, stored_preference);
            select::run(&prompt, &mode, json)
        }
        Some(Commands::Ask { prompt, mode }) => {
            remember_model_choice(&mode);
            let mode = resolve_mode(&mode, &config.selection, stored_preference);
            ask::run(&prompt, &mode, &config).await
        }
        Some(Commands::Chat { mode }) => {
            remember_model_choice(&mode);
            let mode = resolve_mode(&mode, &config.selection, stored_preference);
            ask::chat(&mode, &config).await
        }
        Some(Commands::Prefs { action }) => prefs::run(action),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Decide the selection mode from flags, config and the stored preference
///
/// `--manual` or `--model` forces manual mode, otherwise `selection.mode`
/// decides. The manual model is `--model`, else the stored preference, else
/// `selection.default_model`; `None` falls back to the catalog's first model.
/// `stored` is only consulted in manual mode.
pub fn resolve_mode(
    args: &ModeArgs,
    selection: &SelectionConfig,
    stored: impl FnOnce() -> Option<String>,
) -> SelectionMode {
    let manual = args.manual || args.model.is_some() || selection.mode == ModeSetting::Manual;
    if !manual {
        return SelectionMode::Auto;
    }
    let model_id = args
        .model
        .clone()
        .or_else(stored)
        .or_else(|| selection.default_model.clone());
    SelectionMode::Manual(model_id)
}

/// Store a `--model` pick as the manual preference for later runs
fn remember_model_choice(args: &ModeArgs) {
    let Some(model_id) = args.model.as_deref() else {
        return;
    };
    match PreferenceStore::default_location() {
        Ok(store) => {
            save_model_choice(&store, model_id);
        }
        Err(e) => warn!(error = %e, "Preference store unavailable"),
    }
}

/// Returns whether the id was stored; unknown ids are left to selection to report
fn save_model_choice(store: &PreferenceStore, model_id: &str) -> bool {
    match store.set(model_id, Catalog::builtin()) {
        Ok(_) => true,
        Err(e) => {
            debug!(model = model_id, error = %e, "Not storing model preference");
            false
        }
    }
}

/// Stored preference, ignoring an unreadable file
fn stored_preference() -> Option<String> {
    let store = match PreferenceStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "Preference store unavailable");
            return None;
        }
    };
    match store.load() {
        Ok(preference) => preference.map(|p| p.selected_model_id),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable preference file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(mode: ModeSetting, default_model: Option<&str>) -> SelectionConfig {
        SelectionConfig {
            mode,
            default_model: default_model.map(str::to_string),
        }
    }

    #[test]
    fn test_auto_by_default() {
        let mode = resolve_mode(
            &ModeArgs::default(),
            &selection(ModeSetting::Auto, Some("mistral-small")),
            || panic!("preference read in auto mode"),
        );
        assert_eq!(mode, SelectionMode::Auto);
    }

    #[test]
    fn test_model_flag_wins() {
        let args = ModeArgs {
            manual: false,
            model: Some("anthropic/claude-3-opus".to_string()),
        };
        let mode = resolve_mode(&args, &selection(ModeSetting::Auto, None), || {
            Some("mistral-small".to_string())
        });
        assert_eq!(mode, SelectionMode::manual("anthropic/claude-3-opus"));
    }

    #[test]
    fn test_stored_preference_before_config_default() {
        let args = ModeArgs {
            manual: true,
            model: None,
        };
        let config = selection(ModeSetting::Auto, Some("mistral-medium"));

        let mode = resolve_mode(&args, &config, || Some("mistral-small".to_string()));
        assert_eq!(mode, SelectionMode::manual("mistral-small"));

        let mode = resolve_mode(&args, &config, || None);
        assert_eq!(mode, SelectionMode::manual("mistral-medium"));
    }

    #[test]
    fn test_manual_config_without_any_model() {
        let mode = resolve_mode(
            &ModeArgs::default(),
            &selection(ModeSetting::Manual, None),
            || None,
        );
        assert_eq!(mode, SelectionMode::Manual(None));
    }

    #[test]
    fn test_model_choice_is_remembered() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.json"));

        assert!(save_model_choice(&store, "mistral-small"));
        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.selected_model_id, "mistral-small");

        // an unknown id keeps the previous preference
        assert!(!save_model_choice(&store, "no-such-model"));
        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.selected_model_id, "mistral-small");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["routewise", "select", "hello", "--model", "mistral-small", "--json"]);
        match cli.command {
            Some(Commands::Select { prompt, mode, json }) => {
                assert_eq!(prompt, "hello");
                assert_eq!(mode.model.as_deref(), Some("mistral-small"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
