use anyhow::Result;
use clap::{CommandFactory, Parser};
use orate::app::{AnalyzeArgs, run_analyze_command, run_history_command};
use orate::cli::{Cli, Commands, ConfigAction};
use orate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            let args = AnalyzeArgs {
                file: cli.file,
                transcript: cli.transcript,
                model: cli.model,
                language: cli.language,
                report_language: cli.report_language,
                timeout_secs: cli.timeout,
                json: cli.json,
                quiet: cli.quiet,
                verbose: cli.verbose,
            };
            run_analyze_command(config, args).await?;
        }
        Some(Commands::History) => {
            let config = load_config(cli.config.as_deref())?;
            run_history_command(config, cli.json, cli.quiet)?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(action, cli.config.as_deref())?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "orate", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/orate/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)?
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}

/// Handle configuration commands.
fn handle_config_command(action: ConfigAction, custom_path: Option<&std::path::Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(custom_path)?;
            print!("{}", config.to_display_toml()?);
        }
        ConfigAction::Path => {
            let path = custom_path
                .map(std::path::PathBuf::from)
                .unwrap_or_else(Config::default_path);
            println!("{}", path.display());
        }
    }
    Ok(())
}
