use clap::Parser;
use recipe_remix::app::{self, AppConfig};
use recipe_remix::cli::commands::{fetch_actions, run_actions, Lookup};
use recipe_remix::cli::{run_session, Cli, Commands, ConfigCommands, SavedCommands};
use recipe_remix::controller::{Action, TerminalSurface};
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let app_config = AppConfig::new(cli.verbose)
        .with_config_path(cli.config.clone())
        .with_storage_path(cli.storage.clone())
        .with_ephemeral(cli.ephemeral);

    match run(cli, &app_config).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => app::handle_fatal_error(e, app_config.verbose),
    }
}

/// Returns `Ok(false)` when the command ran but could not show its recipe
async fn run(cli: Cli, app_config: &AppConfig) -> anyhow::Result<bool> {
    let config = app::initialize_app(app_config).await?;

    if let Some(Commands::Config {
        command: ConfigCommands::Path,
    }) = cli.command
    {
        let config_path = match &app_config.config_path {
            Some(path) => path.clone(),
            None => recipe_remix::config::default_config_path()?,
        };
        println!("config:  {}", config_path.display());
        let storage = match &app_config.storage_path {
            Some(path) => path.clone(),
            None => config.storage_path()?,
        };
        println!("storage: {}", storage.display());
        return Ok(true);
    }

    let mut controller = app::build_controller(&config, app_config, TerminalSurface::stdout())?;

    let command = cli.command.unwrap_or(Commands::Interactive);
    debug!("Running {:?}", command);

    match command {
        Commands::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_session(&mut controller, stdin, std::io::stdout()).await?;
            Ok(true)
        }
        Commands::Random { save, remix } => {
            let actions = fetch_actions(Lookup::Random, save, remix);
            Ok(run_actions(&mut controller, actions).await)
        }
        Commands::Show { name, save, remix } => {
            let actions = fetch_actions(Lookup::Named(name), save, remix);
            Ok(run_actions(&mut controller, actions).await)
        }
        Commands::Saved { command } => {
            match command {
                SavedCommands::List => controller.show_favorites(),
                SavedCommands::Delete { name } => {
                    controller.dispatch(Action::DeleteSaved(name)).await
                }
            }
            Ok(true)
        }
        Commands::Config { .. } => Ok(true),
    }
}
