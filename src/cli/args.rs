//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse random recipes, keep favorites and remix them
#[derive(Parser, Debug)]
#[command(name = "recipe-remix")]
#[command(about = "recipe-remix - Random recipes, saved favorites and themed AI remixes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the favorites storage file
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Keep favorites in memory for this run only
    #[arg(long, global = true, conflicts_with = "storage")]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start an interactive session (default)
    Interactive,

    /// Show a random recipe
    Random {
        /// Save the recipe to favorites
        #[arg(long)]
        save: bool,

        /// Remix the recipe with this theme
        #[arg(long, value_name = "THEME")]
        remix: Option<String>,
    },

    /// Show a recipe by its exact name
    Show {
        /// Recipe name
        name: String,

        /// Save the recipe to favorites
        #[arg(long)]
        save: bool,

        /// Remix the recipe with this theme
        #[arg(long, value_name = "THEME")]
        remix: Option<String>,
    },

    /// Manage saved recipes
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Print the configuration and storage file locations
    Path,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SavedCommands {
    /// List saved recipe names
    List,
    /// Delete a saved recipe
    Delete {
        /// Recipe name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_command() {
        let cli = Cli::try_parse_from(["recipe-remix"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_show_with_flags() {
        let cli = Cli::try_parse_from([
            "recipe-remix",
            "-vv",
            "show",
            "Teriyaki Chicken Casserole",
            "--save",
            "--remix",
            "camping",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                name: "Teriyaki Chicken Casserole".to_string(),
                save: true,
                remix: Some("camping".to_string()),
            })
        );
    }

    #[test]
    fn test_storage_conflicts_with_ephemeral() {
        let result =
            Cli::try_parse_from(["recipe-remix", "--storage", "x.json", "--ephemeral", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let cli =
            Cli::try_parse_from(["recipe-remix", "config", "path", "-c", "custom.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Path
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_saved_delete() {
        let cli = Cli::try_parse_from(["recipe-remix", "saved", "delete", "Laksa"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Saved {
                command: SavedCommands::Delete {
                    name: "Laksa".to_string()
                }
            })
        );
    }
}
