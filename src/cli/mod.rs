//! Command-line front end
//!
//! [`args`] defines the clap surface, [`session`] drives the interactive
//! terminal loop and [`commands`] runs the one-shot subcommands. Both
//! front ends only translate input into controller actions.

pub mod args;
pub mod commands;
pub mod session;

pub use args::{Cli, Commands, ConfigCommands, SavedCommands};
pub use session::{parse_command, run_session, SessionCommand};
