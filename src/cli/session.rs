//! Interactive terminal session

use crate::controller::{Action, Controller, Surface};
use crate::favorites::LocalStorage;
use crate::recipe::RecipeSource;
use crate::remix::Remixer;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  random, r            show a random recipe
  save, s              save the recipe on display
  open <n|name>        show a saved recipe by list number or name
  delete <n|name>      delete a saved recipe by list number or name
  remix <theme>        remix the recipe on display
  list, ls             show saved recipes
  help, ?              show this help
  quit, q              leave";

/// Reference to a saved recipe typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedRef {
    /// 1-based position in the saved list
    Position(usize),
    Name(String),
}

impl SavedRef {
    fn parse(arg: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(n) if n > 0 => SavedRef::Position(n),
            _ => SavedRef::Name(arg.to_string()),
        }
    }

    /// Resolve against the saved list; positions out of range resolve to nothing
    pub fn resolve(&self, saved: &[String]) -> Option<String> {
        match self {
            SavedRef::Position(n) => saved.get(n - 1).cloned(),
            SavedRef::Name(name) => Some(name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Random,
    Save,
    Open(SavedRef),
    Delete(SavedRef),
    Remix(String),
    List,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let required = |command: &'static str, argument: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument { command, argument })
        } else {
            Ok(rest)
        }
    };

    let command = match head.to_lowercase().as_str() {
        "random" | "r" => SessionCommand::Random,
        "save" | "s" => SessionCommand::Save,
        "open" | "o" => SessionCommand::Open(SavedRef::parse(required("open", "a number or name")?)),
        "delete" | "d" | "rm" => {
            SessionCommand::Delete(SavedRef::parse(required("delete", "a number or name")?))
        }
        "remix" => SessionCommand::Remix(required("remix", "a theme")?.to_string()),
        "list" | "ls" => SessionCommand::List,
        "help" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Run the interactive loop until `quit` or end of input.
///
/// Lines are handled strictly one after another, so a fetch always resolves
/// before the next command is read.
pub async fn run_session<R, M, S, V, I, W>(
    controller: &mut Controller<R, M, S, V>,
    input: I,
    mut out: W,
) -> anyhow::Result<()>
where
    R: RecipeSource,
    M: Remixer,
    S: LocalStorage,
    V: Surface,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Type 'help' for commands.")?;
    controller.dispatch(Action::Start).await;

    let mut lines = input.lines();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        debug!("Session command: {:?}", command);
        let action = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            SessionCommand::List => {
                controller.show_favorites();
                continue;
            }
            SessionCommand::Random => Action::FetchRandom,
            SessionCommand::Save => {
                if controller.current_recipe().is_none() {
                    writeln!(out, "There is no recipe on display to save.")?;
                    continue;
                }
                Action::SaveCurrent
            }
            SessionCommand::Open(saved) => match saved.resolve(&controller.saved_names()) {
                Some(name) => Action::OpenSaved(name),
                None => {
                    writeln!(out, "No saved recipe at that position.")?;
                    continue;
                }
            },
            SessionCommand::Delete(saved) => match saved.resolve(&controller.saved_names()) {
                Some(name) => Action::DeleteSaved(name),
                None => {
                    writeln!(out, "No saved recipe at that position.")?;
                    continue;
                }
            },
            SessionCommand::Remix(theme) => {
                if controller.current_recipe().is_none() {
                    writeln!(out, "Load a recipe before remixing it.")?;
                    continue;
                }
                Action::Remix(theme)
            }
        };

        controller.dispatch(action).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("  r "), Ok(Some(SessionCommand::Random)));
        assert_eq!(parse_command("SAVE"), Ok(Some(SessionCommand::Save)));
        assert_eq!(parse_command("ls"), Ok(Some(SessionCommand::List)));
        assert_eq!(parse_command("q"), Ok(Some(SessionCommand::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_saved_references() {
        assert_eq!(
            parse_command("open 2"),
            Ok(Some(SessionCommand::Open(SavedRef::Position(2))))
        );
        assert_eq!(
            parse_command("open   Beef Wellington "),
            Ok(Some(SessionCommand::Open(SavedRef::Name(
                "Beef Wellington".to_string()
            ))))
        );
        assert_eq!(
            parse_command("delete 0"),
            Ok(Some(SessionCommand::Delete(SavedRef::Name("0".to_string()))))
        );
    }

    #[test]
    fn test_parse_remix_keeps_theme_text() {
        assert_eq!(
            parse_command("remix Spicy Tex-Mex night"),
            Ok(Some(SessionCommand::Remix("Spicy Tex-Mex night".to_string())))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("remix"),
            Err(ParseError::MissingArgument {
                command: "remix",
                argument: "a theme"
            })
        );
        assert_eq!(
            parse_command("bake cake"),
            Err(ParseError::Unknown("bake".to_string()))
        );
    }

    #[test]
    fn test_resolve_positions() {
        let saved = vec!["Laksa".to_string(), "Poutine".to_string()];
        assert_eq!(
            SavedRef::Position(2).resolve(&saved),
            Some("Poutine".to_string())
        );
        assert_eq!(SavedRef::Position(3).resolve(&saved), None);
        assert_eq!(
            SavedRef::Name("Kumpir".to_string()).resolve(&saved),
            Some("Kumpir".to_string())
        );
    }
}
