//! One-shot subcommands expressed as controller actions

use crate::controller::{Action, Controller, Surface, ViewState};
use crate::favorites::LocalStorage;
use crate::recipe::RecipeSource;
use crate::remix::Remixer;

/// Where a one-shot command gets its recipe from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Random,
    Named(String),
}

/// Actions for a fetch, optionally followed by a save and a remix
pub fn fetch_actions(lookup: Lookup, save: bool, remix: Option<String>) -> Vec<Action> {
    let mut actions = vec![match lookup {
        Lookup::Random => Action::FetchRandom,
        Lookup::Named(name) => Action::OpenSaved(name),
    }];
    if save {
        actions.push(Action::SaveCurrent);
    }
    if let Some(theme) = remix {
        actions.push(Action::Remix(theme));
    }
    actions
}

/// Dispatch `actions` in order. Returns `false` when the recipe could not be shown.
pub async fn run_actions<R, M, S, V>(
    controller: &mut Controller<R, M, S, V>,
    actions: Vec<Action>,
) -> bool
where
    R: RecipeSource,
    M: Remixer,
    S: LocalStorage,
    V: Surface,
{
    for action in actions {
        controller.dispatch(action).await;
        if matches!(controller.state(), ViewState::Error(_)) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_actions_order() {
        assert_eq!(
            fetch_actions(Lookup::Random, false, None),
            vec![Action::FetchRandom]
        );
        assert_eq!(
            fetch_actions(
                Lookup::Named("Kedgeree".to_string()),
                true,
                Some("breakfast in space".to_string())
            ),
            vec![
                Action::OpenSaved("Kedgeree".to_string()),
                Action::SaveCurrent,
                Action::Remix("breakfast in space".to_string()),
            ]
        );
    }
}
