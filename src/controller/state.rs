//! View state owned by the controller

use crate::recipe::Recipe;

/// What the recipe region currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Displayed(Recipe),
    Error(String),
}

impl ViewState {
    /// The recipe on display, if any. A failed fetch leaves none reachable.
    pub fn current_recipe(&self) -> Option<&Recipe> {
        match self {
            ViewState::Displayed(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Displayed(_) => "displayed",
            ViewState::Error(_) => "error",
        }
    }
}

/// User actions the controller responds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Session start: show favorites and load a random recipe
    Start,
    FetchRandom,
    OpenSaved(String),
    SaveCurrent,
    DeleteSaved(String),
    Remix(String),
}
