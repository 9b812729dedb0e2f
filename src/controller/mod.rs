//! Controller wiring user actions to the recipe, remix and favorites components
//!
//! The controller owns the only mutable session state, the [`ViewState`] of
//! the recipe region. Every action takes `&mut self`, so actions run one at a
//! time: a second fetch cannot start until the first has resolved, and the
//! display always reflects the last action the user issued.
//!
//! Failures never escape [`Controller::dispatch`]. Each one is turned into a
//! message in the region it concerns and the session carries on.

pub mod render;
pub mod state;
pub mod surface;

pub use state::{Action, ViewState};
pub use surface::{MemorySurface, Region, Surface, TerminalSurface};

use crate::favorites::{FavoritesStore, LocalStorage};
use crate::recipe::{Recipe, RecipeSource};
use crate::remix::Remixer;
use tracing::{debug, info, warn};

pub struct Controller<R, M, S, V>
where
    R: RecipeSource,
    M: Remixer,
    S: LocalStorage,
    V: Surface,
{
    recipes: R,
    remixer: M,
    favorites: FavoritesStore<S>,
    surface: V,
    state: ViewState,
}

impl<R, M, S, V> Controller<R, M, S, V>
where
    R: RecipeSource,
    M: Remixer,
    S: LocalStorage,
    V: Surface,
{
    pub fn new(recipes: R, remixer: M, favorites: FavoritesStore<S>, surface: V) -> Self {
        Self {
            recipes,
            remixer,
            favorites,
            surface,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.state.current_recipe()
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Saved names as currently persisted
    pub fn saved_names(&self) -> Vec<String> {
        self.favorites.load()
    }

    pub async fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?} from state {}", action, self.state.label());
        match action {
            Action::Start => {
                self.show_favorites();
                self.fetch_random().await;
            }
            Action::FetchRandom => self.fetch_random().await,
            Action::OpenSaved(name) => self.open_saved(&name).await,
            Action::SaveCurrent => self.save_current(),
            Action::DeleteSaved(name) => self.delete_saved(&name),
            Action::Remix(theme) => self.remix(&theme).await,
        }
    }

    /// Repaint the favorites region from storage
    pub fn show_favorites(&mut self) {
        match render::render_favorites(&self.favorites.load()) {
            Some(list) => self.surface.paint(Region::Favorites, &list),
            None => self.surface.clear(Region::Favorites),
        }
    }

    async fn fetch_random(&mut self) {
        self.begin_loading(render::LOADING_RANDOM);
        match self.recipes.fetch_random().await {
            Ok(recipe) => self.display(recipe),
            Err(e) => {
                warn!("Random recipe fetch failed ({}): {}", e.kind(), e);
                self.fail(render::fetch_random_failure(&e));
            }
        }
    }

    async fn open_saved(&mut self, name: &str) {
        self.begin_loading(render::LOADING_SAVED);
        match self.recipes.fetch_by_name(name).await {
            Ok(recipe) => self.display(recipe),
            Err(e) => {
                warn!("Loading saved recipe '{}' failed ({}): {}", name, e.kind(), e);
                self.fail(render::fetch_saved_failure(&e));
            }
        }
    }

    fn save_current(&mut self) {
        let Some(name) = self.current_recipe().map(|r| r.name.clone()) else {
            debug!("Save ignored: no recipe on display");
            return;
        };

        if let Err(e) = self.favorites.add(&name) {
            warn!("Failed to save '{}': {}", name, e);
        } else {
            info!("Saved '{}'", name);
        }
        self.show_favorites();
    }

    fn delete_saved(&mut self, name: &str) {
        if let Err(e) = self.favorites.remove(name) {
            warn!("Failed to delete '{}': {}", name, e);
        } else {
            info!("Deleted '{}'", name);
        }
        self.show_favorites();
    }

    async fn remix(&mut self, theme: &str) {
        if theme.trim().is_empty() {
            debug!("Remix ignored: empty theme");
            return;
        }
        let Some(recipe) = self.state.current_recipe() else {
            debug!("Remix ignored: no recipe on display");
            return;
        };

        self.surface.paint(Region::Remix, render::REMIX_LOADING);
        match self.remixer.remix(recipe, theme).await {
            Ok(text) => self.surface.paint(Region::Remix, &text),
            Err(e) => {
                warn!("Remix failed ({}): {}", e.kind(), e);
                self.surface.paint(Region::Remix, &render::remix_failure(&e));
            }
        }
    }

    fn begin_loading(&mut self, message: &str) {
        self.state = ViewState::Loading;
        self.surface.paint(Region::Recipe, message);
    }

    fn display(&mut self, recipe: Recipe) {
        info!("Displaying '{}'", recipe.name);
        self.surface
            .paint(Region::Recipe, &render::render_recipe(&recipe));
        self.state = ViewState::Displayed(recipe);
    }

    fn fail(&mut self, message: &str) {
        self.surface.paint(Region::Recipe, message);
        self.state = ViewState::Error(message.to_string());
    }
}
