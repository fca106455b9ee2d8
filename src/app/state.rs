//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for category filtering, selection management and
//! UI view model generation. It is the single source of truth for all
//! transient UI state; there are no ambient globals, and every consumer reads
//! and writes through this struct.
//!
//! # State Components
//!
//! - **Recipes**: the last response's record set, unfiltered
//! - **Visible Recipes**: subset after applying the category filter
//! - **Selection**: cursor position within the visible set
//! - **Result Phase**: idle / loading / has-results / empty
//! - **Favorites / Theme**: the two persisted preferences, mirrored in state
//! - **Request Generation**: monotonically increasing counter stamped on
//!   search/random requests so stale responses can be discarded

use super::modes::{InputMode, ResultsPhase};
use crate::api::ApiClient;
use crate::domain::prefs::ThemeMode;
use crate::domain::recipe::Recipe;
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel;

/// Placeholder shown in the detail overlay when a recipe has no source link.
const SOURCE_PLACEHOLDER: &str = "(no source link)";

/// Central application state container.
///
/// Holds all transient UI state plus the in-memory mirror of the two persisted
/// preferences. Mutated by the event handler in response to user input, API
/// responses and worker responses. View models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Request builder for the remote recipe API.
    pub api: ApiClient,

    /// Record set from the most recent applied response, unfiltered.
    pub recipes: Vec<Recipe>,

    /// Recipes passing the active category filter, in original order.
    ///
    /// Recomputed by [`apply_category_filter`](Self::apply_category_filter)
    /// after state changes. Used for rendering and selection bounds.
    pub visible: Vec<Recipe>,

    /// Zero-based index of the selected card within `visible`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text currently typed into the search box (raw, not yet normalized).
    pub search_input: String,

    /// The last successfully submitted normalized query.
    ///
    /// Replayed when the category filter changes, per the router contract.
    /// Empty when no search has been submitted yet (or only random was used).
    pub last_query: String,

    /// Category names fetched at startup; empty if the fetch failed.
    pub categories: Vec<String>,

    /// Index into the category filter: 0 = all categories, `n` = `categories[n-1]`.
    pub category_index: usize,

    /// Display phase of the result area.
    pub phase: ResultsPhase,

    /// Favorited recipe identifiers, in stored order.
    pub favorites: Vec<String>,

    /// Active theme mode (mirrors the persisted preference).
    pub theme_mode: ThemeMode,

    /// Both palettes, loaded once; the active one is selected by `theme_mode`.
    pub themes: ThemePair,

    /// Recipe currently open in the detail overlay, if any.
    pub detail: Option<Recipe>,

    /// Generation of the most recently issued search/random request.
    ///
    /// A results response is applied only when its generation equals this
    /// value; anything older lost the race and is discarded.
    pub request_seq: u64,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// Starts idle with no recipes, an empty favorites mirror (populated by
    /// the worker's `PrefsLoaded` response) and the given palettes.
    #[must_use]
    pub fn new(api: ApiClient, themes: ThemePair) -> Self {
        Self {
            api,
            recipes: vec![],
            visible: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            last_query: String::new(),
            categories: vec![],
            category_index: 0,
            phase: ResultsPhase::Idle,
            favorites: vec![],
            theme_mode: ThemeMode::Light,
            themes,
            detail: None,
            request_seq: 0,
        }
    }

    /// Returns the palette for the active theme mode.
    #[must_use]
    pub const fn active_theme(&self) -> &Theme {
        self.themes.for_mode(self.theme_mode)
    }

    /// Issues a new request generation.
    ///
    /// Called once per search/random request; the returned value is stamped
    /// onto the request context and compared against on response arrival.
    pub fn next_generation(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Enters the loading phase for a new search/random request.
    ///
    /// Clears current results (and thereby hides the empty indicator); the
    /// loading indicator shows until the matching response arrives.
    pub fn begin_loading(&mut self) {
        self.phase = ResultsPhase::Loading;
        self.recipes.clear();
        self.visible.clear();
        self.selected_index = 0;
    }

    /// Applies an arrived result set.
    ///
    /// Stores the records, reapplies the category filter, and settles the
    /// phase: `HasResults` when at least one card is displayable, `Empty`
    /// otherwise.
    pub fn set_results(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.selected_index = 0;
        self.apply_category_filter();

        self.phase = if self.visible.is_empty() {
            ResultsPhase::Empty
        } else {
            ResultsPhase::HasResults
        };

        tracing::debug!(
            total = self.recipes.len(),
            visible = self.visible.len(),
            phase = ?self.phase,
            "results applied"
        );
    }

    /// Marks the current request as failed or empty.
    ///
    /// Failed fetches and zero-result responses are indistinguishable in the
    /// UI: both show the empty state.
    pub fn finish_empty(&mut self) {
        self.recipes.clear();
        self.visible.clear();
        self.selected_index = 0;
        self.phase = ResultsPhase::Empty;
    }

    /// Re-settles the result phase after an in-place refilter.
    ///
    /// Only meaningful once a response has been applied; `Idle` and `Loading`
    /// are left untouched.
    pub fn resettle_phase(&mut self) {
        if matches!(self.phase, ResultsPhase::HasResults | ResultsPhase::Empty) {
            self.phase = if self.visible.is_empty() {
                ResultsPhase::Empty
            } else {
                ResultsPhase::HasResults
            };
        }
    }

    /// Returns the active category filter value, `None` for "all categories".
    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        if self.category_index == 0 {
            None
        } else {
            self.categories
                .get(self.category_index - 1)
                .map(String::as_str)
        }
    }

    /// Recomputes `visible` from `recipes` and the active category filter.
    ///
    /// With a filter set, retains exactly the recipes whose category equals it,
    /// preserving original relative order; a recipe without a category never
    /// matches. With no filter, the whole set is visible. Clamps the selection
    /// to the new bounds.
    pub fn apply_category_filter(&mut self) {
        let filter = self.active_category().map(str::to_string);

        self.visible = self
            .recipes
            .iter()
            .filter(|recipe| match filter.as_deref() {
                None => true,
                Some(category) => recipe.category.as_deref() == Some(category),
            })
            .cloned()
            .collect();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }
    }

    /// Advances the category filter by one position, wrapping past the end
    /// back to "all categories".
    pub fn cycle_category_forward(&mut self) {
        self.category_index = (self.category_index + 1) % (self.categories.len() + 1);
    }

    /// Moves the category filter back by one position, wrapping from "all
    /// categories" to the last category.
    pub fn cycle_category_back(&mut self) {
        if self.category_index == 0 {
            self.category_index = self.categories.len();
        } else {
            self.category_index -= 1;
        }
    }

    /// Moves selection down by one card, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection up by one card, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected recipe, if any card is visible.
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.visible.get(self.selected_index)
    }

    /// Returns whether a recipe id is in the Favorites Set.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }

    /// Computes a renderable view model from current state and pane dimensions.
    ///
    /// Handles card windowing (the selection stays centered in view) and
    /// projects the result phase into the mutually exclusive loading/empty/
    /// cards presentation.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> viewmodel::UiViewModel {
        let detail = self.detail.as_ref().map(Self::compute_detail);

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let cards: Vec<viewmodel::CardItem> = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, recipe)| viewmodel::CardItem {
                name: recipe.name.clone(),
                category: recipe.category.clone().unwrap_or_default(),
                is_selected: visible_start + relative_idx == self.selected_index,
                is_favorite: self.is_favorite(&recipe.id),
            })
            .collect();

        viewmodel::UiViewModel {
            cards,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            loading: self.phase == ResultsPhase::Loading,
            empty_state: self.compute_empty_state(),
            detail,
        }
    }

    /// Projects a recipe into the detail overlay view.
    fn compute_detail(recipe: &Recipe) -> viewmodel::DetailView {
        let source = recipe
            .source
            .as_deref()
            .filter(|link| !link.trim().is_empty());

        viewmodel::DetailView {
            title: recipe.name.clone(),
            category: recipe.category.clone().unwrap_or_default(),
            thumbnail: recipe.thumbnail.clone().unwrap_or_default(),
            source: source.unwrap_or(SOURCE_PLACEHOLDER).to_string(),
            source_is_placeholder: source.is_none(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(crate::domain::recipe::IngredientLine::display)
                .collect(),
            instructions: recipe.instructions.clone().unwrap_or_default(),
        }
    }

    /// Computes header title and theme glyph.
    fn compute_header(&self) -> viewmodel::HeaderInfo {
        let title = match self.active_category() {
            Some(category) => format!(" Recipes · {category} ({}) ", self.visible.len()),
            None => format!(" Recipes ({}) ", self.visible.len()),
        };

        viewmodel::HeaderInfo {
            title,
            theme_glyph: self.theme_mode.toggle_glyph().to_string(),
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> viewmodel::FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => {
                "Enter: search  ESC: cancel  Type ingredients, comma separated".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  Enter: view  f: favorite  /: search  r: random  c: category  t: theme  q: quit"
                    .to_string()
            }
        };

        viewmodel::FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<viewmodel::SearchBarInfo> {
        if self.input_mode == InputMode::Search {
            Some(viewmodel::SearchBarInfo {
                query: self.search_input.clone(),
            })
        } else {
            None
        }
    }

    /// Computes the empty-state message when the phase calls for one.
    fn compute_empty_state(&self) -> Option<viewmodel::EmptyState> {
        if self.phase == ResultsPhase::Empty {
            Some(viewmodel::EmptyState {
                message: "No recipes found".to_string(),
                subtitle: "Try other ingredients, or press r for a random recipe".to_string(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for cards after subtracting UI chrome.
    ///
    /// Accounts for the leading blank line, header, two borders, the card
    /// header row and the footer; search mode adds the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search => total_rows.saturating_sub(9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::api::ApiClient;
    use crate::app::modes::ResultsPhase;
    use crate::domain::recipe::Recipe;
    use crate::ui::theme::ThemePair;

    fn recipe(id: &str, name: &str, category: Option<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category: category.map(str::to_string),
            thumbnail: None,
            instructions: None,
            source: None,
            ingredients: vec![],
        }
    }

    fn state() -> AppState {
        AppState::new(ApiClient::default(), ThemePair::default())
    }

    #[test]
    fn category_filter_keeps_exact_matches_in_order() {
        let mut state = state();
        state.categories = vec!["Chicken".to_string(), "Pasta".to_string()];
        state.recipes = vec![
            recipe("1", "Stew", Some("Chicken")),
            recipe("2", "Alfredo", Some("Pasta")),
            recipe("3", "Wings", Some("Chicken")),
            recipe("4", "Mystery", None),
        ];

        state.category_index = 1; // Chicken
        state.apply_category_filter();
        let ids: Vec<&str> = state.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        state.category_index = 0; // all
        state.apply_category_filter();
        assert_eq!(state.visible.len(), 4);
    }

    #[test]
    fn filtered_scenario_renders_one_card() {
        let mut state = state();
        state.categories = vec!["Chicken".to_string(), "Pasta".to_string()];
        state.category_index = 1; // Chicken
        state.set_results(vec![
            recipe("1", "Brown Stew Chicken", Some("Chicken")),
            recipe("2", "Chicken Alfredo", Some("Pasta")),
        ]);

        assert_eq!(state.phase, ResultsPhase::HasResults);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].name, "Brown Stew Chicken");
    }

    #[test]
    fn empty_results_settle_into_empty_phase() {
        let mut state = state();
        state.begin_loading();
        assert_eq!(state.phase, ResultsPhase::Loading);

        state.set_results(vec![]);
        assert_eq!(state.phase, ResultsPhase::Empty);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(!vm.loading);
    }

    #[test]
    fn loading_clears_results_and_hides_empty_indicator() {
        let mut state = state();
        state.set_results(vec![]);
        assert_eq!(state.phase, ResultsPhase::Empty);

        state.begin_loading();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.loading);
        assert!(vm.empty_state.is_none());
        assert!(vm.cards.is_empty());
    }

    #[test]
    fn category_cycling_wraps_both_directions() {
        let mut state = state();
        state.categories = vec!["Beef".to_string(), "Chicken".to_string()];

        assert_eq!(state.active_category(), None);
        state.cycle_category_forward();
        assert_eq!(state.active_category(), Some("Beef"));
        state.cycle_category_forward();
        state.cycle_category_forward();
        assert_eq!(state.active_category(), None);

        state.cycle_category_back();
        assert_eq!(state.active_category(), Some("Chicken"));
    }

    #[test]
    fn favorited_cards_are_premarked_liked() {
        let mut state = state();
        state.favorites = vec!["52772".to_string()];
        state.set_results(vec![
            recipe("52772", "Teriyaki Chicken Casserole", Some("Chicken")),
            recipe("52804", "Poutine", Some("Miscellaneous")),
        ]);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards[0].is_favorite);
        assert!(!vm.cards[1].is_favorite);
    }

    #[test]
    fn detail_source_falls_back_to_placeholder() {
        let mut with_source = recipe("1", "Stew", None);
        with_source.source = Some("https://example.test/stew".to_string());
        let view = AppState::compute_detail(&with_source);
        assert!(!view.source_is_placeholder);
        assert_eq!(view.source, "https://example.test/stew");

        let without = recipe("2", "Wings", None);
        let view = AppState::compute_detail(&without);
        assert!(view.source_is_placeholder);
    }

    #[test]
    fn selection_wraps_over_visible_cards() {
        let mut state = state();
        state.set_results(vec![
            recipe("1", "A", None),
            recipe("2", "B", None),
        ]);

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn generations_are_strictly_increasing() {
        let mut state = state();
        let first = state.next_generation();
        let second = state.next_generation();
        assert!(second > first);
    }
}
