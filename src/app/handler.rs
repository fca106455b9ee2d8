//! Event handling and state transition logic.
//!
//! This module implements the event router: it processes user input, API
//! responses and worker responses, translating them into state changes and
//! action sequences. It is the only place state transitions happen, and it
//! performs no I/O: network and storage effects are returned as [`Action`]s
//! for the plugin shim to execute.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Response races
//!
//! Search and random responses carry the generation stamped when their request
//! was issued. A response is applied only when its generation equals the
//! latest issued one; a response that lost the race against a newer request is
//! logged and discarded, so the card list always reflects the most recent
//! request rather than whichever response happened to arrive last.

use crate::api::{self, RequestKind};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, ZrecipeError};
use crate::domain::prefs::toggle_favorite;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, API responses, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one card (wraps to top).
    KeyDown,
    /// Moves selection up by one card (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters search mode, focusing the ingredient input.
    SearchMode,
    /// Leaves search mode, keeping the typed input.
    ExitSearch,
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character from the search input.
    Backspace,
    /// Cancels out of search mode.
    Escape,
    /// Submits the current search input (no-op when it normalizes to empty).
    SubmitSearch,
    /// Requests a single random recipe.
    RandomRequest,
    /// Advances the category filter by one position.
    NextCategory,
    /// Moves the category filter back by one position.
    PrevCategory,
    /// Opens the detail overlay for the selected card (issues a lookup).
    ViewDetail,
    /// Toggles the selected card's id in the Favorites Set.
    ToggleFavorite,
    /// Flips the theme preference and persists it.
    ToggleTheme,
    /// Closes the detail overlay.
    CloseOverlay,

    /// An API response arrived from the runtime.
    ///
    /// `kind` was decoded from the request context that rode along with the
    /// `web_request` call; `status` 0 means the request produced no response
    /// at all.
    WebResponse {
        /// Which request this response answers.
        kind: RequestKind,
        /// HTTP status code (0 on transport failure).
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Wraps a response from the background storage worker.
    WorkerResponse(WorkerResponse),
}

/// Whether an HTTP status counts as a successful response.
const fn status_ok(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute in sequence).
///
/// # Errors
///
/// Returns errors from state mutation methods. Remote failures are not
/// errors here: they are absorbed into the empty state or logged, per the
/// error policy.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            use super::modes::InputMode;
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            use super::modes::InputMode;

            let query = api::normalize_query(&state.search_input);
            if query.is_empty() {
                tracing::debug!("search input normalized to empty, issuing no request");
                return Ok((false, vec![]));
            }

            state.last_query.clone_from(&query);
            state.input_mode = InputMode::Normal;
            state.begin_loading();
            let generation = state.next_generation();

            tracing::debug!(query = %query, generation = generation, "submitting ingredient search");
            let request = state.api.search_by_ingredients(&query, generation);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::RandomRequest => {
            state.begin_loading();
            let generation = state.next_generation();

            tracing::debug!(generation = generation, "requesting random recipe");
            let request = state.api.random(generation);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::NextCategory | Event::PrevCategory => {
            if matches!(event, Event::NextCategory) {
                state.cycle_category_forward();
            } else {
                state.cycle_category_back();
            }
            tracing::debug!(category = ?state.active_category(), "category filter changed");

            // a submitted search is replayed under the new filter; otherwise
            // the current result set is just re-projected
            if state.last_query.is_empty() {
                state.apply_category_filter();
                state.resettle_phase();
                return Ok((true, vec![]));
            }

            state.begin_loading();
            let generation = state.next_generation();
            let request = state.api.search_by_ingredients(&state.last_query, generation);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::ViewDetail => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }

            let Some(recipe) = state.selected_recipe() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };

            tracing::debug!(meal_id = %recipe.id, "looking up recipe detail");
            let request = state.api.lookup_by_id(&recipe.id);
            Ok((false, vec![Action::Fetch(request)]))
        }
        Event::ToggleFavorite => {
            let Some(recipe) = state.selected_recipe() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };

            let meal_id = recipe.id.clone();
            let added = toggle_favorite(&mut state.favorites, &meal_id);
            tracing::debug!(meal_id = %meal_id, added = added, "favorite toggled");

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::toggle_favorite(meal_id))],
            ))
        }
        Event::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            tracing::debug!(theme = %state.theme_mode.as_str(), "theme toggled");

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::set_theme(
                    state.theme_mode,
                ))],
            ))
        }
        Event::CloseOverlay => {
            state.detail = None;
            Ok((true, vec![]))
        }
        Event::WebResponse { kind, status, body } => {
            handle_web_response(state, kind, *status, body)
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies an API response to state according to its request kind.
fn handle_web_response(
    state: &mut AppState,
    kind: &RequestKind,
    status: u16,
    body: &[u8],
) -> Result<(bool, Vec<Action>)> {
    match kind {
        RequestKind::Categories => {
            if !status_ok(status) {
                tracing::warn!(error = %ZrecipeError::Http { status }, "category request failed");
                return Ok((false, vec![]));
            }
            match api::parse_categories(body) {
                Ok(categories) => {
                    state.categories = categories;
                    if state.category_index > state.categories.len() {
                        state.category_index = 0;
                    }
                    tracing::debug!(count = state.categories.len(), "categories loaded");
                    Ok((true, vec![]))
                }
                Err(e) => {
                    // dropdown simply stays at its "all categories" default
                    tracing::warn!(error = %e, "failed to parse category list");
                    Ok((false, vec![]))
                }
            }
        }
        RequestKind::Search { generation } | RequestKind::Random { generation } => {
            if *generation != state.request_seq {
                tracing::debug!(
                    response_generation = generation,
                    latest_generation = state.request_seq,
                    "discarding stale results response"
                );
                return Ok((false, vec![]));
            }

            if !status_ok(status) {
                tracing::warn!(error = %ZrecipeError::Http { status }, "results request failed");
                state.finish_empty();
                return Ok((true, vec![]));
            }

            match api::parse_meals(body) {
                Ok(recipes) => {
                    state.set_results(recipes);
                    Ok((true, vec![]))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to parse results response");
                    state.finish_empty();
                    Ok((true, vec![]))
                }
            }
        }
        RequestKind::Lookup { meal_id } => {
            if !status_ok(status) {
                tracing::warn!(meal_id = %meal_id, error = %ZrecipeError::Http { status }, "detail lookup failed");
                return Ok((false, vec![]));
            }

            match api::parse_single_meal(body) {
                Ok(recipe) => {
                    tracing::debug!(meal_id = %recipe.id, "opening detail overlay");
                    state.detail = Some(recipe);
                    Ok((true, vec![]))
                }
                Err(e) => {
                    // NotFound and malformed bodies read the same: overlay stays closed
                    tracing::warn!(meal_id = %meal_id, error = %e, "detail lookup yielded no recipe");
                    Ok((false, vec![]))
                }
            }
        }
    }
}

/// Applies a storage worker response to state.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::PrefsLoaded { favorites, theme } => {
            tracing::debug!(
                favorite_count = favorites.len(),
                theme = %theme.as_str(),
                "stored preferences applied"
            );
            state.favorites.clone_from(favorites);
            state.theme_mode = *theme;
            Ok((true, vec![]))
        }
        WorkerResponse::FavoriteToggled { favorites } => {
            // the store's sequence is authoritative
            state.favorites.clone_from(favorites);
            Ok((true, vec![]))
        }
        WorkerResponse::ThemeSaved { theme } => {
            tracing::debug!(theme = %theme.as_str(), "theme preference persisted");
            Ok((false, vec![]))
        }
        WorkerResponse::Error { message } => {
            tracing::error!(message = %message, "worker error");
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_event, Event};
    use crate::api::{ApiClient, RequestKind};
    use crate::app::modes::ResultsPhase;
    use crate::app::{Action, AppState};
    use crate::domain::prefs::ThemeMode;
    use crate::ui::theme::ThemePair;
    use crate::worker::{WorkerMessage, WorkerResponse};

    fn state() -> AppState {
        AppState::new(ApiClient::default(), ThemePair::default())
    }

    fn results_body(entries: &[(&str, &str, &str)]) -> Vec<u8> {
        let meals: Vec<String> = entries
            .iter()
            .map(|(id, name, category)| {
                format!(
                    r#"{{"idMeal": "{id}", "strMeal": "{name}", "strCategory": "{category}"}}"#
                )
            })
            .collect();
        format!(r#"{{"meals": [{}]}}"#, meals.join(",")).into_bytes()
    }

    fn deliver_results(state: &mut AppState, generation: u64, body: Vec<u8>) {
        handle_event(
            state,
            &Event::WebResponse {
                kind: RequestKind::Search { generation },
                status: 200,
                body,
            },
        )
        .unwrap();
    }

    #[test]
    fn whitespace_only_submit_issues_no_request() {
        let mut state = state();
        state.search_input = "   \t  ".to_string();

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.phase, ResultsPhase::Idle);
        assert_eq!(state.request_seq, 0);
    }

    #[test]
    fn submit_normalizes_and_fetches_with_fresh_generation() {
        let mut state = state();
        state.search_input = " chicken, garlic ".to_string();

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

        assert_eq!(state.phase, ResultsPhase::Loading);
        assert_eq!(state.last_query, "chicken,garlic");
        let Action::Fetch(request) = &actions[0] else {
            panic!("expected a fetch action");
        };
        assert!(request.url.ends_with("/filter.php?i=chicken,garlic"));
        assert_eq!(request.kind, RequestKind::Search { generation: 1 });
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = state();
        state.search_input = "chicken".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        handle_event(&mut state, &Event::RandomRequest).unwrap();
        assert_eq!(state.request_seq, 2);

        // the first request's response arrives late and loses the race
        deliver_results(&mut state, 1, results_body(&[("1", "Stale", "Chicken")]));
        assert_eq!(state.phase, ResultsPhase::Loading);
        assert!(state.recipes.is_empty());

        deliver_results(&mut state, 2, results_body(&[("2", "Fresh", "Chicken")]));
        assert_eq!(state.phase, ResultsPhase::HasResults);
        assert_eq!(state.recipes[0].name, "Fresh");
    }

    #[test]
    fn failed_fetch_reads_as_empty_state() {
        let mut state = state();
        handle_event(&mut state, &Event::RandomRequest).unwrap();

        handle_event(
            &mut state,
            &Event::WebResponse {
                kind: RequestKind::Random { generation: 1 },
                status: 0,
                body: vec![],
            },
        )
        .unwrap();

        assert_eq!(state.phase, ResultsPhase::Empty);
        assert!(state.visible.is_empty());
    }

    #[test]
    fn random_outage_shows_empty_state() {
        let mut state = state();
        handle_event(&mut state, &Event::RandomRequest).unwrap();

        deliver_results(&mut state, 1, br#"{"meals": null}"#.to_vec());

        assert_eq!(state.phase, ResultsPhase::Empty);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn category_change_replays_the_last_search() {
        let mut state = state();
        state.categories = vec!["Chicken".to_string()];
        state.search_input = "chicken,garlic".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        deliver_results(
            &mut state,
            1,
            results_body(&[("1", "Stew", "Chicken"), ("2", "Alfredo", "Pasta")]),
        );

        let (_, actions) = handle_event(&mut state, &Event::NextCategory).unwrap();

        assert_eq!(state.phase, ResultsPhase::Loading);
        let Action::Fetch(request) = &actions[0] else {
            panic!("expected a fetch action");
        };
        assert!(request.url.ends_with("/filter.php?i=chicken,garlic"));
        assert_eq!(request.kind, RequestKind::Search { generation: 2 });

        // the replayed response renders through the new filter: one card
        deliver_results(
            &mut state,
            2,
            results_body(&[("1", "Stew", "Chicken"), ("2", "Alfredo", "Pasta")]),
        );
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.visible[0].name, "Stew");
    }

    #[test]
    fn category_change_without_a_search_refilters_in_place() {
        let mut state = state();
        state.categories = vec!["Chicken".to_string()];
        handle_event(&mut state, &Event::RandomRequest).unwrap();
        deliver_results(&mut state, 1, results_body(&[("1", "Poutine", "Miscellaneous")]));

        let (_, actions) = handle_event(&mut state, &Event::NextCategory).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.phase, ResultsPhase::Empty);
        assert!(state.visible.is_empty());
    }

    #[test]
    fn view_detail_looks_up_the_selected_card() {
        let mut state = state();
        handle_event(&mut state, &Event::RandomRequest).unwrap();
        deliver_results(&mut state, 1, results_body(&[("52772", "Teriyaki", "Chicken")]));

        let (_, actions) = handle_event(&mut state, &Event::ViewDetail).unwrap();
        let Action::Fetch(request) = &actions[0] else {
            panic!("expected a fetch action");
        };
        assert!(request.url.ends_with("/lookup.php?i=52772"));

        handle_event(
            &mut state,
            &Event::WebResponse {
                kind: RequestKind::Lookup {
                    meal_id: "52772".to_string(),
                },
                status: 200,
                body: br#"{"meals": [{"idMeal": "52772", "strMeal": "Teriyaki", "strIngredient1": "soy sauce", "strMeasure1": "3/4 cup"}]}"#.to_vec(),
            },
        )
        .unwrap();

        let detail = state.detail.as_ref().expect("overlay should be open");
        assert_eq!(detail.ingredients.len(), 1);

        handle_event(&mut state, &Event::CloseOverlay).unwrap();
        assert!(state.detail.is_none());
    }

    #[test]
    fn lookup_miss_keeps_the_overlay_closed() {
        let mut state = state();
        handle_event(&mut state, &Event::RandomRequest).unwrap();
        deliver_results(&mut state, 1, results_body(&[("404", "Ghost", "Chicken")]));

        let (rendered, _) = handle_event(
            &mut state,
            &Event::WebResponse {
                kind: RequestKind::Lookup {
                    meal_id: "404".to_string(),
                },
                status: 200,
                body: br#"{"meals": null}"#.to_vec(),
            },
        )
        .unwrap();

        assert!(!rendered);
        assert!(state.detail.is_none());
    }

    #[test]
    fn favorite_toggle_updates_state_and_posts_to_worker() {
        let mut state = state();
        handle_event(&mut state, &Event::RandomRequest).unwrap();
        deliver_results(&mut state, 1, results_body(&[("52772", "Teriyaki", "Chicken")]));

        let (_, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();

        assert!(state.is_favorite("52772"));
        assert!(matches!(
            &actions[0],
            Action::PostToWorker(WorkerMessage::ToggleFavorite { meal_id, .. })
                if meal_id == "52772"
        ));

        // second toggle removes it again
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(!state.is_favorite("52772"));
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let mut state = state();
        assert_eq!(state.theme_mode, ThemeMode::Light);

        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();

        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.active_theme().name, "dark");
        assert!(matches!(
            &actions[0],
            Action::PostToWorker(WorkerMessage::SetTheme {
                theme: ThemeMode::Dark,
                ..
            })
        ));
    }

    #[test]
    fn category_load_failure_is_silent() {
        let mut state = state();

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::WebResponse {
                kind: RequestKind::Categories,
                status: 500,
                body: vec![],
            },
        )
        .unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.categories.is_empty());
        assert_eq!(state.phase, ResultsPhase::Idle);
    }

    #[test]
    fn loaded_prefs_premark_favorites_and_apply_theme() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::PrefsLoaded {
                favorites: vec!["52772".to_string()],
                theme: ThemeMode::Dark,
            }),
        )
        .unwrap();

        assert_eq!(state.theme_mode, ThemeMode::Dark);

        handle_event(&mut state, &Event::RandomRequest).unwrap();
        deliver_results(&mut state, 1, results_body(&[("52772", "Teriyaki", "Chicken")]));

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards[0].is_favorite);
    }

    #[test]
    fn typing_is_confined_to_search_mode() {
        let mut state = state();

        // 'r' in normal mode is the random key, not input
        let (rendered, _) = handle_event(&mut state, &Event::Char('r')).unwrap();
        assert!(!rendered);
        assert!(state.search_input.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('e')).unwrap();
        handle_event(&mut state, &Event::Char('g')).unwrap();
        handle_event(&mut state, &Event::Char('g')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_input, "eg");
    }
}
