//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and data mutations, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! engine.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the embedding host
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the store, index, filter, and cursor
//! 4. Actions are collected and returned for execution
//!
//! Query edits take a buffered lane: [`Event::QueryEdited`] only arms a
//! timer via [`Action::ScheduleFilter`], and the matching [`Event::Tick`]
//! applies the edit once the quiet window elapsed. Every other event acts
//! immediately.
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Query**: `QueryEdited`, `Tick`, `ResetQuery`
//! - **Navigation**: `NextItem`, `PrevItem`, `Activate`, `Digit`
//! - **Data**: `SubmitItem`, `RemoveItem`, `ImportSubmitted`, `ExportRequested`
//! - **Appearance**: `ToggleTheme`
//!
//! # Example
//!
//! ```no_run
//! use fluxline::app::{handle_event, AppState, Event};
//! use fluxline::storage::JsonStore;
//! use fluxline::ui::motion::MotionStyle;
//! use std::path::Path;
//!
//! let store = JsonStore::open(Path::new("./fluxline-data"));
//! let mut state = AppState::new(Box::new(store), MotionStyle::random());
//! let (redraw, actions) = handle_event(&mut state, &Event::NextItem)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), fluxline::FluxlineError>(())
//! ```

use crate::app::filter::FilterOutcome;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::item::ItemDraft;
use crate::storage::{export_payload, parse_import, EXPORT_FILE_NAME};
use std::time::Instant;

/// Events triggered by user input or data mutations.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reports the current content of the search field.
    ///
    /// Buffered rather than applied: the handler returns a
    /// [`Action::ScheduleFilter`] deadline and expects a [`Event::Tick`]
    /// once the timer fires.
    QueryEdited {
        /// Full text of the search field after the edit.
        query: String,
        /// When the edit happened.
        at: Instant,
    },

    /// Reports that a previously scheduled filter timer fired.
    Tick {
        /// When the timer fired.
        at: Instant,
    },

    /// Clears the query and shows the full constellation immediately.
    ResetQuery,

    /// Moves the active marker forward through the visible subset (wraps).
    NextItem,

    /// Moves the active marker backward through the visible subset (wraps).
    PrevItem,

    /// Opens the item the active marker resolves to.
    Activate,

    /// Opens the n-th visible item directly via its digit badge.
    Digit(u8),

    /// Submits a new item from the add form.
    SubmitItem(ItemDraft),

    /// Removes the item with the given identifier.
    RemoveItem {
        /// Identifier of the item to remove.
        id: String,
    },

    /// Submits raw import text to replace the whole item list.
    ImportSubmitted {
        /// Raw JSON payload as pasted or read from a chosen file.
        payload: String,
    },

    /// Requests a downloadable export of the current item list.
    ExportRequested,

    /// Flips the color scheme between light and dark.
    ToggleTheme,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, mutates state, and
/// collects actions to be executed by the embedding host.
///
/// # Returns
///
/// A redraw flag plus a vector of actions to execute in sequence. The flag
/// is `false` when the scene could not have changed (a buffered edit, a
/// stale tick, an activation with no eligible target).
///
/// # Errors
///
/// Currently infallible in practice: rejected imports and failed exports are
/// logged and swallowed so one bad payload cannot take the session down. The
/// `Result` stays in the signature for mutations that may grow failure modes.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryEdited { query, at } => {
            let deadline = state.filter.queue_edit(query.clone(), *at);
            Ok((false, vec![Action::ScheduleFilter { deadline }]))
        }
        Event::Tick { at } => {
            match state
                .filter
                .apply_pending(state.store.items(), &state.index, *at)
            {
                Some(outcome) => {
                    align_selection(state, &outcome);
                    Ok((true, vec![]))
                }
                None => {
                    tracing::trace!("tick without a due edit");
                    Ok((false, vec![]))
                }
            }
        }
        Event::ResetQuery => {
            tracing::debug!("query reset");
            let outcome = state.filter.reset(state.store.items(), &state.index);
            align_selection(state, &outcome);
            Ok((true, vec![]))
        }
        Event::NextItem => {
            state.nav.next(state.filter.visible_count());
            Ok((true, vec![]))
        }
        Event::PrevItem => {
            state.nav.prev(state.filter.visible_count());
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(item) = state.nav.activation_target(state.filter.visible()) else {
                tracing::debug!("activation with no eligible item");
                return Ok((false, vec![]));
            };

            tracing::debug!(item_id = %item.id, url = %item.url, "item activated");
            Ok((false, vec![Action::OpenUrl {
                url: item.url.clone(),
            }]))
        }
        Event::Digit(digit) => {
            let Some(item) = state.nav.digit_target(state.filter.visible(), *digit) else {
                tracing::debug!(digit = *digit, "digit outside the hotkey range");
                return Ok((false, vec![]));
            };

            tracing::debug!(item_id = %item.id, digit = *digit, "item activated by digit");
            Ok((false, vec![Action::OpenUrl {
                url: item.url.clone(),
            }]))
        }
        Event::SubmitItem(draft) => {
            tracing::debug!(name = %draft.name, "item submitted");

            let items = state.store.add(draft.clone());
            state.index.rebuild(items);

            let outcome = state.filter.refresh(state.store.items(), &state.index, true);
            align_selection(state, &outcome);
            Ok((true, vec![]))
        }
        Event::RemoveItem { id } => {
            tracing::debug!(item_id = %id, "item removal requested");

            let items = state.store.remove(id);
            state.index.rebuild(items);

            let outcome = state.filter.refresh(state.store.items(), &state.index, false);
            align_selection(state, &outcome);
            Ok((true, vec![]))
        }
        Event::ImportSubmitted { payload } => match parse_import(payload) {
            Ok(imported) => {
                tracing::debug!(item_count = imported.len(), "import accepted");

                let items = state.store.replace_all(imported);
                state.index.rebuild(items);

                let outcome = state.filter.refresh(state.store.items(), &state.index, true);
                align_selection(state, &outcome);
                Ok((true, vec![]))
            }
            Err(error) => {
                tracing::error!(%error, "import rejected, keeping current items");
                Ok((false, vec![]))
            }
        },
        Event::ExportRequested => match export_payload(state.store.items()) {
            Ok(payload) => {
                tracing::debug!(bytes = payload.len(), "export prepared");
                Ok((false, vec![Action::ExportReady {
                    file_name: EXPORT_FILE_NAME.to_string(),
                    payload,
                }]))
            }
            Err(error) => {
                tracing::error!(%error, "export failed");
                Ok((false, vec![]))
            }
        },
        Event::ToggleTheme => {
            let theme = state.store.theme().toggled();
            tracing::debug!(theme = %theme.as_str(), "theme toggled");
            state.store.set_theme(theme);
            Ok((true, vec![]))
        }
    }
}

/// Snaps the active marker to the first visible item after a filter pass.
///
/// An empty subset leaves the cursor untouched, matching the rule that the
/// marker only moves when there is something to mark.
fn align_selection(state: &mut AppState, outcome: &FilterOutcome) {
    if !outcome.visible.is_empty() {
        state.nav.reset();
    }
}
