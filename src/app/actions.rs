//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions bridge pure state
//! transitions and effectful host operations like opening a link in the
//! browser, saving an export file, or arming the debounce timer.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence; the engine never performs these effects itself.

use std::time::Instant;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Opens the item's link.
    ///
    /// Produced by activations (Enter, digit hotkeys, node clicks routed
    /// through the host). The host hands the URL to its [`LinkOpener`].
    OpenUrl {
        /// Link of the activated item.
        url: String,
    },

    /// Arms a timer that delivers a `Tick` event at the deadline.
    ///
    /// Produced for every live query edit. A newer edit produces a newer
    /// deadline; the engine ignores ticks for superseded deadlines, so the
    /// host may arm a fresh timer per action without canceling old ones.
    ScheduleFilter {
        /// Point in time to deliver the tick at.
        deadline: Instant,
    },

    /// Hands the serialized export payload to the host.
    ///
    /// The host saves it wherever user downloads land, under the suggested
    /// file name.
    ExportReady {
        /// Suggested file name for the saved export.
        file_name: String,
        /// Pretty-printed JSON array of the current items.
        payload: String,
    },
}

/// Host-side consumer of activated links.
///
/// The engine never opens links itself; it emits [`Action::OpenUrl`] and the
/// host routes the URL here, typically into the system browser. Tests
/// substitute a recording implementation.
pub trait LinkOpener {
    /// Opens the given URL in whatever the host considers a browser.
    fn open_url(&mut self, url: &str);
}

/// Routes the link-opening subset of an action batch into the opener.
///
/// Convenience for hosts whose only engine-agnostic capability is opening
/// links; timer arming and export delivery stay with the caller.
pub fn open_links(actions: &[Action], opener: &mut dyn LinkOpener) {
    for action in actions {
        if let Action::OpenUrl { url } = action {
            tracing::debug!(url = %url, "opening link");
            opener.open_url(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Vec<String>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_url(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    #[test]
    fn only_open_url_actions_reach_the_opener() {
        let actions = vec![
            Action::ScheduleFilter {
                deadline: Instant::now(),
            },
            Action::OpenUrl {
                url: "https://tide.example".to_string(),
            },
            Action::ExportReady {
                file_name: "launcher-export.json".to_string(),
                payload: "[]".to_string(),
            },
        ];

        let mut opener = RecordingOpener::default();
        open_links(&actions, &mut opener);

        assert_eq!(opener.opened, vec!["https://tide.example"]);
    }

    #[test]
    fn empty_batches_open_nothing() {
        let mut opener = RecordingOpener::default();
        open_links(&[], &mut opener);
        assert!(opener.opened.is_empty());
    }
}
