//! Top-level rendering coordination.
//!
//! This module defines the [`Renderer`] seam the embedding host implements
//! and the [`SceneDriver`] that feeds it. The engine never draws anything
//! itself; it describes scenes and the driver translates scene differences
//! into renderer calls.
//!
//! # Architecture
//!
//! Drawing follows a two-step process:
//!
//! 1. **Scene Computation**: `AppState::compute_scene()` produces a [`ScenePlan`]
//! 2. **Scene Application**: [`SceneDriver::draw`] diffs the scene against the
//!    previous one and delegates to the renderer
//!
//! The driver keeps renderer calls minimal: departed nodes are removed,
//! every current node is upserted (creation and visibility updates look the
//! same to the driver), the theme is only reapplied when the flag changed,
//! and ambient drift is only restarted when the node membership changed.

use crate::ui::motion::MotionStyle;
use crate::ui::theme::ThemeFlag;
use crate::ui::viewmodel::{HotkeyBadge, NodeView, ScenePlan};
use std::collections::HashSet;

/// Rendering surface the embedding host implements.
///
/// Calls arrive in a fixed order per draw: removals, upserts in store order,
/// hotkey badges, then theme and drift changes when they apply. Implementors
/// are expected to animate node enters and exits with the given
/// [`MotionStyle`] and to keep drifting nodes between draws.
pub trait Renderer {
    /// Creates the node or updates its visibility, marker, and reveal state.
    fn upsert_node(&mut self, node: &NodeView, motion: MotionStyle);

    /// Removes the node, playing the style's exit transition.
    fn remove_node(&mut self, id: &str, motion: MotionStyle);

    /// Replaces the digit badge strip; an empty slice hides it.
    fn set_hotkeys(&mut self, badges: &[HotkeyBadge]);

    /// Applies the color scheme to the whole surface.
    fn apply_theme(&mut self, theme: ThemeFlag);

    /// Rebuilds the ambient drift animation over the current node count.
    fn restart_drift(&mut self, node_count: usize);
}

/// Applies scene differences to a [`Renderer`].
///
/// Remembers the previously drawn node order and theme so repeated draws of
/// similar scenes stay cheap and drifting nodes are not reset by every
/// keystroke.
#[derive(Debug, Default)]
pub struct SceneDriver {
    drawn: Vec<String>,
    theme: Option<ThemeFlag>,
}

impl SceneDriver {
    /// Creates a driver with no drawn scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a scene, delegating the differences to the renderer.
    ///
    /// Node membership changes restart the ambient drift; pure filter
    /// changes only toggle node state through upserts. The first draw
    /// upserts everything and applies the stored theme.
    pub fn draw(&mut self, scene: &ScenePlan, renderer: &mut dyn Renderer) {
        let _span = tracing::debug_span!("draw_scene",
            node_count = scene.nodes.len(),
            revealing = scene.revealing
        )
        .entered();

        let ids: Vec<String> = scene.nodes.iter().map(|node| node.id.clone()).collect();
        let membership_changed = self.drawn != ids;

        let id_set: HashSet<&str> = ids.iter().map(String::as_str).collect();
        for departed in self.drawn.iter().filter(|id| !id_set.contains(id.as_str())) {
            tracing::debug!(item_id = %departed, "node departed");
            renderer.remove_node(departed, scene.motion);
        }

        for node in &scene.nodes {
            renderer.upsert_node(node, scene.motion);
        }

        renderer.set_hotkeys(&scene.hotkeys);

        if self.theme != Some(scene.theme) {
            renderer.apply_theme(scene.theme);
            self.theme = Some(scene.theme);
        }

        if membership_changed {
            renderer.restart_drift(ids.len());
        }
        self.drawn = ids;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::IconKind;
    use crate::ui::layout::constellation_positions;

    #[derive(Debug, PartialEq)]
    enum Call {
        Upsert(String),
        Remove(String),
        Hotkeys(usize),
        Theme(ThemeFlag),
        Drift(usize),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn upsert_node(&mut self, node: &NodeView, _motion: MotionStyle) {
            self.calls.push(Call::Upsert(node.id.clone()));
        }

        fn remove_node(&mut self, id: &str, _motion: MotionStyle) {
            self.calls.push(Call::Remove(id.to_string()));
        }

        fn set_hotkeys(&mut self, badges: &[HotkeyBadge]) {
            self.calls.push(Call::Hotkeys(badges.len()));
        }

        fn apply_theme(&mut self, theme: ThemeFlag) {
            self.calls.push(Call::Theme(theme));
        }

        fn restart_drift(&mut self, node_count: usize) {
            self.calls.push(Call::Drift(node_count));
        }
    }

    fn scene_with(ids: &[&str], theme: ThemeFlag) -> ScenePlan {
        let positions = constellation_positions(ids.len());
        let nodes = ids
            .iter()
            .zip(positions)
            .map(|(id, position)| NodeView {
                id: (*id).to_string(),
                name: (*id).to_string(),
                tags: String::new(),
                caption: String::new(),
                icon_kind: IconKind::Glyph,
                icon: "✨".to_string(),
                position,
                visible: true,
                active: false,
                reveal: false,
            })
            .collect();

        ScenePlan {
            nodes,
            hotkeys: Vec::new(),
            theme,
            motion: MotionStyle::Nebula,
            revealing: false,
        }
    }

    #[test]
    fn first_draw_builds_the_whole_scene() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();

        driver.draw(&scene_with(&["a", "b"], ThemeFlag::Light), &mut renderer);

        assert_eq!(renderer.calls, vec![
            Call::Upsert("a".to_string()),
            Call::Upsert("b".to_string()),
            Call::Hotkeys(0),
            Call::Theme(ThemeFlag::Light),
            Call::Drift(2),
        ]);
    }

    #[test]
    fn redraws_with_the_same_membership_leave_drift_and_theme_alone() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();
        let scene = scene_with(&["a", "b"], ThemeFlag::Light);

        driver.draw(&scene, &mut renderer);
        renderer.calls.clear();
        driver.draw(&scene, &mut renderer);

        assert_eq!(renderer.calls, vec![
            Call::Upsert("a".to_string()),
            Call::Upsert("b".to_string()),
            Call::Hotkeys(0),
        ]);
    }

    #[test]
    fn departed_nodes_are_removed_before_upserts() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();

        driver.draw(&scene_with(&["a", "b"], ThemeFlag::Light), &mut renderer);
        renderer.calls.clear();
        driver.draw(&scene_with(&["b"], ThemeFlag::Light), &mut renderer);

        assert_eq!(renderer.calls, vec![
            Call::Remove("a".to_string()),
            Call::Upsert("b".to_string()),
            Call::Hotkeys(0),
            Call::Drift(1),
        ]);
    }

    #[test]
    fn added_nodes_restart_the_drift_with_the_new_count() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();

        driver.draw(&scene_with(&["a"], ThemeFlag::Light), &mut renderer);
        renderer.calls.clear();
        driver.draw(&scene_with(&["new", "a"], ThemeFlag::Light), &mut renderer);

        assert!(renderer.calls.contains(&Call::Drift(2)));
        assert!(!renderer.calls.iter().any(|call| matches!(call, Call::Remove(_))));
    }

    #[test]
    fn theme_is_reapplied_only_when_the_flag_changes() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();

        driver.draw(&scene_with(&["a"], ThemeFlag::Light), &mut renderer);
        driver.draw(&scene_with(&["a"], ThemeFlag::Light), &mut renderer);
        driver.draw(&scene_with(&["a"], ThemeFlag::Dark), &mut renderer);

        let themes: Vec<&Call> = renderer
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Theme(_)))
            .collect();
        assert_eq!(themes, vec![
            &Call::Theme(ThemeFlag::Light),
            &Call::Theme(ThemeFlag::Dark),
        ]);
    }

    #[test]
    fn hotkey_badges_are_forwarded_every_draw() {
        let mut driver = SceneDriver::new();
        let mut renderer = RecordingRenderer::default();
        let mut scene = scene_with(&["a", "b"], ThemeFlag::Light);
        scene.hotkeys = vec![
            HotkeyBadge {
                digit: 1,
                item_id: "a".to_string(),
                label: "a".to_string(),
            },
            HotkeyBadge {
                digit: 2,
                item_id: "b".to_string(),
                label: "b".to_string(),
            },
        ];

        driver.draw(&scene, &mut renderer);

        assert!(renderer.calls.contains(&Call::Hotkeys(2)));
    }
}
