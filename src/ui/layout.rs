//! Deterministic spiral layout for the bookmark constellation.
//!
//! Node positions depend only on the item index and the total item count, so
//! layout is stable across renders: filtering hides nodes without moving
//! their neighbours, and the constellation only rearranges when items are
//! added or removed.

use std::f64::consts::PI;

/// A node position in viewport percentage coordinates.
///
/// Both axes are centered on 50.0. Values can slightly overshoot the
/// `0.0..=100.0` range at the outer rim; renderers are expected to let
/// overshooting nodes clip at the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal position in percent of viewport width.
    pub x: f64,

    /// Vertical position in percent of viewport height.
    pub y: f64,
}

/// Computes spiral positions for `count` nodes.
///
/// Nodes are placed on a golden-angle spiral radiating from the viewport
/// center, with small sinusoidal perturbations so the result reads as a
/// constellation rather than a mathematical curve.
#[must_use]
pub fn constellation_positions(count: usize) -> Vec<Position> {
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());

    (0..count)
        .map(|index| {
            let i = index as f64;
            let angle = i * golden_angle;
            let radius = ((i + 1.0) / (count as f64 + 3.0)).sqrt();
            let wobble = (i * 0.9).sin() * 0.12;
            let r = (0.2 + radius * 0.75 + wobble) * 45.0;

            Position {
                x: 50.0 + angle.cos() * r + (angle * 1.3).sin() * 6.0,
                y: 50.0 + angle.sin() * r + (angle * 0.7).cos() * 8.0,
            }
        })
        .collect()
}
