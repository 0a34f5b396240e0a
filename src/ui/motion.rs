//! Motion styles for node enter and exit transitions.
//!
//! A single style is picked at startup and carried in every scene, so all
//! transitions within a session share one visual language. The engine only
//! names the style and its timing; how a renderer interprets "nebula" or
//! "tide" is entirely its own business.

use rand::Rng;

/// Visual style applied to node enter and exit transitions.
///
/// Chosen once per session via [`MotionStyle::random`]. Each style carries
/// its own enter and exit durations so renderers can schedule cleanup after
/// the exit transition settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStyle {
    /// Slow scale-and-blur bloom.
    Nebula,

    /// Sharp rotating pop.
    Prism,

    /// Horizontal drift with a skew.
    Tide,
}

impl MotionStyle {
    /// Picks one of the three styles uniformly at random.
    #[must_use]
    pub fn random() -> Self {
        match rand::thread_rng().gen_range(0..3) {
            0 => Self::Nebula,
            1 => Self::Prism,
            _ => Self::Tide,
        }
    }

    /// Stable lowercase name, suitable for log fields and renderer hooks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nebula => "nebula",
            Self::Prism => "prism",
            Self::Tide => "tide",
        }
    }

    /// Duration of the enter transition in milliseconds.
    #[must_use]
    pub const fn enter_ms(self) -> u64 {
        match self {
            Self::Nebula => 700,
            Self::Prism => 620,
            Self::Tide => 640,
        }
    }

    /// Duration of the exit transition in milliseconds.
    #[must_use]
    pub const fn exit_ms(self) -> u64 {
        match self {
            Self::Nebula => 500,
            Self::Prism => 420,
            Self::Tide => 480,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_longer_enter_than_exit() {
        for style in [MotionStyle::Nebula, MotionStyle::Prism, MotionStyle::Tide] {
            assert!(style.enter_ms() > style.exit_ms(), "style {}", style.as_str());
        }
    }

    #[test]
    fn durations_match_the_styling_contract() {
        assert_eq!(MotionStyle::Nebula.enter_ms(), 700);
        assert_eq!(MotionStyle::Nebula.exit_ms(), 500);
        assert_eq!(MotionStyle::Prism.enter_ms(), 620);
        assert_eq!(MotionStyle::Prism.exit_ms(), 420);
        assert_eq!(MotionStyle::Tide.enter_ms(), 640);
        assert_eq!(MotionStyle::Tide.exit_ms(), 480);
    }

    #[test]
    fn random_always_lands_on_a_known_style() {
        for _ in 0..32 {
            let style = MotionStyle::random();
            assert!(matches!(
                style,
                MotionStyle::Nebula | MotionStyle::Prism | MotionStyle::Tide
            ));
        }
    }
}
