//! Button ripple and hover glow.

use std::time::Duration;

/// How long a ripple element lives before removal.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// Glow on the hero call-to-action.
pub const CTA_HOVER_SHADOW: &str = "0 15px 40px rgba(213, 139, 42, 0.4)";
/// Glow on the featured plan's call-to-action.
pub const FEATURED_PLAN_HOVER_SHADOW: &str = "0 10px 30px rgba(213, 139, 42, 0.4)";
/// Glow on the other plan calls-to-action.
pub const PLAN_HOVER_SHADOW: &str = "0 10px 30px rgba(213, 139, 42, 0.2)";

/// Class marking the featured plan button.
pub const FEATURED_PLAN_CLASS: &str = "plan-cta-100";

/// A button's bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Position and size of a ripple, relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// A ripple centred on the click at (`client_x`, `client_y`), large
    /// enough to cover the button.
    #[must_use]
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }
}

/// Buttons that get hover and ripple effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectButton {
    /// The hero `.cta-button`.
    Cta,
    /// A `.plan-cta`; `featured` when it also carries [`FEATURED_PLAN_CLASS`].
    Plan { featured: bool },
}

impl EffectButton {
    /// Classify a plan button by its class list.
    #[must_use]
    pub fn plan<'a>(mut classes: impl Iterator<Item = &'a str>) -> Self {
        Self::Plan {
            featured: classes.any(|c| c == FEATURED_PLAN_CLASS),
        }
    }

    /// Box shadow while hovered. Cleared on mouse leave.
    #[must_use]
    pub const fn hover_shadow(self) -> &'static str {
        match self {
            Self::Cta => CTA_HOVER_SHADOW,
            Self::Plan { featured: true } => FEATURED_PLAN_HOVER_SHADOW,
            Self::Plan { featured: false } => PLAN_HOVER_SHADOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_geometry() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 60.0,
        };
        let ripple = Ripple::at(rect, 150.0, 70.0);
        assert!((ripple.size - 200.0).abs() < f64::EPSILON);
        assert!((ripple.x - -50.0).abs() < f64::EPSILON);
        assert!((ripple.y - -80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ripple_uses_larger_side() {
        let rect = Rect {
            left: 0.0,
            top: 0.0,
            width: 40.0,
            height: 90.0,
        };
        let ripple = Ripple::at(rect, 20.0, 45.0);
        assert!((ripple.size - 90.0).abs() < f64::EPSILON);
        assert!((ripple.x - -25.0).abs() < f64::EPSILON);
        assert!((ripple.y - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hover_shadows() {
        assert_eq!(
            EffectButton::Cta.hover_shadow(),
            "0 15px 40px rgba(213, 139, 42, 0.4)"
        );
        assert_eq!(
            EffectButton::plan(["plan-cta", "plan-cta-100"].into_iter()).hover_shadow(),
            "0 10px 30px rgba(213, 139, 42, 0.4)"
        );
        assert_eq!(
            EffectButton::plan(["plan-cta", "plan-cta-30"].into_iter()).hover_shadow(),
            "0 10px 30px rgba(213, 139, 42, 0.2)"
        );
    }
}
