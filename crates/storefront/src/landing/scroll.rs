//! Scroll-triggered reveal animations.

use std::collections::HashSet;

/// Elements that animate in when scrolled into view.
pub const ANIMATED_SELECTORS: &[&str] = &[
    ".text-content",
    ".image-content",
    ".scroll-indicator",
    ".problem-heading",
    ".problem-sub",
    ".intro-title",
    ".intro-subtitle",
    ".intro-copy",
    ".intro-image",
    ".how-title",
    ".how-badge",
    ".how-card",
    ".accordion",
    ".device-frame",
    ".timeline-header",
    ".timeline-item",
    ".timeline-cta",
    ".challenge-header",
    ".plan-card",
    ".challenge-footer",
    ".benefit-item",
];

/// Observer threshold for reveal animations.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Observer root margin for reveal animations.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Class added to an element once it has been revealed.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Remembers which elements have been revealed.
///
/// The class is never removed, so an element animates at most once.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimations {
    revealed: HashSet<String>,
}

impl ScrollAnimations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an intersection for `element_id`. Returns `true` if
    /// [`ANIMATE_IN_CLASS`] should be added now.
    pub fn observe(&mut self, element_id: &str, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(element_id.to_string())
    }

    #[must_use]
    pub fn is_revealed(&self, element_id: &str) -> bool {
        self.revealed.contains(element_id)
    }
}
