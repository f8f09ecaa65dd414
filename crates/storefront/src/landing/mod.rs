//! Landing page widgets.
//!
//! Each widget is a small state machine fed with page events (clicks, key
//! presses, intersection batches, visibility changes) and answering with the
//! state the page should show. None of them touches a document directly;
//! the caller applies the returned classes, images and styles.
//!
//! # Widgets
//!
//! - [`MobileMenu`] - hamburger-driven navigation drawer
//! - [`SectionTracker`] - highlights the nav link of the section in view
//! - [`Accordion`] - benefit panels with a companion image
//! - [`SplashScreen`] - timed intro overlay
//! - [`ScrollAnimations`] - one-shot reveal on scroll
//! - [`Ripple`] / [`EffectButton`] - button click and hover effects
//! - [`MotionPolicy`] - reduced motion and pausing

mod accordion;
mod config;
mod effects;
mod menu;
mod motion;
mod navigation;
mod scroll;
pub mod splash;

pub use accordion::{Accordion, AccordionToggle};
pub use config::{AccordionImage, LandingConfig, LandingConfigError, PanelConfig};
pub use effects::{
    CTA_HOVER_SHADOW, EffectButton, FEATURED_PLAN_CLASS, FEATURED_PLAN_HOVER_SHADOW,
    PLAN_HOVER_SHADOW, RIPPLE_LIFETIME, Rect, Ripple,
};
pub use menu::{MenuEvent, MobileMenu};
pub use motion::{MIN_CORES_FOR_FULL_MOTION, MotionPolicy, PAUSED_CLASS, REDUCED_MOTION_CLASS};
pub use navigation::{
    FOOTER_PRIORITY_RATIO, FOOTER_SECTION, INITIAL_SECTION, SECTION_ROOT_MARGIN,
    SECTION_THRESHOLDS, SectionIntersection, SectionTracker,
};
pub use scroll::{
    ANIMATE_IN_CLASS, ANIMATED_SELECTORS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, ScrollAnimations,
};
pub use splash::{SplashPhase, SplashScreen};
