//! Benefits accordion with a companion image.

use std::collections::HashSet;

use super::config::{AccordionImage, LandingConfig};

/// Result of toggling a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionToggle<'a> {
    /// Whether the panel is now expanded (`aria-expanded`).
    pub expanded: bool,
    /// Image to show in the companion image container.
    pub image: &'a AccordionImage,
}

/// Accordion panels. Any number may be open at once.
#[derive(Debug, Clone)]
pub struct Accordion {
    config: LandingConfig,
    open: HashSet<String>,
}

impl Accordion {
    #[must_use]
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config,
            open: HashSet::new(),
        }
    }

    /// Flip the panel `id`.
    ///
    /// Expanding shows the panel's image, or the default image when the
    /// panel has none; collapsing shows the default image. Returns `None`
    /// for an unknown panel.
    pub fn toggle(&mut self, id: &str) -> Option<AccordionToggle<'_>> {
        let panel = self.config.panel(id)?;

        let expanded = if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        };

        let image = match (&panel.image, expanded) {
            (Some(image), true) => image,
            _ => &self.config.default_image,
        };
        tracing::debug!(panel = id, expanded, image = %image.src, "Accordion toggled");

        Some(AccordionToggle { expanded, image })
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    #[must_use]
    pub const fn config(&self) -> &LandingConfig {
        &self.config
    }
}
