//! Active navigation link tracking.
//!
//! Sections are observed with an intersection observer; each batch of
//! entries picks the section whose nav link should be highlighted.

use std::collections::HashSet;

/// Section that is active before any intersection is observed.
pub const INITIAL_SECTION: &str = "home";
/// Footer section, which wins whenever it is visible enough.
pub const FOOTER_SECTION: &str = "section-footer";
/// Ratio above which a visible footer takes precedence.
pub const FOOTER_PRIORITY_RATIO: f64 = 0.2;

/// Observer root margin for section tracking.
pub const SECTION_ROOT_MARGIN: &str = "-10% 0px -30% 0px";
/// Observer thresholds for section tracking.
pub const SECTION_THRESHOLDS: [f64; 4] = [0.1, 0.3, 0.5, 0.7];

/// One intersection observer entry for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionIntersection<'a> {
    pub section_id: &'a str,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl<'a> SectionIntersection<'a> {
    #[must_use]
    pub const fn visible(section_id: &'a str, ratio: f64) -> Self {
        Self {
            section_id,
            ratio,
            is_intersecting: true,
        }
    }

    #[must_use]
    pub const fn hidden(section_id: &'a str) -> Self {
        Self {
            section_id,
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

/// Tracks which nav link is highlighted.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    /// Sections that have a nav link (`a[href="#id"]`).
    linked: HashSet<String>,
    active: Option<String>,
}

impl SectionTracker {
    /// Create a tracker for the sections that have nav links, activating
    /// [`INITIAL_SECTION`] if it has one.
    pub fn new<I, S>(linked_sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tracker = Self {
            linked: linked_sections.into_iter().map(Into::into).collect(),
            active: None,
        };
        tracker.set_active(INITIAL_SECTION);
        tracker
    }

    /// The highlighted section, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Process a batch of entries. Returns the newly active section if the
    /// highlight moved.
    pub fn observe(&mut self, entries: &[SectionIntersection<'_>]) -> Option<&str> {
        let target = Self::pick(entries)?;
        if self.set_active(target) {
            self.active()
        } else {
            None
        }
    }

    /// Highlight `section_id`. Returns whether the highlight moved.
    ///
    /// Sections without a nav link leave the current highlight in place.
    pub fn set_active(&mut self, section_id: &str) -> bool {
        if self.active.as_deref() == Some(section_id) {
            return false;
        }
        if !self.linked.contains(section_id) {
            tracing::debug!(section = section_id, "No nav link for section");
            return false;
        }
        self.active = Some(section_id.to_string());
        true
    }

    fn pick<'a>(entries: &[SectionIntersection<'a>]) -> Option<&'a str> {
        let visible = || entries.iter().filter(|e| e.is_intersecting);

        if visible().any(|e| e.section_id == FOOTER_SECTION && e.ratio > FOOTER_PRIORITY_RATIO) {
            return Some(FOOTER_SECTION);
        }

        visible()
            .fold(None, |best: Option<&SectionIntersection<'a>>, e| match best {
                Some(b) if e.ratio <= b.ratio => Some(b),
                _ => Some(e),
            })
            .map(|e| e.section_id)
    }
}
