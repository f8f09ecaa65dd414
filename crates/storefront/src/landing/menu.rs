//! Mobile navigation drawer.

/// Events the mobile menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<'a> {
    HamburgerClicked,
    NavLinkClicked,
    /// A click that landed outside both the hamburger and the drawer.
    ClickedOutside,
    /// A key press, by its `KeyboardEvent.key` name.
    KeyPressed(&'a str),
}

/// Open/closed state of the mobile drawer.
///
/// The hamburger and the drawer share this state; both carry the `active`
/// class while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle(&mut self, event: MenuEvent<'_>) -> bool {
        let was_open = self.open;
        match event {
            MenuEvent::HamburgerClicked => self.open = !self.open,
            MenuEvent::NavLinkClicked
            | MenuEvent::ClickedOutside
            | MenuEvent::KeyPressed("Escape") => self.open = false,
            MenuEvent::KeyPressed(_) => {}
        }
        was_open != self.open
    }
}
