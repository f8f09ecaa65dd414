//! Splash screen timeline.

use std::time::Duration;

use tokio::time::sleep;

/// How long the splash is shown before it starts to exit.
pub const SPLASH_DISPLAY: Duration = Duration::from_millis(3000);
/// Length of the exit transition.
pub const SPLASH_EXIT: Duration = Duration::from_millis(800);
/// Delay after initialisation before the page is marked `loaded`.
pub const LOADED_DELAY: Duration = Duration::from_millis(100);

/// Class on `<body>` while the splash is up.
pub const SPLASH_ACTIVE_CLASS: &str = "splash-active";
/// Class on the splash element during the exit transition.
pub const SPLASH_EXIT_CLASS: &str = "splash-exit";
/// Class on `<body>` once initialisation settles.
pub const LOADED_CLASS: &str = "loaded";

/// Splash screen lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Splash shown, scroll locked, page at the top.
    Showing,
    /// Exit transition running; scroll still locked.
    Exiting,
    /// Splash element removed, scroll unlocked, page back at the top.
    Removed,
}

impl SplashPhase {
    #[must_use]
    pub const fn locks_scroll(self) -> bool {
        matches!(self, Self::Showing | Self::Exiting)
    }

    /// Whether entering this phase scrolls the page to the top.
    #[must_use]
    pub const fn scrolls_to_top(self) -> bool {
        matches!(self, Self::Showing | Self::Removed)
    }
}

/// Drives the splash timeline.
#[derive(Debug, Clone, Copy)]
pub struct SplashScreen {
    display: Duration,
    exit: Duration,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self {
            display: SPLASH_DISPLAY,
            exit: SPLASH_EXIT,
        }
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the timeline, reporting each phase to `sink` as it is entered.
    pub async fn run<F>(self, mut sink: F)
    where
        F: FnMut(SplashPhase),
    {
        sink(SplashPhase::Showing);
        sleep(self.display).await;
        sink(SplashPhase::Exiting);
        sleep(self.exit).await;
        sink(SplashPhase::Removed);
        tracing::debug!("Splash screen removed");
    }
}

/// Resolves once the page should be marked [`LOADED_CLASS`].
pub async fn loaded() {
    sleep(LOADED_DELAY).await;
}
