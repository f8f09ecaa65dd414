//! Motion policy for low-end devices and hidden tabs.

/// Devices reporting fewer logical cores than this get reduced motion.
pub const MIN_CORES_FOR_FULL_MOTION: u32 = 4;

/// Class on `<body>` for reduced motion.
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
/// Class on `<body>` while the document is hidden.
pub const PAUSED_CLASS: &str = "paused";

/// Whether animations run, and how much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    reduced: bool,
    paused: bool,
}

impl MotionPolicy {
    /// Policy for a device reporting `hardware_concurrency` logical cores.
    /// An unknown core count keeps full motion.
    #[must_use]
    pub fn for_device(hardware_concurrency: Option<u32>) -> Self {
        let reduced = hardware_concurrency.is_some_and(|n| n < MIN_CORES_FOR_FULL_MOTION);
        if reduced {
            tracing::debug!(?hardware_concurrency, "Reduced motion enabled");
        }
        Self {
            reduced,
            paused: false,
        }
    }

    /// Visibility changed. Returns whether the paused state changed.
    pub const fn set_hidden(&mut self, hidden: bool) -> bool {
        let changed = self.paused != hidden;
        self.paused = hidden;
        changed
    }

    #[must_use]
    pub const fn is_reduced(&self) -> bool {
        self.reduced
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Classes `<body>` should carry.
    #[must_use]
    pub fn body_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.reduced {
            classes.push(REDUCED_MOTION_CLASS);
        }
        if self.paused {
            classes.push(PAUSED_CLASS);
        }
        classes
    }
}
