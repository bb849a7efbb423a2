use log::Level;

/// Fraction of a region that must be on screen before it counts as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Viewport inset used by section trackers, in CSS `rootMargin` syntax.
pub const DEFAULT_MARGIN: &str = "-50px";

/// Inset for whole-section trackers. Any overlap inside it counts.
pub const SECTION_MARGIN: &str = "-100px";

/// Counters trigger a little later than the sections around them.
pub const COUNTER_MARGIN: &str = "-100px";

pub const DEFAULT_COUNT_UP_MS: u32 = 2000;

/// Extra duration given to each successive counter in a stats grid.
pub const COUNTER_STAGGER_MS: u32 = 200;

/// Delay between cards revealed one after another.
pub const CARD_STAGGER_MS: u32 = 100;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const LANGUAGE_STORAGE_KEY: &str = "lang";

/// How often the footer clock refreshes.
pub const CLOCK_REFRESH_MS: u32 = 60_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
