//! Engine-wide tuning constants.

/// Default length of an era-to-era transition, in seconds.
pub const DEFAULT_TRANSITION_SECS: f32 = 0.8;

/// Eased progress at which edge styling switches from the transition's
/// origin era to its destination era. Era identity is discrete while
/// position is continuous, so the mid-flight snap is deliberate.
pub const HIGHLIGHT_SWITCH_PROGRESS: f32 = 0.5;

/// Assumed one-way trips per day on a route that does not declare its own
/// volume. Feeds the editorial annual-savings estimate only.
pub const DEFAULT_DAILY_TRIPS: f32 = 1200.0;

/// Days per year used by the annual-savings estimate.
pub const DAYS_PER_YEAR: f32 = 365.0;
