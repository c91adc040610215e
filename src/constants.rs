/// Page tuning constants.
///
/// These express intended behavior (thresholds, counts, colors) and keep
/// magic numbers out of the wiring code. The typewriter cadence lives with
/// `TyperTiming` in the core.
// Hero phrases cycled by the typewriter
pub const PHRASES: [&str; 4] = [
    "Building scalable cloud systems",
    "Crafting elegant backend solutions",
    "Exploring AI & Machine Learning",
    "Optimizing performance at scale",
];

// Particle background
pub const PARTICLE_COUNT: usize = 40; // kept low, the field is decorative
pub const PARTICLE_FILL: &str = "rgba(102, 126, 234, 0.7)";
pub const FRAME_MIN_INTERVAL_MS: u64 = 30; // caps the canvas loop near 33 fps

// Fixed navbar height compensated when scrolling to an anchor (CSS pixels)
pub const NAV_OFFSET_PX: f64 = 70.0;

// Scroll-position thresholds (CSS pixels)
pub const NAVBAR_SCROLLED_Y: f64 = 100.0;
pub const BACK_TO_TOP_SHOW_Y: f64 = 300.0;

// Scroll-triggered observer tuning
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PROGRESS_THRESHOLD: f64 = 0.3;
