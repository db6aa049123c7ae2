//! Shared constants for the page behavior units.

// ── Typewriter ──────────────────────────────────────────────────

/// Heading text revealed by the typewriter when no config overrides it.
pub const TYPEWRITER_TEXT: &str = "Kaushal Bhattarai";

/// Delay between two typed characters, in milliseconds.
pub const TYPING_DELAY_MS: u32 = 100;

/// Delay between page load and the first typed character, in milliseconds.
pub const TYPING_START_DELAY_MS: u32 = 500;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Color game ──────────────────────────────────────────────────

/// Accent (`--gradient-start`) restored on reset.
pub const DEFAULT_ACCENT: &str = "#9580ff";

/// Link color (`--color-link`) restored on reset.
pub const DEFAULT_LINK: &str = "#2563eb";

/// Value the color input is reset to.
pub const DEFAULT_PICKER_VALUE: &str = "#0084ff";

/// Delay before scrolling the freshly shown picker into view.
pub const PICKER_SCROLL_DELAY_MS: u32 = 100;

/// Lightness above which the light backdrop pair is used. Strictly greater.
pub const LIGHT_BACKDROP_THRESHOLD: f64 = 0.5;

// ── Confetti ────────────────────────────────────────────────────

/// Particles spawned per burst.
pub const CONFETTI_COUNT: usize = 15;

/// Spawn offset between consecutive particles of one burst.
pub const CONFETTI_STAGGER_MS: u32 = 30;

/// Lifetime of one particle from its own spawn.
pub const CONFETTI_LIFETIME_MS: u32 = 1000;

/// Lower bound (inclusive) of particle speed, in pixels.
pub const CONFETTI_MIN_SPEED: f64 = 100.0;

/// Upper bound (exclusive) of particle speed, in pixels.
pub const CONFETTI_MAX_SPEED: f64 = 200.0;

/// Particle diameter in CSS pixels.
pub const CONFETTI_SIZE_PX: u32 = 10;

/// Particle colors.
pub const CONFETTI_PALETTE: [&str; 4] = ["#9580ff", "#80ffea", "#2563eb", "#60a5fa"];

/// Easing of the particle flight.
pub const CONFETTI_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// ── Scroll reveal ───────────────────────────────────────────────

/// Visible fraction at which an element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin: trigger 100px before the viewport bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Element classes animated on scroll.
pub const REVEAL_SELECTORS: [&str; 3] = [".project-card", ".skill-category", ".timeline-item"];
