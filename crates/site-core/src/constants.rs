// Shared tuning constants used by both the particle field and the navigator.

// Particle field
pub const PARTICLE_COUNT: usize = 200; // fixed for the field's lifetime
pub const PARTICLE_SPEED_CAP: f32 = 0.5; // per-axis initial velocity magnitude bound
pub const CONNECT_DISTANCE: f32 = 180.0; // pairs closer than this get a line

// Section navigation
pub const SECTION_COOLDOWN_MS: i32 = 800; // wheel gestures are swallowed for this long after a transition

// The four content panels, in scroll order. Panel ids are the lowercased labels.
pub const SECTION_LABELS: [&str; 4] = ["Home", "About", "Projects", "Contact"];
