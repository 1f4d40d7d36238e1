// Frontend tuning: element ids, particle visuals, indicator geometry.

// Host-page element ids
pub const CANVAS_ID: &str = "background-canvas";
pub const SECTION_CONTAINER_ID: &str = "section-container";
pub const INDICATOR_ID: &str = "section-nav";
pub const SPLASH_ID: &str = "splash";
pub const MARKER_ID_PREFIX: &str = "section-marker-";

// Splash overlay
pub const SPLASH_DURATION_MS: i32 = 1500;

// Particle rendering
pub const PARTICLE_RADIUS: f64 = 3.0;
pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.8)";
pub const CONNECT_LINE_WIDTH: f64 = 0.6;
// Two-stop gradient along each connection line, cyan into magenta
pub const CONNECT_GRADIENT_FROM: &str = "rgba(0, 255, 255, 0.7)";
pub const CONNECT_GRADIENT_TO: &str = "rgba(255, 0, 255, 0.7)";

// Side indicator markers
pub const MARKER_ACTIVE_COLOR: &str = "rgba(146, 34, 238, 1)";
pub const MARKER_IDLE_COLOR: &str = "rgba(255, 255, 255, 0.35)";
pub const MARKER_ACTIVE_WIDTH_PX: u32 = 12;
pub const MARKER_ACTIVE_HEIGHT_PX: u32 = 60;
pub const MARKER_IDLE_WIDTH_PX: u32 = 8;
pub const MARKER_IDLE_HEIGHT_PX: u32 = 40;
// Overshooting easing, stands in for the original spring animation
pub const MARKER_TRANSITION: &str = "all 0.45s cubic-bezier(0.34, 1.56, 0.64, 1)";
