/// Globe simulation tuning constants.
///
/// These constants express intended behavior (pulse rates, spring tunables,
/// sampling bounds) and keep magic numbers out of the code.
// Rotation
pub const AUTO_ROTATE_STEP: f32 = 0.005; // radians advanced per frame when idle
pub const TILT_THETA: f32 = 0.3; // constant sphere tilt

// Pointer drag sensitivity divisors (px of drag per radian of target offset)
pub const DRAG_DIVISOR_MOUSE: f32 = 200.0;
pub const DRAG_DIVISOR_TOUCH: f32 = 100.0;

// Spring tunables for the interaction offset
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_TENSION: f32 = 280.0;
pub const SPRING_FRICTION: f32 = 40.0;
pub const SPRING_PRECISION: f32 = 1e-3;

// Clamp on per-frame delta time; a background tab can starve RAF for seconds
pub const DT_CLAMP_MAX_SEC: f32 = 0.1;

// Marker pulse shaping
pub const DEST_PULSE_DIVISOR_MS: f64 = 200.0;
pub const DEST_PULSE_BASE: f32 = 0.8;
pub const DEST_PULSE_SPAN: f32 = 0.4;
pub const HUB_PULSE_DIVISOR_MS: f64 = 500.0;
pub const HUB_PULSE_SPAN: f32 = 0.3;
pub const PULSE_PHASE_PER_DEG_LNG: f32 = 0.1; // de-syncs neighboring markers

// Marker sizing
pub const HUB_BASE_SIZE: f32 = 0.1;
pub const DEST_BASE_SIZE: f32 = 0.05;
pub const CONNECTION_HEAD_SIZE: f32 = 0.03;
pub const CONNECTION_TRAIL_BASE_SIZE: f32 = 0.03;

// Connection animator bounds
pub const CONNECTION_CAP: usize = 40;
pub const CONNECTION_SPEED_MIN: f32 = 0.003;
pub const CONNECTION_SPEED_MAX: f32 = 0.008;
pub const CONNECTION_TRAIL_COUNT: usize = 3;
pub const CONNECTION_TRAIL_STEP: f32 = 0.02; // progress lag between trail ghosts

// The single fixed hub every connection emanates from
pub const HUB_LAT: f32 = 51.5074;
pub const HUB_LNG: f32 = -0.1278;

// Marker palette
pub const HUB_COLOR: [f32; 3] = [1.0, 0.72, 0.2]; // amber
pub const TALENT_COLOR: [f32; 3] = [0.25, 0.82, 0.93]; // cyan
pub const TEAM_COLOR: [f32; 3] = [0.65, 0.55, 0.98]; // violet
pub const AGENCY_COLOR: [f32; 3] = [0.2, 0.83, 0.6]; // green
pub const CONNECTION_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // white
