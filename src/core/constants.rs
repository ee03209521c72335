// Tuning constants for the field renderer and its animation layer.

// Cell partitioning: one noise sample per cell of side CELL_PIXELS * pixel_size.
pub const CELL_PIXELS: f32 = 8.0;

// Fixed modulation frequencies fed to the shader; amplitudes come from the
// sequencer, these never change at runtime.
pub const WAVE_FREQUENCY: f32 = 8.0;
pub const WAVE_SPEED: f32 = 2.0;
pub const PULSE_SPEED: f32 = 1.5;
pub const AUTO_RIPPLE_FREQUENCY: f32 = 12.0;
pub const AUTO_RIPPLE_SPEED: f32 = 3.0;
pub const SPIRAL_SPEED: f32 = 4.0;
pub const BREATHING_SPEED: f32 = 0.8;

// Sequencer calendar (milliseconds).
pub const SEQUENCER_START_DELAY_MS: f64 = 2000.0;
pub const TRANSITION_IN_MS: f64 = 2000.0;
pub const TRANSITION_OUT_MS: f64 = 1500.0;
pub const PAUSE_BETWEEN_PRESETS_MS: f64 = 1500.0;

// Pointer trail raster.
pub const TRAIL_SIZE: usize = 64;
pub const TRAIL_MAX_AGE: u32 = 64;
pub const TRAIL_BASE_RADIUS: f32 = 0.1 * TRAIL_SIZE as f32;
pub const TRAIL_FORCE_SCALE: f32 = 10_000.0;
pub const TRAIL_ALPHA: f32 = 0.22;
// Fraction of a point's life spent ramping intensity in.
pub const TRAIL_RAMP_IN: f32 = 0.3;

// Interactive click ripples. The damping factors also appear as shader
// constants; keep the two in sync.
pub const MAX_CLICKS: usize = 10;
pub const RING_DAMP_T: f32 = 1.0;
pub const RING_DAMP_R: f32 = 10.0;

// Session time origin is randomized within [0, TIME_OFFSET_RANGE) seconds so
// page reloads never replay the same field.
pub const TIME_OFFSET_RANGE: f32 = 1000.0;
