use std::f32::consts::PI;

// Tuning values for the blob field. `FieldConfig::default()` is built from these.

// Lifetime (ticks) of every blob; opacity is remaining / this
pub const BLOB_LIFETIME_TICKS: u32 = 90;

// Pointer-move trail burst
pub const TRAIL_SPAWN_COUNT: usize = 6;
pub const TRAIL_JITTER_PX: f32 = 20.0; // +/- around the cursor, per axis
pub const TRAIL_SIZE_MIN: f32 = 25.0;
pub const TRAIL_SIZE_MAX: f32 = 50.0;

// Default "spill" velocity for trail blobs (px/tick), biased downward
pub const SPILL_VX_MAX: f32 = 0.3; // symmetric around 0
pub const SPILL_VY_MIN: f32 = 0.7;
pub const SPILL_VY_MAX: f32 = 2.5;

// Click blast burst
pub const BLAST_SPAWN_COUNT: usize = 25;
pub const BLAST_SIZE: f32 = 40.0;
pub const BLAST_SPEED_MIN: f32 = 4.0;
pub const BLAST_SPEED_MAX: f32 = 10.0;

// Shape morph: width = size * (X_BASE + X_AMP * sin), height = size * (Y_BASE + Y_AMP * cos)
pub const MORPH_X_BASE: f32 = 1.0;
pub const MORPH_X_AMP: f32 = 0.6;
pub const MORPH_Y_BASE: f32 = 1.8;
pub const MORPH_Y_AMP: f32 = 0.8;
pub const ANGLE_SPEED_MAX: f32 = 0.03; // rad/tick, symmetric around 0

// Drawing
pub const BLOB_TILT_RAD: f32 = PI / 6.0; // 30 degrees, reads as a downward spill
pub const GRADIENT_INNER_RATIO: f32 = 0.1;
pub const GRADIENT_CENTER_ALPHA: f32 = 0.9;
