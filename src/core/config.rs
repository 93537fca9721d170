use super::constants::*;
use super::palette::{Rgb, PALETTE};

/// Tuning parameters for a [`ParticleField`](super::field::ParticleField).
///
/// `Default` reproduces the stock effect. Ranges are `[min, max)` samples;
/// symmetric ranges are given as a single half-width.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Colours picked uniformly per blob.
    pub palette: &'static [Rgb],
    /// Ticks a blob lives for; opacity is `remaining / lifetime_ticks`.
    pub lifetime_ticks: u32,

    pub trail_count: usize,
    pub trail_jitter_px: f32,
    pub trail_size_min: f32,
    pub trail_size_max: f32,

    pub spill_vx_max: f32,
    pub spill_vy_min: f32,
    pub spill_vy_max: f32,

    pub blast_count: usize,
    pub blast_size: f32,
    pub blast_speed_min: f32,
    pub blast_speed_max: f32,

    pub angle_speed_max: f32,
    pub morph_x_base: f32,
    pub morph_x_amp: f32,
    pub morph_y_base: f32,
    pub morph_y_amp: f32,

    pub tilt_rad: f32,
    pub gradient_inner_ratio: f32,
    pub gradient_center_alpha: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            palette: &PALETTE,
            lifetime_ticks: BLOB_LIFETIME_TICKS,
            trail_count: TRAIL_SPAWN_COUNT,
            trail_jitter_px: TRAIL_JITTER_PX,
            trail_size_min: TRAIL_SIZE_MIN,
            trail_size_max: TRAIL_SIZE_MAX,
            spill_vx_max: SPILL_VX_MAX,
            spill_vy_min: SPILL_VY_MIN,
            spill_vy_max: SPILL_VY_MAX,
            blast_count: BLAST_SPAWN_COUNT,
            blast_size: BLAST_SIZE,
            blast_speed_min: BLAST_SPEED_MIN,
            blast_speed_max: BLAST_SPEED_MAX,
            angle_speed_max: ANGLE_SPEED_MAX,
            morph_x_base: MORPH_X_BASE,
            morph_x_amp: MORPH_X_AMP,
            morph_y_base: MORPH_Y_BASE,
            morph_y_amp: MORPH_Y_AMP,
            tilt_rad: BLOB_TILT_RAD,
            gradient_inner_ratio: GRADIENT_INNER_RATIO,
            gradient_center_alpha: GRADIENT_CENTER_ALPHA,
        }
    }
}
