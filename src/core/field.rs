use super::blob::{Blob, BlobSpawn};
use super::config::FieldConfig;
use super::palette::{Rgb, PALETTE};
use super::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Size of the drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// The live blob collection plus the inputs that feed it.
///
/// Blobs are kept in creation order, which is also draw order: later blobs
/// land on top.
///
/// Typical usage:
/// - Construct with `ParticleField::with_seed(config, viewport, seed)` (or
///   `new` with any `Rng`)
/// - Feed `pointer_move`, `click`, and `resize` from input events
/// - Call `tick(&mut surface)` once per animation frame
pub struct ParticleField<R: Rng = StdRng> {
    config: FieldConfig,
    viewport: Viewport,
    blobs: Vec<Blob>,
    pointer: Vec2,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Deterministic field, mainly for tests and reproducible demos.
    pub fn with_seed(config: FieldConfig, viewport: Viewport, seed: u64) -> Self {
        Self::new(config, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: FieldConfig, viewport: Viewport) -> Self {
        Self::new(config, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: FieldConfig, viewport: Viewport, rng: R) -> Self {
        Self {
            config,
            viewport,
            blobs: Vec::new(),
            pointer: viewport.center(),
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last pointer position seen, or the viewport centre before any movement.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Blobs held, including ones that died on the last tick and are
    /// waiting for the next filter pass.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn live_count(&self) -> usize {
        self.blobs.iter().filter(|b| b.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Record new viewport dimensions. Blobs are left untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Drop a jittered cluster of slow "spill" blobs around the cursor.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        let jitter = self.config.trail_jitter_px;
        for _ in 0..self.config.trail_count {
            let color = self.random_color();
            let offset = Vec2::new(
                uniform(&mut self.rng, -jitter, jitter),
                uniform(&mut self.rng, -jitter, jitter),
            );
            let size = uniform(
                &mut self.rng,
                self.config.trail_size_min,
                self.config.trail_size_max,
            );
            let velocity = self.spill_velocity();
            self.spawn(self.pointer + offset, velocity, size, color);
        }
        log::trace!(
            "[field] trail at ({:.0},{:.0}) -> {} blobs",
            x,
            y,
            self.blobs.len()
        );
    }

    /// Burst of blobs flying radially out of the click point.
    pub fn click(&mut self, x: f32, y: f32) {
        let origin = Vec2::new(x, y);
        for _ in 0..self.config.blast_count {
            let color = self.random_color();
            let heading = uniform(&mut self.rng, 0.0, TAU);
            let speed = uniform(
                &mut self.rng,
                self.config.blast_speed_min,
                self.config.blast_speed_max,
            );
            let velocity = Vec2::new(heading.cos(), heading.sin()) * speed;
            self.spawn(origin, velocity, self.config.blast_size, color);
        }
        log::trace!(
            "[field] blast at ({:.0},{:.0}) -> {} blobs",
            x,
            y,
            self.blobs.len()
        );
    }

    /// Evict dead blobs, then advance the survivors by one tick.
    pub fn step(&mut self) {
        self.blobs.retain(Blob::is_alive);
        for blob in &mut self.blobs {
            blob.update(&self.config);
        }
    }

    /// Clear the surface and draw every blob in creation order.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.viewport.width, self.viewport.height);
        for blob in &self.blobs {
            surface.draw_blob(&blob.sprite(&self.config));
        }
    }

    /// One animation frame: `step` followed by `render`.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }

    /// Forget every blob.
    pub fn clear(&mut self) {
        self.blobs.clear();
    }

    fn spawn(&mut self, position: Vec2, velocity: Vec2, size: f32, color: Rgb) {
        let angle = uniform(&mut self.rng, 0.0, TAU);
        let spin = self.config.angle_speed_max;
        let angle_speed = uniform(&mut self.rng, -spin, spin);
        self.blobs.push(Blob::new(
            BlobSpawn {
                position,
                velocity,
                size,
                color,
                angle,
                angle_speed,
            },
            &self.config,
        ));
    }

    fn random_color(&mut self) -> Rgb {
        *self
            .config
            .palette
            .choose(&mut self.rng)
            .unwrap_or(&PALETTE[0])
    }

    fn spill_velocity(&mut self) -> Vec2 {
        let vx = self.config.spill_vx_max;
        Vec2::new(
            uniform(&mut self.rng, -vx, vx),
            uniform(
                &mut self.rng,
                self.config.spill_vy_min,
                self.config.spill_vy_max,
            ),
        )
    }
}

/// Sample `[lo, hi)`; collapses to `lo` for an empty range instead of panicking.
#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
