use super::field::ParticleField;
use super::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Mounted,
    Unmounted,
}

/// Field + drawing surface behind a mount/unmount lifecycle.
///
/// Input and ticks only reach the field while mounted. Once unmounted the
/// animator stays inert for good, so a late callback cannot draw or spawn.
pub struct Animator<S: Surface, R: Rng = StdRng> {
    field: ParticleField<R>,
    surface: S,
    phase: Phase,
    ticks: u64,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    pub fn new(field: ParticleField<R>, surface: S) -> Self {
        Self {
            field,
            surface,
            phase: Phase::Idle,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Frames rendered since mount.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Size everything to the viewport and start accepting input.
    /// Returns `false` if already mounted or torn down.
    pub fn mount(&mut self, width: u32, height: u32) -> bool {
        if self.phase != Phase::Idle {
            log::warn!("[animator] mount ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Mounted;
        self.apply_resize(width, height);
        log::info!("[animator] mounted at {}x{}", width, height);
        true
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.is_mounted() {
            self.apply_resize(width, height);
            log::debug!("[animator] resized to {}x{}", width, height);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.is_mounted() {
            self.field.pointer_move(x, y);
        }
    }

    pub fn click(&mut self, x: f32, y: f32) {
        if self.is_mounted() {
            self.field.click(x, y);
        }
    }

    /// Run one frame. Returns whether anything happened.
    pub fn tick(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.field.tick(&mut self.surface);
        self.ticks += 1;
        true
    }

    /// Stop for good and drop every blob. Returns `false` if already unmounted.
    pub fn unmount(&mut self) -> bool {
        if self.phase == Phase::Unmounted {
            return false;
        }
        self.phase = Phase::Unmounted;
        self.field.clear();
        log::info!("[animator] unmounted after {} frames", self.ticks);
        true
    }

    fn apply_resize(&mut self, width: u32, height: u32) {
        self.field.resize(width, height);
        self.surface.resize(width, height);
    }
}
