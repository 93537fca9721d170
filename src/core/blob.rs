use super::config::FieldConfig;
use super::palette::Rgb;
use glam::Vec2;

/// Initial values for a new [`Blob`]. Randomness is resolved by the caller.
#[derive(Clone, Debug)]
pub struct BlobSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub angle: f32,
    pub angle_speed: f32,
}

/// One short-lived particle of the trail.
///
/// `life` only ever counts down and the opacity is always derived from it;
/// neither can be set from outside.
#[derive(Clone, Debug)]
pub struct Blob {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgb,
    life: u32,
    max_life: u32,
    alpha: f32,
    angle: f32,
    angle_speed: f32,
    morph: Vec2,
}

/// Everything needed to draw a blob, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobSprite {
    pub center: Vec2,
    /// Ellipse radii (morphed width, morphed height).
    pub radii: Vec2,
    pub rotation: f32,
    pub gradient_inner: f32,
    pub gradient_outer: f32,
    pub color: Rgb,
    /// Alpha of the innermost gradient stop; the outer stop is fully transparent.
    pub center_alpha: f32,
    /// Applied to the whole shape on top of the gradient.
    pub layer_alpha: f32,
}

impl Blob {
    pub fn new(spawn: BlobSpawn, config: &FieldConfig) -> Self {
        let max_life = config.lifetime_ticks.max(1);
        Self {
            position: spawn.position,
            velocity: spawn.velocity,
            size: spawn.size,
            color: spawn.color,
            life: max_life,
            max_life,
            alpha: 1.0,
            angle: spawn.angle,
            angle_speed: spawn.angle_speed,
            morph: morph_size(spawn.size, spawn.angle, config),
        }
    }

    /// Advance one tick: move, age, and re-shape.
    pub fn update(&mut self, config: &FieldConfig) {
        self.position += self.velocity;
        self.life = self.life.saturating_sub(1);
        self.alpha = self.life as f32 / self.max_life as f32;
        self.angle += self.angle_speed;
        self.morph = morph_size(self.size, self.angle, config);
    }

    /// Both guards are kept even though opacity follows from `life`.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0 && self.alpha > 0.0
    }

    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn angle_speed(&self) -> f32 {
        self.angle_speed
    }

    /// Current (width, height) after the sine/cosine morph.
    #[inline]
    pub fn morph_size(&self) -> Vec2 {
        self.morph
    }

    pub fn sprite(&self, config: &FieldConfig) -> BlobSprite {
        BlobSprite {
            center: self.position,
            radii: self.morph,
            rotation: config.tilt_rad,
            gradient_inner: self.morph.x * config.gradient_inner_ratio,
            gradient_outer: self.morph.x,
            color: self.color,
            center_alpha: self.alpha * config.gradient_center_alpha,
            layer_alpha: self.alpha,
        }
    }
}

#[inline]
fn morph_size(size: f32, angle: f32, config: &FieldConfig) -> Vec2 {
    Vec2::new(
        size * (config.morph_x_base + config.morph_x_amp * angle.sin()),
        size * (config.morph_y_base + config.morph_y_amp * angle.cos()),
    )
}
