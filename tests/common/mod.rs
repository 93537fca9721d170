// Shared host-side harness.
// The main crate is wasm-only, so the pure-Rust `core` modules are included directly.

#![allow(dead_code)]

pub mod cursor {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod palette {
        include!("../../src/core/palette.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod blob {
        include!("../../src/core/blob.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod animator {
        include!("../../src/core/animator.rs");
    }

    pub use animator::*;
    pub use blob::*;
    pub use config::*;
    pub use field::*;
    pub use palette::*;
    pub use surface::*;
}

use cursor::{BlobSprite, FieldConfig, ParticleField, Surface, Viewport};

/// One call made against a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(u32, u32),
    Clear(u32, u32),
    Draw(BlobSprite),
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn draws(&self) -> Vec<&BlobSprite> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Draw(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Clear(..)))
            .count()
    }
}

impl Surface for Recorder {
    fn resize(&mut self, width: u32, height: u32) {
        self.ops.push(Op::Resize(width, height));
    }

    fn clear(&mut self, width: u32, height: u32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn draw_blob(&mut self, sprite: &BlobSprite) {
        self.ops.push(Op::Draw(sprite.clone()));
    }
}

pub fn seeded_field(seed: u64) -> ParticleField {
    ParticleField::with_seed(FieldConfig::default(), Viewport::new(1280, 720), seed)
}
