pub mod animator;
pub mod blob;
pub mod config;
pub mod constants;
pub mod field;
pub mod palette;
pub mod surface;

pub use animator::*;
pub use blob::*;
pub use config::*;
pub use field::*;
pub use palette::*;
pub use surface::*;
