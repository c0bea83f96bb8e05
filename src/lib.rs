//! A CPU-based software rasterizer drawing a spinning cube.
//!
//! Models are posed with pure transforms, culled, projected with a
//! perspective divide and scan-converted into a [`FrameBuffer`] with a depth
//! plane. SDL2 is used only to show the finished frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use softcube::prelude::*;
//!
//! let mut engine = Engine::new(EngineSettings::default());
//! engine.load_cube_mesh();
//! engine.render();
//!
//! let mut capture = Capture::new();
//! engine.present(&mut capture)?;
//! ```

pub mod colors;
pub mod config;
pub mod culling;
pub mod display;
pub mod engine;
pub mod error;
pub mod math;
pub mod mesh;
pub mod model;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;
pub mod window;

pub use engine::{Engine, EngineSettings, FrameStats, LoopControl, RenderMode};
pub use error::Error;
pub use mesh::LoadError;
pub use model::{Model, Vertex};
pub use projection::Projector;
pub use render::FrameBuffer;
pub use texture::Texture;
pub use transform::{Pose, Spin};

/// Prelude module for convenient imports.
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, EngineSettings, FrameStats, LoopControl, RenderMode};

    // Model
    pub use crate::model::{Model, Vertex};
    pub use crate::transform::{Pose, Spin};

    // Pipeline stages
    pub use crate::culling::is_backface;
    pub use crate::projection::Projector;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{FrameBuffer, ScanlineRasterizer, Triangle};
    pub use crate::texture::Texture;

    // Window & Input
    pub use crate::display::{Capture, Key, Surface, WindowEvent};
    pub use crate::window::{FrameLimiter, Window};
}
