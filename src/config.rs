//! Command-line configuration for the viewer binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engine::{EngineSettings, RenderMode};
use crate::math::vec3::Vec3;
use crate::transform::Spin;
use crate::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub const FRAME_WIDTH: u32 = 500;
pub const FRAME_HEIGHT: u32 = 500;
pub const CUBE_DISTANCE: f32 = 2.0;
pub const SPIN_SPEED: f32 = 0.01;
pub const CHECKER_SIZE: u32 = 64;
pub const CHECKER_CELL: u32 = 8;

#[derive(Parser, Debug, Clone)]
#[command(name = "softcube")]
#[command(about = "Spinning cube drawn by a CPU scanline rasterizer")]
pub struct Config {
    /// Frame buffer width in pixels
    #[arg(long, default_value_t = FRAME_WIDTH)]
    pub width: u32,

    /// Frame buffer height in pixels
    #[arg(long, default_value_t = FRAME_HEIGHT)]
    pub height: u32,

    /// Window width in pixels; the frame is stretched to fit
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub window_width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub window_height: u32,

    /// OBJ model to draw instead of the built-in cube
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Texture image for filled triangles
    #[arg(long, conflicts_with = "checker")]
    pub texture: Option<PathBuf>,

    /// Use a generated checkerboard texture
    #[arg(long)]
    pub checker: bool,

    #[arg(long, value_enum, default_value_t = ModeArg::Wireframe)]
    pub mode: ModeArg,

    /// Distance from the camera to the model along +z
    #[arg(long, default_value_t = CUBE_DISTANCE)]
    pub distance: f32,

    /// Rotation about X in radians per frame
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spin_x: f32,

    /// Rotation about Y in radians per frame
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spin_y: f32,

    /// Rotation about Z in radians per frame
    #[arg(long, default_value_t = SPIN_SPEED, allow_negative_numbers = true)]
    pub spin_z: f32,

    /// Draw back-facing triangles too
    #[arg(long)]
    pub no_cull: bool,

    /// Cycle the centre pixel green, red, blue every 500 frames
    #[arg(long)]
    pub heartbeat: bool,

    /// Render without a window and save the last frame to this image
    #[arg(long)]
    pub screenshot: Option<PathBuf>,

    /// Frames to render before taking the screenshot
    #[arg(long, default_value_t = 1, requires = "screenshot")]
    pub frames: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Wireframe,
    Filled,
    FilledWireframe,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Wireframe => RenderMode::Wireframe,
            ModeArg::Filled => RenderMode::Filled,
            ModeArg::FilledWireframe => RenderMode::FilledWireframe,
        }
    }
}

impl Config {
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            width: self.width,
            height: self.height,
            render_mode: self.mode.into(),
            backface_culling: !self.no_cull,
            heartbeat: self.heartbeat,
            position: Vec3::new(0.0, 0.0, self.distance),
            spin: Spin {
                z: self.spin_z,
                x: self.spin_x,
                y: self.spin_y,
            },
            ..EngineSettings::default()
        }
    }
}
