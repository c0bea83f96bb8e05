//! Core rendering engine.
//!
//! The [`Engine`] owns everything one frame needs: the frame buffer, the base
//! model, the current pose and the render options. Each frame:
//!
//! ```text
//! pose.apply(base) -> for each triangle: cull -> project -> fill / outline
//! ```
//!
//! The posed model is rebuilt from the base every frame and never mutated.
//! The frame buffer is allocated once and cleared between frames.

use crate::colors;
use crate::culling::is_backface;
use crate::display::{Key, Surface, WindowEvent};
use crate::math::vec3::Vec3;
use crate::model::Model;
use crate::projection::Projector;
use crate::render::{FrameBuffer, Paint, ScanlineRasterizer, Triangle};
use crate::texture::Texture;
use crate::transform::{self, Pose, Spin};

/// Frames each heartbeat color is held for.
pub const HEARTBEAT_PERIOD: u64 = 500;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Outlines only, no depth test (key: 1)
    #[default]
    Wireframe,
    /// Depth-tested fill (key: 2)
    Filled,
    /// Fill with outlines on top (key: 3)
    FilledWireframe,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::FilledWireframe => write!(f, "FilledWireframe"),
        }
    }
}

/// What the frame loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Per-frame triangle counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
}

/// Construction parameters for [`Engine`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub width: u32,
    pub height: u32,
    pub render_mode: RenderMode,
    pub backface_culling: bool,
    pub use_texture: bool,
    pub heartbeat: bool,
    /// Where the model is placed in front of the camera.
    pub position: Vec3,
    pub spin: Spin,
    pub clear_color: u32,
    pub fill_color: u32,
    pub wireframe_color: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            render_mode: RenderMode::default(),
            backface_culling: true,
            use_texture: true,
            heartbeat: false,
            position: Vec3::new(0.0, 0.0, 2.0),
            spin: Spin {
                z: 0.01,
                x: 0.0,
                y: 0.0,
            },
            clear_color: colors::BACKGROUND,
            fill_color: colors::FILL,
            wireframe_color: colors::WIREFRAME,
        }
    }
}

pub struct Engine {
    framebuffer: FrameBuffer,
    projector: Projector,
    rasterizer: ScanlineRasterizer,
    base_model: Model,
    texture: Option<Texture>,
    texture_preview: Option<FrameBuffer>,
    pose: Pose,
    spin: Spin,
    render_mode: RenderMode,
    frame_count: u64,
    clear_color: u32,
    fill_color: u32,
    wireframe_color: u32,
    pub backface_culling: bool,
    pub use_texture: bool,
    pub show_texture_preview: bool,
    pub heartbeat: bool,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            framebuffer: FrameBuffer::new(settings.width, settings.height),
            projector: Projector::new(settings.width, settings.height),
            rasterizer: ScanlineRasterizer::new(),
            base_model: Model::empty(),
            texture: None,
            texture_preview: None,
            pose: Pose::at(settings.position),
            spin: settings.spin,
            render_mode: settings.render_mode,
            frame_count: 0,
            clear_color: settings.clear_color,
            fill_color: settings.fill_color,
            wireframe_color: settings.wireframe_color,
            backface_culling: settings.backface_culling,
            use_texture: settings.use_texture,
            show_texture_preview: false,
            heartbeat: settings.heartbeat,
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        log::debug!("render mode: {}", mode);
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Uses the unit cube, shifted so it spins about its centre.
    pub fn load_cube_mesh(&mut self) {
        self.base_model = transform::translate(&Model::unit_cube(), Vec3::new(-0.5, -0.5, -0.5));
    }

    /// Uses `model` as the base pose, as given.
    pub fn set_model(&mut self, model: Model) {
        self.base_model = model;
    }

    pub fn model(&self) -> &Model {
        &self.base_model
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture_preview = Some(Self::build_preview(
            &texture,
            self.framebuffer.width(),
            self.framebuffer.height(),
        ));
        self.texture = Some(texture);
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Applies an input event and reports whether the loop should keep going.
    pub fn handle_event(&mut self, event: WindowEvent) -> LoopControl {
        match event {
            WindowEvent::Quit => return LoopControl::Quit,
            WindowEvent::Key(Key::Num1) => self.set_render_mode(RenderMode::Wireframe),
            WindowEvent::Key(Key::Num2) => self.set_render_mode(RenderMode::Filled),
            WindowEvent::Key(Key::Num3) => self.set_render_mode(RenderMode::FilledWireframe),
            WindowEvent::Key(Key::C) => {
                self.backface_culling = !self.backface_culling;
                log::debug!("backface culling: {}", self.backface_culling);
            }
            WindowEvent::Key(Key::T) => {
                self.use_texture = !self.use_texture;
                log::debug!("texturing: {}", self.use_texture);
            }
            WindowEvent::Key(Key::P) => self.show_texture_preview = !self.show_texture_preview,
        }
        LoopControl::Continue
    }

    /// Advances the animation by one frame.
    pub fn update(&mut self) {
        self.pose.advance(self.spin);
        self.frame_count += 1;
    }

    /// Renders the current pose into the frame buffer.
    ///
    /// # Panics
    /// Panics if a visible triangle projects outside the frame buffer. Nothing
    /// is clipped, so the model must stay in front of the camera and inside
    /// the view.
    pub fn render(&mut self) -> FrameStats {
        self.framebuffer.clear(self.clear_color);

        let posed = self.pose.apply(&self.base_model);
        let mut stats = FrameStats::default();
        let mut triangles = Vec::with_capacity(posed.triangle_count());

        for [a, b, c] in posed.triangles() {
            if self.backface_culling && is_backface(a.position, b.position, c.position) {
                stats.culled += 1;
                continue;
            }
            triangles.push(Triangle::new(
                [a, b, c].map(|v| v.with_position(self.projector.project(v.position))),
            ));
        }
        stats.drawn = triangles.len();

        let (draw_filled, draw_wireframe) = match self.render_mode {
            RenderMode::Wireframe => (false, true),
            RenderMode::Filled => (true, false),
            RenderMode::FilledWireframe => (true, true),
        };

        if draw_filled {
            let paint = match (&self.texture, self.use_texture) {
                (Some(texture), true) => Paint::Textured(texture),
                _ => Paint::Solid(self.fill_color),
            };
            for triangle in &triangles {
                self.rasterizer
                    .fill_triangle(triangle, paint, &mut self.framebuffer);
            }
        }

        if draw_wireframe {
            for triangle in &triangles {
                triangle.draw_wireframe(&mut self.framebuffer, self.wireframe_color);
            }
        }

        if self.show_texture_preview {
            if let Some(preview) = &self.texture_preview {
                let x = self.framebuffer.width() - preview.width();
                self.framebuffer.blit(preview, x, 0);
            }
        }

        if self.heartbeat {
            let color = colors::HEARTBEAT
                [((self.frame_count / HEARTBEAT_PERIOD) % colors::HEARTBEAT.len() as u64) as usize];
            let (cx, cy) = (
                self.framebuffer.width() as i32 / 2,
                self.framebuffer.height() as i32 / 2,
            );
            self.framebuffer.put_pixel(cx, cy, color);
        }

        log::debug!(
            "frame {}: {} drawn, {} culled",
            self.frame_count,
            stats.drawn,
            stats.culled
        );
        stats
    }

    /// Hands the finished frame to `surface`.
    pub fn present<S: Surface>(&self, surface: &mut S) -> Result<(), String> {
        surface.present(
            self.framebuffer.pixels(),
            self.framebuffer.width(),
            self.framebuffer.height(),
        )
    }

    /// Thumbnail of the texture, a quarter of the frame's shorter side.
    fn build_preview(texture: &Texture, width: u32, height: u32) -> FrameBuffer {
        let size = (width.min(height) / 4).max(1);
        let mut preview = FrameBuffer::new(size, size);
        let scale = (size - 1).max(1) as f32;
        for y in 0..size {
            for x in 0..size {
                let color = texture.sample(x as f32 / scale, y as f32 / scale);
                preview.put_pixel(x as i32, y as i32, color);
            }
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Capture;

    fn cube_engine(mode: RenderMode) -> Engine {
        let mut engine = Engine::new(EngineSettings {
            width: 100,
            height: 100,
            render_mode: mode,
            ..EngineSettings::default()
        });
        engine.load_cube_mesh();
        engine
    }

    #[test]
    fn cube_front_face_only_survives_culling() {
        let mut engine = cube_engine(RenderMode::Filled);
        let stats = engine.render();
        // Cube centred on the view axis: only the near face is visible.
        assert_eq!(stats, FrameStats { drawn: 2, culled: 10 });
    }

    #[test]
    fn disabling_culling_draws_everything() {
        let mut engine = cube_engine(RenderMode::Wireframe);
        engine.backface_culling = false;
        assert_eq!(engine.render(), FrameStats { drawn: 12, culled: 0 });
    }

    #[test]
    fn key_events_switch_modes_and_quit() {
        let mut engine = cube_engine(RenderMode::Wireframe);
        assert_eq!(
            engine.handle_event(WindowEvent::Key(Key::Num2)),
            LoopControl::Continue
        );
        assert_eq!(engine.render_mode(), RenderMode::Filled);
        engine.handle_event(WindowEvent::Key(Key::Num3));
        assert_eq!(engine.render_mode(), RenderMode::FilledWireframe);
        engine.handle_event(WindowEvent::Key(Key::C));
        assert!(!engine.backface_culling);
        assert_eq!(engine.handle_event(WindowEvent::Quit), LoopControl::Quit);
    }

    #[test]
    fn update_spins_about_z() {
        let mut engine = cube_engine(RenderMode::Wireframe);
        engine.update();
        engine.update();
        approx::assert_relative_eq!(engine.pose().angle_z, 0.02);
        assert_eq!(engine.frame_count(), 2);
    }

    #[test]
    fn heartbeat_cycles_every_period() {
        let mut engine = cube_engine(RenderMode::Wireframe);
        engine.set_model(Model::empty());
        engine.heartbeat = true;

        engine.render();
        assert_eq!(engine.framebuffer().get_pixel(50, 50), Some(colors::GREEN));

        for _ in 0..HEARTBEAT_PERIOD {
            engine.update();
        }
        engine.render();
        assert_eq!(engine.framebuffer().get_pixel(50, 50), Some(colors::RED));
    }

    #[test]
    fn texture_preview_is_blitted_top_right() {
        let mut engine = cube_engine(RenderMode::Wireframe);
        engine.set_model(Model::empty());
        engine.set_texture(Texture::procedural(2, 2, |_, _| colors::BLUE));
        engine.show_texture_preview = true;
        engine.render();
        assert_eq!(engine.framebuffer().get_pixel(99, 0), Some(colors::BLUE));
        assert_eq!(engine.framebuffer().get_pixel(75, 24), Some(colors::BLUE));
        assert_eq!(engine.framebuffer().get_pixel(74, 0), Some(colors::BACKGROUND));
        assert_eq!(engine.framebuffer().get_pixel(99, 25), Some(colors::BACKGROUND));
    }

    #[test]
    fn present_hands_whole_frame_to_surface() {
        let mut engine = cube_engine(RenderMode::Filled);
        engine.render();
        let mut capture = Capture::new();
        engine.present(&mut capture).unwrap();
        assert_eq!(capture.width(), 100);
        assert_eq!(capture.height(), 100);
        assert_eq!(capture.pixels(), engine.framebuffer().pixels());
    }
}
