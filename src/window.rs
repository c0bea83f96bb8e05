use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use crate::display::{Key, Surface, WindowEvent};
use crate::render::framebuffer::pixels_as_bytes;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// SDL2 window showing a fixed-size frame stretched to the window.
pub struct Window {
    // Field order matters: `texture` borrows from `texture_creator` and must drop first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    frame_width: u32,
    frame_height: u32,
}

impl Window {
    /// Opens a `width`x`height` window presenting frames of `frame_width`x`frame_height`.
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture is declared first in the struct, so it is dropped before the creator.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, frame_width, frame_height)
            .map_err(|e| e.to_string())?;

        log::info!(
            "opened {}x{} window for {}x{} frames",
            width,
            height,
            frame_width,
            frame_height
        );

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            frame_width,
            frame_height,
        })
    }

    /// Drains pending SDL events, keeping the ones the frame loop cares about.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(keycode) {
                        events.push(WindowEvent::Key(key));
                    }
                }
                _ => {}
            }
        }
        events
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn map_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Num1 => Some(Key::Num1),
        Keycode::Num2 => Some(Key::Num2),
        Keycode::Num3 => Some(Key::Num3),
        Keycode::C => Some(Key::C),
        Keycode::T => Some(Key::T),
        Keycode::P => Some(Key::P),
        _ => None,
    }
}

impl Surface for Window {
    fn present(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<(), String> {
        if width != self.frame_width || height != self.frame_height {
            return Err(format!(
                "{}x{} frame does not match {}x{} window texture",
                width, height, self.frame_width, self.frame_height
            ));
        }
        self.texture
            .update(None, pixels_as_bytes(pixels), (width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
