use clap::Parser;

use softcube::config::{Config, CHECKER_CELL, CHECKER_SIZE};
use softcube::display::Capture;
use softcube::engine::{Engine, LoopControl};
use softcube::mesh;
use softcube::texture::Texture;
use softcube::window::{FrameLimiter, Window};
use softcube::Error;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let settings = config.settings();
    log::info!(
        "softcube v{}: {}x{} frame, {} mode",
        env!("CARGO_PKG_VERSION"),
        settings.width,
        settings.height,
        settings.render_mode
    );

    let mut engine = Engine::new(settings);
    match &config.model {
        Some(path) => engine.set_model(mesh::load_obj(path)?),
        None => engine.load_cube_mesh(),
    }

    if config.checker {
        engine.set_texture(Texture::checkerboard(CHECKER_SIZE, CHECKER_SIZE, CHECKER_CELL));
    } else if let Some(path) = &config.texture {
        engine.set_texture(Texture::load_or_stub(path));
    }

    match &config.screenshot {
        Some(path) => {
            let mut capture = Capture::new();
            for _ in 0..config.frames.max(1) {
                engine.render();
                engine.present(&mut capture)?;
                engine.update();
            }
            capture.save(path)?;
            log::info!("saved {} after {} frames", path.display(), capture.frames());
            Ok(())
        }
        None => run_window(&config, &mut engine),
    }
}

fn run_window(config: &Config, engine: &mut Engine) -> Result<(), Error> {
    let mut window = Window::new(
        "softcube",
        config.window_width,
        config.window_height,
        config.width,
        config.height,
    )?;
    let mut frame_limiter = FrameLimiter::new(&window);

    loop {
        let control = window
            .poll_events()
            .into_iter()
            .map(|event| engine.handle_event(event))
            .fold(LoopControl::Continue, |acc, c| match c {
                LoopControl::Quit => LoopControl::Quit,
                LoopControl::Continue => acc,
            });
        if control == LoopControl::Quit {
            break;
        }

        frame_limiter.wait_and_get_delta(&window);

        engine.update();
        engine.render();
        engine.present(&mut window)?;
    }

    log::info!("exiting after {} frames", engine.frame_count());
    Ok(())
}
