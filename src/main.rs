use pixel_outpost::assets::{GameAssets, PendingAssets};
use pixel_outpost::config::GameConfig;
use pixel_outpost::error::GameError;
use pixel_outpost::game::Game;
use pixel_outpost::platform::{SdlRenderer, events, load_textures};
use sdl2::event::Event;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load(std::env::args_os().nth(1).map(PathBuf::from)).map_err(GameError::from)?;

    // Disk reads run while SDL brings the window up
    let pending = PendingAssets::start(config.asset_dir.clone()).map_err(GameError::from)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window_title, config.canvas_width, config.canvas_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let images = match pending.wait() {
        Ok(images) => images,
        Err(e) => {
            log::warn!("{}; drawing placeholders", e);
            Vec::new()
        }
    };
    let (textures, handles) = load_textures(&texture_creator, images);
    let assets = if handles.is_empty() {
        GameAssets::placeholders()
    } else {
        GameAssets::from_handles(&handles).map_err(GameError::from)?
    };

    let mut game = Game::new(&config, assets)?;
    let mut renderer = SdlRenderer::new(canvas, textures, *game.resolution());
    let mut event_pump = sdl_context.event_pump()?;
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.target_fps));

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                other => {
                    if let Some(input) = events::translate(&other) {
                        game.handle_event(input);
                    }
                }
            }
        }

        match game.tick(&mut renderer) {
            Ok(()) => {}
            // A failing click handler is reported and the game carries on
            Err(GameError::Click(e)) => log::error!("{}", e),
            Err(e) => return Err(e.into()),
        }

        renderer.present();
        std::thread::sleep(frame_time);
    }

    log::info!("Shutting down");
    Ok(())
}
