use std::thread;

use anyhow::Result;
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use tracing_subscriber::EnvFilter;

use elementary::config::Config;
use elementary::events::Event;
use elementary::render::Raster;
use elementary::world::World;

use ext::sdl::PresentHistoryExt;

mod ext;

/// Converts an SDL event into a control event.
fn convert_event(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Exit),

        SdlEvent::KeyDown {
            keycode: Some(keycode),
            ..
        } => match keycode {
            Keycode::Up => Some(Event::RuleUp),
            Keycode::Down => Some(Event::RuleDown),
            Keycode::R => Some(Event::Reset),
            Keycode::Q | Keycode::Escape => Some(Event::Exit),
            _ => None,
        },

        _ => None,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::default();
    let mut world = World::new(&config)?;
    let mut raster = Raster::new(config.width, config.height, config.scale);

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;

    let window = video_subsystem
        .window(
            "elementary",
            raster.pixel_width() as u32,
            raster.pixel_height() as u32,
        )
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().build()?;

    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        PixelFormatEnum::RGB24,
        raster.pixel_width() as u32,
        raster.pixel_height() as u32,
    )?;

    let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;

    // The history already holds the seed row, so the first pass through the
    // loop presents it as-is; stepping only starts after that.
    'main: loop {
        for event in event_pump.poll_iter() {
            match convert_event(event) {
                Some(Event::Exit) => break 'main,
                Some(Event::RuleUp) => world.rule_up(),
                Some(Event::RuleDown) => world.rule_down(),
                Some(Event::Reset) => world.reset(),
                None => {}
            }
        }

        canvas
            .present_history(&mut texture, &mut raster, world.history())
            .map_err(anyhow::Error::msg)?;

        thread::sleep(config.frame_delay);

        world.tick();
    }

    Ok(())
}
