use std::io;
use std::io::Write;
use std::thread;
use std::time;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CtEvent;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use elementary::cell::Rgb;
use elementary::config::Config;
use elementary::events::Event;
use elementary::io::convert_event;
use elementary::world::World;

const FRAMETIME: Duration = Duration::from_millis(50);

/// Each terminal cell shows two scroll rows: the upper half block takes
/// the foreground color, the lower half the background.
fn draw(stdout: &mut io::Stdout, world: &World, cols: u16, rows: u16) -> Result<()> {
    let history = world.history();

    let at = |x: usize, y: usize| -> Rgb {
        history
            .get(y)
            .and_then(|row| row.get(x).copied())
            .unwrap_or_default()
    };

    queue!(stdout, cursor::MoveTo(0, 0))?;

    for ty in 0..rows as usize {
        for x in 0..cols as usize {
            let top = at(x, 2 * ty);
            let bottom = at(x, 2 * ty + 1);

            queue!(
                stdout,
                style::SetForegroundColor(style::Color::Rgb {
                    r: top.r,
                    g: top.g,
                    b: top.b,
                }),
                style::SetBackgroundColor(style::Color::Rgb {
                    r: bottom.r,
                    g: bottom.g,
                    b: bottom.b,
                }),
                style::Print('▀'),
            )?;
        }

        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    stdout.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    // Two scroll rows per terminal row
    let (mut cols, mut rows) = terminal::size()?;
    let mut config = Config {
        width: cols as usize,
        height: rows as usize * 2,
        scale: 1,
        frame_delay: FRAMETIME,
        ..Config::default()
    };
    let mut world = World::new(&config)?;

    'main: loop {
        let t = time::SystemTime::now();

        // Poll input for as long as FRAMETIME
        let event = if event::poll(FRAMETIME)? {
            Some(event::read()?)
        } else {
            None
        };

        match event {
            // A resize changes the world dimensions, so start over
            Some(CtEvent::Resize(new_cols, new_rows)) => {
                (cols, rows) = (new_cols, new_rows);
                config.width = cols as usize;
                config.height = rows as usize * 2;
                world = World::new(&config)?;
            }

            Some(event) => match convert_event(event) {
                Some(Event::Exit) => break 'main,
                Some(Event::RuleUp) => world.rule_up(),
                Some(Event::RuleDown) => world.rule_down(),
                Some(Event::Reset) => world.reset(),
                None => {}
            },

            None => {}
        }

        draw(&mut stdout, &world, cols, rows)?;

        let dt = t.elapsed()?;
        thread::sleep(FRAMETIME.saturating_sub(dt));

        world.tick();
    }

    execute!(
        stdout,
        style::ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    Ok(())
}
