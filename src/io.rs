use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::events::Event;

/// Converts a crossterm event into a control event.
///
/// Resize is not handled here; terminal front-ends deal with it themselves
/// since it changes their world dimensions.
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Up, ..
            } => Some(Event::RuleUp),
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => Some(Event::RuleDown),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Event::Reset),
            _ => None,
        },
        _ => None,
    }
}
