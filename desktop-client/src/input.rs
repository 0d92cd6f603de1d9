use common::games::snake::Direction;
use egui::{Event, Key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    Restart,
    Quit,
}

pub fn command_for_key(key: Key) -> Option<InputCommand> {
    match key {
        Key::ArrowUp | Key::W => Some(InputCommand::Turn(Direction::Up)),
        Key::ArrowDown | Key::S => Some(InputCommand::Turn(Direction::Down)),
        Key::ArrowLeft | Key::A => Some(InputCommand::Turn(Direction::Left)),
        Key::ArrowRight | Key::D => Some(InputCommand::Turn(Direction::Right)),
        Key::Enter | Key::Space => Some(InputCommand::Restart),
        Key::Escape => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Commands for this frame's key presses, in the order they happened.
pub fn collect_commands(ctx: &egui::Context) -> Vec<InputCommand> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => command_for_key(*key),
                _ => None,
            })
            .collect()
    })
}
