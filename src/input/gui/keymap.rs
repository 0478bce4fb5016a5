use winit::keyboard::{Key, KeyCode, PhysicalKey};

use crate::core::actions::navigate::navigation_command::NavigationCommand;

/// Maps a pressed key to a navigation command. Arrow and numpad keys match
/// by position; `+`, `=` and `-` also match by the character they type, so
/// zooming works on layouts where those symbols live elsewhere.
pub fn navigation_for_key(physical_key: PhysicalKey, logical_key: &Key) -> Option<NavigationCommand> {
    if let PhysicalKey::Code(code) = physical_key {
        let command = match code {
            KeyCode::ArrowUp => Some(NavigationCommand::PanUp),
            KeyCode::ArrowDown => Some(NavigationCommand::PanDown),
            KeyCode::ArrowLeft => Some(NavigationCommand::PanLeft),
            KeyCode::ArrowRight => Some(NavigationCommand::PanRight),
            KeyCode::NumpadAdd => Some(NavigationCommand::ZoomIn),
            KeyCode::NumpadSubtract => Some(NavigationCommand::ZoomOut),
            _ => None,
        };

        if command.is_some() {
            return command;
        }
    }

    match logical_key {
        Key::Character(text) => match text.as_str() {
            "+" | "=" => Some(NavigationCommand::ZoomIn),
            "-" => Some(NavigationCommand::ZoomOut),
            _ => None,
        },
        _ => None,
    }
}
