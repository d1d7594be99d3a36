use eframe::egui;
use snake_common::{DefaultKeyMap, GameKey, InputCommand, InputMapper};

/// Maps egui key presses onto the backend-neutral key set.
#[derive(Default)]
pub struct EguiInputMapper {
    keys: DefaultKeyMap,
}

impl EguiInputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_game_key(key: egui::Key) -> Option<GameKey> {
        let game_key = match key {
            egui::Key::ArrowUp => GameKey::ArrowUp,
            egui::Key::ArrowDown => GameKey::ArrowDown,
            egui::Key::ArrowLeft => GameKey::ArrowLeft,
            egui::Key::ArrowRight => GameKey::ArrowRight,
            egui::Key::W => GameKey::W,
            egui::Key::A => GameKey::A,
            egui::Key::S => GameKey::S,
            egui::Key::D => GameKey::D,
            egui::Key::R => GameKey::R,
            egui::Key::Enter => GameKey::Enter,
            egui::Key::Space => GameKey::Space,
            _ => return None,
        };
        Some(game_key)
    }

    /// Commands for this frame's key presses, in the order they happened.
    pub fn collect_commands(&self, ctx: &egui::Context) -> Vec<InputCommand> {
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => self.map(key),
                    _ => None,
                })
                .collect()
        })
    }
}

impl InputMapper for EguiInputMapper {
    type Key = egui::Key;

    fn map(&self, key: &egui::Key) -> Option<InputCommand> {
        Self::to_game_key(*key).and_then(|game_key| self.keys.map(&game_key))
    }
}
