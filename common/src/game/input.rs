use super::types::Heading;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Heading),
    Restart,
}

/// Keys the game reacts to, independent of any windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    R,
    Enter,
    Space,
}

/// Translates one raw key of a backend into at most one game command.
pub trait InputMapper {
    type Key;

    fn map(&self, key: &Self::Key) -> Option<InputCommand>;
}

/// Arrow keys and WASD steer; R, Enter and Space restart.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKeyMap;

impl InputMapper for DefaultKeyMap {
    type Key = GameKey;

    fn map(&self, key: &GameKey) -> Option<InputCommand> {
        let command = match key {
            GameKey::ArrowUp | GameKey::W => InputCommand::Turn(Heading::Up),
            GameKey::ArrowDown | GameKey::S => InputCommand::Turn(Heading::Down),
            GameKey::ArrowLeft | GameKey::A => InputCommand::Turn(Heading::Left),
            GameKey::ArrowRight | GameKey::D => InputCommand::Turn(Heading::Right),
            GameKey::R | GameKey::Enter | GameKey::Space => InputCommand::Restart,
        };
        Some(command)
    }
}

/// Commands collected between two ticks. The last heading wins; a restart
/// request stays latched until taken.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    heading: Option<Heading>,
    restart: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: InputCommand) {
        match command {
            InputCommand::Turn(heading) => self.heading = Some(heading),
            InputCommand::Restart => self.restart = true,
        }
    }

    pub fn take_heading(&mut self) -> Option<Heading> {
        self.heading.take()
    }

    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    pub fn clear(&mut self) {
        self.heading = None;
        self.restart = false;
    }
}
