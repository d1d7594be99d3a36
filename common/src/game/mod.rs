mod collision;
mod food;
mod game_rng;
mod game_state;
mod input;
mod settings;
mod snake;
mod types;

pub use collision::check as check_collision;
pub use food::FoodSpawner;
pub use game_rng::GameRng;
pub use game_state::{GameSnapshot, SnakeGame, TickOutcome};
pub use input::{DefaultKeyMap, GameKey, InputCommand, InputMapper, InputQueue};
pub use settings::{SnakeSettings, DEFAULT_GRID, DEFAULT_TICK_INTERVAL};
pub use snake::Snake;
pub use types::{Cell, GameOverReason, GameStatus, GridSize, Heading};
