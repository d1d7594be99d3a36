use crate::{log, log_debug};
use super::collision;
use super::food::FoodSpawner;
use super::game_rng::GameRng;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Cell, GameOverReason, GameStatus, GridSize, Heading};

const START_HEADING: Heading = Heading::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew,
    GameOver(GameOverReason),
    /// The game was already over; nothing changed.
    NotPlaying,
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub grid: GridSize,
    pub body: Vec<Cell>,
    pub heading: Heading,
    pub food: Option<Cell>,
    pub score: u32,
    pub best_score: u32,
    pub status: GameStatus,
    pub tick: u64,
}

pub struct SnakeGame {
    grid: GridSize,
    spawner: FoodSpawner,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    best_score: u32,
    status: GameStatus,
    tick: u64,
    rounds_started: u32,
}

impl SnakeGame {
    pub fn new(settings: &SnakeSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random(),
        };
        Self::with_rng(settings.grid, rng)
    }

    pub fn with_rng(grid: GridSize, rng: GameRng) -> Self {
        log!(
            "New game on {}x{} grid, food seed {}",
            grid.width,
            grid.height,
            rng.seed()
        );
        let mut game = Self {
            grid,
            spawner: FoodSpawner::new(grid, rng),
            snake: Snake::new(grid.center(), START_HEADING),
            food: None,
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            tick: 0,
            rounds_started: 0,
        };
        game.start_round();
        game
    }

    fn start_round(&mut self) {
        self.snake = Snake::new(self.grid.center(), START_HEADING);
        self.score = 0;
        self.tick = 0;
        self.rounds_started += 1;
        self.food = self.spawner.spawn(self.snake.occupied());
        self.status = match self.food {
            Some(_) => GameStatus::Playing,
            None => {
                log!("Grid has no room for food, round {} cannot start", self.rounds_started);
                GameStatus::GameOver(GameOverReason::GridFull)
            }
        };
    }

    /// Advances one step. `requested` is applied first unless it would reverse
    /// the snake into itself.
    pub fn tick(&mut self, requested: Option<Heading>) -> TickOutcome {
        if !self.status.is_playing() {
            return TickOutcome::NotPlaying;
        }

        if let Some(heading) = requested
            && !self.snake.turn(heading)
        {
            log_debug!("Ignored reverse turn {:?} while heading {:?}", heading, self.snake.heading());
        }

        let new_head = self.snake.next_head();
        if let Err(reason) = collision::check(new_head, &self.snake, &self.grid) {
            return self.end(reason);
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);
        self.tick += 1;

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        log_debug!(
            "Ate food at ({}, {}). Score: {}, length: {}",
            new_head.x,
            new_head.y,
            self.score,
            self.snake.len()
        );

        self.food = self.spawner.spawn(self.snake.occupied());
        if self.food.is_none() {
            return self.end(GameOverReason::GridFull);
        }
        TickOutcome::Grew
    }

    fn end(&mut self, reason: GameOverReason) -> TickOutcome {
        self.status = GameStatus::GameOver(reason);
        log!(
            "Game over: {:?} after {} ticks. Score: {}, best: {}",
            reason,
            self.tick,
            self.score,
            self.best_score
        );
        TickOutcome::GameOver(reason)
    }

    /// Starts a fresh round. Only honoured once the game is over.
    pub fn restart(&mut self) -> bool {
        if self.status.is_playing() {
            return false;
        }
        self.start_round();
        log!("Restarted, round {}", self.rounds_started);
        true
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            body: self.snake.cells().copied().collect(),
            heading: self.snake.heading(),
            food: self.food,
            score: self.score,
            best_score: self.best_score,
            status: self.status,
            tick: self.tick,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    #[cfg(test)]
    fn place(&mut self, cells: &[Cell], heading: Heading, food: Cell) {
        self.snake = Snake::from_cells(cells, heading).unwrap();
        assert!(!self.snake.contains(&food));
        self.food = Some(food);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn create_game() -> SnakeGame {
        SnakeGame::with_rng(GridSize::new(20, 15), GameRng::new(42))
    }

    fn far_food() -> Cell {
        Cell::new(0, 14)
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = create_game();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.body, vec![Cell::new(10, 7)]);
        assert_eq!(snapshot.heading, Heading::Right);
        assert_eq!(snapshot.score, 0);
        let food = snapshot.food.unwrap();
        assert!(!snapshot.body.contains(&food));
    }

    #[test]
    fn test_new_game_uses_seed_from_settings() {
        let settings = SnakeSettings { seed: Some(9), ..SnakeSettings::default() };
        let a = SnakeGame::new(&settings);
        let b = SnakeGame::new(&settings);
        assert_eq!(a.food(), b.food());
    }

    #[test]
    fn test_move_keeps_length() {
        let mut game = create_game();
        game.place(&[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)], Heading::Right, far_food());
        assert_eq!(game.tick(None), TickOutcome::Moved);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.body, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.tick, 1);
    }

    #[test]
    fn test_reverse_request_ignored() {
        let mut game = create_game();
        game.place(&[Cell::new(5, 5), Cell::new(4, 5)], Heading::Right, far_food());
        assert_eq!(game.tick(Some(Heading::Left)), TickOutcome::Moved);
        assert_eq!(game.snake().heading(), Heading::Right);
        assert_eq!(game.snake().head(), Cell::new(6, 5));
    }

    #[test]
    fn test_turn_applied_before_move() {
        let mut game = create_game();
        game.place(&[Cell::new(5, 5)], Heading::Right, far_food());
        game.tick(Some(Heading::Up));
        assert_eq!(game.snake().head(), Cell::new(5, 4));
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut game = create_game();
        game.place(&[Cell::new(19, 7)], Heading::Right, far_food());
        let outcome = game.tick(None);
        assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::WallCollision));
        assert_eq!(game.status(), GameStatus::GameOver(GameOverReason::WallCollision));
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().head(), Cell::new(19, 7));
    }

    #[test]
    fn test_wall_collision_top_edge() {
        let mut game = create_game();
        game.place(&[Cell::new(3, 0), Cell::new(3, 1)], Heading::Up, far_food());
        assert_eq!(game.tick(None), TickOutcome::GameOver(GameOverReason::WallCollision));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut game = create_game();
        let body = [
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
        ];
        game.place(&body, Heading::Left, far_food());
        let outcome = game.tick(Some(Heading::Down));
        assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::SelfCollision));
        assert_eq!(game.snake().len(), 5);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_allowed() {
        let mut game = create_game();
        let body = [Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6)];
        game.place(&body, Heading::Left, far_food());
        assert_eq!(game.tick(Some(Heading::Down)), TickOutcome::Moved);
        assert_eq!(game.snake().head(), Cell::new(5, 6));
        assert_eq!(game.snake().len(), 4);
    }

    #[test]
    fn test_eating_grows_and_respawns_food() {
        let mut game = create_game();
        game.place(&[Cell::new(5, 5)], Heading::Right, Cell::new(6, 5));
        let before = game.snake().len();
        assert_eq!(game.tick(None), TickOutcome::Grew);
        assert_eq!(game.snake().len(), before + 1);
        assert_eq!(game.score(), 1);
        assert_eq!(game.best_score(), 1);
        let food = game.food().unwrap();
        assert!(!game.snake().contains(&food));
    }

    #[test]
    fn test_tick_after_game_over_changes_nothing() {
        let mut game = create_game();
        game.place(&[Cell::new(19, 7)], Heading::Right, far_food());
        game.tick(None);
        let before = game.snapshot();
        assert_eq!(game.tick(Some(Heading::Up)), TickOutcome::NotPlaying);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut game = create_game();
        assert!(!game.restart());
        game.place(&[Cell::new(5, 5)], Heading::Right, Cell::new(6, 5));
        game.tick(None);
        game.place(&[Cell::new(19, 7), Cell::new(18, 7)], Heading::Right, far_food());
        game.tick(None);
        assert_eq!(game.score(), 1);

        assert!(game.restart());
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.best_score, 1);
        assert_eq!(snapshot.body, vec![Cell::new(10, 7)]);
        assert_eq!(snapshot.heading, Heading::Right);
        assert_eq!(snapshot.tick, 0);
        assert!(!snapshot.body.contains(&snapshot.food.unwrap()));
        assert_eq!(game.rounds_started(), 2);
    }

    #[test]
    fn test_filling_grid_ends_game() {
        let mut game = SnakeGame::with_rng(GridSize::new(2, 1), GameRng::new(1));
        game.place(&[Cell::new(1, 0)], Heading::Left, Cell::new(0, 0));
        assert_eq!(game.tick(None), TickOutcome::GameOver(GameOverReason::GridFull));
        assert_eq!(game.score(), 1);
        assert_eq!(game.food(), None);
        assert_eq!(game.snake().len(), 2);
    }

    #[test]
    fn test_single_cell_grid_starts_over() {
        let game = SnakeGame::with_rng(GridSize::new(1, 1), GameRng::new(1));
        assert_eq!(game.status(), GameStatus::GameOver(GameOverReason::GridFull));
        assert_eq!(game.food(), None);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut game = SnakeGame::with_rng(GridSize::new(8, 6), GameRng::new(3));
        let mut steering = GameRng::new(11);

        for _ in 0..5000 {
            if !game.status().is_playing() {
                assert!(game.restart());
                continue;
            }
            let before = game.snake().len();
            let requested = Heading::ALL[steering.random_index(4)];
            let outcome = game.tick(Some(requested));
            let snapshot = game.snapshot();

            let distinct: HashSet<Cell> = snapshot.body.iter().copied().collect();
            assert_eq!(distinct.len(), snapshot.body.len());
            assert!(!snapshot.body.is_empty());
            if let Some(food) = snapshot.food {
                assert!(!distinct.contains(&food));
            }

            match outcome {
                TickOutcome::Moved => assert_eq!(snapshot.body.len(), before),
                TickOutcome::Grew => assert_eq!(snapshot.body.len(), before + 1),
                TickOutcome::GameOver(GameOverReason::GridFull) => {
                    assert_eq!(snapshot.body.len(), before + 1)
                }
                TickOutcome::GameOver(_) => assert_eq!(snapshot.body.len(), before),
                TickOutcome::NotPlaying => unreachable!(),
            }
        }
    }
}
