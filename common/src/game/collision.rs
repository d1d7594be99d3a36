use super::snake::Snake;
use super::types::{Cell, GameOverReason, GridSize};

/// Wall first, then body. The current tail cell does not count as body
/// because it is vacated on the same tick, unless food is eaten, and food
/// never sits on the snake.
pub fn check(new_head: Cell, snake: &Snake, grid: &GridSize) -> Result<(), GameOverReason> {
    if !grid.contains(new_head) {
        return Err(GameOverReason::WallCollision);
    }
    if snake.contains(&new_head) && new_head != snake.tail() {
        return Err(GameOverReason::SelfCollision);
    }
    Ok(())
}
