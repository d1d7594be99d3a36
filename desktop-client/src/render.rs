use eframe::egui;
use snake_common::{Cell, GameSnapshot, GameStatus, GridSize};

use crate::colors;
use crate::sprites::Sprites;

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Everything drawing needs besides the game state itself.
pub struct RenderContext {
    cell_size: f32,
    head_texture: egui::TextureHandle,
    food_texture: egui::TextureHandle,
}

impl RenderContext {
    pub fn new(ctx: &egui::Context, sprites: &Sprites, cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
            head_texture: sprites.head.to_egui_texture(ctx),
            food_texture: sprites.food.to_egui_texture(ctx),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
}

/// Playfield plus one row of ground underneath.
pub fn canvas_size(grid: GridSize, cell_size: f32) -> egui::Vec2 {
    egui::vec2(
        grid.width as f32 * cell_size,
        (grid.height + 1) as f32 * cell_size,
    )
}

pub fn cell_rect(origin: egui::Pos2, cell: Cell, cell_size: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(cell.x as f32 * cell_size, cell.y as f32 * cell_size),
        egui::vec2(cell_size, cell_size),
    )
}

pub fn draw_game(
    ui: &mut egui::Ui,
    render: &RenderContext,
    snapshot: &GameSnapshot,
    recent_scores: &[u32],
) {
    let cell_size = render.cell_size();
    let (response, painter) =
        ui.allocate_painter(canvas_size(snapshot.grid, cell_size), egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, colors::SKY_BLUE);
    draw_ground(&painter, origin, snapshot.grid, cell_size);

    if let Some(food) = snapshot.food {
        painter.image(
            render.food_texture.id(),
            cell_rect(origin, food, cell_size),
            full_uv(),
            egui::Color32::WHITE,
        );
    }

    for (i, cell) in snapshot.body.iter().enumerate() {
        let rect = cell_rect(origin, *cell, cell_size);
        if i == 0 {
            painter.image(render.head_texture.id(), rect, full_uv(), egui::Color32::WHITE);
        } else {
            painter.rect_filled(rect, 0.0, colors::SNAKE_BODY);
        }
    }

    painter.text(
        origin + egui::vec2(5.0, 5.0),
        egui::Align2::LEFT_TOP,
        format!("Score: {}", snapshot.score),
        egui::FontId::proportional(20.0),
        colors::SCORE_TEXT,
    );
    painter.text(
        egui::pos2(response.rect.max.x - 5.0, origin.y + 5.0),
        egui::Align2::RIGHT_TOP,
        format!("Best: {}", snapshot.best_score),
        egui::FontId::proportional(16.0),
        colors::SCORE_TEXT,
    );

    if let GameStatus::GameOver(reason) = snapshot.status {
        painter.rect_filled(response.rect, 0.0, colors::GAME_OVER_SHADE);
        let center = response.rect.center();
        painter.text(
            center - egui::vec2(0.0, 30.0),
            egui::Align2::CENTER_CENTER,
            "Game Over",
            egui::FontId::proportional(44.0),
            colors::GAME_OVER_TEXT,
        );
        painter.text(
            center + egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            format!("{}. Final score: {}", reason.describe(), snapshot.score),
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
        painter.text(
            center + egui::vec2(0.0, 36.0),
            egui::Align2::CENTER_CENTER,
            "Press Enter, Space or R to play again",
            egui::FontId::proportional(16.0),
            egui::Color32::WHITE,
        );
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if recent_scores.is_empty() {
            ui.label("Arrow keys or WASD to steer");
        } else {
            let scores: Vec<String> = recent_scores.iter().map(|s| s.to_string()).collect();
            ui.label(format!("Recent scores: {}", scores.join(", ")));
        }
    });
}

fn draw_ground(painter: &egui::Painter, origin: egui::Pos2, grid: GridSize, cell_size: f32) {
    for x in 0..grid.width as i32 {
        let rect = cell_rect(origin, Cell::new(x, grid.height as i32), cell_size);
        painter.rect_filled(rect, 0.0, colors::BRICK_RED);
        painter.rect_filled(
            rect.shrink2(egui::vec2(0.0, cell_size / 8.0)),
            0.0,
            colors::GROUND_BROWN,
        );
    }
}
