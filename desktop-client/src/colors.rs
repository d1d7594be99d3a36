use eframe::egui::Color32;

pub const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);
pub const BRICK_RED: Color32 = Color32::from_rgb(178, 34, 34);
pub const GROUND_BROWN: Color32 = Color32::from_rgb(139, 69, 19);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0, 155, 0);
pub const SCORE_TEXT: Color32 = Color32::BLACK;
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(255, 0, 0);
pub const GAME_OVER_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 110);

pub const HEAD_FALLBACK: Color32 = Color32::from_rgb(255, 0, 0);
pub const FOOD_FALLBACK: Color32 = Color32::from_rgb(255, 165, 0);
