use std::fmt;
use std::path::{Path, PathBuf};

use eframe::egui;
use image::imageops::FilterType;
use snake_common::log_warn;

use crate::colors;
use crate::config::AssetsConfig;

#[derive(Debug)]
pub enum SpriteLoadError {
    NotFound(PathBuf),
    Decode { path: PathBuf, message: String },
}

impl fmt::Display for SpriteLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteLoadError::NotFound(path) => write!(f, "sprite {} not found", path.display()),
            SpriteLoadError::Decode { path, message } => {
                write!(f, "sprite {} could not be decoded: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for SpriteLoadError {}

#[derive(Clone)]
pub struct Sprite {
    pixels: Vec<u8>,
    size: usize,
    name: String,
    placeholder: bool,
}

impl Sprite {
    /// Loads an image and scales it to a `size`×`size` square.
    pub fn load(path: &Path, size: u32, name: &str) -> Result<Self, SpriteLoadError> {
        if !path.exists() {
            return Err(SpriteLoadError::NotFound(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|e| SpriteLoadError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let scaled = image.resize_exact(size, size, FilterType::Nearest).to_rgba8();

        Ok(Self {
            pixels: scaled.into_raw(),
            size: size as usize,
            name: name.to_string(),
            placeholder: false,
        })
    }

    pub fn placeholder(size: u32, color: egui::Color32, name: &str) -> Self {
        let rgba = [color.r(), color.g(), color.b(), 255];
        let pixel_count = size as usize * size as usize;
        Self {
            pixels: rgba.repeat(pixel_count),
            size: size as usize,
            name: name.to_string(),
            placeholder: true,
        }
    }

    pub fn load_or_placeholder(path: &Path, size: u32, fallback: egui::Color32, name: &str) -> Self {
        match Self::load(path, size, name) {
            Ok(sprite) => sprite,
            Err(err) => {
                log_warn!("{}, drawing {} as a solid block", err, name);
                Self::placeholder(size, fallback, name)
            }
        }
    }

    #[cfg(test)]
    fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    #[cfg(test)]
    fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.size + x) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    pub fn to_egui_texture(&self, ctx: &egui::Context) -> egui::TextureHandle {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([self.size, self.size], &self.pixels);
        ctx.load_texture(self.name.as_str(), color_image, egui::TextureOptions::NEAREST)
    }
}

pub struct Sprites {
    pub head: Sprite,
    pub food: Sprite,
}

impl Sprites {
    pub fn load(assets: &AssetsConfig, cell_size: u32) -> Self {
        Self {
            head: Sprite::load_or_placeholder(
                Path::new(&assets.head_sprite),
                cell_size,
                colors::HEAD_FALLBACK,
                "head",
            ),
            food: Sprite::load_or_placeholder(
                Path::new(&assets.food_sprite),
                cell_size,
                colors::FOOD_FALLBACK,
                "food",
            ),
        }
    }
}
