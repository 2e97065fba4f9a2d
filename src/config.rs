use crate::error::ConfigError;

pub const DEFAULT_WIDTH: usize = 12;
pub const DEFAULT_HEIGHT: usize = 8;
pub const DEFAULT_TILE_SIZE: u32 = 60;
/// Tile size used by the home page editor.
pub const HOME_TILE_SIZE: u32 = 50;

pub const MAX_TILES: usize = 256;
pub const MIN_TILE_SIZE: u32 = 16;
pub const MAX_TILE_SIZE: u32 = 200;

/// Construction parameters of one editor. Fixed once the editor mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub tile_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize, tile_size: u32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            tile_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn home() -> Self {
        Self {
            tile_size: HOME_TILE_SIZE,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(&big) = [self.width, self.height].iter().find(|&&d| d > MAX_TILES) {
            return Err(ConfigError::TooLarge(big));
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        Ok(())
    }
}
