use thiserror::Error;

/// Rejections raised by the grid editor. None of them change the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("the cell is invalid")]
    InvalidTarget { x: usize, y: usize },
    #[error("unrecognised drag payload {0:?}")]
    UnknownComponent(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid dimension {0} exceeds the limit of {max} tiles", max = crate::config::MAX_TILES)]
    TooLarge(usize),
    #[error("tile size {0}px is outside {min}..={max}px", min = crate::config::MIN_TILE_SIZE, max = crate::config::MAX_TILE_SIZE)]
    TileSize(u32),
}
