use std::fmt;

/// Validation status error for a tile grid or its tileset reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateError {
    /// A tileset resource is attached but fails its own validation
    InvalidReference,
    /// The reference path is set but did not resolve to a tileset
    InvalidType,
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::InvalidReference => {
                write!(f, "referenced tile set failed validation")
            }
            ValidateError::InvalidType => {
                write!(f, "resource is not a tile set or could not be loaded")
            }
        }
    }
}

impl std::error::Error for ValidateError {}

/// Error from a tileset resource's own validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSetError {
    /// The tileset has no source image path
    MissingImage,
    /// The source image dimensions are not available
    ImageNotLoaded(String),
    /// Tile width or height is zero
    ZeroTileSize,
}

impl fmt::Display for TileSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileSetError::MissingImage => write!(f, "tile set has no image"),
            TileSetError::ImageNotLoaded(image) => {
                write!(f, "tile set image '{}' is not loaded", image)
            }
            TileSetError::ZeroTileSize => write!(f, "tile width and height must be at least 1"),
        }
    }
}

impl std::error::Error for TileSetError {}
