use log::warn;

use crate::error::TileSetError;
use crate::metrics::Metrics;
use crate::model::{Resource, SceneModel};

/// A tileset resource: tile pixel layout over a single source image.
///
/// Owned by the grid that references it; consumed read-only during
/// geometry builds. `image_size` is present only while the source image
/// is considered loaded.
#[derive(Debug, Clone)]
pub struct TileSet {
    /// Reference path this tileset was resolved from.
    pub path: String,
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Pixels of margin around each tile in the image.
    pub tile_margin: u32,
    /// Pixels between adjacent tiles in the image.
    pub tile_spacing: u32,
    /// Path of the source image.
    pub image: String,
    image_size: Option<(u32, u32)>,
}

impl TileSet {
    /// New tileset with no margin, no spacing and no loaded image.
    pub fn new(path: impl Into<String>, tile_width: u32, tile_height: u32) -> Self {
        TileSet {
            path: path.into(),
            tile_width,
            tile_height,
            tile_margin: 0,
            tile_spacing: 0,
            image: String::new(),
            image_size: None,
        }
    }

    /// Source image dimensions, if the image is loaded.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image_size
    }

    /// Record (or clear) the source image dimensions.
    pub fn set_image_size(&mut self, size: Option<(u32, u32)>) {
        self.image_size = size;
    }

    /// Layout metrics against the loaded image, if computable.
    pub fn metrics(&self) -> Option<Metrics> {
        let (width, height) = self.image_size?;
        Metrics::calculate(self, width, height)
    }

    /// Validate this tileset on its own terms.
    pub fn validate(&self) -> Result<(), TileSetError> {
        if self.image.is_empty() {
            return Err(TileSetError::MissingImage);
        }
        if self.image_size.is_none() {
            return Err(TileSetError::ImageNotLoaded(self.image.clone()));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(TileSetError::ZeroTileSize);
        }
        Ok(())
    }

    /// React to an external resource change.
    ///
    /// If `changed` identifies this tileset's source image, the definition
    /// is re-resolved through `model`; a failed re-resolve leaves the image
    /// unloaded. Returns whether a reload was attempted.
    pub fn handle_reload(&mut self, changed: &str, model: &dyn SceneModel) -> bool {
        if self.image.is_empty() || !model.same_resource(&self.image, changed) {
            return false;
        }
        match model.resolve(&self.path) {
            Ok(Resource::TileSet(fresh)) => *self = fresh,
            Ok(_) => {
                warn!("resource at '{}' is no longer a tile set", self.path);
                self.image_size = None;
            }
            Err(err) => {
                warn!("failed to reload tile set '{}': {:#}", self.path, err);
                self.image_size = None;
            }
        }
        true
    }
}
