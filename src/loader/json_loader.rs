use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{Resource, SceneModel};
use crate::tileset::TileSet;

#[derive(Deserialize)]
struct RawTileSetDef {
    tilewidth: u32,
    tileheight: u32,
    #[serde(default)]
    margin: u32,
    #[serde(default)]
    spacing: u32,
    #[serde(default)]
    image: String,
    // Declared by the authoring tool; absent means the image has not been
    // sized yet and the tileset counts as "image not loaded".
    #[serde(default)]
    imagewidth: Option<u32>,
    #[serde(default)]
    imageheight: Option<u32>,
}

/// File-backed [`SceneModel`] resolving reference paths to Tiled-style
/// tileset JSON definitions under a base directory.
///
/// Image decoding belongs to the surrounding framework; image dimensions
/// are taken from the definition's `imagewidth`/`imageheight` fields.
pub struct JsonLoader {
    base_dir: PathBuf,
}

impl JsonLoader {
    /// Loader resolving paths relative to `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        JsonLoader {
            base_dir: base_dir.into(),
        }
    }

    fn decode_tile_set(path: &str, json: &str) -> anyhow::Result<TileSet> {
        let raw: RawTileSetDef =
            serde_json::from_str(json).with_context(|| format!("Parsing tileset {}", path))?;
        let mut tile_set = TileSet::new(path, raw.tilewidth, raw.tileheight);
        tile_set.tile_margin = raw.margin;
        tile_set.tile_spacing = raw.spacing;
        tile_set.image = raw.image;
        if let (Some(width), Some(height)) = (raw.imagewidth, raw.imageheight) {
            tile_set.set_image_size(Some((width, height)));
        }
        Ok(tile_set)
    }
}

impl SceneModel for JsonLoader {
    fn resolve(&self, path: &str) -> anyhow::Result<Resource> {
        let file = self.base_dir.join(path);
        if Path::new(path).extension().and_then(|e| e.to_str()) != Some("json") {
            return Ok(Resource::Other);
        }
        let txt = std::fs::read_to_string(&file)
            .with_context(|| format!("Reading tileset file {}", file.display()))?;
        Ok(Resource::TileSet(Self::decode_tile_set(path, &txt)?))
    }
}
