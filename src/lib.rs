#![warn(missing_docs)]

//! Quad geometry for sparse tile grids: ordered layers of cell -> tile-index
//! mappings over a shared tileset, flattened into a renderable vertex buffer
//! with texture coordinates and a bounding volume.

mod bounds;
mod error;
mod geometry;
mod grid;
mod layer;
mod loader {
    pub mod json_loader;
}
mod metrics;
mod model;
mod tileset;

pub use bounds::Aabb;
pub use error::{TileSetError, ValidateError};
pub use geometry::{build_vertex_data, VertexBuffer, VERTEX_STRIDE};
pub use grid::TileGrid;
pub use layer::{CellKey, Layer};
pub use loader::json_loader::JsonLoader;
pub use metrics::Metrics;
pub use model::{Resource, SceneModel};
pub use tileset::TileSet;
