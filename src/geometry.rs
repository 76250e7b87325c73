use glam::vec3;

use crate::bounds::Aabb;
use crate::layer::Layer;
use crate::tileset::TileSet;

/// Floats per vertex: u, v, x, y, z.
pub const VERTEX_STRIDE: usize = 5;

/// A sealed, fully populated vertex buffer.
///
/// One quad (4 vertices) per occupied cell, [`VERTEX_STRIDE`] floats per
/// vertex. Never exposed half-built: a buffer either exists complete or
/// not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Box<[f32]>,
}

impl VertexBuffer {
    fn seal(data: Vec<f32>) -> Self {
        debug_assert!(data.len() % (4 * VERTEX_STRIDE) == 0);
        VertexBuffer {
            data: data.into_boxed_slice(),
        }
    }

    /// The flat float data.
    pub fn as_floats(&self) -> &[f32] {
        &self.data
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / VERTEX_STRIDE
    }

    /// Number of quads (occupied cells) in the buffer.
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    /// True when the grid had no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Build the vertex buffer and bounds for `layers` against `tile_set`.
///
/// Emits, for each occupied cell in each layer in list order, one quad of
/// 4 vertices (u, v, x, y, z) with positions in cell-grid pixel space and
/// texture coordinates looked up from the tile's row-major placement in
/// the tileset image. The v axis is inverted relative to y to map a
/// top-left-origin image onto a bottom-up position space.
///
/// Returns `None` when the tileset image is not loaded or the layout
/// metrics are not computable; that is a legitimate transient state, not
/// an error. Zero occupied cells yield an empty sealed buffer and empty
/// bounds. Tile indices are not validated against the tileset's tile
/// count; an out-of-range index produces out-of-range texture coordinates.
pub fn build_vertex_data(layers: &[Layer], tile_set: &TileSet) -> Option<(VertexBuffer, Aabb)> {
    tile_set.image_size()?;
    let metrics = tile_set.metrics()?;

    let total_cell_count: usize = layers.iter().map(Layer::cell_count).sum();
    let mut data = Vec::with_capacity(total_cell_count * 4 * VERTEX_STRIDE);
    let mut aabb = Aabb::new();

    let tile_width = tile_set.tile_width;
    let tile_height = tile_set.tile_height;
    let tile_margin = tile_set.tile_margin;
    let tile_spacing = tile_set.tile_spacing;

    let recip_width = metrics.recip_image_width;
    let recip_height = metrics.recip_image_height;

    for layer in layers {
        if layer.cell_count() == 0 {
            continue;
        }
        let z = layer.z();
        for (key, &tile) in layer.cells() {
            // Promoted to f32 before multiplying: extreme cell coordinates
            // and tile indices must never make the builder fail.
            let x0 = key.x() as f32 * tile_width as f32;
            let x1 = x0 + tile_width as f32;
            let y0 = key.y() as f32 * tile_height as f32;
            let y1 = y0 + tile_height as f32;

            let col = tile % metrics.tiles_per_row;
            let row = tile / metrics.tiles_per_row;
            let u0 = (col as f32 * (tile_spacing + 2 * tile_margin + tile_width) as f32
                + tile_margin as f32)
                * recip_width;
            let u1 = u0 + tile_width as f32 * recip_width;
            let v0 = (row as f32 * (tile_spacing + 2 * tile_margin + tile_height) as f32
                + tile_margin as f32)
                * recip_height;
            let v1 = v0 + tile_height as f32 * recip_height;

            data.extend_from_slice(&[
                u0, v1, x0, y0, z, //
                u0, v0, x0, y1, z, //
                u1, v0, x1, y1, z, //
                u1, v1, x1, y0, z,
            ]);

            aabb.union(vec3(x0, y0, z));
            aabb.union(vec3(x1, y1, z));
        }
    }

    Some((VertexBuffer::seal(data), aabb))
}
