use crate::tileset::TileSet;

/// Tileset layout metrics derived from tile parameters and image dimensions.
///
/// Recomputed on every rebuild; never cached across rebuilds because the
/// underlying tileset resource may have changed in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Number of tile cells that fit across the image width.
    pub tiles_per_row: u32,
    /// Number of tile cells that fit down the image height.
    pub tiles_per_column: u32,
    /// 1 / image width.
    pub recip_image_width: f32,
    /// 1 / image height.
    pub recip_image_height: f32,
}

/// Tiles that fit along one image axis, accounting for margin and spacing.
fn tile_count(tile_size: u32, image_size: u32, tile_margin: u32, tile_spacing: u32) -> u32 {
    let actual_tile_size = 2 * tile_margin + tile_spacing + tile_size;
    if actual_tile_size > 0 {
        (image_size + tile_spacing) / actual_tile_size
    } else {
        0
    }
}

impl Metrics {
    /// Derive metrics for `tile_set` against a loaded image of
    /// `image_width` x `image_height` pixels.
    ///
    /// Returns `None` when the metrics are not computable: a zero image
    /// dimension, or an image too small to fit a single tile on either axis.
    pub fn calculate(tile_set: &TileSet, image_width: u32, image_height: u32) -> Option<Metrics> {
        if image_width == 0 || image_height == 0 {
            return None;
        }
        let tiles_per_row = tile_count(
            tile_set.tile_width,
            image_width,
            tile_set.tile_margin,
            tile_set.tile_spacing,
        );
        let tiles_per_column = tile_count(
            tile_set.tile_height,
            image_height,
            tile_set.tile_margin,
            tile_set.tile_spacing,
        );
        if tiles_per_row == 0 || tiles_per_column == 0 {
            return None;
        }
        Some(Metrics {
            tiles_per_row,
            tiles_per_column,
            recip_image_width: 1.0 / image_width as f32,
            recip_image_height: 1.0 / image_height as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_set(tile_width: u32, tile_height: u32, margin: u32, spacing: u32) -> TileSet {
        let mut ts = TileSet::new("test.tileset.json", tile_width, tile_height);
        ts.tile_margin = margin;
        ts.tile_spacing = spacing;
        ts
    }

    #[test]
    fn plain_grid_without_margin_or_spacing() {
        let m = Metrics::calculate(&tile_set(16, 16, 0, 0), 64, 16).expect("metrics");
        assert_eq!(m.tiles_per_row, 4);
        assert_eq!(m.tiles_per_column, 1);
        assert_eq!(m.recip_image_width, 1.0 / 64.0);
        assert_eq!(m.recip_image_height, 1.0 / 16.0);
    }

    #[test]
    fn margin_and_spacing_shrink_tile_counts() {
        // 2px margin both sides + 2px spacing => 22px per tile cell,
        // (64 + 2) / 22 = 3 across.
        let m = Metrics::calculate(&tile_set(16, 16, 2, 2), 64, 64).expect("metrics");
        assert_eq!(m.tiles_per_row, 3);
        assert_eq!(m.tiles_per_column, 3);
    }

    #[test]
    fn zero_image_dimension_is_not_computable() {
        assert_eq!(Metrics::calculate(&tile_set(16, 16, 0, 0), 0, 16), None);
        assert_eq!(Metrics::calculate(&tile_set(16, 16, 0, 0), 16, 0), None);
    }

    #[test]
    fn image_smaller_than_one_tile_is_not_computable() {
        assert_eq!(Metrics::calculate(&tile_set(16, 16, 0, 0), 8, 16), None);
        assert_eq!(Metrics::calculate(&tile_set(16, 16, 0, 0), 16, 8), None);
    }
}
