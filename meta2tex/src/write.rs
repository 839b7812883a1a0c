//! PNG output for pixel grids.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::raster::PixelGrid;

/// Texture path for a metadata file: same directory, extension replaced by `png`.
///
/// `house.obj.meta` becomes `house.obj.png`.
pub fn texture_path(meta_path: &Path) -> PathBuf {
    meta_path.with_extension("png")
}

/// Encode a grid as an 8-bit RGBA PNG into `w`.
pub fn encode_png<W: Write>(w: W, grid: &PixelGrid) -> Result<(), png::EncodingError> {
    let side = grid.side as u32;
    let mut encoder = png::Encoder::new(w, side, side);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&grid.to_rgba())?;
    writer.finish()
}

/// Write a grid as a PNG file.
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    encode_png(BufWriter::new(file), grid).map_err(|source| WriteError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
