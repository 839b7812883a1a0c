pub mod color;
pub mod convert;
pub mod error;
pub mod meta;
pub mod raster;
pub mod walk;
pub mod write;

pub use color::{decode, Pixel};
pub use convert::{convert_all, convert_all_with, convert_file, Conversion, ConvertConfig, Texture};
pub use raster::{rasterize, PixelGrid};
