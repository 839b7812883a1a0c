use std::path::{Path, PathBuf};

use log::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::color::ColorPolicy;
use crate::error::{ConvertError, RasterError};
use crate::meta::Metadata;
use crate::raster::{rasterize_with, side_for};
use crate::walk::{find_metadata_files, has_extension};
use crate::write::{texture_path, write_png};

/// Conversion configuration.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Extension identifying metadata files, without the dot.
    pub extension: String,
    /// Reject color codes that are not exactly six hex digits.
    pub strict_colors: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extension: "meta".to_string(),
            strict_colors: false,
        }
    }
}

impl ConvertConfig {
    pub fn color_policy(&self) -> ColorPolicy {
        if self.strict_colors {
            ColorPolicy::Strict
        } else {
            ColorPolicy::Lenient
        }
    }
}

/// A texture written for one metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub path: PathBuf,
    pub side: usize,
}

/// Outcome of converting one metadata file.
#[derive(Debug)]
pub struct Conversion {
    pub input: PathBuf,
    pub result: Result<Texture, ConvertError>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Convert a single metadata file into a PNG written next to it.
pub fn convert_file(path: &Path, config: &ConvertConfig) -> Result<Texture, ConvertError> {
    debug!("loading {}", path.display());
    let meta = Metadata::load(path)?;
    let colors = meta.color_codes();

    let grid = rasterize_with(&colors, config.color_policy()).map_err(|source| match source {
        RasterError::Empty => ConvertError::NoMaterials(path.to_path_buf()),
        source => ConvertError::Raster {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let side = side_for(colors.len());
    if side * side != colors.len() {
        warn!(
            "{}: {} materials is not a square number, using the last {}",
            path.display(),
            colors.len(),
            side * side
        );
    }

    let out = texture_path(path);
    write_png(&grid, &out)?;
    info!("wrote {} ({side}x{side})", out.display());

    Ok(Texture { path: out, side })
}

/// Metadata files to convert for `input`.
///
/// A path with the metadata extension is taken as-is; anything else is
/// walked as a directory tree.
pub fn collect_inputs(input: &Path, config: &ConvertConfig) -> Vec<Result<PathBuf, ConvertError>> {
    if has_extension(input, &config.extension) {
        vec![Ok(input.to_path_buf())]
    } else {
        find_metadata_files(input, &config.extension)
    }
}

/// Convert every metadata file found under `input`.
///
/// Each file succeeds or fails independently. Outcomes are returned in
/// discovery order, including entries the directory walk could not read.
pub fn convert_all(input: &Path, config: &ConvertConfig) -> Vec<Conversion> {
    convert_all_with(input, config, |_, _, _| {})
}

/// Like [`convert_all`], calling `on_outcome(index, total, conversion)` as
/// soon as each file finishes.
///
/// `index` is the file's position in discovery order. With the `parallel`
/// feature the calls arrive in completion order, possibly from several
/// threads at once.
pub fn convert_all_with<F>(input: &Path, config: &ConvertConfig, on_outcome: F) -> Vec<Conversion>
where
    F: Fn(usize, usize, &Conversion) + Sync + Send,
{
    let inputs = collect_inputs(input, config);
    let total = inputs.len();
    debug!("found {total} metadata files under {}", input.display());

    let convert_one = |(index, entry): (usize, Result<PathBuf, ConvertError>)| {
        let conversion = match entry {
            Ok(path) => {
                let result = convert_file(&path, config);
                Conversion {
                    input: path,
                    result,
                }
            }
            Err(err) => {
                let input = match &err {
                    ConvertError::Walk { path, .. } => path.clone(),
                    _ => input.to_path_buf(),
                };
                Conversion {
                    input,
                    result: Err(err),
                }
            }
        };
        on_outcome(index, total, &conversion);
        conversion
    };

    #[cfg(feature = "parallel")]
    let conversions: Vec<Conversion> = inputs
        .into_par_iter()
        .enumerate()
        .map(convert_one)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let conversions: Vec<Conversion> = inputs.into_iter().enumerate().map(convert_one).collect();

    conversions
}
