use std::path::Path;

use serde::Deserialize;

use crate::color::strip_hash;
use crate::error::MetaError;

/// A material metadata document.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Materials")]
    pub materials: Vec<Material>,
}

/// One material record. Fields other than the color are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Material {
    #[serde(rename = "Color")]
    pub color: String,
}

impl Metadata {
    /// Parse a metadata document from JSON text.
    pub fn from_json(json: &str) -> Result<Metadata, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a metadata file.
    pub fn load(path: &Path) -> Result<Metadata, MetaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MetaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Metadata::from_json(&contents).map_err(|source| MetaError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Material colors in document order, leading `#` removed.
    pub fn color_codes(&self) -> Vec<String> {
        self.materials.iter().map(|m| strip_hash(&m.color)).collect()
    }
}
