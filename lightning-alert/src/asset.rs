//! Asset catalog.
//!
//! The catalog is a JSON array of assets, each tagged with the quadkey of the
//! tile it sits in:
//!
//! ```text
//! [{"assetName":"Dante Street","quadKey":"023112133033","assetOwner":"6720"}]
//! ```
//!
//! Quadkeys are taken as given. They are never recomputed or checked against
//! any coordinates.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to parse asset catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A named, owned asset located in a single tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_name: String,
    pub asset_owner: String,
    pub quad_key: String,
}

impl Asset {
    pub fn new(asset_name: &str, asset_owner: &str, quad_key: &str) -> Self {
        Self {
            asset_name: asset_name.to_string(),
            asset_owner: asset_owner.to_string(),
            quad_key: quad_key.to_string(),
        }
    }
}

/// Assets in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Load a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
            _ => AssetError::Io(e),
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            count = catalog.len(),
            "Loaded asset catalog"
        );

        Ok(catalog)
    }

    /// Load a catalog from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AssetError> {
        let assets: Vec<Asset> = serde_json::from_reader(reader)?;
        Ok(Self { assets })
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    pub fn as_slice(&self) -> &[Asset] {
        &self.assets
    }
}

impl From<Vec<Asset>> for AssetCatalog {
    fn from(assets: Vec<Asset>) -> Self {
        Self::new(assets)
    }
}

impl<'a> IntoIterator for &'a AssetCatalog {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
