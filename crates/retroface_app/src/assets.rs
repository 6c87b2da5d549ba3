//! Directory-backed asset source

use retroface_face::{AssetError, AssetSource};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Serves assets from a directory tree, keyed by relative path.
#[derive(Clone, Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(name);
        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssetError::NotFound(name.to_owned()),
            _ => AssetError::Io {
                name: name.to_owned(),
                source,
            },
        })
    }
}
