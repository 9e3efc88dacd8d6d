//! Rendering pipeline: layout -> paint -> raster

pub mod builtin_font;
pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::Result;

/// A rendered image and its PNG encoding
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Hex SHA-256 of the PNG bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    /// Write the PNG to `path`. Parent directories must already exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.png_data)?;
        Ok(())
    }
}
