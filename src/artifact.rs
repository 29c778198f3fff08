//! Finished screenshot artifact: PNG encoding and file persistence

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use image::RgbaImage;

use crate::config::SaveLocation;

/// A flattened screenshot encoded as PNG
#[derive(Clone, Debug)]
pub struct Artifact {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl Artifact {
    /// Encode a frame into a PNG artifact
    pub fn encode(frame: &RgbaImage) -> Result<Self> {
        let mut png = Vec::new();
        write_png(&mut png, frame).context("failed to encode artifact")?;
        Ok(Self {
            png,
            width: frame.width(),
            height: frame.height(),
        })
    }

    /// Get the encoded PNG bytes
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Consume the artifact, returning the encoded PNG bytes
    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Get the artifact width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the artifact height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Build a timestamped path in the configured folder
    pub fn default_path(location: SaveLocation) -> Option<PathBuf> {
        let mut path = match location {
            SaveLocation::Pictures => {
                dirs::picture_dir().or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))
            }
            SaveLocation::Documents => {
                dirs::document_dir().or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
            }
        }?;
        let name = chrono::Local::now()
            .format("Feedback_%Y-%m-%d_%H-%M-%S.png")
            .to_string();
        path.push(name);

        Some(path)
    }

    /// Save to a timestamped file in the configured folder and return the
    /// final path
    pub fn save(&self, location: SaveLocation) -> Result<PathBuf> {
        let path =
            Self::default_path(location).ok_or_else(|| anyhow!("no usable save directory"))?;
        self.save_as(&path)
    }

    /// Write the PNG through a temporary file in the target directory, then
    /// move it into place so readers never observe a partial file
    pub fn save_as(&self, path: &Path) -> Result<PathBuf> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow!("save path has no parent directory"))?;
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::Builder::new()
            .prefix(".feedback-")
            .suffix(".png")
            .tempfile_in(dir)?;
        file.write_all(&self.png)?;
        file.persist(path)
            .map_err(|err| anyhow!("failed to persist artifact: {err}"))?;

        log::debug!("artifact saved to {}", path.display());
        Ok(path.to_path_buf())
    }
}

/// Encode an RGBA frame as an 8-bit PNG
pub fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> RgbaImage {
        RgbaImage::from_pixel(20, 10, image::Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn test_encode_round_trips_through_png() {
        let artifact = Artifact::encode(&frame()).unwrap();
        assert_eq!(artifact.width(), 20);
        assert_eq!(artifact.height(), 10);

        let decoded = image::load_from_memory(artifact.png_bytes())
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.as_raw(), frame().as_raw());
    }

    #[test]
    fn test_save_as_writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::encode(&frame()).unwrap();
        let path = dir.path().join("shot.png");
        let written = artifact.save_as(&path).unwrap();
        assert_eq!(written, path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, artifact.png_bytes());
        // No leftover temp files
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
