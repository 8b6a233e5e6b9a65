//! Image Library
//!
//! Decodes image files for the image overlay and keeps them, keyed by an
//! opaque [`ImageHandle`], for as long as an overlay item refers to them.
//! Textures are uploaded to egui lazily, the first time the canvas paints
//! an image.

pub mod frame;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub use frame::DecodedImage;

/// Opaque reference to decoded image data in the [`ImageLibrary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u64);

/// Errors raised while loading or placing images
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("file is empty")]
    Empty,
    #[error("the image overlay already holds {max} images")]
    LimitReached { max: usize },
}

struct LibraryEntry {
    image: Arc<DecodedImage>,
    texture: Option<egui::TextureHandle>,
}

/// Decoded images referenced by the image overlay
#[derive(Default)]
pub struct ImageLibrary {
    entries: HashMap<ImageHandle, LibraryEntry>,
    next_handle: u64,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode in-memory file contents (e.g. a dropped file)
    pub fn load_bytes(&mut self, bytes: &[u8], name: &str) -> Result<ImageHandle, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::Empty);
        }
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        let decoded = DecodedImage::new(rgba.into_raw(), width, height, name);
        Ok(self.insert(decoded))
    }

    /// Read and decode an image file from disk
    pub fn load_path(&mut self, path: &Path) -> Result<ImageHandle, MediaError> {
        let bytes = std::fs::read(path).map_err(|source| MediaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.load_bytes(&bytes, &name)
    }

    /// Register an already decoded image
    pub fn insert(&mut self, image: DecodedImage) -> ImageHandle {
        self.next_handle += 1;
        let handle = ImageHandle(self.next_handle);
        info!(
            "Loaded image '{}' ({}x{}) as {:?}",
            image.name, image.width, image.height, handle
        );
        self.entries.insert(
            handle,
            LibraryEntry {
                image: Arc::new(image),
                texture: None,
            },
        );
        handle
    }

    pub fn get(&self, handle: ImageHandle) -> Option<Arc<DecodedImage>> {
        self.entries.get(&handle).map(|entry| entry.image.clone())
    }

    #[cfg(test)]
    pub fn contains(&self, handle: ImageHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every image not in `in_use`
    pub fn retain(&mut self, in_use: &HashSet<ImageHandle>) {
        let before = self.entries.len();
        self.entries.retain(|handle, _| in_use.contains(handle));
        let released = before - self.entries.len();
        if released > 0 {
            debug!("Released {} unused images", released);
        }
    }

    /// Texture for `handle`, uploading it on first use
    pub fn texture(&mut self, ctx: &egui::Context, handle: ImageHandle) -> Option<egui::TextureHandle> {
        let entry = self.entries.get_mut(&handle)?;
        if entry.texture.is_none() {
            let texture = ctx.load_texture(
                format!("overlay_image_{}", handle.0),
                entry.image.to_color_image(),
                egui::TextureOptions::LINEAR,
            );
            entry.texture = Some(texture);
        }
        entry.texture.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_load_bytes_decodes_to_rgba() {
        let mut library = ImageLibrary::new();
        let handle = library.load_bytes(&png_bytes(3, 2), "logo.png").unwrap();

        let image = library.get(handle).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.data.len(), 3 * 2 * 4);
        assert_eq!(&image.data[0..4], &[255, 0, 0, 255]);
        assert_eq!(image.name, "logo.png");
    }

    #[test]
    fn test_load_rejects_garbage_and_empty_input() {
        let mut library = ImageLibrary::new();
        assert!(matches!(
            library.load_bytes(b"not an image", "x.png"),
            Err(MediaError::Decode(_))
        ));
        assert!(matches!(library.load_bytes(&[], "x.png"), Err(MediaError::Empty)));
        assert!(library.is_empty());
    }

    #[test]
    fn test_load_path_reports_missing_file() {
        let mut library = ImageLibrary::new();
        let result = library.load_path(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(MediaError::Read { .. })));
    }

    #[test]
    fn test_load_path_uses_file_name() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&png_bytes(1, 1)).unwrap();

        let mut library = ImageLibrary::new();
        let handle = library.load_path(file.path()).unwrap();
        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(library.get(handle).unwrap().name, name);
    }

    #[test]
    fn test_retain_releases_unused() {
        let mut library = ImageLibrary::new();
        let a = library.insert(DecodedImage::new(vec![0; 4], 1, 1, "a"));
        let b = library.insert(DecodedImage::new(vec![0; 4], 1, 1, "b"));
        let c = library.insert(DecodedImage::new(vec![0; 4], 1, 1, "c"));
        assert_ne!(a, b);

        let in_use: HashSet<ImageHandle> = [c].into_iter().collect();
        library.retain(&in_use);
        assert!(!library.contains(a));
        assert!(!library.contains(b));
        assert!(library.contains(c));
        assert_eq!(library.len(), 1);
    }
}
