use std::path::PathBuf;

use image::DynamicImage;

/// Where a loaded image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Picked by the user through the file dialog
    Dialog,
    /// Detected by the Downloads folder watcher
    Download,
}

/// The image currently held in memory, ready for conversion
#[derive(Debug)]
pub struct LoadedImage {
    /// Decoded pixel data, decoupled from the source file
    pub image: DynamicImage,
    /// Path of the originally loaded file (used only for naming output)
    pub source_path: PathBuf,
}

impl LoadedImage {
    pub fn new(image: DynamicImage, source_path: PathBuf) -> Self {
        LoadedImage { image, source_path }
    }

    /// Base name of the source file without extension, for output naming
    pub fn base_name(&self) -> String {
        self.source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| String::from("icon"))
    }
}

/// Holds at most one loaded image at a time
///
/// A new load supersedes the previous image; any load or conversion error
/// clears it back to the empty state.
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<LoadedImage>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn replace(&mut self, loaded: LoadedImage) {
        self.loaded = Some(loaded);
    }

    pub fn clear(&mut self) {
        self.loaded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn loaded(name: &str) -> LoadedImage {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        LoadedImage::new(image, PathBuf::from(name))
    }

    #[test]
    fn test_starts_empty() {
        let session = Session::new();
        assert!(!session.has_image());
        assert!(session.loaded().is_none());
    }

    #[test]
    fn test_new_load_supersedes_previous() {
        let mut session = Session::new();
        session.replace(loaded("/tmp/first.png"));
        session.replace(loaded("/tmp/second.png"));

        let current = session.loaded().unwrap();
        assert_eq!(current.base_name(), "second");
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut session = Session::new();
        session.replace(loaded("/tmp/pic.png"));
        session.clear();
        assert!(!session.has_image());
    }

    #[test]
    fn test_base_name_strips_directory_and_extension() {
        assert_eq!(loaded("/home/user/Downloads/logo.v2.png").base_name(), "logo.v2");
        assert_eq!(loaded("plain.png").base_name(), "plain");
    }
}
