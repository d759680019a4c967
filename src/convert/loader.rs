use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use super::error::ConvertError;

/// Load a PNG file and return a decoded in-memory copy
///
/// The real content format is sniffed rather than trusting the file
/// extension. The file handle is released as soon as decoding finishes,
/// so the source file can be deleted immediately afterwards.
pub fn load_png(path: &Path) -> Result<DynamicImage, ConvertError> {
    // The file can disappear between detection and processing
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    // No format hint from the path here, so the check below sees only
    // what the content sniffing found
    let file = File::open(path)?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;

    if reader.format() != Some(ImageFormat::Png) {
        return Err(ConvertError::NotPng(path.to_path_buf()));
    }

    let image = reader.decode()?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_png(Path::new("/nonexistent/pic.png"));
        assert!(matches!(result, Err(ConvertError::NotFound(_))));
    }

    #[test]
    fn test_loads_a_valid_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");
        RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let image = load_png(&path).unwrap();
        assert_eq!((image.width(), image.height()), (64, 64));
    }

    #[test]
    fn test_rejects_jpeg_content_behind_png_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.png");
        RgbImage::from_pixel(16, 16, Rgb([200, 100, 50]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        let result = load_png(&path);
        assert!(matches!(result, Err(ConvertError::NotPng(_))));
    }

    #[test]
    fn test_rejects_arbitrary_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"this is not an image at all").unwrap();

        let result = load_png(&path);
        assert!(matches!(result, Err(ConvertError::NotPng(_))));
    }

    #[test]
    fn test_decoded_copy_survives_source_deletion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleeting.png");
        RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let image = load_png(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // The decoded pixels stay usable without the source file
        assert_eq!(image.to_rgba8().get_pixel(4, 4), &Rgba([1, 2, 3, 255]));
    }
}
