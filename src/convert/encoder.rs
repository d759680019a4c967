use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType};

use super::error::ConvertError;
use super::sizes::SizeSelection;

/// Build the output filename from the source base name and the selection
///
/// `icon` at 32x32 becomes `icon_32x32.ico`; the full set becomes
/// `icon_all_sizes.ico`.
pub fn output_filename(base_name: &str, selection: &SizeSelection) -> String {
    format!("{}_{}.ico", base_name, selection.file_suffix())
}

/// Encode the loaded image as an ICO file at the requested sizes
///
/// Every requested dimension is validated before any encoding starts.
/// Each frame is resized with Lanczos resampling and stored PNG-compressed
/// inside the container.
pub fn export_ico(
    image: &DynamicImage,
    selection: &SizeSelection,
    ico_path: &Path,
) -> Result<(), ConvertError> {
    let sizes = selection.sizes();
    for size in &sizes {
        size.validate()?;
    }

    // Render all frames up front; IcoFrame borrows the pixel buffers
    let mut rendered = Vec::with_capacity(sizes.len());
    for size in &sizes {
        let frame = image
            .resize_exact(size.width, size.height, FilterType::Lanczos3)
            .to_rgba8();
        rendered.push(frame);
    }

    let mut frames = Vec::with_capacity(rendered.len());
    for (buffer, size) in rendered.iter().zip(&sizes) {
        frames.push(IcoFrame::as_png(
            buffer.as_raw(),
            size.width,
            size.height,
            ExtendedColorType::Rgba8,
        )?);
    }

    let file = File::create(ico_path)?;
    IcoEncoder::new(BufWriter::new(file)).encode_images(&frames)?;

    Ok(())
}
