/// PNG to ICO conversion module
///
/// This module handles:
/// - Loading and content-validating source PNG files (loader.rs)
/// - Icon size selection and validation (sizes.rs)
/// - Encoding multi-resolution ICO containers (encoder.rs)
/// - The conversion error taxonomy (error.rs)

pub mod encoder;
pub mod error;
pub mod loader;
pub mod sizes;

pub use error::ConvertError;
