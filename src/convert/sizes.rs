use std::fmt;

use super::error::ConvertError;

/// The common icon resolutions offered in the size dropdown
pub const ICON_SIZES: [IconSize; 7] = [
    IconSize::square(16),
    IconSize::square(24),
    IconSize::square(32),
    IconSize::square(48),
    IconSize::square(64),
    IconSize::square(128),
    IconSize::square(256),
];

/// The size selected when the application starts
pub const DEFAULT_SIZE: IconSize = IconSize::square(32);

/// Largest accepted dimension for a conversion request
pub const MAX_DIMENSION: u32 = 512;

/// A single requested icon resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn new(width: u32, height: u32) -> Self {
        IconSize { width, height }
    }

    pub const fn square(side: u32) -> Self {
        IconSize::new(side, side)
    }

    /// Dimensions must lie within (0, 512] before any encode call
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(ConvertError::InvalidSize(*self));
        }
        Ok(())
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Either one chosen resolution or the full common set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelection {
    Single(IconSize),
    All,
}

impl SizeSelection {
    /// The concrete list of frame sizes to render
    pub fn sizes(&self) -> Vec<IconSize> {
        match self {
            SizeSelection::Single(size) => vec![*size],
            SizeSelection::All => ICON_SIZES.to_vec(),
        }
    }

    /// Filename suffix appended to the source base name
    pub fn file_suffix(&self) -> String {
        match self {
            SizeSelection::Single(size) => size.to_string(),
            SizeSelection::All => String::from("all_sizes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_dropdown_format() {
        assert_eq!(IconSize::square(32).to_string(), "32x32");
        assert_eq!(IconSize::new(48, 64).to_string(), "48x64");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(IconSize::new(0, 0).validate().is_err());
        assert!(IconSize::new(32, 0).validate().is_err());
        assert!(IconSize::new(0, 32).validate().is_err());
    }

    #[test]
    fn test_oversized_is_rejected() {
        assert!(IconSize::square(600).validate().is_err());
        assert!(IconSize::new(513, 32).validate().is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(IconSize::square(1).validate().is_ok());
        assert!(IconSize::square(512).validate().is_ok());
    }

    #[test]
    fn test_single_selection_has_one_size() {
        let selection = SizeSelection::Single(IconSize::square(32));
        assert_eq!(selection.sizes(), vec![IconSize::square(32)]);
        assert_eq!(selection.file_suffix(), "32x32");
    }

    #[test]
    fn test_all_selection_covers_common_set() {
        let sizes = SizeSelection::All.sizes();
        assert_eq!(sizes.len(), 7);
        assert_eq!(sizes[0], IconSize::square(16));
        assert_eq!(sizes[6], IconSize::square(256));
        assert_eq!(SizeSelection::All.file_suffix(), "all_sizes");
    }
}
