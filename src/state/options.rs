use std::path::PathBuf;

use crate::convert::sizes::{IconSize, SizeSelection, DEFAULT_SIZE};

/// User-facing conversion options
#[derive(Debug, Clone)]
pub struct Options {
    /// Target size when converting a single resolution
    pub size: IconSize,
    /// Generate every common size into one ICO instead
    pub all_sizes: bool,
    /// Delete the source PNG from Downloads after an automatic load
    pub auto_delete: bool,
    /// Where converted ICO files are written
    pub output_dir: PathBuf,
}

impl Options {
    pub fn new(output_dir: PathBuf) -> Self {
        Options {
            size: DEFAULT_SIZE,
            all_sizes: false,
            auto_delete: true,
            output_dir,
        }
    }

    /// The effective size selection for the next conversion
    pub fn selection(&self) -> SizeSelection {
        if self.all_sizes {
            SizeSelection::All
        } else {
            SizeSelection::Single(self.size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new(PathBuf::from("/tmp/out"));
        assert_eq!(options.size, IconSize::square(32));
        assert!(!options.all_sizes);
        assert!(options.auto_delete);
    }

    #[test]
    fn test_selection_follows_all_sizes_flag() {
        let mut options = Options::new(PathBuf::from("/tmp/out"));
        assert_eq!(
            options.selection(),
            SizeSelection::Single(IconSize::square(32))
        );

        options.all_sizes = true;
        assert_eq!(options.selection(), SizeSelection::All);
    }
}
