use std::path::{Path, PathBuf};

/// One entry of the asset table: a source image, the header it turns into and the symbol
/// prefix used inside that header
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Asset {
    /// Source image, relative to the asset directory
    pub source: &'static str,
    /// Output header, relative to the asset directory
    pub output: &'static str,
    /// Prefix of the `<NAME>_H` guard and the `<NAME>_PIXELS` array
    pub name: &'static str,
}

/// The overlay maps regenerated on every run, in processing order
pub const ASSETS: [Asset; 3] = [
    Asset {
        source: "missable.png",
        output: "missable.h",
        name: "MISSABLE",
    },
    Asset {
        source: "progression.png",
        output: "progression.h",
        name: "PROGRESSION",
    },
    Asset {
        source: "win-condition.png",
        output: "win-condition.h",
        name: "WIN_CONDITION",
    },
];

impl Asset {
    /// Returns the source image path resolved against `dir`
    #[must_use]
    pub fn source_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.source)
    }

    /// Returns the output header path resolved against `dir`
    #[must_use]
    pub fn output_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.output)
    }
}
