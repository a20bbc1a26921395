use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libflaghdr` errors
pub enum Error {
    /// Error returned if the source image cannot be opened
    #[error("unable to open image {path}")]
    Open {
        /// path of the source image
        path: PathBuf,
        /// underlying i/o error
        #[source]
        source: std::io::Error,
    },
    /// Error returned if the source image is corrupt or not in a supported format
    #[error("unable to decode image {}", path.as_ref().map_or_else(|| "<reader>".into(), |p| p.display().to_string()))]
    Decode {
        /// path of the source image, if it was read from a file
        path: Option<PathBuf>,
        /// underlying decoder error
        #[source]
        source: image::ImageError,
    },
    /// Error returned if the decoded image has no alpha channel
    #[error("image has {channels} channel(s) per pixel, an alpha channel needs at least 4")]
    MissingAlpha {
        /// channel count of the decoded image
        channels: u8,
    },
    /// Error returned if the number of alpha values does not match
    /// the width/height of the plane
    #[error("width/height does not match alpha length. width/height: {width_height:?}, alpha_length: {alpha_length}")]
    MismatchDimensions {
        /// plane width/height
        width_height: (u32, u32),
        /// number of alpha values supplied
        alpha_length: usize,
    },
    /// Error returned if the header file cannot be created or written
    #[error("unable to write header {path}")]
    Write {
        /// path of the output header
        path: PathBuf,
        /// underlying i/o error
        #[source]
        source: std::io::Error,
    },
}
