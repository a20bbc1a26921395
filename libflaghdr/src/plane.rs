use crate::{error::Error, header::write_header};
use image::{DynamicImage, ImageReader};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Seek, Write},
    path::Path,
};
use tracing::{debug, info, instrument};

/// Byte offset of the alpha value inside an RGBA pixel
const ALPHA_OFFSET: usize = 3;
/// Bytes per RGBA8 pixel
const RGBA_STRIDE: usize = 4;

/// The alpha channel of a decoded image, one byte per pixel in row-major scan order
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AlphaPlane {
    /// The width of the image
    width: u32,
    /// The height of the image
    height: u32,
    /// Alpha values
    alpha: Vec<u8>,
}

impl AlphaPlane {
    /// Creates a new [`AlphaPlane`]
    ///
    /// # Errors
    /// This function errors if `alpha` does not hold exactly `width * height` values
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, Error> {
        if u64::from(width) * u64::from(height) != alpha.len() as u64 {
            return Err(Error::MismatchDimensions {
                width_height: (width, height),
                alpha_length: alpha.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Extracts the alpha plane of an already decoded image
    ///
    /// The image is converted to 8-bit RGBA and the fourth byte of every pixel is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAlpha`] if the image has fewer than 4 channels per pixel. No
    /// default alpha is substituted.
    pub fn from_image(img: &DynamicImage) -> Result<Self, Error> {
        let channels = img.color().channel_count();
        debug!("Decoded color type {:?}", img.color());
        if usize::from(channels) < RGBA_STRIDE {
            return Err(Error::MissingAlpha { channels });
        }

        let rgba = img.to_rgba8();
        let alpha: Vec<_> = rgba
            .as_raw()
            .chunks_exact(RGBA_STRIDE)
            .map(|pixel| pixel[ALPHA_OFFSET])
            .collect();
        debug!("Extracted {} alpha values", alpha.len());

        Self::new(rgba.width(), rgba.height(), alpha)
    }

    /// Tries to decode [`Self`] from a buffer, guessing the image format from its content
    ///
    /// # Errors
    ///
    /// This function will error if the buffer is not a supported image, or if the image has
    /// no alpha channel. See [`Self::from_image`]
    pub fn from_reader(r: impl BufRead + Seek) -> Result<Self, Error> {
        Self::decode(r, None)
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if the file contains invalid data.
    /// See [`Self::from_reader`] for potential errors
    #[instrument(level = "debug")]
    pub fn from_file(filename: &Path) -> Result<Self, Error> {
        let file = File::open(filename).map_err(|source| Error::Open {
            path: filename.to_owned(),
            source,
        })?;
        Self::decode(BufReader::new(file), Some(filename))
    }

    fn decode(r: impl BufRead + Seek, path: Option<&Path>) -> Result<Self, Error> {
        let decode_err = |source: image::ImageError| Error::Decode {
            path: path.map(Path::to_owned),
            source,
        };
        let img = ImageReader::new(r)
            .with_guessed_format()
            .map_err(|e| decode_err(e.into()))?
            .decode()
            .map_err(decode_err)?;
        debug!("Decoded {}x{} image", img.width(), img.height());
        Self::from_image(&img)
    }

    /// Writes [`Self`] as a C header named `name` at the provided path
    ///
    /// An existing file is truncated first. There is no temp-file-then-rename, so a failed
    /// write leaves a partial header behind.
    ///
    /// # Errors
    ///
    /// This will error if unable to open and/or write to the provided filename
    #[instrument(skip(self), fields(len = self.alpha.len()))]
    pub fn into_header_file(&self, name: &str, filename: &Path) -> Result<(), Error> {
        let write_err = |source: std::io::Error| Error::Write {
            path: filename.to_owned(),
            source,
        };
        let f = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(filename)
            .map_err(write_err)?;
        let mut f = BufWriter::new(f);
        write_header(&mut f, name, &self.alpha).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        info!("Finished writing {}", filename.display());
        Ok(())
    }

    /// Returns the image width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the alpha values in scan order
    #[must_use]
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    /// Returns the number of pixels
    #[must_use]
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    /// Returns `true` if the image has no pixels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }
}
