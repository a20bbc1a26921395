//! # libflaghdr
//!
//!
//! This library turns images whose alpha channel carries per-pixel flags into C header files
//! holding one `uint8_t` per pixel. Overlay maps (for instance "missable", "progression" or
//! "win condition" markers) can then be compiled straight into a program, without any image
//! decoding at runtime.
//!
//! Only the alpha byte of each pixel is kept. The color channels are decoded along with it,
//! but never inspected.
//!
//! ### Output format
//!
//! The emitted header has a fixed layout. For an image named `TEST` with two pixels of alpha
//! `0x00` and `0xff`:
//!
//! ```text
//! #ifndef TEST_H
//! #define TEST_H
//!
//! const uint8_t TEST_PIXELS[] = {
//!     0x00,0xff,
//! };
//!
//! #endif TEST_H
//! ```
//!
//! Literals are written 20 per line, in row-major scan order. Note that the trailing
//! `#endif TEST_H` is kept in this exact form for compatibility with existing consumers of the
//! generated files, even though the `TEST_H` after `#endif` is not a comment.
//!
//! ### Usage
//!
//! #### Converting a file
//!
//! ```rust,no_run
//! fn main() -> anyhow::Result<()> {
//!     let plane = libflaghdr::convert("missable.png", "missable.h", "MISSABLE")?;
//!     println!("wrote {} flags", plane.len());
//!     Ok(())
//! }
//! ```
//!
//! #### Working in memory
//!
//! ```rust
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use libflaghdr::{render_header, AlphaPlane};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut img = RgbaImage::new(2, 1);
//!     img.put_pixel(0, 0, Rgba([10, 20, 30, 0x00]));
//!     img.put_pixel(1, 0, Rgba([10, 20, 30, 0xff]));
//!
//!     let plane = AlphaPlane::from_image(&DynamicImage::ImageRgba8(img))?;
//!     let header = render_header("TEST", plane.alpha());
//!     assert!(header.contains("    0x00,0xff,\n"));
//!     Ok(())
//! }
//! ```
//!
//! #### Regenerating the bundled assets
//!
//! [`ASSETS`] lists the three overlay maps this crate was written for. The `flaghdr` binary
//! walks that table in order; the same loop is easy to write by hand:
//!
//! ```rust,no_run
//! use libflaghdr::{convert, ASSETS};
//!
//! fn main() -> anyhow::Result<()> {
//!     for asset in &ASSETS {
//!         convert(asset.source, asset.output, asset.name)?;
//!     }
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod asset;
mod error;
/// Module containing the header file writer
pub mod header;
mod plane;

use std::path::Path;
use tracing::{info, instrument};

pub use asset::{Asset, ASSETS};
pub use error::Error;
pub use header::{render_header, write_header};
pub use plane::AlphaPlane;

/// Decodes `source` and writes its alpha plane to `output` as a header named `name`
///
/// The source is fully decoded before `output` is touched, so a source that cannot be read
/// leaves no output behind. Once writing has started there is no rollback: a failure partway
/// through leaves a truncated file.
///
/// `name` is used verbatim as the macro and array prefix. It is up to the caller to pass a
/// valid C identifier.
///
/// # Errors
///
/// See [`AlphaPlane::from_file`] and [`AlphaPlane::into_header_file`]
#[instrument(skip_all, fields(source = %source.as_ref().display(), name = name))]
pub fn convert(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    name: &str,
) -> Result<AlphaPlane, Error> {
    let plane = AlphaPlane::from_file(source.as_ref())?;
    plane.into_header_file(name, output.as_ref())?;
    info!(
        "Converted {} ({}x{}) into {}",
        source.as_ref().display(),
        plane.width(),
        plane.height(),
        output.as_ref().display()
    );
    Ok(plane)
}
