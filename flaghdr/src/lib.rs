use std::path::Path;

use anyhow::{Context, Result};
use libflaghdr::{convert, Asset};
use tracing::{debug, info, instrument};

/// Regenerates every header of `assets`, in order, resolving paths against `dir`
///
/// Stops at the first failing asset. Headers written before the failure are left in place and
/// the remaining assets are not attempted.
#[instrument(skip(assets), fields(dir = %dir.display()))]
pub fn regenerate(dir: &Path, assets: &[Asset]) -> Result<()> {
    for asset in assets {
        let source = asset.source_in(dir);
        let output = asset.output_in(dir);
        debug!("{} -> {}", source.display(), output.display());

        let plane = convert(&source, &output, asset.name)
            .with_context(|| format!("Failed to generate {} from {}", asset.output, asset.source))?;
        info!(
            "{}: {} flags written to {}",
            asset.name,
            plane.len(),
            output.display()
        );
    }
    Ok(())
}
