use std::{fs, path::Path};

use flaghdr::regenerate;
use image::{ImageFormat, Rgba, RgbaImage};
use libflaghdr::{render_header, Error, ASSETS};
use mktemp::Temp;

fn save_flag_map(path: &Path, alpha: u8) {
    RgbaImage::from_pixel(3, 2, Rgba([0, 0, 0, alpha]))
        .save_with_format(path, ImageFormat::Png)
        .expect("write fixture");
}

#[test]
fn regenerates_every_asset() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir: &Path = dir.as_ref();
    for (i, asset) in ASSETS.iter().enumerate() {
        save_flag_map(&asset.source_in(dir), i as u8 + 1);
    }

    regenerate(dir, &ASSETS)?;

    for (i, asset) in ASSETS.iter().enumerate() {
        let written = fs::read_to_string(asset.output_in(dir))?;
        assert_eq!(render_header(asset.name, &[i as u8 + 1; 6]), written);
    }
    Ok(())
}

#[test]
fn stops_at_first_missing_source() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir: &Path = dir.as_ref();
    let [missable, progression, win_condition] = ASSETS;
    save_flag_map(&missable.source_in(dir), 0xff);
    save_flag_map(&win_condition.source_in(dir), 0xff);

    let err = regenerate(dir, &ASSETS).unwrap_err();
    assert!(err.to_string().contains(progression.output));
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Open { .. })
    ));

    assert!(missable.output_in(dir).exists());
    assert!(!progression.output_in(dir).exists());
    assert!(!win_condition.output_in(dir).exists());
    Ok(())
}

#[test]
fn rerun_is_byte_identical() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir: &Path = dir.as_ref();
    for asset in &ASSETS {
        save_flag_map(&asset.source_in(dir), 0x40);
    }

    regenerate(dir, &ASSETS)?;
    let first: Vec<_> = ASSETS
        .iter()
        .map(|a| fs::read(a.output_in(dir)))
        .collect::<Result<_, _>>()?;
    regenerate(dir, &ASSETS)?;
    let second: Vec<_> = ASSETS
        .iter()
        .map(|a| fs::read(a.output_in(dir)))
        .collect::<Result<_, _>>()?;
    assert_eq!(first, second);
    Ok(())
}
