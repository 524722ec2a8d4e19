use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::encode::{write_jpeg, EncodeSettings};
use crate::error::{Result, TidyError};
use image::{imageops::FilterType, GenericImageView, ImageReader};
use std::fs;
use std::path::Path;

/// Resize bounds plus encoder parameters for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub encode: EncodeSettings,
}

impl CompressOptions {
    pub fn new(max_width: u32, max_height: u32, encode: EncodeSettings) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&encode.quality) {
            return Err(TidyError::InvalidQuality(encode.quality));
        }
        if max_width == 0 || max_height == 0 {
            return Err(TidyError::InvalidBounds(max_width, max_height));
        }

        Ok(Self {
            max_width,
            max_height,
            encode,
        })
    }
}

/// Computes the dimensions that fit `width`x`height` inside the bounds while
/// preserving aspect ratio.
///
/// Returns `None` when the image is already within bounds: images are never
/// upscaled. Otherwise the uniform scale is `min(max_width/width,
/// max_height/height)` and each dimension is floored, clamped to one pixel
/// for degenerate aspect ratios.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<(u32, u32)> {
    if width <= max_width && height <= max_height {
        return None;
    }

    let width_ratio = f64::from(max_width) / f64::from(width);
    let height_ratio = f64::from(max_height) / f64::from(height);
    let scale = width_ratio.min(height_ratio);

    let new_width = ((f64::from(width) * scale).floor() as u32).max(1);
    let new_height = ((f64::from(height) * scale).floor() as u32).max(1);

    Some((new_width, new_height))
}

/// Decodes one JPEG, shrinks it to the configured bounds and re-encodes it.
///
/// The output path defaults to the input path in batch use, so this
/// overwrites the source unless the caller backed it up first. Returns the
/// original and compressed byte sizes.
pub fn compress_image(input: &Path, output: &Path, options: &CompressOptions) -> Result<(u64, u64)> {
    let original_size = fs::metadata(input)?.len();

    let img = ImageReader::open(input)?.decode()?;
    let (width, height) = img.dimensions();

    let img = match fit_within(width, height, options.max_width, options.max_height) {
        Some((new_width, new_height)) => {
            crate::verbose!(
                "Resizing {} from {}x{} to {}x{}",
                input.display(),
                width,
                height,
                new_width,
                new_height
            );
            img.resize_exact(new_width, new_height, FilterType::Lanczos3)
        }
        None => img,
    };

    // JPEG has no alpha channel; flatten any other color mode to RGB8.
    let rgb = img.into_rgb8();
    write_jpeg(&rgb, output, &options.encode)?;

    let compressed_size = fs::metadata(output)?.len();
    Ok((original_size, compressed_size))
}
