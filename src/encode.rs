use crate::error::{Result, TidyError};
use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder, QuantizationTableType, SamplingFactor};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Chroma resolution written into the JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaSubsampling {
    /// 4:4:4, chroma at full resolution.
    Full,
    /// 4:2:0, chroma at quarter resolution. Smallest output.
    Quarter,
}

impl ChromaSubsampling {
    fn sampling_factor(self) -> SamplingFactor {
        match self {
            ChromaSubsampling::Full => SamplingFactor::F_1_1,
            ChromaSubsampling::Quarter => SamplingFactor::F_2_2,
        }
    }
}

/// Quantization table preset used by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantTables {
    /// Annex K tables, the usual choice.
    Standard,
    /// Flat tables, trading fidelity for size at low bitrates.
    Flat,
}

impl QuantTables {
    fn table_type(self) -> QuantizationTableType {
        match self {
            QuantTables::Standard => QuantizationTableType::Default,
            QuantTables::Flat => QuantizationTableType::Flat,
        }
    }
}

/// Full parameter set for one JPEG encode. The standard and ultra variants
/// share the same pipeline and differ only in these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub quality: u8,
    pub progressive: bool,
    pub subsampling: ChromaSubsampling,
    pub quant_tables: QuantTables,
    pub optimized_huffman: bool,
}

impl EncodeSettings {
    /// Baseline encode with optimized Huffman tables.
    pub fn standard(quality: u8) -> Self {
        Self {
            quality,
            progressive: false,
            subsampling: ChromaSubsampling::Full,
            quant_tables: QuantTables::Standard,
            optimized_huffman: true,
        }
    }

    /// Aggressive encode: progressive scans, 4:2:0 chroma, flat tables.
    pub fn ultra(quality: u8) -> Self {
        Self {
            quality,
            progressive: true,
            subsampling: ChromaSubsampling::Quarter,
            quant_tables: QuantTables::Flat,
            optimized_huffman: true,
        }
    }
}

/// Encodes an RGB image to an in-memory JPEG.
pub fn encode_jpeg(image: &RgbImage, settings: &EncodeSettings) -> Result<Vec<u8>> {
    let width = u16::try_from(image.width())
        .map_err(|_| TidyError::ImageTooLarge(image.width(), image.height()))?;
    let height = u16::try_from(image.height())
        .map_err(|_| TidyError::ImageTooLarge(image.width(), image.height()))?;

    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, settings.quality);
    encoder.set_optimized_huffman_tables(settings.optimized_huffman);
    encoder.set_progressive(settings.progressive);
    encoder.set_sampling_factor(settings.subsampling.sampling_factor());
    encoder.set_quantization_tables(
        settings.quant_tables.table_type(),
        settings.quant_tables.table_type(),
    );
    encoder.encode(image.as_raw(), width, height, ColorType::Rgb)?;

    Ok(buf)
}

/// Encodes and writes a JPEG to `output`, replacing any existing file.
///
/// The bytes go to a temporary file in the same directory first and are
/// renamed over the target, so an encode or write failure leaves the
/// original file untouched.
pub fn write_jpeg(image: &RgbImage, output: &Path, settings: &EncodeSettings) -> Result<u64> {
    let bytes = encode_jpeg(image, settings)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(output).map_err(|e| e.error)?;

    Ok(bytes.len() as u64)
}
