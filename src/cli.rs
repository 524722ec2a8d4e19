use crate::constants::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, ULTRA_MAX_HEIGHT, ULTRA_MAX_WIDTH,
    ULTRA_QUALITY,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jpeg-tidy",
    about = "Batch JPEG resizing, re-encoding and sequential renaming for image folders",
    long_about = "jpeg-tidy shrinks the JPEG files in one or more folders in place, resizing \
                  oversized images while preserving aspect ratio and re-encoding at a chosen \
                  quality, and can rename a folder's JPEGs to a zero-padded sequential scheme.",
    version,
    after_help = "EXAMPLES:\n  \
    jpeg-tidy compress ./muffin ./chihuahua -q 60 -w 600 -H 600\n  \
    jpeg-tidy ultra ./photos --backup -q 40\n  \
    jpeg-tidy rename ./chihuahua chihuahua_"
)]
pub struct Args {
    #[arg(long, global = true, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Show per-file processing details")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Resize and re-encode the JPEG files in one or more folders",
        long_about = "Scan each folder for JPEG files (non-recursive, case-insensitive), shrink \
                      any image larger than the size bounds while preserving aspect ratio, and \
                      re-encode at the given quality. Files are overwritten in place. A missing \
                      folder is reported and skipped."
    )]
    Compress {
        #[arg(required = true, help = "Folders to process")]
        folders: Vec<PathBuf>,

        #[arg(
            short = 'w',
            long,
            default_value_t = DEFAULT_MAX_WIDTH,
            help = "Maximum width in pixels",
            long_help = "Images wider than this are scaled down to fit. \
                         Images already within bounds are never upscaled."
        )]
        max_width: u32,

        #[arg(
            short = 'H',
            long,
            default_value_t = DEFAULT_MAX_HEIGHT,
            help = "Maximum height in pixels"
        )]
        max_height: u32,

        #[arg(
            short = 'q',
            long,
            default_value_t = DEFAULT_QUALITY,
            help = "JPEG quality (1-100)"
        )]
        quality: u8,
    },

    #[command(
        about = "Aggressively compress folders, trading fidelity for size",
        long_about = "Same pipeline as compress with smaller default bounds and quality, plus \
                      progressive encoding, 4:2:0 chroma subsampling and flat quantization \
                      tables. Overwrites originals in place; use --backup to copy each folder \
                      to <folder>_backup first."
    )]
    Ultra {
        #[arg(required = true, help = "Folders to process")]
        folders: Vec<PathBuf>,

        #[arg(
            short = 'w',
            long,
            default_value_t = ULTRA_MAX_WIDTH,
            help = "Maximum width in pixels"
        )]
        max_width: u32,

        #[arg(
            short = 'H',
            long,
            default_value_t = ULTRA_MAX_HEIGHT,
            help = "Maximum height in pixels"
        )]
        max_height: u32,

        #[arg(
            short = 'q',
            long,
            default_value_t = ULTRA_QUALITY,
            help = "JPEG quality (1-100)"
        )]
        quality: u8,

        #[arg(
            long,
            help = "Copy originals to <folder>_backup before compressing",
            long_help = "Copy each folder's JPEG files to a sibling <folder>_backup folder \
                         before compressing. An existing backup folder is left untouched."
        )]
        backup: bool,

        #[arg(
            short = 'y',
            long,
            help = "Skip the overwrite confirmation prompt"
        )]
        yes: bool,
    },

    #[command(
        about = "Rename a folder's JPEG files to a zero-padded sequence",
        long_about = "Sort the folder's JPEG files by name and rename them to \
                      <prefix><index><ext>, with the index zero-padded to the digit count of \
                      the total and the extension lowercased. A file whose computed name is \
                      taken by another file is skipped with a warning."
    )]
    Rename {
        #[arg(help = "Folder containing the JPEG files to rename")]
        folder: PathBuf,

        #[arg(help = "File name prefix, e.g. \"chihuahua_\"")]
        prefix: String,
    },
}
