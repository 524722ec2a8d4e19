pub const DEFAULT_MAX_WIDTH: u32 = 600;
pub const DEFAULT_MAX_HEIGHT: u32 = 600;
pub const DEFAULT_QUALITY: u8 = 60;

pub const ULTRA_MAX_WIDTH: u32 = 400;
pub const ULTRA_MAX_HEIGHT: u32 = 400;
pub const ULTRA_QUALITY: u8 = 40;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Extensions accepted by the folder scan, compared case-insensitively.
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Suffix appended to a folder name when backing up originals.
pub const BACKUP_SUFFIX: &str = "_backup";

pub const PROGRESS_BAR_TEMPLATE: &str = "{bar:40.green} {pos}/{len} {msg}";
