pub mod batch;
pub mod cli;
pub mod constants;
pub mod encode;
pub mod error;
pub mod logger;
pub mod processing;
pub mod rename;
pub mod utils;

pub use batch::{
    backup_folder, collect_jpeg_files, compress_folder, is_jpeg_file, print_run_summary,
    FolderSummary, RunTotals,
};
pub use encode::{encode_jpeg, write_jpeg, ChromaSubsampling, EncodeSettings, QuantTables};
pub use error::{Result, TidyError};
pub use processing::{compress_image, fit_within, CompressOptions};
pub use rename::{
    apply_plan, digit_count, padded_name, plan_folder, RenameEntry, RenamePlan, RenameStats,
};
pub use utils::{format_file_size, reduction_percent};
