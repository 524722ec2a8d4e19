use clap::Parser;
use jpeg_tidy::batch::{self, RunTotals};
use jpeg_tidy::cli::{Args, Commands};
use jpeg_tidy::encode::EncodeSettings;
use jpeg_tidy::error::Result;
use jpeg_tidy::processing::CompressOptions;
use jpeg_tidy::{info, logger, rename};
use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match args.command {
        Commands::Compress {
            folders,
            max_width,
            max_height,
            quality,
        } => {
            let options =
                CompressOptions::new(max_width, max_height, EncodeSettings::standard(quality))?;
            run_compress(&folders, &options, false)?;
        }
        Commands::Ultra {
            folders,
            max_width,
            max_height,
            quality,
            backup,
            yes,
        } => {
            let options =
                CompressOptions::new(max_width, max_height, EncodeSettings::ultra(quality))?;
            if !backup && !yes && !confirm_overwrite()? {
                info!("Aborted, nothing was modified");
                return Ok(());
            }
            run_compress(&folders, &options, backup)?;
        }
        Commands::Rename { folder, prefix } => {
            run_rename(&folder, &prefix)?;
        }
    }

    Ok(())
}

fn run_compress(folders: &[PathBuf], options: &CompressOptions, backup: bool) -> Result<()> {
    info!(
        "Settings: max size {}x{}, quality {}",
        options.max_width, options.max_height, options.encode.quality
    );

    let mut totals = RunTotals::default();
    for folder in folders {
        if backup && folder.is_dir() {
            let dest = batch::backup_folder(folder)?;
            info!("Backed up originals to {}", dest.display());
        }
        let summary = batch::compress_folder(folder, options)?;
        totals.absorb(&summary);
    }

    batch::print_run_summary(&totals);
    Ok(())
}

fn run_rename(folder: &std::path::Path, prefix: &str) -> Result<()> {
    let plan = rename::plan_folder(folder, prefix)?;
    if plan.entries.is_empty() {
        info!("No JPEG files found in {}", folder.display());
        return Ok(());
    }

    let stats = rename::apply_plan(&plan)?;
    info!(
        "Done: {} renamed, {} already named, {} skipped on collision",
        stats.renamed, stats.already_named, stats.collisions
    );
    Ok(())
}

fn confirm_overwrite() -> Result<bool> {
    print!("Ultra mode overwrites originals in place. Continue? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}
