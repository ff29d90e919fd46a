use anyhow::Context;
use clap::Parser;

use font_retitle::cli::Args;
use font_retitle::rename_fonts_in_directory;
use font_retitle::utils::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config();
    init_logging(&config);

    if config.debug_mode {
        println!("Debug mode enabled");
    }

    let font_dir = args
        .target_directory()
        .context("could not determine the directory to process")?;

    let report = rename_fonts_in_directory(&font_dir, &config)
        .with_context(|| format!("failed to process {}", font_dir.display()))?;

    report.print_summary();
    Ok(())
}
