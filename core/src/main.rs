use clap::Parser;
use log::{error, info};
use mrarchive_core::cli::{Cli, Command};
use mrarchive_core::{ArchiveIndexer, Result, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Dicom(args) => {
            info!("Indexing DICOM archive: {}", args.archive_dir.display());
            let manifest = ArchiveIndexer::dicom(&args.archive_dir, &args.output)?;
            println!("{}", TextReport::dicom(&manifest, &args.output));
        }
        Command::Volume(args) => {
            let config = args.config();
            info!(
                "Indexing volume archive: {} (extension .{})",
                args.archive_dir.display(),
                config.extension
            );
            let index = ArchiveIndexer::volume_with_config(&args.archive_dir, &args.output, &config)?;
            println!("{}", TextReport::volume(&index, &args.output));
        }
    }
    Ok(())
}
