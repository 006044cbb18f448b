pub mod report;

use crate::api::{
    DEFAULT_DICOM_ARCHIVE_DIR, DEFAULT_DICOM_OUTPUT, DEFAULT_VOLUME_ARCHIVE_DIR,
    DEFAULT_VOLUME_OUTPUT,
};
use crate::types::{Modality, VolumeIndexConfig, DEFAULT_VOLUME_EXTENSION};
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for mrarchive
#[derive(Parser, Debug)]
#[command(name = "mrarchive")]
#[command(about = "Generate conversion manifests for MR imaging archives")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Index a patient/study/series DICOM archive
    Dicom(DicomArgs),
    /// Index an archive of converted volumes (one folder per patient)
    Volume(VolumeArgs),
}

#[derive(Args, Debug)]
pub struct DicomArgs {
    /// Root of the DICOM archive
    #[arg(value_name = "ARCHIVE_DIR", default_value = DEFAULT_DICOM_ARCHIVE_DIR)]
    pub archive_dir: PathBuf,

    /// Manifest to write
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_DICOM_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct VolumeArgs {
    /// Root of the converted-volume archive
    #[arg(value_name = "ARCHIVE_DIR", default_value = DEFAULT_VOLUME_ARCHIVE_DIR)]
    pub archive_dir: PathBuf,

    /// Manifest to write
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_VOLUME_OUTPUT)]
    pub output: PathBuf,

    /// Volume file extension
    #[arg(long, default_value = DEFAULT_VOLUME_EXTENSION, value_parser = NonEmptyStringValueParser::new())]
    pub extension: String,

    /// Required modality, in scan-path order (repeatable; default t2w, adc, hbv)
    #[arg(short, long = "modality", value_name = "TAG", value_parser = Modality::parse)]
    pub modalities: Vec<Modality>,
}

impl VolumeArgs {
    /// Builds the indexing configuration from the arguments
    pub fn config(&self) -> VolumeIndexConfig {
        VolumeIndexConfig::default()
            .with_extension(self.extension.as_str())
            .with_required_modalities(self.modalities.clone())
    }
}
