use crate::archive::{
    index_dicom_archive, index_volume_archive, write_manifest, DicomManifest, FsLister,
    VolumeIndex,
};
use crate::error::Result;
use crate::types::VolumeIndexConfig;
use std::path::Path;

/// Sample DICOM archive location
pub const DEFAULT_DICOM_ARCHIVE_DIR: &str = "tests/input/dcm/ProstateX/";

/// Output location for the DICOM conversion settings
pub const DEFAULT_DICOM_OUTPUT: &str = "tests/output/dcm2mha_settings.json";

/// Sample converted-volume archive location
pub const DEFAULT_VOLUME_ARCHIVE_DIR: &str = "tests/output-expected/mha/ProstateX/";

/// Output location for the volume conversion settings
pub const DEFAULT_VOLUME_OUTPUT: &str = "tests/output/mha2nnunet_settings.json";

/// Main entry point for generating archive manifests
///
/// Indexes an archive on the local filesystem and writes the resulting
/// manifest as 4-space indented JSON.
///
/// # Example
///
/// ```no_run
/// use mrarchive_core::ArchiveIndexer;
///
/// let manifest = ArchiveIndexer::dicom("data/dcm", "dcm2mha_settings.json").unwrap();
/// println!("{} series", manifest.archive.len());
/// ```
pub struct ArchiveIndexer;

impl ArchiveIndexer {
    /// Indexes a `patient/study/series` DICOM archive and writes the manifest
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory in the archive cannot be listed
    /// - The output file cannot be written
    pub fn dicom(
        archive_dir: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<DicomManifest> {
        let manifest = index_dicom_archive(&FsLister, archive_dir.as_ref())?;
        write_manifest(&manifest, output_path.as_ref())?;
        Ok(manifest)
    }

    /// Indexes a converted-volume archive with the default configuration
    pub fn volume(
        archive_dir: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<VolumeIndex> {
        Self::volume_with_config(archive_dir, output_path, &VolumeIndexConfig::default())
    }

    /// Indexes a converted-volume archive and writes the manifest
    ///
    /// Skipped subjects are returned but not written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory in the archive cannot be listed
    /// - A volume filename has no patient and study token
    /// - The output file cannot be written
    pub fn volume_with_config(
        archive_dir: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        config: &VolumeIndexConfig,
    ) -> Result<VolumeIndex> {
        let index = index_volume_archive(&FsLister, archive_dir.as_ref(), config)?;
        write_manifest(&index.manifest, output_path.as_ref())?;
        Ok(index)
    }
}
