use super::entry::DicomArchiveEntry;
use super::listing::{sorted_entries, DirectoryLister};
use super::manifest::DicomManifest;
use crate::error::Result;
use crate::types::DEFAULT_MODALITY_MAPPINGS;
use log::{debug, info};
use std::path::Path;

/// Indexes a DICOM archive laid out as `patient/study/series`
///
/// Every level is enumerated in ascending name order with ignored names
/// dropped, so entries come out in nested lexicographic order. Series are
/// not opened; each series name yields one entry.
///
/// # Errors
///
/// Returns [`crate::ArchiveError::DirectoryAccess`] if the root, a patient
/// directory, or a study directory cannot be listed, and
/// [`crate::ArchiveError::InvalidName`] for a name that is not valid UTF-8.
///
/// # Example
///
/// ```
/// use mrarchive_core::archive::{index_dicom_archive, MemoryLister};
/// use std::path::Path;
///
/// let lister = MemoryLister::from_files([
///     "dcm/PatientB/Study2/SeriesZ/1.dcm",
///     "dcm/PatientA/Study1/SeriesY/1.dcm",
///     "dcm/PatientA/Study1/SeriesX/1.dcm",
/// ]);
/// let manifest = index_dicom_archive(&lister, Path::new("dcm")).unwrap();
///
/// let paths: Vec<_> = manifest.archive.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(
///     paths,
///     vec!["PatientA/Study1/SeriesX", "PatientA/Study1/SeriesY", "PatientB/Study2/SeriesZ"]
/// );
/// ```
pub fn index_dicom_archive<L: DirectoryLister + ?Sized>(
    lister: &L,
    archive_dir: &Path,
) -> Result<DicomManifest> {
    let mut archive = Vec::new();

    for patient_id in sorted_entries(lister, archive_dir)? {
        let patient_dir = archive_dir.join(&patient_id);

        for study_id in sorted_entries(lister, &patient_dir)? {
            let study_dir = patient_dir.join(&study_id);

            for series_id in sorted_entries(lister, &study_dir)? {
                debug!("Series: {}/{}/{}", patient_id, study_id, series_id);
                archive.push(DicomArchiveEntry::new(&patient_id, &study_id, &series_id));
            }
        }
    }

    info!(
        "Indexed {} DICOM series in {}",
        archive.len(),
        archive_dir.display()
    );

    Ok(DicomManifest {
        mappings: DEFAULT_MODALITY_MAPPINGS,
        archive,
    })
}
