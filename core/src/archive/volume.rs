use super::entry::VolumeArchiveEntry;
use super::listing::{sorted_entries, DirectoryLister};
use super::manifest::VolumeManifest;
use crate::error::Result;
use crate::types::{
    Modality, SubjectKey, VolumeIndexConfig, DEFAULT_DATASET_DESCRIPTOR, DEFAULT_PREPROCESSING,
};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::path::Path;

/// Prefix of macOS resource-fork files
const RESOURCE_FORK_PREFIX: &str = "._";

/// Subject left out of the manifest because some volumes are absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSubject {
    pub subject: SubjectKey,
    pub missing: Vec<Modality>,
}

/// Result of indexing a converted-volume archive
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeIndex {
    /// Manifest of complete subjects
    pub manifest: VolumeManifest,

    /// Subjects dropped for missing modalities, in traversal order
    pub skipped: Vec<SkippedSubject>,
}

/// Collects the subject keys present in one patient directory
///
/// Only names containing the extension marker count, and resource-fork
/// files are dropped. The result is deduplicated and sorted.
///
/// # Errors
///
/// Fails on the first volume filename that does not start with
/// `<patient_id>_<study_id>`.
pub fn subject_keys<I, S>(file_names: I, config: &VolumeIndexConfig) -> Result<BTreeSet<SubjectKey>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let marker = config.extension_marker();
    let mut keys = BTreeSet::new();

    for name in file_names {
        let name = name.as_ref();
        if !name.contains(&marker) || name.starts_with(RESOURCE_FORK_PREFIX) {
            continue;
        }
        let stem = name.replace(&marker, "");
        keys.insert(SubjectKey::from_volume_stem(&stem)?);
    }

    Ok(keys)
}

/// Indexes a converted-volume archive laid out as `patient/<volume files>`
///
/// A subject is indexed only if a volume exists for every required modality;
/// incomplete subjects are returned in [`VolumeIndex::skipped`] and never
/// reach the manifest.
///
/// # Errors
///
/// Returns [`crate::ArchiveError::DirectoryAccess`] if the root or a patient
/// directory cannot be listed, and [`crate::ArchiveError::InvalidSubjectKey`]
/// for a volume filename without a patient and study token.
///
/// # Example
///
/// ```
/// use mrarchive_core::archive::{index_volume_archive, MemoryLister};
/// use mrarchive_core::VolumeIndexConfig;
/// use std::path::Path;
///
/// let lister = MemoryLister::from_files([
///     "mha/P1/P1_S1_t2w.mha",
///     "mha/P1/P1_S1_adc.mha",
///     "mha/P1/P1_S1_hbv.mha",
///     "mha/P2/P2_S1_t2w.mha",
/// ]);
/// let index = index_volume_archive(&lister, Path::new("mha"), &VolumeIndexConfig::default()).unwrap();
///
/// assert_eq!(index.manifest.archive.len(), 1);
/// assert_eq!(index.manifest.archive[0].scan_paths[2], "P1/P1_S1_hbv.mha");
/// assert_eq!(index.skipped[0].subject.as_str(), "P2_S1");
/// ```
pub fn index_volume_archive<L: DirectoryLister + ?Sized>(
    lister: &L,
    archive_dir: &Path,
    config: &VolumeIndexConfig,
) -> Result<VolumeIndex> {
    let mut archive = Vec::new();
    let mut skipped = Vec::new();

    for patient_dir_name in sorted_entries(lister, archive_dir)? {
        let patient_dir = archive_dir.join(&patient_dir_name);
        let files = sorted_entries(lister, &patient_dir)?;

        for subject in subject_keys(&files, config)? {
            let scan_paths: Vec<String> = config
                .required_modalities
                .iter()
                .map(|&modality| subject.scan_path(modality, &config.extension))
                .collect();

            let missing: Vec<Modality> = config
                .required_modalities
                .iter()
                .zip(&scan_paths)
                .filter(|(_, path)| !lister.exists(&archive_dir.join(path)))
                .map(|(&modality, _)| modality)
                .collect();

            if missing.is_empty() {
                debug!("Complete subject: {}", subject);
                archive.push(VolumeArchiveEntry::new(&subject, scan_paths));
            } else {
                warn!(
                    "Skipping {}: missing {}",
                    subject,
                    missing
                        .iter()
                        .map(|m| m.tag())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                skipped.push(SkippedSubject { subject, missing });
            }
        }
    }

    info!(
        "Indexed {} complete subjects in {} ({} skipped)",
        archive.len(),
        archive_dir.display(),
        skipped.len()
    );

    Ok(VolumeIndex {
        manifest: VolumeManifest {
            dataset_json: DEFAULT_DATASET_DESCRIPTOR,
            preprocessing: DEFAULT_PREPROCESSING,
            archive,
        },
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::listing::{FsLister, MemoryLister};
    use crate::error::ArchiveError;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn index(lister: &MemoryLister) -> Result<VolumeIndex> {
        index_volume_archive(lister, Path::new("root"), &VolumeIndexConfig::default())
    }

    #[test]
    fn test_complete_subject() {
        let lister = MemoryLister::from_files([
            "root/PatientA/PatientA_Study1_hbv.mha",
            "root/PatientA/PatientA_Study1_t2w.mha",
            "root/PatientA/PatientA_Study1_adc.mha",
        ]);

        let result = index(&lister).unwrap();
        assert_eq!(
            result.manifest.archive,
            vec![VolumeArchiveEntry {
                patient_id: "PatientA".to_string(),
                study_id: "Study1".to_string(),
                scan_paths: vec![
                    "PatientA/PatientA_Study1_t2w.mha".to_string(),
                    "PatientA/PatientA_Study1_adc.mha".to_string(),
                    "PatientA/PatientA_Study1_hbv.mha".to_string(),
                ],
            }]
        );
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_missing_modality_is_skipped() {
        let lister = MemoryLister::from_files([
            "root/PatientA/PatientA_Study1_t2w.mha",
            "root/PatientA/PatientA_Study1_adc.mha",
        ]);

        let result = index(&lister).unwrap();
        assert!(result.manifest.archive.is_empty());
        assert_eq!(
            result.skipped,
            vec![SkippedSubject {
                subject: SubjectKey::new("PatientA", "Study1").unwrap(),
                missing: vec![Modality::Hbv],
            }]
        );
    }

    #[test]
    fn test_studies_sorted_within_patient() {
        let mut files = Vec::new();
        for study in ["S2", "S1"] {
            for modality in ["t2w", "adc", "hbv", "cor"] {
                files.push(format!("root/P/P_{}_{}.mha", study, modality));
            }
        }
        let lister = MemoryLister::from_files(files);

        let result = index(&lister).unwrap();
        let studies: Vec<_> = result
            .manifest
            .archive
            .iter()
            .map(|e| e.study_id.as_str())
            .collect();
        assert_eq!(studies, vec!["S1", "S2"]);
    }

    #[test]
    fn test_non_volume_and_resource_fork_files_ignored() {
        let lister = MemoryLister::from_files([
            "root/P/P_S_t2w.mha",
            "root/P/P_S_adc.mha",
            "root/P/P_S_hbv.mha",
            "root/P/._P_S_t2w.mha",
            "root/P/notes.txt",
            "root/P/.DS_Store",
            "root/LICENSE",
        ]);

        let result = index(&lister).unwrap();
        assert_eq!(result.manifest.archive.len(), 1);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_malformed_filename_fails() {
        let lister = MemoryLister::from_files(["root/P/scan.mha"]);
        let err = index(&lister).unwrap_err();
        assert!(matches!(err, ArchiveError::InvalidSubjectKey(ref s) if s == "scan"));
    }

    #[test]
    fn test_file_in_foreign_patient_directory_is_skipped() {
        // Paths are built from the filename's patient ID, not the directory
        let lister = MemoryLister::from_files([
            "root/Other/P_S_t2w.mha",
            "root/Other/P_S_adc.mha",
            "root/Other/P_S_hbv.mha",
        ]);

        let result = index(&lister).unwrap();
        assert!(result.manifest.archive.is_empty());
        assert_eq!(result.skipped[0].missing.len(), 3);
    }

    #[test]
    fn test_custom_config() {
        let lister = MemoryLister::from_files(["root/P/P_S_t2w.nii.gz", "root/P/P_S_adc.nii.gz"]);
        let config = VolumeIndexConfig::default()
            .with_extension("nii.gz")
            .with_required_modalities(vec![Modality::Adc, Modality::T2w]);

        let result = index_volume_archive(&lister, Path::new("root"), &config).unwrap();
        assert_eq!(
            result.manifest.archive[0].scan_paths,
            vec!["P/P_S_adc.nii.gz", "P/P_S_t2w.nii.gz"]
        );
    }

    #[test]
    fn test_subject_keys_dedup() {
        let keys = subject_keys(
            ["B_1_t2w.mha", "A_2_adc.mha", "A_2_t2w.mha", "A_1_hbv.mha", "readme.md"],
            &VolumeIndexConfig::default(),
        )
        .unwrap();
        let keys: Vec<_> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["A_1", "A_2", "B_1"]);
    }

    #[test]
    fn test_real_directory_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("10000")).unwrap();
        fs::create_dir_all(root.join("10001")).unwrap();
        for modality in ["t2w", "adc", "hbv"] {
            File::create(root.join(format!("10000/10000_1000000_{}.mha", modality))).unwrap();
        }
        File::create(root.join("10001/10001_1000001_t2w.mha")).unwrap();

        let result = index_volume_archive(&FsLister, root, &VolumeIndexConfig::default()).unwrap();
        assert_eq!(result.manifest.archive.len(), 1);
        assert_eq!(result.manifest.archive[0].patient_id, "10000");
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].missing, vec![Modality::Adc, Modality::Hbv]);
    }
}
