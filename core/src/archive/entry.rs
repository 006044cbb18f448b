use crate::types::SubjectKey;

/// One DICOM series folder in the archive
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DicomArchiveEntry {
    pub patient_id: String,
    pub study_id: String,

    /// `patient_id/study_id/series_id`, always `/`-separated
    pub path: String,
}

impl DicomArchiveEntry {
    pub fn new(patient_id: &str, study_id: &str, series_id: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            study_id: study_id.to_string(),
            path: format!("{}/{}/{}", patient_id, study_id, series_id),
        }
    }
}

/// One complete converted-volume study
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VolumeArchiveEntry {
    pub patient_id: String,
    pub study_id: String,

    /// Archive-relative volume paths, one per required modality
    pub scan_paths: Vec<String>,
}

impl VolumeArchiveEntry {
    pub fn new(subject: &SubjectKey, scan_paths: Vec<String>) -> Self {
        Self {
            patient_id: subject.patient_id().to_string(),
            study_id: subject.study_id().to_string(),
            scan_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dicom_entry_path() {
        let entry = DicomArchiveEntry::new("ProstateX-0000", "07-07-2011-NA-MR prostaat-64586", "4");
        assert_eq!(
            entry.path,
            "ProstateX-0000/07-07-2011-NA-MR prostaat-64586/4"
        );
    }

    #[test]
    fn test_dicom_entry_field_order() {
        let entry = DicomArchiveEntry::new("A", "B", "C");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"patient_id":"A","study_id":"B","path":"A/B/C"}"#);
    }

    #[test]
    fn test_volume_entry_from_subject() {
        let subject = SubjectKey::new("10000", "1000000").unwrap();
        let entry = VolumeArchiveEntry::new(&subject, vec!["10000/10000_1000000_t2w.mha".into()]);
        assert_eq!(entry.patient_id, "10000");
        assert_eq!(entry.study_id, "1000000");
        assert_eq!(entry.scan_paths.len(), 1);
    }
}
