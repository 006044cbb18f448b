use super::entry::{DicomArchiveEntry, VolumeArchiveEntry};
use crate::error::{ArchiveError, Result};
use crate::types::{DatasetDescriptor, ModalityMappings, PreprocessingSettings};
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Settings document for DICOM-to-volume conversion
///
/// Serializes as `{"mappings": {...}, "archive": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DicomManifest {
    pub mappings: ModalityMappings,
    pub archive: Vec<DicomArchiveEntry>,
}

/// Settings document for volume-to-nnU-Net conversion
///
/// Serializes as `{"dataset_json": {...}, "preprocessing": {...}, "archive": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeManifest {
    pub dataset_json: DatasetDescriptor,
    pub preprocessing: PreprocessingSettings,
    pub archive: Vec<VolumeArchiveEntry>,
}

/// Renders a manifest as JSON indented by four spaces, without a trailing newline
pub fn to_json_bytes<T: Serialize + ?Sized>(manifest: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    manifest.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes a manifest to `output_path` in a single write
///
/// # Errors
///
/// Returns [`ArchiveError::OutputWrite`] if the file cannot be written; the
/// parent directory is not created.
pub fn write_manifest<T: Serialize + ?Sized>(manifest: &T, output_path: &Path) -> Result<()> {
    let bytes = to_json_bytes(manifest)?;
    std::fs::write(output_path, &bytes).map_err(|source| ArchiveError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        SubjectKey, DEFAULT_DATASET_DESCRIPTOR, DEFAULT_MODALITY_MAPPINGS, DEFAULT_PREPROCESSING,
        REQUIRED_VOLUME_MODALITIES,
    };
    use tempfile::TempDir;

    fn dicom_manifest() -> DicomManifest {
        DicomManifest {
            mappings: DEFAULT_MODALITY_MAPPINGS,
            archive: vec![DicomArchiveEntry::new("PatientA", "Study1", "SeriesX")],
        }
    }

    #[test]
    fn test_four_space_indent() {
        let json = String::from_utf8(to_json_bytes(&dicom_manifest()).unwrap()).unwrap();
        assert!(json.starts_with("{\n    \"mappings\": {\n        \"t2w\": {\n            \"SeriesDescription\": [\n                \"t2_tse_tra\"\n"));
        assert!(json.ends_with("\n}"));
        assert!(json.contains(
            "    \"archive\": [\n        {\n            \"patient_id\": \"PatientA\",\n            \"study_id\": \"Study1\",\n            \"path\": \"PatientA/Study1/SeriesX\"\n        }\n    ]"
        ));
    }

    const VOLUME_MANIFEST_JSON: &str = r#"{
    "dataset_json": {
        "task": "Task100_test",
        "description": "bpMRI scans from ProstateX dataset to test mha2nnunet",
        "tensorImageSize": "4D",
        "reference": "",
        "licence": "",
        "release": "0.3",
        "modality": {
            "0": "T2W",
            "1": "CT",
            "2": "HBV"
        },
        "labels": {
            "0": "background",
            "1": "lesion"
        }
    },
    "preprocessing": {
        "matrix_size": [
            20,
            160,
            160
        ],
        "spacing": [
            3.0,
            0.5,
            0.5
        ]
    },
    "archive": [
        {
            "patient_id": "10000",
            "study_id": "1000000",
            "scan_paths": [
                "10000/10000_1000000_t2w.mha",
                "10000/10000_1000000_adc.mha",
                "10000/10000_1000000_hbv.mha"
            ]
        }
    ]
}"#;

    #[test]
    fn test_volume_manifest_layout() {
        let subject = SubjectKey::new("10000", "1000000").unwrap();
        let scan_paths = REQUIRED_VOLUME_MODALITIES
            .iter()
            .map(|&m| subject.scan_path(m, "mha"))
            .collect();
        let manifest = VolumeManifest {
            dataset_json: DEFAULT_DATASET_DESCRIPTOR,
            preprocessing: DEFAULT_PREPROCESSING,
            archive: vec![VolumeArchiveEntry::new(&subject, scan_paths)],
        };

        let json = String::from_utf8(to_json_bytes(&manifest).unwrap()).unwrap();
        assert_eq!(json, VOLUME_MANIFEST_JSON);
    }

    #[test]
    fn test_empty_archive() {
        let manifest = VolumeManifest {
            dataset_json: DEFAULT_DATASET_DESCRIPTOR,
            preprocessing: DEFAULT_PREPROCESSING,
            archive: Vec::new(),
        };
        let json = String::from_utf8(to_json_bytes(&manifest).unwrap()).unwrap();
        assert!(json.ends_with("    \"archive\": []\n}"));

        let dataset = json.find("\"dataset_json\"").unwrap();
        let preprocessing = json.find("\"preprocessing\"").unwrap();
        let archive = json.find("\"archive\"").unwrap();
        assert!(dataset < preprocessing && preprocessing < archive);
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("settings.json");

        write_manifest(&dicom_manifest(), &output).unwrap();
        let written = std::fs::read(&output).unwrap();
        assert_eq!(written, to_json_bytes(&dicom_manifest()).unwrap());
    }

    #[test]
    fn test_write_manifest_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("settings.json");

        let err = write_manifest(&dicom_manifest(), &output).unwrap_err();
        assert!(matches!(err, ArchiveError::OutputWrite { ref path, .. } if *path == output));
    }
}
