//! Archive traversal and manifest generation
//!
//! Two layouts are supported:
//! - DICOM: `patient/study/series/` folders, indexed by [`index_dicom_archive`]
//! - Converted volumes: `patient/<patient>_<study>_<modality>.mha`, indexed by
//!   [`index_volume_archive`]

mod dicom;
mod entry;
mod listing;
mod manifest;
mod volume;

pub use dicom::index_dicom_archive;
pub use entry::{DicomArchiveEntry, VolumeArchiveEntry};
pub use listing::{is_ignored, sorted_entries, DirectoryLister, FsLister, MemoryLister, IGNORED_NAMES};
pub use manifest::{to_json_bytes, write_manifest, DicomManifest, VolumeManifest};
pub use volume::{index_volume_archive, subject_keys, SkippedSubject, VolumeIndex};
