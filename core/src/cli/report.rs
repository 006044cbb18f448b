use crate::archive::{DicomManifest, VolumeIndex};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Text summary of a generated manifest
pub enum TextReport<'a> {
    Dicom {
        manifest: &'a DicomManifest,
        output: &'a Path,
    },
    Volume {
        index: &'a VolumeIndex,
        output: &'a Path,
    },
}

impl<'a> TextReport<'a> {
    /// Creates a report for a DICOM manifest
    pub fn dicom(manifest: &'a DicomManifest, output: &'a Path) -> Self {
        TextReport::Dicom { manifest, output }
    }

    /// Creates a report for a converted-volume manifest
    pub fn volume(index: &'a VolumeIndex, output: &'a Path) -> Self {
        TextReport::Volume { index, output }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextReport::Dicom { manifest, output } => {
                let patients: BTreeSet<_> =
                    manifest.archive.iter().map(|e| &e.patient_id).collect();
                let studies: BTreeSet<_> = manifest
                    .archive
                    .iter()
                    .map(|e| (&e.patient_id, &e.study_id))
                    .collect();

                writeln!(f, "DICOM Archive Manifest")?;
                writeln!(f, "======================")?;
                writeln!(f)?;
                writeln!(f, "Output:         {}", output.display())?;
                writeln!(f, "Patients:       {}", patients.len())?;
                writeln!(f, "Studies:        {}", studies.len())?;
                writeln!(f, "Series:         {}", manifest.archive.len())?;
            }
            TextReport::Volume { index, output } => {
                writeln!(f, "Volume Archive Manifest")?;
                writeln!(f, "=======================")?;
                writeln!(f)?;
                writeln!(f, "Output:         {}", output.display())?;
                writeln!(f, "Complete:       {}", index.manifest.archive.len())?;
                writeln!(f, "Skipped:        {}", index.skipped.len())?;

                if !index.skipped.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Skipped Subjects")?;
                    writeln!(f, "----------------")?;
                    for skipped in &index.skipped {
                        let missing: Vec<_> = skipped.missing.iter().map(|m| m.tag()).collect();
                        writeln!(f, "{}: missing {}", skipped.subject, missing.join(", "))?;
                    }
                }
            }
        }

        Ok(())
    }
}
