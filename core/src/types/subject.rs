use super::Modality;
use crate::error::{ArchiveError, Result};
use std::fmt;

/// Patient + study identifier synthesized from a converted-volume filename
///
/// Volume files are named `<patient_id>_<study_id>_<modality>.<ext>`; the
/// subject key is the `<patient_id>_<study_id>` prefix. Keys order by their
/// joined text, so `AB_1` sorts before `A_1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectKey {
    key: String,
    split: usize,
}

impl SubjectKey {
    /// Creates a key from its parts
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty or the patient ID contains
    /// an underscore (the key could not be split back unambiguously).
    pub fn new(patient_id: &str, study_id: &str) -> Result<Self> {
        if patient_id.is_empty() || study_id.is_empty() || patient_id.contains('_') {
            return Err(ArchiveError::InvalidSubjectKey(format!(
                "{}_{}",
                patient_id, study_id
            )));
        }
        Ok(Self {
            key: format!("{}_{}", patient_id, study_id),
            split: patient_id.len(),
        })
    }

    /// Derives the key from a volume filename with its extension removed
    ///
    /// Takes the first two underscore-delimited tokens; anything after them
    /// (the modality tag, suffixes) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidSubjectKey`] if the name does not have
    /// two non-empty leading tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use mrarchive_core::SubjectKey;
    ///
    /// let key = SubjectKey::from_volume_stem("ProstateX-0000_07078_t2w").unwrap();
    /// assert_eq!(key.patient_id(), "ProstateX-0000");
    /// assert_eq!(key.study_id(), "07078");
    /// assert!(SubjectKey::from_volume_stem("ProstateX-0000").is_err());
    /// ```
    pub fn from_volume_stem(stem: &str) -> Result<Self> {
        let mut tokens = stem.split('_');
        match (tokens.next(), tokens.next()) {
            (Some(patient_id), Some(study_id)) if !patient_id.is_empty() && !study_id.is_empty() => {
                Self::new(patient_id, study_id)
            }
            _ => Err(ArchiveError::InvalidSubjectKey(stem.to_string())),
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.key[..self.split]
    }

    pub fn study_id(&self) -> &str {
        &self.key[self.split + 1..]
    }

    /// Joined `<patient_id>_<study_id>` form
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Archive-relative path of one modality's volume, always `/`-separated
    pub fn scan_path(&self, modality: Modality, extension: &str) -> String {
        format!(
            "{}/{}_{}.{}",
            self.patient_id(),
            self.key,
            modality.tag(),
            extension
        )
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
