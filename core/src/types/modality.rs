use crate::error::{ArchiveError, Result};
use std::fmt;

/// MR imaging sequence type, identified by a short lowercase tag
///
/// Tags are the keys used in both manifest forms: the DICOM mapping table
/// and the `<patient>_<study>_<tag>.mha` volume naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Axial T2-weighted
    T2w,
    /// Coronal T2-weighted
    Cor,
    /// Sagittal T2-weighted
    Sag,
    /// Apparent diffusion coefficient map
    Adc,
    /// High b-value diffusion
    Hbv,
}

/// Every modality, in mapping-table order
pub const ALL_MODALITIES: [Modality; 5] = [
    Modality::T2w,
    Modality::Cor,
    Modality::Sag,
    Modality::Adc,
    Modality::Hbv,
];

/// Modalities a converted-volume subject needs to be indexed, in scan-path order
pub const REQUIRED_VOLUME_MODALITIES: [Modality; 3] =
    [Modality::T2w, Modality::Adc, Modality::Hbv];

impl Modality {
    /// Returns the lowercase tag
    pub fn tag(&self) -> &'static str {
        match self {
            Modality::T2w => "t2w",
            Modality::Cor => "cor",
            Modality::Sag => "sag",
            Modality::Adc => "adc",
            Modality::Hbv => "hbv",
        }
    }

    /// Parses a modality from its tag (case-insensitive)
    ///
    /// # Example
    ///
    /// ```
    /// use mrarchive_core::Modality;
    ///
    /// assert_eq!(Modality::parse("ADC").unwrap(), Modality::Adc);
    /// assert!(Modality::parse("dwi").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s_lower = s.trim().to_lowercase();
        ALL_MODALITIES
            .iter()
            .find(|m| m.tag() == s_lower)
            .copied()
            .ok_or_else(|| ArchiveError::UnknownModality(s.to_string()))
    }
}

impl std::str::FromStr for Modality {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self> {
        Modality::parse(s)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
