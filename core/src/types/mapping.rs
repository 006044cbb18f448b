use super::Modality;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Acceptable `SeriesDescription` values for one modality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesCriteria {
    pub modality: Modality,
    pub series_descriptions: &'static [&'static str],
}

impl SeriesCriteria {
    /// Checks a series description against this criteria
    ///
    /// Comparison ignores case and surrounding whitespace.
    pub fn matches(&self, series_description: &str) -> bool {
        let needle = series_description.trim();
        self.series_descriptions
            .iter()
            .any(|d| d.trim().eq_ignore_ascii_case(needle))
    }
}

impl Serialize for SeriesCriteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("SeriesDescription", self.series_descriptions)?;
        map.end()
    }
}

/// Table from modality tag to the series descriptions that identify it
///
/// Emitted verbatim under `mappings` in the DICOM manifest; the conversion
/// step uses it to decide which series becomes which modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalityMappings {
    entries: &'static [SeriesCriteria],
}

/// Siemens bpMRI protocol names used by the ProstateX archive
pub const DEFAULT_MODALITY_MAPPINGS: ModalityMappings = ModalityMappings {
    entries: &[
        SeriesCriteria {
            modality: Modality::T2w,
            series_descriptions: &["t2_tse_tra"],
        },
        SeriesCriteria {
            modality: Modality::Cor,
            series_descriptions: &["t2_tse_cor"],
        },
        SeriesCriteria {
            modality: Modality::Sag,
            series_descriptions: &["t2_tse_sag"],
        },
        SeriesCriteria {
            modality: Modality::Adc,
            series_descriptions: &["ep2d_diff_tra_DYNDIST_MIX_ADC", "ep2d_diff_tra_DYNDIST_ADC"],
        },
        SeriesCriteria {
            modality: Modality::Hbv,
            series_descriptions: &[
                "ep2d_diff_tra_DYNDIST_MIXCALC_BVAL",
                "ep2d_diff_tra_DYNDISTCALC_BVAL",
            ],
        },
    ],
};

impl ModalityMappings {
    /// Returns the criteria in table order
    pub fn entries(&self) -> &'static [SeriesCriteria] {
        self.entries
    }

    /// Returns the criteria for one modality
    pub fn get(&self, modality: Modality) -> Option<&'static SeriesCriteria> {
        self.entries.iter().find(|c| c.modality == modality)
    }

    /// Returns every modality whose criteria match a series description
    ///
    /// # Example
    ///
    /// ```
    /// use mrarchive_core::{Modality, DEFAULT_MODALITY_MAPPINGS};
    ///
    /// let matched = DEFAULT_MODALITY_MAPPINGS.classify("EP2D_DIFF_TRA_DYNDIST_ADC");
    /// assert_eq!(matched, vec![Modality::Adc]);
    /// assert!(DEFAULT_MODALITY_MAPPINGS.classify("localizer").is_empty());
    /// ```
    pub fn classify(&self, series_description: &str) -> Vec<Modality> {
        self.entries
            .iter()
            .filter(|c| c.matches(series_description))
            .map(|c| c.modality)
            .collect()
    }
}

impl Default for ModalityMappings {
    fn default() -> Self {
        DEFAULT_MODALITY_MAPPINGS
    }
}

impl Serialize for ModalityMappings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for criteria in self.entries {
            map.serialize_entry(criteria.modality.tag(), criteria)?;
        }
        map.end()
    }
}
