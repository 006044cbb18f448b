use crate::types::{Modality, REQUIRED_VOLUME_MODALITIES};

/// Default extension of converted volumes
pub const DEFAULT_VOLUME_EXTENSION: &str = "mha";

/// Configuration for indexing a converted-volume archive
///
/// A subject is indexed only when a file exists for every required modality;
/// `scan_paths` follow the order of `required_modalities`.
///
/// # Example
///
/// ```
/// use mrarchive_core::{Modality, VolumeIndexConfig};
///
/// let config = VolumeIndexConfig::default()
///     .with_extension("nii.gz")
///     .with_required_modalities(vec![Modality::T2w, Modality::Adc]);
///
/// assert_eq!(config.extension, "nii.gz");
/// assert_eq!(config.required_modalities.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeIndexConfig {
    /// File extension without the leading dot
    pub extension: String,

    /// Modalities every indexed subject must have, in scan-path order
    pub required_modalities: Vec<Modality>,
}

impl Default for VolumeIndexConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_VOLUME_EXTENSION.to_string(),
            required_modalities: REQUIRED_VOLUME_MODALITIES.to_vec(),
        }
    }
}

impl VolumeIndexConfig {
    /// Builder: Set the volume extension
    ///
    /// A leading dot is accepted and stripped. An empty extension would match
    /// every dotted filename, so it leaves the current extension in place.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = extension.trim().trim_start_matches('.');
        if !extension.is_empty() {
            self.extension = extension.to_string();
        }
        self
    }

    /// Builder: Set the required modalities
    ///
    /// Duplicates are dropped, keeping the first occurrence. An empty list
    /// leaves the current modalities in place, since every subject would
    /// otherwise count as complete.
    pub fn with_required_modalities(mut self, modalities: Vec<Modality>) -> Self {
        if modalities.is_empty() {
            return self;
        }

        let mut unique = Vec::with_capacity(modalities.len());
        for modality in modalities {
            if !unique.contains(&modality) {
                unique.push(modality);
            }
        }
        self.required_modalities = unique;
        self
    }

    /// Filename marker identifying a volume file (`.mha`)
    pub fn extension_marker(&self) -> String {
        format!(".{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VolumeIndexConfig::default();
        assert_eq!(config.extension, "mha");
        assert_eq!(
            config.required_modalities,
            vec![Modality::T2w, Modality::Adc, Modality::Hbv]
        );
        assert_eq!(config.extension_marker(), ".mha");
    }

    #[test]
    fn test_extension_leading_dot() {
        let config = VolumeIndexConfig::default().with_extension(".nii.gz");
        assert_eq!(config.extension, "nii.gz");
        assert_eq!(config.extension_marker(), ".nii.gz");
    }

    #[test]
    fn test_required_modalities_dedup() {
        let config = VolumeIndexConfig::default().with_required_modalities(vec![
            Modality::Adc,
            Modality::T2w,
            Modality::Adc,
        ]);
        assert_eq!(config.required_modalities, vec![Modality::Adc, Modality::T2w]);
    }

    #[test]
    fn test_empty_required_modalities_keeps_current() {
        let config = VolumeIndexConfig::default().with_required_modalities(Vec::new());
        assert_eq!(config.required_modalities, REQUIRED_VOLUME_MODALITIES.to_vec());

        let config = VolumeIndexConfig::default()
            .with_required_modalities(vec![Modality::Adc])
            .with_required_modalities(Vec::new());
        assert_eq!(config.required_modalities, vec![Modality::Adc]);
    }

    #[test]
    fn test_empty_extension_keeps_current() {
        for extension in ["", ".", "  "] {
            let config = VolumeIndexConfig::default().with_extension(extension);
            assert_eq!(config.extension, "mha");
            assert_eq!(config.extension_marker(), ".mha");
        }
    }
}
