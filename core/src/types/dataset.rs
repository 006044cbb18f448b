use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered index table serialized as a JSON object (`{"0": "T2W", ...}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTable(pub &'static [(&'static str, &'static str)]);

impl IndexTable {
    /// Looks up the name stored under an index
    pub fn get(&self, index: &str) -> Option<&'static str> {
        self.0.iter().find(|(i, _)| *i == index).map(|(_, name)| *name)
    }
}

impl Serialize for IndexTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, name) in self.0 {
            map.serialize_entry(index, name)?;
        }
        map.end()
    }
}

/// nnU-Net dataset description emitted under `dataset_json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DatasetDescriptor {
    pub task: &'static str,
    pub description: &'static str,
    #[serde(rename = "tensorImageSize")]
    pub tensor_image_size: &'static str,
    pub reference: &'static str,
    pub licence: &'static str,
    pub release: &'static str,
    pub modality: IndexTable,
    pub labels: IndexTable,
}

/// Resampling target emitted under `preprocessing`
///
/// Both arrays are ordered (z, y, x); spacing is in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PreprocessingSettings {
    pub matrix_size: [u32; 3],
    pub spacing: [f64; 3],
}

/// Descriptor for the ProstateX sample conversion task
pub const DEFAULT_DATASET_DESCRIPTOR: DatasetDescriptor = DatasetDescriptor {
    task: "Task100_test",
    description: "bpMRI scans from ProstateX dataset to test mha2nnunet",
    tensor_image_size: "4D",
    reference: "",
    licence: "",
    release: "0.3",
    modality: IndexTable(&[("0", "T2W"), ("1", "CT"), ("2", "HBV")]),
    labels: IndexTable(&[("0", "background"), ("1", "lesion")]),
};

pub const DEFAULT_PREPROCESSING: PreprocessingSettings = PreprocessingSettings {
    matrix_size: [20, 160, 160],
    spacing: [3.0, 0.5, 0.5],
};
