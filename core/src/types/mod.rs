//! Core type definitions for MR archive manifests
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Modality`]: MR sequence tags (t2w, cor, sag, adc, hbv)
//! - [`ModalityMappings`]: Series-description table emitted in DICOM manifests
//! - [`DatasetDescriptor`] and [`PreprocessingSettings`]: Static blocks of the volume manifest
//! - [`SubjectKey`]: Patient + study key derived from volume filenames
//! - [`VolumeIndexConfig`]: Configuration for converted-volume indexing

mod config;
mod dataset;
mod mapping;
mod modality;
mod subject;

pub use config::{VolumeIndexConfig, DEFAULT_VOLUME_EXTENSION};
pub use dataset::{
    DatasetDescriptor, IndexTable, PreprocessingSettings, DEFAULT_DATASET_DESCRIPTOR,
    DEFAULT_PREPROCESSING,
};
pub use mapping::{ModalityMappings, SeriesCriteria, DEFAULT_MODALITY_MAPPINGS};
pub use modality::{Modality, ALL_MODALITIES, REQUIRED_VOLUME_MODALITIES};
pub use subject::SubjectKey;
