//! Sample dataset model
//!
//! The dataset is decoded once, validated, and then only read. Validation
//! turns the positional pairing of `samples` and `metadata` into an explicit
//! join on the sample id.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Raw dataset as published: parallel `samples` and `metadata` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Sample ids in publication order. Informational only.
    #[serde(default)]
    pub names: Vec<String>,
    pub samples: Vec<Sample>,
    pub metadata: Vec<SampleMetadata>,
}

/// One specimen's taxon observations. Index `i` of each vector describes
/// the same taxon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub otu_ids: Vec<u32>,
    pub sample_values: Vec<f64>,
    pub otu_labels: Vec<String>,
}

/// Demographic record for one sample. Any field but `id` may be null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub id: u64,
    pub ethnicity: Option<String>,
    pub gender: Option<String>,
    pub age: Option<f64>,
    pub location: Option<String>,
    pub bbtype: Option<String>,
    pub wfreq: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error(
        "sample {id} has misaligned taxa: {otu_ids} otu_ids, {sample_values} sample_values, {otu_labels} otu_labels"
    )]
    MisalignedSample {
        id: String,
        otu_ids: usize,
        sample_values: usize,
        otu_labels: usize,
    },

    #[error("dataset has {samples} samples but {metadata} metadata records")]
    MetadataCountMismatch { samples: usize, metadata: usize },

    #[error("no metadata record for sample {id}")]
    MissingMetadata { id: String },

    #[error("sample {id} appears more than once")]
    DuplicateSample { id: String },

    #[error("metadata id {id} appears more than once")]
    DuplicateMetadata { id: u64 },
}

impl Dataset {
    /// Decode a dataset from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Check shape invariants and join samples to metadata by id.
    pub fn validate(self) -> Result<ValidDataset, DatasetError> {
        if self.samples.len() != self.metadata.len() {
            return Err(DatasetError::MetadataCountMismatch {
                samples: self.samples.len(),
                metadata: self.metadata.len(),
            });
        }

        let mut metadata_by_id = HashMap::with_capacity(self.metadata.len());
        for record in self.metadata {
            let id = record.id;
            if metadata_by_id.insert(id, record).is_some() {
                return Err(DatasetError::DuplicateMetadata { id });
            }
        }

        let mut seen = HashSet::with_capacity(self.samples.len());
        let mut entries = Vec::with_capacity(self.samples.len());
        for sample in self.samples {
            sample.check_aligned()?;
            if !seen.insert(sample.id.clone()) {
                return Err(DatasetError::DuplicateSample { id: sample.id });
            }
            let metadata = sample
                .id
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(|id| metadata_by_id.remove(&id))
                .ok_or_else(|| DatasetError::MissingMetadata {
                    id: sample.id.clone(),
                })?;
            entries.push(SampleEntry { sample, metadata });
        }

        Ok(ValidDataset { entries })
    }
}

impl Sample {
    /// Number of taxa observed in the sample.
    pub fn len(&self) -> usize {
        self.otu_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.otu_ids.is_empty()
    }

    fn check_aligned(&self) -> Result<(), DatasetError> {
        let n = self.otu_ids.len();
        if self.sample_values.len() != n || self.otu_labels.len() != n {
            return Err(DatasetError::MisalignedSample {
                id: self.id.clone(),
                otu_ids: n,
                sample_values: self.sample_values.len(),
                otu_labels: self.otu_labels.len(),
            });
        }
        Ok(())
    }
}

/// A sample paired with its own metadata record.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEntry {
    pub sample: Sample,
    pub metadata: SampleMetadata,
}

/// Dataset whose samples are aligned and joined to metadata, in sample order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDataset {
    entries: Vec<SampleEntry>,
}

impl ValidDataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&SampleEntry> {
        self.entries.get(index)
    }

    /// Index of the sample with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.sample.id == id)
    }
}
