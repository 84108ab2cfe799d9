//! Builder Configuration
//!
//! Options for growing a decision tree, and the JSON persistence shared by
//! configurations and fitted trees.
use crate::data::FeatureSet;
use crate::errors::Id3Error;
use crate::utils::validate_thread_parameter;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_num_threads() -> Option<usize> {
    None
}
fn default_features() -> Option<FeatureSet> {
    None
}
fn default_log_splits() -> bool {
    true
}

/// Configuration for the `Id3Builder`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BuilderConfig {
    /// Grow sibling subtrees in parallel. The tree is identical either way.
    #[serde(default)]
    pub parallel: bool,
    /// Threads for parallel growth, the global rayon pool is used if not set.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
    /// Candidate features, all features of the dataset if not set.
    #[serde(default = "default_features")]
    pub features: Option<FeatureSet>,
    /// Log every split at debug level.
    #[serde(default = "default_log_splits")]
    pub log_splits: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            parallel: false,
            num_threads: default_num_threads(),
            features: default_features(),
            log_splits: default_log_splits(),
        }
    }
}

impl BuilderConfig {
    pub fn validate_parameters(&self) -> Result<(), Id3Error> {
        validate_thread_parameter(self.num_threads, "num_threads")
    }
}

/// JSON persistence for built trees and builder configurations.
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Write the tree or configuration to `path` as JSON, replacing any
    /// existing file.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        fs::write(path, self.json_dump()?).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// The JSON text `save_model` writes.
    fn json_dump(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Rebuild a tree or configuration from the text of `json_dump`.
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        serde_json::from_str::<Self>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))
    }

    /// Read back a file written by `save_model`.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for BuilderConfig {}
