//! Data
//!
//! Categorical records, the labelled dataset the tree is induced from,
//! and a CSV loader that produces one.
use crate::errors::Id3Error;
use crate::utils::items_to_strings;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::fs::File;
use std::hash::Hash;
use std::io;
use std::path::Path;

/// Trait for the categorical values and class labels used throughout the package.
///
/// Anything that can be compared, ordered and hashed qualifies: strings,
/// integers, booleans or plain enums. The ordering only makes the
/// layout of a built tree deterministic, it carries no meaning.
pub trait Category: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> Category for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

/// A single observation, mapping feature names to their categorical value.
pub type Record<V = String> = HashMap<String, V>;

/// Set of feature names still eligible for splitting.
pub type FeatureSet = BTreeSet<String>;

/// Read the value a record holds for `feature`.
#[inline]
pub fn feature_value<'a, V>(record: &'a Record<V>, feature: &str) -> Result<&'a V, Id3Error> {
    record
        .get(feature)
        .ok_or_else(|| Id3Error::MissingFeature(feature.to_string()))
}

/// Records paired index-for-index with their class labels.
#[derive(Debug, Clone)]
pub struct Dataset<V: Category = String, L: Category = String> {
    records: Vec<Record<V>>,
    labels: Vec<L>,
    features: Vec<String>,
}

impl<V: Category, L: Category> Dataset<V, L> {
    /// Pair records with labels.
    ///
    /// Fails if the two vectors differ in length, or if any record
    /// carries a different set of feature names than the first one.
    pub fn new(records: Vec<Record<V>>, labels: Vec<L>) -> Result<Self, Id3Error> {
        if records.len() != labels.len() {
            return Err(Id3Error::LengthMismatch(records.len(), labels.len()));
        }
        let mut features: Vec<String> = match records.first() {
            Some(r) => r.keys().cloned().collect(),
            None => Vec::new(),
        };
        features.sort();
        for (i, r) in records.iter().enumerate().skip(1) {
            if r.len() != features.len() || !features.iter().all(|f| r.contains_key(f)) {
                return Err(Id3Error::InconsistentRecord(i));
            }
        }
        Ok(Dataset {
            records,
            labels,
            features,
        })
    }

    pub fn records(&self) -> &[Record<V>] {
        &self.records
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Feature names, sorted.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// All feature names as a set, ready to hand to the tree builder.
    pub fn feature_set(&self) -> FeatureSet {
        self.features.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn default_delimiter() -> char {
    ','
}
fn default_trim() -> bool {
    true
}

/// How a CSV table is turned into a [`Dataset`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoadConfig {
    /// Column holding the class label. The last remaining column if not set.
    #[serde(default)]
    pub target: Option<String>,
    /// Identifier or otherwise unwanted columns that are ignored.
    #[serde(default)]
    pub drop_columns: Vec<String>,
    /// Field delimiter, must be ASCII.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Strip whitespace around headers and fields.
    #[serde(default = "default_trim")]
    pub trim: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            target: None,
            drop_columns: Vec::new(),
            delimiter: default_delimiter(),
            trim: default_trim(),
        }
    }
}

impl Dataset<String, String> {
    /// Load a dataset from a headered CSV file.
    ///
    /// * `path` - Path of the CSV file.
    /// * `config` - Target column, dropped columns and parsing options.
    pub fn from_csv<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<Self, Id3Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file, config)
    }

    /// Load a dataset from any reader producing headered CSV.
    pub fn from_reader<R: io::Read>(reader: R, config: &LoadConfig) -> Result<Self, Id3Error> {
        if !config.delimiter.is_ascii() {
            return Err(Id3Error::InvalidParameter(
                "delimiter".to_string(),
                "an ASCII character".to_string(),
                config.delimiter.to_string(),
            ));
        }
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(config.delimiter as u8)
            .trim(if config.trim { csv::Trim::All } else { csv::Trim::None })
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| Id3Error::UnableToRead(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();
        let kept: Vec<usize> = (0..headers.len())
            .filter(|&i| !config.drop_columns.contains(&headers[i]))
            .collect();

        let target_idx = match &config.target {
            Some(t) => kept.iter().copied().find(|&i| &headers[i] == t),
            None => kept.last().copied(),
        };
        let target_idx = target_idx.ok_or_else(|| {
            Id3Error::InvalidParameter(
                "target".to_string(),
                format!("one of {}", items_to_strings(kept.iter().map(|&i| headers[i].as_str()).collect())),
                config.target.clone().unwrap_or_default(),
            )
        })?;
        let feature_idx: Vec<usize> = kept.into_iter().filter(|&i| i != target_idx).collect();

        let mut records = Vec::new();
        let mut labels = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
            let mut record = Record::with_capacity(feature_idx.len());
            for &i in &feature_idx {
                let v = row
                    .get(i)
                    .ok_or_else(|| Id3Error::MissingFeature(headers[i].clone()))?;
                record.insert(headers[i].clone(), v.to_string());
            }
            let label = row
                .get(target_idx)
                .ok_or_else(|| Id3Error::MissingFeature(headers[target_idx].clone()))?;
            records.push(record);
            labels.push(label.to_string());
        }
        if labels.is_empty() {
            return Err(Id3Error::EmptyLabels("a dataset"));
        }

        info!(
            "Loaded {} records with features [{}], target {}.",
            labels.len(),
            items_to_strings(feature_idx.iter().map(|&i| headers[i].as_str()).collect()),
            headers[target_idx]
        );
        Dataset::new(records, labels)
    }
}
