//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while loading data, building or using a decision tree.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// Records and labels are paired by position, so their counts must match.
    #[error("Number of records ({0}) does not match number of labels ({1}).")]
    LengthMismatch(usize, usize),
    /// A feature was read from a record that does not carry it.
    #[error("Feature {0} is missing from the record.")]
    MissingFeature(String),
    /// A record does not carry the same feature names as the first record.
    #[error("Record {0} does not have the same features as the first record.")]
    InconsistentRecord(usize),
    /// An empty label set was passed where at least one label is required.
    #[error("Unable to compute {0} of an empty label set.")]
    EmptyLabels(&'static str),
    /// A value reached a branch that never saw it during training.
    #[error("Value {1} of feature {0} was not observed during training at this node.")]
    UnseenFeatureValue(String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model or data from file.
    #[error("Unable to read from a file {0}")]
    UnableToRead(String),
}

impl Id3Error {
    /// True for errors that indicate a defect in the calling code rather than
    /// a property of the data being classified.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Id3Error::LengthMismatch(..)
                | Id3Error::MissingFeature(_)
                | Id3Error::InconsistentRecord(_)
                | Id3Error::EmptyLabels(_)
                | Id3Error::InvalidParameter(..)
        )
    }
}
