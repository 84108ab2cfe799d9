// Modules
pub mod builder;
pub mod criterion;
pub mod data;
pub mod decision_tree;
pub mod errors;
pub mod splitter;
pub mod utils;
pub mod vote;

// Individual classes, and functions
pub use builder::config::{BuilderConfig, ModelIO};
pub use builder::{build_tree, Id3Builder};
pub use criterion::{entropy, information_gain};
pub use data::{Dataset, FeatureSet, LoadConfig, Record};
pub use decision_tree::DecisionTree;
pub use errors::Id3Error;
pub use vote::majority_label;
