use crate::builder::Id3Builder;
use crate::data::FeatureSet;

impl Id3Builder {
    // Set methods for parameters

    /// Set whether sibling subtrees are grown in parallel.
    /// * `parallel` - Use rayon while growing the tree.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set the number of threads on the builder.
    /// * `num_threads` - Threads used when growing in parallel.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    /// Set the candidate features.
    /// * `features` - Features eligible for splitting, all dataset features when `None`.
    pub fn set_features(mut self, features: Option<FeatureSet>) -> Self {
        self.cfg.features = features;
        self
    }

    /// Set whether splits are logged.
    pub fn set_log_splits(mut self, log_splits: bool) -> Self {
        self.cfg.log_splits = log_splits;
        self
    }
}
