use crate::builder::config::BuilderConfig;
use crate::data::{feature_value, Category, Dataset, FeatureSet, Record};
use crate::decision_tree::DecisionTree;
use crate::errors::Id3Error;
use crate::splitter::best_split;
use crate::vote::majority_label;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// Build a tree from records, labels and candidate features with the
/// default, sequential configuration.
pub fn build_tree<V: Category, L: Category>(
    records: &[Record<V>],
    labels: &[L],
    features: &FeatureSet,
) -> Result<DecisionTree<V, L>, Id3Error> {
    Id3Builder::default().build(records, labels, features)
}

/// ID3 decision tree builder.
///
/// Holds only configuration, every call to `build` or `fit` works solely
/// on its arguments.
#[derive(Clone, Debug, Default)]
pub struct Id3Builder {
    pub cfg: BuilderConfig,
}

impl Id3Builder {
    /// Create a builder from a configuration.
    ///
    /// * `cfg` - Parallelism, candidate features and logging options.
    pub fn new(cfg: BuilderConfig) -> Result<Self, Id3Error> {
        let builder = Id3Builder { cfg };
        builder.validate_parameters()?;
        Ok(builder)
    }

    pub fn validate_parameters(&self) -> Result<(), Id3Error> {
        self.cfg.validate_parameters()
    }

    /// Fit a tree on a whole dataset.
    ///
    /// Splits on the configured features, or on every feature of the
    /// dataset if none were configured.
    pub fn fit<V: Category, L: Category>(&self, data: &Dataset<V, L>) -> Result<DecisionTree<V, L>, Id3Error> {
        let features = match &self.cfg.features {
            Some(features) => {
                if let Some(f) = features.iter().find(|f| !data.features().contains(f)) {
                    return Err(Id3Error::MissingFeature(f.clone()));
                }
                features.clone()
            }
            None => data.feature_set(),
        };
        self.build(data.records(), data.labels(), &features)
    }

    /// Build a tree from records paired with labels.
    ///
    /// * `records` - Categorical records.
    /// * `labels` - Class label of each record, by position.
    /// * `features` - Feature names eligible for splitting.
    pub fn build<V: Category, L: Category>(
        &self,
        records: &[Record<V>],
        labels: &[L],
        features: &FeatureSet,
    ) -> Result<DecisionTree<V, L>, Id3Error> {
        self.validate_parameters()?;
        if records.len() != labels.len() {
            return Err(Id3Error::LengthMismatch(records.len(), labels.len()));
        }
        if labels.is_empty() {
            return Err(Id3Error::EmptyLabels("a decision tree"));
        }

        let start = Instant::now();
        info!(
            "Building decision tree on {} records with {} candidate features.",
            labels.len(),
            features.len()
        );

        let tree = match (self.cfg.parallel, self.cfg.num_threads) {
            (true, Some(num_threads)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        Id3Error::InvalidParameter(
                            "num_threads".to_string(),
                            "a number of threads the system can start".to_string(),
                            e.to_string(),
                        )
                    })?;
                pool.install(|| self.grow(records.to_vec(), labels.to_vec(), features.clone(), 0))?
            }
            _ => self.grow(records.to_vec(), labels.to_vec(), features.clone(), 0)?,
        };

        info!(
            "Finished decision tree with depth {}, {} leaves and {} nodes in {:.3} seconds.",
            tree.depth(),
            tree.n_leaves(),
            tree.n_nodes(),
            start.elapsed().as_secs_f64()
        );
        Ok(tree)
    }

    fn leaf<V: Category, L: Category>(&self, label: L, n_records: usize, depth: usize) -> DecisionTree<V, L> {
        trace!("Depth {}: leaf {:?} for {} records.", depth, label, n_records);
        DecisionTree::Leaf(label)
    }

    /// Grow the subtree for one node. Each call owns its records, labels
    /// and candidate features.
    fn grow<V: Category, L: Category>(
        &self,
        records: Vec<Record<V>>,
        labels: Vec<L>,
        features: FeatureSet,
        depth: usize,
    ) -> Result<DecisionTree<V, L>, Id3Error> {
        let first = labels.first().ok_or(Id3Error::EmptyLabels("a decision tree"))?;
        if labels.iter().all(|l| l == first) {
            return Ok(self.leaf(first.clone(), labels.len(), depth));
        }

        let best = match best_split(&records, &labels, &features)? {
            Some(best) => best,
            None => return Ok(self.leaf(majority_label(&labels)?, labels.len(), depth)),
        };
        if best.split_gain == 0.0 {
            return Ok(self.leaf(majority_label(&labels)?, labels.len(), depth));
        }
        if self.cfg.log_splits {
            debug!(
                "Depth {}: splitting {} records on {} with gain {:.4}.",
                depth,
                labels.len(),
                best.split_feature,
                best.split_gain
            );
        }

        let split_feature = best.split_feature;
        let values = records
            .iter()
            .map(|r| feature_value(r, &split_feature))
            .collect::<Result<BTreeSet<&V>, Id3Error>>()?;
        let mut remaining = features;
        remaining.remove(&split_feature);

        let subsets: Vec<(V, Vec<Record<V>>, Vec<L>)> = values
            .into_iter()
            .map(|v| {
                let (sub_records, sub_labels): (Vec<Record<V>>, Vec<L>) = records
                    .iter()
                    .zip(&labels)
                    .filter(|(r, _)| r.get(&split_feature) == Some(v))
                    .map(|(r, l)| (r.clone(), l.clone()))
                    .unzip();
                (v.clone(), sub_records, sub_labels)
            })
            .collect();

        let grow_child = |(v, sub_records, sub_labels): (V, Vec<Record<V>>, Vec<L>)| -> Result<(V, DecisionTree<V, L>), Id3Error> {
            if sub_labels.is_empty() {
                return Ok((v, self.leaf(majority_label(&labels)?, 0, depth + 1)));
            }
            Ok((v, self.grow(sub_records, sub_labels, remaining.clone(), depth + 1)?))
        };
        let children = if self.cfg.parallel {
            subsets
                .into_par_iter()
                .map(grow_child)
                .collect::<Result<BTreeMap<V, DecisionTree<V, L>>, Id3Error>>()?
        } else {
            subsets
                .into_iter()
                .map(grow_child)
                .collect::<Result<BTreeMap<V, DecisionTree<V, L>>, Id3Error>>()?
        };

        Ok(DecisionTree::Branch {
            feature: split_feature,
            children,
        })
    }
}
