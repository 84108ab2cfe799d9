//! Tree Prediction Methods
//!
//! Traversal of a built tree for one or many records.
use super::tree::DecisionTree;
use crate::data::{feature_value, Category, Record};
use crate::errors::Id3Error;
use rayon::prelude::*;

impl<V: Category, L: Category> DecisionTree<V, L> {
    /// Classify a single record.
    ///
    /// Fails with `UnseenFeatureValue` when the record reaches a branch
    /// that never saw its value, and with `MissingFeature` when the record
    /// lacks the feature a branch splits on.
    pub fn predict(&self, record: &Record<V>) -> Result<L, Id3Error> {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf(label) => return Ok(label.clone()),
                DecisionTree::Branch { feature, children } => {
                    let value = feature_value(record, feature)?;
                    node = children
                        .get(value)
                        .ok_or_else(|| Id3Error::UnseenFeatureValue(feature.clone(), format!("{:?}", value)))?;
                }
            }
        }
    }

    /// Classify every record, stopping at the first failure.
    ///
    /// * `records` - Records to classify.
    /// * `parallel` - Spread the records over the rayon thread pool.
    pub fn predict_all(&self, records: &[Record<V>], parallel: bool) -> Result<Vec<L>, Id3Error> {
        if parallel {
            records.par_iter().map(|r| self.predict(r)).collect()
        } else {
            records.iter().map(|r| self.predict(r)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn toy_tree() -> DecisionTree {
        DecisionTree::Branch {
            feature: "A".to_string(),
            children: BTreeMap::from([
                ("x".to_string(), DecisionTree::Leaf("yes".to_string())),
                ("y".to_string(), DecisionTree::Leaf("no".to_string())),
            ]),
        }
    }

    #[test]
    fn test_predict() {
        let tree = toy_tree();
        assert_eq!(tree.predict(&rec(&[("A", "x"), ("B", "q")])).unwrap(), "yes");
        assert_eq!(tree.predict(&rec(&[("A", "y"), ("B", "p")])).unwrap(), "no");
        let leaf: DecisionTree = DecisionTree::Leaf("always".to_string());
        assert_eq!(leaf.predict(&Record::new()).unwrap(), "always");
    }

    #[test]
    fn test_predict_unseen_value() {
        let tree = toy_tree();
        let err = tree.predict(&rec(&[("A", "z"), ("B", "p")])).unwrap_err();
        assert!(!err.is_invalid_input());
        assert!(matches!(err, Id3Error::UnseenFeatureValue(f, v) if f == "A" && v == "\"z\""));
    }

    #[test]
    fn test_predict_missing_feature() {
        let tree = toy_tree();
        let err = tree.predict(&rec(&[("B", "p")])).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, Id3Error::MissingFeature(f) if f == "A"));
    }

    #[test]
    fn test_predict_all() {
        let tree = toy_tree();
        let records = vec![rec(&[("A", "x")]), rec(&[("A", "y")]), rec(&[("A", "x")])];
        let expected = vec!["yes".to_string(), "no".to_string(), "yes".to_string()];
        assert_eq!(tree.predict_all(&records, false).unwrap(), expected);
        assert_eq!(tree.predict_all(&records, true).unwrap(), expected);

        let bad = vec![rec(&[("A", "x")]), rec(&[("A", "w")])];
        assert!(matches!(
            tree.predict_all(&bad, false),
            Err(Id3Error::UnseenFeatureValue(..))
        ));
        assert!(matches!(
            tree.predict_all(&bad, true),
            Err(Id3Error::UnseenFeatureValue(..))
        ));
    }
}
