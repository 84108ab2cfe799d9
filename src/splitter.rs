//! Splitter
//!
//! Ranks the candidate features of a node by information gain.
use crate::criterion::information_gain;
use crate::data::{Category, FeatureSet, Record};
use crate::errors::Id3Error;
use std::cmp::Ordering;

/// The gain of splitting a node on one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub split_feature: String,
    pub split_gain: f64,
}

impl SplitInfo {
    /// Order by gain, then by feature name. The greatest entry is the split
    /// to take, so among equal gains the greatest feature name wins.
    fn rank(&self, other: &Self) -> Ordering {
        self.split_gain
            .total_cmp(&other.split_gain)
            .then_with(|| self.split_feature.cmp(&other.split_feature))
    }
}

/// Score every feature in `features`.
pub fn split_gains<V: Category, L: Category>(
    records: &[Record<V>],
    labels: &[L],
    features: &FeatureSet,
) -> Result<Vec<SplitInfo>, Id3Error> {
    features
        .iter()
        .map(|f| -> Result<SplitInfo, Id3Error> {
            Ok(SplitInfo {
                split_feature: f.clone(),
                split_gain: information_gain(records, labels, f)?,
            })
        })
        .collect()
}

/// The highest ranked split, or `None` if there are no features to split on.
pub fn best_split<V: Category, L: Category>(
    records: &[Record<V>],
    labels: &[L],
    features: &FeatureSet,
) -> Result<Option<SplitInfo>, Id3Error> {
    Ok(split_gains(records, labels, features)?
        .into_iter()
        .max_by(|a, b| a.rank(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn features(names: &[&str]) -> FeatureSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_best_split() {
        let records = vec![
            rec(&[("A", "x"), ("B", "p")]),
            rec(&[("A", "x"), ("B", "q")]),
            rec(&[("A", "y"), ("B", "p")]),
            rec(&[("A", "y"), ("B", "q")]),
        ];
        let labels = vec!["yes", "yes", "no", "no"];
        let best = best_split(&records, &labels, &features(&["A", "B"])).unwrap().unwrap();
        assert_eq!(best.split_feature, "A");
        assert_eq!(best.split_gain, 1.0);
    }

    #[test]
    fn test_best_split_tie_takes_greatest_feature() {
        // A and C are identical columns, so their gains tie.
        let records = vec![
            rec(&[("A", "x"), ("B", "p"), ("C", "x")]),
            rec(&[("A", "y"), ("B", "p"), ("C", "y")]),
        ];
        let labels = vec!["yes", "no"];
        let best = best_split(&records, &labels, &features(&["A", "B", "C"])).unwrap().unwrap();
        assert_eq!(best.split_feature, "C");
    }

    #[test]
    fn test_best_split_tie_on_same_partition() {
        // A and B group the records identically under different value names,
        // and the groups are mixed, so their entropies are not zero.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let n = rng.gen_range(4..30);
            let mut records = Vec::with_capacity(n);
            let mut labels = Vec::with_capacity(n);
            for _ in 0..n {
                let v: u8 = rng.gen_range(0..4);
                let a = format!("a{}", v);
                let b = format!("zz{}", 3 - v);
                records.push(rec(&[("A", a.as_str()), ("B", b.as_str())]));
                labels.push(format!("l{}", rng.gen_range(0..3)));
            }
            let gains = split_gains(&records, &labels, &features(&["A", "B"])).unwrap();
            assert_eq!(gains[0].split_gain, gains[1].split_gain);
            let best = best_split(&records, &labels, &features(&["A", "B"])).unwrap().unwrap();
            assert_eq!(best.split_feature, "B");
        }
    }

    #[test]
    fn test_best_split_no_features() {
        let records = vec![rec(&[("A", "x")])];
        let best = best_split(&records, &["yes"], &FeatureSet::new()).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_split_gains_missing_feature() {
        let records = vec![rec(&[("A", "x")]), rec(&[("A", "y")])];
        let res = split_gains(&records, &["yes", "no"], &features(&["A", "Z"]));
        assert!(matches!(res, Err(Id3Error::MissingFeature(f)) if f == "Z"));
    }
}
