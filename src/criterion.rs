//! Criterion
//!
//! Shannon entropy of a label multiset and the information gain of
//! splitting a dataset on one categorical feature.
use crate::data::{feature_value, Category, Record};
use crate::errors::Id3Error;
use hashbrown::HashMap;

/// Entropy, in bits, of a distribution given by its class counts.
///
/// Counts are summed smallest first, so any two distributions with the same
/// counts get bit-for-bit the same entropy, whatever the class names.
fn entropy_of_counts(counts: &mut [usize], n: usize) -> f64 {
    counts.sort_unstable();
    let n = n as f64;
    counts.iter().fold(0.0, |ent, &c| {
        let p = c as f64 / n;
        ent - p * p.log2()
    })
}

/// Entropy, in bits, of the label distribution.
///
/// Returns exactly `0.0` when every label is the same.
pub fn entropy<L: Category>(labels: &[L]) -> Result<f64, Id3Error> {
    if labels.is_empty() {
        return Err(Id3Error::EmptyLabels("entropy"));
    }
    let mut counts: HashMap<&L, usize> = HashMap::new();
    for l in labels {
        *counts.entry(l).or_insert(0) += 1;
    }
    let mut counts: Vec<usize> = counts.into_values().collect();
    Ok(entropy_of_counts(&mut counts, labels.len()))
}

/// Group labels by the value their record holds for `feature`.
///
/// Groups come out in the order their value is first seen. Records and
/// labels are walked in lockstep, so the label order inside each group
/// follows the input order.
pub fn partition_labels<'a, V: Category, L: Category>(
    records: &'a [Record<V>],
    labels: &[L],
    feature: &str,
) -> Result<Vec<(&'a V, Vec<L>)>, Id3Error> {
    if records.len() != labels.len() {
        return Err(Id3Error::LengthMismatch(records.len(), labels.len()));
    }
    let mut index: HashMap<&V, usize> = HashMap::new();
    let mut subsets: Vec<(&V, Vec<L>)> = Vec::new();
    for (r, l) in records.iter().zip(labels) {
        let key = feature_value(r, feature)?;
        let i = *index.entry(key).or_insert_with(|| {
            subsets.push((key, Vec::new()));
            subsets.len() - 1
        });
        subsets[i].1.push(l.clone());
    }
    Ok(subsets)
}

/// Reduction in entropy achieved by splitting on `feature`.
///
/// Features that induce the same partition of the records score exactly
/// the same gain. If every part has the entropy of the whole, the gain is
/// exactly zero and the feature has no discriminative power for these labels.
pub fn information_gain<V: Category, L: Category>(
    records: &[Record<V>],
    labels: &[L],
    feature: &str,
) -> Result<f64, Id3Error> {
    let base_ent = entropy(labels)?;
    let base_n = labels.len() as f64;

    let subsets = partition_labels(records, labels, feature)?;
    let weighted = subsets
        .iter()
        .map(|(_, subset)| -> Result<(f64, f64), Id3Error> {
            Ok((subset.len() as f64 / base_n, entropy(subset)?))
        })
        .collect::<Result<Vec<(f64, f64)>, Id3Error>>()?;
    if weighted.iter().all(|&(_, ent)| ent == base_ent) {
        return Ok(0.0);
    }
    let subset_ent = weighted.iter().fold(0.0, |acc, &(w, ent)| acc + w * ent);
    Ok(base_ent - subset_ent)
}
