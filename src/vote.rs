//! Majority vote over a label multiset.
use crate::data::Category;
use crate::errors::Id3Error;
use hashbrown::HashMap;

/// The most frequent label.
///
/// Ties go to the label that appears first in `labels`, which keeps the
/// result independent of hashing order.
pub fn majority_label<L: Category>(labels: &[L]) -> Result<L, Id3Error> {
    // label -> (count, index of first occurrence)
    let mut counts: HashMap<&L, (usize, usize)> = HashMap::new();
    for (i, l) in labels.iter().enumerate() {
        counts.entry(l).or_insert((0, i)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(l, _)| l.clone())
        .ok_or(Id3Error::EmptyLabels("a majority vote"))
}
