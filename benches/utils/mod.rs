#![allow(dead_code)]
use id3tree::{Dataset, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random categorical data where the label depends on the first two features
/// and is flipped with a small probability.
pub(crate) fn create_data(n_samples: usize, n_features: usize, n_values: u8) -> Dataset<u8, u8> {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    let mut records: Vec<Record<u8>> = Vec::with_capacity(n_samples);
    let mut labels: Vec<u8> = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let record: Record<u8> = (0..n_features)
            .map(|f| (format!("f{}", f), rng.gen_range(0..n_values)))
            .collect();
        let mut label = (record["f0"] + record["f1"]) % 3;
        if rng.gen_bool(0.05) {
            label = rng.gen_range(0..3);
        }
        records.push(record);
        labels.push(label);
    }
    Dataset::new(records, labels).expect("Generated records share their features")
}
