use crate::errors::Id3Error;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    items.join(", ")
}

/// Validate an optional thread count, zero threads is never valid.
pub fn validate_thread_parameter(value: Option<usize>, parameter: &str) -> Result<(), Id3Error> {
    match value {
        Some(0) => Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "a positive number of threads".to_string(),
            "0".to_string(),
        )),
        _ => Ok(()),
    }
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
