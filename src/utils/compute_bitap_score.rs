use crate::types::SearchScore;
use crate::FuzzySearchConfig;

/// Scores a candidate alignment of a pattern within a text.
///
/// The score combines the share of the pattern that needed an edit with how far the
/// alignment starts from the expected location:
///
/// `errors / pattern_len + |current_location - expected_location| / distance`
///
/// With `ignore_location` only the error ratio counts. With a `distance` of zero any
/// drift from the expected location is a full mismatch.
pub fn compute_bitap_score(
    errors: usize,
    pattern_len: usize,
    current_location: usize,
    expected_location: usize,
    config: &FuzzySearchConfig,
) -> SearchScore {
    let accuracy = errors as f64 / pattern_len as f64;

    if config.ignore_location {
        return accuracy;
    }

    let proximity = current_location.abs_diff(expected_location);

    if config.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }

    accuracy + proximity as f64 / config.distance as f64
}
