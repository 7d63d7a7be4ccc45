use crate::constants::FIELD_NORM_PRECISION;

/// Field-length norm for an indexed value.
///
/// Counts runs of non-space characters and returns `1 / tokens^(0.5 * weight)`, rounded
/// to three decimals, so matches in short values outrank matches in long ones.
pub fn compute_field_norm(value: &str, weight: f64) -> f64 {
    let num_tokens = value.split(' ').filter(|token| !token.is_empty()).count().max(1);

    let norm = 1.0 / (num_tokens as f64).powf(0.5 * weight);

    (norm * FIELD_NORM_PRECISION).round() / FIELD_NORM_PRECISION
}
