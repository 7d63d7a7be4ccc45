use crate::SearchResult;

/// Sorts search results by match quality.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in ascending order (lower score is a better match).
/// - **Secondary:** If two results have the same score, keeps dataset order by sorting on
///   record index.
pub fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score) // Sort by score (ascending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.record_index.cmp(&b.record_index)) // Secondary sort by dataset order
    });
}
