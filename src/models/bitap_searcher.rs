use crate::constants::{MAX_PATTERN_BITS, MIN_BITAP_SCORE};
use crate::types::{PatternMask, SearchScore};
use crate::utils::{compute_bitap_score, find_char_sequence};
use crate::FuzzySearchConfig;
use std::collections::HashMap;

/// Outcome of matching a pattern against a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: SearchScore,
}

impl BitapMatch {
    fn exact() -> Self {
        BitapMatch {
            is_match: true,
            score: 0.0,
        }
    }

    fn none() -> Self {
        BitapMatch {
            is_match: false,
            score: 1.0,
        }
    }
}

/// A slice of the pattern short enough to fit in a `PatternMask`.
struct PatternChunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, PatternMask>,
    start_index: usize,
}

impl PatternChunk {
    fn new(pattern: &[char], start_index: usize) -> Self {
        let pattern_len = pattern.len();
        let mut alphabet: HashMap<char, PatternMask> = HashMap::new();

        for (index, character) in pattern.iter().enumerate() {
            *alphabet.entry(*character).or_insert(0) |= 1 << (pattern_len - index - 1);
        }

        PatternChunk {
            pattern: pattern.to_vec(),
            alphabet,
            start_index,
        }
    }

    /// Approximate (shift-and with errors) search of this chunk within `text`.
    fn search(&self, text: &[char], location: usize, config: &FuzzySearchConfig) -> BitapMatch {
        let pattern_len = self.pattern.len();
        let text_len = text.len();
        let expected_location = location.min(text_len);

        let score_at = |errors: usize, current_location: usize| {
            compute_bitap_score(
                errors,
                pattern_len,
                current_location,
                expected_location,
                config,
            )
        };

        let mut current_threshold = config.threshold;

        // Exact occurrences tighten the threshold before the fuzzy pass
        let mut search_from = expected_location;
        while let Some(index) = find_char_sequence(text, &self.pattern, search_from) {
            current_threshold = current_threshold.min(score_at(0, index));
            search_from = index + pattern_len;
        }

        let mut best_location: Option<usize> = None;
        let mut final_score: SearchScore = 1.0;
        let mut last_bit_arr: Vec<PatternMask> = Vec::new();
        let mut bin_max = pattern_len + text_len;
        let mask: PatternMask = 1 << (pattern_len - 1);

        for errors in 0..pattern_len {
            // Binary search for how far from the expected location a match with this many
            // errors can still stay under the threshold
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if score_at(errors, expected_location + bin_mid) <= current_threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = (expected_location + 1).saturating_sub(bin_mid).max(1);
            let finish = if config.find_all_matches {
                text_len
            } else {
                (expected_location + bin_mid).min(text_len) + pattern_len
            };

            let mut bit_arr: Vec<PatternMask> = vec![0; finish + 2];
            bit_arr[finish + 1] = (1 << errors) - 1;

            let last_at = |index: usize| last_bit_arr.get(index).copied().unwrap_or(0);

            let mut j = finish;
            while j >= start {
                let current_location = j - 1;
                let char_match = text
                    .get(current_location)
                    .and_then(|character| self.alphabet.get(character))
                    .copied()
                    .unwrap_or(0);

                bit_arr[j] = ((bit_arr[j + 1] << 1) | 1) & char_match;

                if errors > 0 {
                    bit_arr[j] |= ((last_at(j + 1) | last_at(j)) << 1) | 1 | last_at(j + 1);
                }

                if bit_arr[j] & mask != 0 {
                    final_score = score_at(errors, current_location);

                    if final_score <= current_threshold {
                        current_threshold = final_score;
                        best_location = Some(current_location);

                        if current_location <= expected_location {
                            break;
                        }

                        // Don't scan further away than the current best match
                        start = (2 * expected_location)
                            .saturating_sub(current_location)
                            .max(1);
                    }
                }

                j -= 1;
            }

            // No hope for a better match with more errors
            if score_at(errors + 1, expected_location) > current_threshold {
                break;
            }

            last_bit_arr = bit_arr;
        }

        BitapMatch {
            is_match: best_location.is_some(),
            score: final_score.max(MIN_BITAP_SCORE),
        }
    }
}

/// Matches one query against many values.
///
/// The query is prepared once (lower-cased unless case sensitive, split into chunks of at
/// most `MAX_PATTERN_BITS` chars) and reused for every `search_in` call.
pub struct BitapSearcher {
    config: FuzzySearchConfig,
    pattern: String,
    chunks: Vec<PatternChunk>,
}

impl BitapSearcher {
    pub fn new(pattern: &str, config: &FuzzySearchConfig) -> Self {
        let pattern = if config.is_case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };

        let pattern_chars: Vec<char> = pattern.chars().collect();
        let pattern_len = pattern_chars.len();
        let mut chunks = Vec::new();

        if pattern_len <= MAX_PATTERN_BITS {
            if pattern_len > 0 {
                chunks.push(PatternChunk::new(&pattern_chars, 0));
            }
        } else {
            let remainder = pattern_len % MAX_PATTERN_BITS;
            let end = pattern_len - remainder;

            for start_index in (0..end).step_by(MAX_PATTERN_BITS) {
                chunks.push(PatternChunk::new(
                    &pattern_chars[start_index..start_index + MAX_PATTERN_BITS],
                    start_index,
                ));
            }

            // The trailing chunk overlaps the previous one so it is still full width
            if remainder > 0 {
                let start_index = pattern_len - MAX_PATTERN_BITS;
                chunks.push(PatternChunk::new(&pattern_chars[start_index..], start_index));
            }
        }

        BitapSearcher {
            config: *config,
            pattern,
            chunks,
        }
    }

    pub fn search_in(&self, text: &str) -> BitapMatch {
        let text = if self.config.is_case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        if self.pattern == text {
            return BitapMatch::exact();
        }

        if self.chunks.is_empty() {
            return BitapMatch::none();
        }

        let text_chars: Vec<char> = text.chars().collect();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let chunk_match = chunk.search(
                &text_chars,
                self.config.location + chunk.start_index,
                &self.config,
            );

            has_matches |= chunk_match.is_match;
            total_score += chunk_match.score;
        }

        if has_matches {
            BitapMatch {
                is_match: true,
                score: total_score / self.chunks.len() as f64,
            }
        } else {
            BitapMatch::none()
        }
    }
}
