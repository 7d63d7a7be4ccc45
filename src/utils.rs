pub mod compute_bitap_score;
pub use compute_bitap_score::compute_bitap_score;

pub mod compute_field_norm;
pub use compute_field_norm::compute_field_norm;

pub mod find_char_sequence;
pub use find_char_sequence::find_char_sequence;

pub mod sort_results;
pub use sort_results::sort_results;
