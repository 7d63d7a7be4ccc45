/// Finds the first occurrence of `needle` in `haystack` at or after `from`.
pub fn find_char_sequence(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_finds_from_offset() {
        let haystack = chars("abcabc");

        assert_eq!(find_char_sequence(&haystack, &chars("abc"), 0), Some(0));
        assert_eq!(find_char_sequence(&haystack, &chars("abc"), 1), Some(3));
        assert_eq!(find_char_sequence(&haystack, &chars("abc"), 4), None);
    }

    #[test]
    fn test_out_of_range_offset() {
        assert_eq!(find_char_sequence(&chars("abc"), &chars("a"), 10), None);
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(find_char_sequence(&chars("ab"), &chars("abc"), 0), None);
    }
}
