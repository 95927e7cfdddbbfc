use std::ops::RangeInclusive;

/// Default n-gram span: bigrams through 5-grams.
pub const DEFAULT_NGRAM_RANGE: RangeInclusive<usize> = 2..=5;

/// Normalizes text for n-gram extraction.
///
/// - Lowercases (Unicode-aware, diacritics survive)
/// - Replaces each maximal run of non-letter characters with one space
/// - Collapses whitespace and trims
fn preprocess(text: &str) -> String {
	let mut cleaned = String::with_capacity(text.len());
	let mut pending_space = false;

	for c in text.chars() {
		if c.is_alphabetic() {
			if pending_space && !cleaned.is_empty() {
				cleaned.push(' ');
			}
			pending_space = false;
			cleaned.extend(c.to_lowercase());
		} else {
			pending_space = true;
		}
	}

	cleaned
}

/// Extracts overlapping character n-grams from `text`.
///
/// The cleaned text is wrapped in a single leading and trailing space
/// so that n-grams capture word boundaries; the space acts as a
/// boundary symbol and improves discrimination for short words.
///
/// # Behavior
/// - For each `n` in `n_range` (inclusive), every contiguous window of
///   `n` characters of the padded string is emitted, left to right.
/// - Emission order is position order per `n`; duplicates are kept,
///   downstream counting uses occurrence frequency.
/// - If the padded string is shorter than `n`, nothing is emitted for
///   that `n`.
///
/// Never fails: text with no letters yields an empty vector.
pub fn extract(text: &str, n_range: RangeInclusive<usize>) -> Vec<String> {
	let cleaned = preprocess(text);
	if cleaned.is_empty() {
		return Vec::new();
	}

	let padded: Vec<char> = std::iter::once(' ')
		.chain(cleaned.chars())
		.chain(std::iter::once(' '))
		.collect();

	let mut result = Vec::new();
	for n in n_range {
		if n == 0 || padded.len() < n {
			continue;
		}
		for window in padded.windows(n) {
			result.push(window.iter().collect());
		}
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_input_yields_nothing() {
		assert!(extract("", DEFAULT_NGRAM_RANGE).is_empty());
	}

	#[test]
	fn non_letter_input_yields_nothing() {
		assert!(extract("123 !? ...", DEFAULT_NGRAM_RANGE).is_empty());
		assert!(extract("   \t\n", DEFAULT_NGRAM_RANGE).is_empty());
	}

	#[test]
	fn padded_string_shorter_than_n_yields_nothing() {
		// "a" pads to " a " (3 chars), so nothing for n = 4
		assert!(extract("a", 4..=4).is_empty());
	}

	#[test]
	fn cat_bigrams_and_trigrams() {
		let expected = vec![" c", "ca", "at", "t ", " ca", "cat", "at "];
		assert_eq!(extract("cat", 2..=3), expected);
	}

	#[test]
	fn boundary_spaces_span_words() {
		// "to be" pads to " to be ": bigrams cross the word boundary
		let grams = extract("to be", 2..=2);
		assert!(grams.contains(&"o ".to_string()));
		assert!(grams.contains(&" b".to_string()));
	}

	#[test]
	fn punctuation_collapses_to_single_space() {
		assert_eq!(extract("a--b", 2..=2), extract("a b", 2..=2));
	}

	#[test]
	fn lowercases_and_keeps_diacritics() {
		let grams = extract("Øl", 2..=2);
		assert_eq!(grams, vec![" ø".to_string(), "øl".to_string(), "l ".to_string()]);
	}

	#[test]
	fn duplicates_are_kept_in_position_order() {
		let grams = extract("aaa", 2..=2);
		assert_eq!(grams, vec![" a", "aa", "aa", "a "]);
	}
}
