use std::collections::HashMap;

use crate::error::{DetectError, Result};

use super::extractor::{DEFAULT_NGRAM_RANGE, extract};
use super::language_profile::LanguageProfile;

/// Profiles are capped to the most frequent n-grams before
/// normalization, so retained frequencies still sum to 1.0.
pub const DEFAULT_MAX_NGRAMS: usize = 20_000;

/// Accumulates n-gram occurrence counts for one language.
///
/// # Responsibilities
/// - Ingest arbitrary amounts of text via repeated `append` calls
/// - Merge partial builders produced by parallel ingestion
/// - Freeze the counts into a normalized, immutable `LanguageProfile`
///
/// A builder is single-use: `build` consumes it, so appending after
/// the profile has been frozen cannot compile.
#[derive(Debug)]
pub struct LanguageProfileBuilder {
	language: String,
	counts: HashMap<String, u64>,
}

impl LanguageProfileBuilder {
	/// Creates an empty builder for `language`.
	pub fn new(language: impl Into<String>) -> Self {
		Self {
			language: language.into(),
			counts: HashMap::new(),
		}
	}

	/// The language this builder accumulates counts for.
	pub fn language(&self) -> &str {
		&self.language
	}

	/// Extracts n-grams from `text` and increments their counts.
	///
	/// Typically called once per corpus line, potentially millions of
	/// times. Text with no letters is a no-op.
	pub fn append(&mut self, text: &str) {
		for ngram in extract(text, DEFAULT_NGRAM_RANGE) {
			*self.counts.entry(ngram).or_insert(0) += 1;
		}
	}

	/// Merges another builder's counts into this one.
	///
	/// Intended for parallel ingestion, where partial builders over
	/// chunks of a corpus are combined into a single one.
	///
	/// # Errors
	/// Returns an error if the two builders target different languages.
	pub fn merge(&mut self, other: Self) -> Result<()> {
		if self.language != other.language {
			return Err(DetectError::LanguageMismatch {
				left: self.language.clone(),
				right: other.language,
			});
		}

		for (ngram, count) in other.counts {
			*self.counts.entry(ngram).or_insert(0) += count;
		}

		Ok(())
	}

	/// Freezes the accumulated counts into a `LanguageProfile`,
	/// keeping at most `DEFAULT_MAX_NGRAMS` n-grams.
	pub fn build(self) -> LanguageProfile {
		self.build_with_cap(DEFAULT_MAX_NGRAMS)
	}

	/// Freezes the accumulated counts, keeping at most `max_ngrams`
	/// of the most frequent n-grams.
	///
	/// Truncation happens before normalization: the retained counts
	/// are divided by their own total, so the resulting frequencies
	/// sum to 1.0.
	pub fn build_with_cap(self, max_ngrams: usize) -> LanguageProfile {
		let mut entries: Vec<(String, u64)> = self.counts.into_iter().collect();
		// Count-descending, key ascending for a deterministic cut
		entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
		entries.truncate(max_ngrams);

		let total: u64 = entries.iter().map(|(_, count)| count).sum();
		let ngrams = if total == 0 {
			HashMap::new()
		} else {
			entries
				.into_iter()
				.map(|(ngram, count)| (ngram, count as f64 / total as f64))
				.collect()
		};

		LanguageProfile::new(self.language, ngrams)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frequencies_sum_to_one() {
		let mut builder = LanguageProfileBuilder::new("eng");
		builder.append("the quick brown fox jumps over the lazy dog");
		builder.append("pack my box with five dozen liquor jugs");

		let profile = builder.build();
		let sum: f64 = profile.ngrams().values().sum();
		assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
	}

	#[test]
	fn empty_builder_builds_empty_profile() {
		let profile = LanguageProfileBuilder::new("eng").build();
		assert_eq!(profile.language(), "eng");
		assert!(profile.is_empty());
	}

	#[test]
	fn cap_keeps_most_frequent_and_renormalizes() {
		let mut builder = LanguageProfileBuilder::new("eng");
		builder.append("aaa aaa aaa bb");

		let profile = builder.build_with_cap(3);
		assert_eq!(profile.len(), 3);
		// "aa" occurs most often and must survive the cut
		assert!(profile.frequency("aa") > 0.0);
		let sum: f64 = profile.ngrams().values().sum();
		assert!((sum - 1.0).abs() < 1e-9);
	}

	#[test]
	fn merge_sums_counts() {
		let mut left = LanguageProfileBuilder::new("eng");
		left.append("cat");
		let mut right = LanguageProfileBuilder::new("eng");
		right.append("cat");

		left.merge(right).unwrap();
		let mut solo = LanguageProfileBuilder::new("eng");
		solo.append("cat");
		solo.append("cat");

		assert_eq!(left.build(), solo.build());
	}

	#[test]
	fn merge_rejects_language_mismatch() {
		let mut left = LanguageProfileBuilder::new("eng");
		let right = LanguageProfileBuilder::new("ger");
		assert!(left.merge(right).is_err());
	}
}
