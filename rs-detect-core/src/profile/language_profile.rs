use std::collections::HashMap;

/// A language's trained n-gram frequency distribution.
///
/// Produced by `LanguageProfileBuilder::build` or decoded by the codec,
/// and never mutated afterwards: detection calls share it read-only
/// for the lifetime of the process.
///
/// # Invariants
/// - Frequencies are in `[0, 1]` and sum to 1.0 across the profile
///   (within floating-point tolerance)
/// - Keys are non-empty lowercase n-grams, no duplicates
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
	/// Short language identifier (e.g. an ONIX 3-letter code).
	language: String,
	/// Normalized n-gram frequencies.
	ngrams: HashMap<String, f64>,
}

impl LanguageProfile {
	/// Creates a profile from already-normalized frequencies.
	pub fn new(language: String, ngrams: HashMap<String, f64>) -> Self {
		Self { language, ngrams }
	}

	/// The language identifier this profile was trained for.
	pub fn language(&self) -> &str {
		&self.language
	}

	/// Read-only view of the normalized frequency mapping.
	pub fn ngrams(&self) -> &HashMap<String, f64> {
		&self.ngrams
	}

	/// The trained frequency of `ngram`, or `0.0` if absent.
	pub fn frequency(&self, ngram: &str) -> f64 {
		self.ngrams.get(ngram).copied().unwrap_or(0.0)
	}

	/// Number of distinct n-grams in the profile.
	pub fn len(&self) -> usize {
		self.ngrams.len()
	}

	/// True when the profile holds no n-grams at all.
	pub fn is_empty(&self) -> bool {
		self.ngrams.is_empty()
	}
}
