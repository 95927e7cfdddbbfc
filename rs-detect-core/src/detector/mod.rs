//! Language detectors.
//!
//! Three implementations of one capability:
//! - `ngram`: IDF-weighted dot product against trained profiles
//! - `stopwords`: stopword and diacritic-hint evidence with its own
//!   IDF weighting
//! - `combined`: max-normalizes and blends the two signals with an
//!   adaptive weight
//!
//! All detectors are immutable after construction; detection calls
//! only read shared state and may run concurrently without locks.

/// Blends an n-gram and a stopword detector into one ranking.
pub mod combined;

/// N-gram profile matching against loaded language profiles.
pub mod ngram;

/// Stopword and diacritic-character-hint matching.
pub mod stopwords;

/// Outcome of scoring one language against one input.
///
/// The score is a relative ranking signal, not a probability: it is
/// comparable across languages within a single call, but not across
/// calls or detector types without normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
	pub language: String,
	pub score: f64,
}

/// Common capability of all detectors: rank languages for a text.
pub trait Detector {
	/// Scores the input against every known language.
	///
	/// Returns the full ranking, best first. Empty when there is no
	/// evidence at all; unscorable input is never an error.
	fn detect_all(&self, text: &str) -> Vec<DetectionResult>;

	/// The most likely language, or `None` when nothing matched.
	fn detect(&self, text: &str) -> Option<String> {
		self.detect_all(text).into_iter().next().map(|r| r.language)
	}
}

/// Splits on non-letter runs, lowercases, drops empty tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
	text.split(|c: char| !c.is_alphabetic())
		.filter(|word| !word.is_empty())
		.map(str::to_lowercase)
		.collect()
}
