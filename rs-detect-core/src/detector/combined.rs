use std::collections::HashMap;

use super::{DetectionResult, Detector, tokenize};

/// Inputs shorter than this word count trust stopword evidence alone.
const MIN_WORDS_FOR_NGRAMS: usize = 4;

/// Blends an n-gram signal and a stopword signal into one ranking.
///
/// Composes any two `Detector` capabilities rather than concrete
/// types; in practice an `NgramDetector` and a `StopwordDetector`.
///
/// # Adaptive gating
/// N-gram statistics are unreliable on very short inputs. When the
/// stopword detector already found evidence and the input has fewer
/// than four words, the n-gram signal is suppressed entirely for that
/// call; otherwise both signals participate.
#[derive(Debug)]
pub struct CombinedDetector<N: Detector, S: Detector> {
	ngram: N,
	stopword: S,
}

impl<N: Detector, S: Detector> CombinedDetector<N, S> {
	pub fn new(ngram: N, stopword: S) -> Self {
		Self { ngram, stopword }
	}

	/// Ranks languages with caller-tuned blend weights.
	///
	/// # Behavior
	/// - Runs both detectors independently; both empty means empty.
	/// - Each eligible detector's scores are divided by that
	///   detector's own maximum, so its top entry becomes 1.0; an
	///   empty or all-zero signal is skipped entirely.
	/// - Per language, the blended score is `ngram_weight` times the
	///   normalized n-gram value plus `stopword_weight` times the
	///   normalized stopword value; a language present in only one
	///   signal keeps that single weighted contribution, it is not
	///   penalized for absence from the other.
	pub fn detect_all_weighted(
		&self,
		text: &str,
		ngram_weight: f64,
		stopword_weight: f64,
	) -> Vec<DetectionResult> {
		let ngram_results = self.ngram.detect_all(text);
		let stopword_results = self.stopword.detect_all(text);

		if ngram_results.is_empty() && stopword_results.is_empty() {
			return Vec::new();
		}

		let word_count = tokenize(text).len();
		let use_ngrams = stopword_results.is_empty() || word_count >= MIN_WORDS_FOR_NGRAMS;

		let ngram_norm = if use_ngrams {
			normalize(&ngram_results)
		} else {
			HashMap::new()
		};
		let stopword_norm = normalize(&stopword_results);

		// Languages in first-appearance order keep the output stable
		let mut order: Vec<&str> = Vec::new();
		for result in ngram_results.iter().chain(stopword_results.iter()) {
			if !order.contains(&result.language.as_str()) {
				order.push(&result.language);
			}
		}

		let mut results: Vec<DetectionResult> = order
			.into_iter()
			.filter_map(|language| {
				let blended = match (ngram_norm.get(language), stopword_norm.get(language)) {
					(Some(n), Some(s)) => n * ngram_weight + s * stopword_weight,
					(Some(n), None) => n * ngram_weight,
					(None, Some(s)) => s * stopword_weight,
					(None, None) => return None,
				};
				Some(DetectionResult {
					language: language.to_owned(),
					score: blended,
				})
			})
			.collect();

		results.sort_by(|a, b| b.score.total_cmp(&a.score));
		results
	}
}

/// Divides every score by the set's maximum; empty or all-zero sets
/// contribute nothing at all.
fn normalize(results: &[DetectionResult]) -> HashMap<&str, f64> {
	let max = results.iter().map(|r| r.score).fold(0.0, f64::max);
	if max <= 0.0 {
		return HashMap::new();
	}
	results
		.iter()
		.map(|r| (r.language.as_str(), r.score / max))
		.collect()
}

impl<N: Detector, S: Detector> Detector for CombinedDetector<N, S> {
	/// Equal-weight blend of both signals.
	fn detect_all(&self, text: &str) -> Vec<DetectionResult> {
		self.detect_all_weighted(text, 0.5, 0.5)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Scripted detector returning fixed rankings per input.
	struct Scripted {
		results: Vec<DetectionResult>,
	}

	impl Scripted {
		fn new(entries: &[(&str, f64)]) -> Self {
			Self {
				results: entries
					.iter()
					.map(|(language, score)| DetectionResult {
						language: (*language).to_owned(),
						score: *score,
					})
					.collect(),
			}
		}

		fn empty() -> Self {
			Self { results: Vec::new() }
		}
	}

	impl Detector for Scripted {
		fn detect_all(&self, _text: &str) -> Vec<DetectionResult> {
			self.results.clone()
		}
	}

	#[test]
	fn both_empty_is_empty() {
		let combined = CombinedDetector::new(Scripted::empty(), Scripted::empty());
		assert!(combined.detect_all("anything at all here").is_empty());
		assert_eq!(combined.detect("anything at all here"), None);
	}

	#[test]
	fn short_input_with_stopword_evidence_suppresses_ngrams() {
		let combined = CombinedDetector::new(
			Scripted::new(&[("eng", 9.0)]),
			Scripted::new(&[("nob", 2.0), ("dan", 1.0)]),
		);

		// Two words: the n-gram signal must not participate
		let results = combined.detect_all("dette er");
		assert_eq!(results.len(), 2);
		assert_eq!(results[0].language, "nob");
		assert!((results[0].score - 0.5).abs() < 1e-12);
		assert!((results[1].score - 0.25).abs() < 1e-12);
	}

	#[test]
	fn long_input_lets_both_signals_contribute() {
		let combined = CombinedDetector::new(
			Scripted::new(&[("eng", 9.0)]),
			Scripted::new(&[("nob", 2.0)]),
		);

		let results =
			combined.detect_all("this input has clearly more than four words in it");
		let languages: Vec<&str> = results.iter().map(|r| r.language.as_str()).collect();
		assert!(languages.contains(&"eng"));
		assert!(languages.contains(&"nob"));
	}

	#[test]
	fn empty_stopword_signal_keeps_ngrams_on_short_input() {
		let combined =
			CombinedDetector::new(Scripted::new(&[("eng", 9.0)]), Scripted::empty());

		let results = combined.detect_all("so short");
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].language, "eng");
		assert!((results[0].score - 0.5).abs() < 1e-12);
	}

	#[test]
	fn agreeing_signals_outrank_single_signals() {
		let combined = CombinedDetector::new(
			Scripted::new(&[("nob", 5.0), ("eng", 4.0)]),
			Scripted::new(&[("nob", 3.0)]),
		);

		let results =
			combined.detect_all("enough words here to let both signals participate");
		assert_eq!(results[0].language, "nob");
		// 1.0 * 0.5 + 1.0 * 0.5 beats 0.8 * 0.5
		assert!((results[0].score - 1.0).abs() < 1e-12);
	}

	#[test]
	fn custom_weights_shift_the_blend() {
		let combined = CombinedDetector::new(
			Scripted::new(&[("eng", 4.0)]),
			Scripted::new(&[("nob", 3.0)]),
		);

		let text = "enough words here to let both signals participate";
		let ngram_heavy = combined.detect_all_weighted(text, 0.9, 0.1);
		assert_eq!(ngram_heavy[0].language, "eng");

		let stopword_heavy = combined.detect_all_weighted(text, 0.1, 0.9);
		assert_eq!(stopword_heavy[0].language, "nob");
	}
}
