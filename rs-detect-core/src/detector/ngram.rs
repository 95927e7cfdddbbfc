use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::error::Result;
use crate::profile::extractor::{DEFAULT_NGRAM_RANGE, extract};
use crate::profile::language_profile::LanguageProfile;
use crate::profile::source::{ProfileSource, load_profiles};

use super::{DetectionResult, Detector};

/// Scores input text against all loaded profiles with an IDF-weighted
/// dot product.
///
/// # Responsibilities
/// - Own the loaded profiles read-only for the process lifetime
/// - Compute the per-n-gram IDF table once, at construction
/// - Rank languages deterministically for any input
///
/// An n-gram present in every profile has no discriminative power:
/// its IDF weight is 0 and it cannot affect any score.
#[derive(Debug)]
pub struct NgramDetector {
	profiles: Vec<LanguageProfile>,
	idf: HashMap<String, f64>,
	n_range: RangeInclusive<usize>,
}

impl NgramDetector {
	/// Creates a detector over an already-loaded profile set.
	///
	/// The IDF table is derived here, once; nothing is recomputed or
	/// mutated during detection. An empty profile set is valid and
	/// yields a detector that always returns empty results.
	pub fn new(profiles: Vec<LanguageProfile>) -> Self {
		let idf = compute_idf(&profiles);
		Self {
			profiles,
			idf,
			n_range: DEFAULT_NGRAM_RANGE,
		}
	}

	/// Creates a detector by eagerly loading every profile the source
	/// offers.
	///
	/// # Errors
	/// Fails only if the source itself cannot enumerate its resources;
	/// individual corrupt profiles are skipped by the loader.
	pub fn from_source(source: &dyn ProfileSource) -> Result<Self> {
		Ok(Self::new(load_profiles(source)?))
	}

	/// The languages this detector can recognize, in load order.
	pub fn languages(&self) -> Vec<&str> {
		self.profiles.iter().map(|p| p.language()).collect()
	}
}

/// IDF weight per n-gram: `ln(total_profiles / document_frequency)`.
fn compute_idf(profiles: &[LanguageProfile]) -> HashMap<String, f64> {
	let total = profiles.len() as f64;
	let mut document_frequency: HashMap<&str, usize> = HashMap::new();

	for profile in profiles {
		for ngram in profile.ngrams().keys() {
			*document_frequency.entry(ngram).or_insert(0) += 1;
		}
	}

	document_frequency
		.into_iter()
		.map(|(ngram, df)| {
			let weight = if df >= profiles.len() {
				0.0
			} else {
				(total / df as f64).ln()
			};
			(ngram.to_owned(), weight)
		})
		.collect()
}

impl Detector for NgramDetector {
	fn detect_all(&self, text: &str) -> Vec<DetectionResult> {
		let ngrams = extract(text, self.n_range.clone());
		if ngrams.is_empty() {
			return Vec::new();
		}

		// Input distribution mirrors the profile representation so the
		// two are comparable. First-occurrence order keeps the float
		// summation order, and with it the output, deterministic.
		let mut order: Vec<&str> = Vec::new();
		let mut counts: HashMap<&str, u64> = HashMap::new();
		for ngram in &ngrams {
			let count = counts.entry(ngram.as_str()).or_insert(0);
			if *count == 0 {
				order.push(ngram);
			}
			*count += 1;
		}
		let total = ngrams.len() as f64;

		let mut results: Vec<DetectionResult> = self
			.profiles
			.iter()
			.filter_map(|profile| {
				let score: f64 = order
					.iter()
					.map(|ngram| {
						let input_freq = counts[ngram] as f64 / total;
						let idf = self.idf.get(*ngram).copied().unwrap_or(0.0);
						input_freq * profile.frequency(ngram) * idf
					})
					.sum();

				// No shared evidence with this profile at all
				if score > 0.0 {
					Some(DetectionResult {
						language: profile.language().to_owned(),
						score,
					})
				} else {
					None
				}
			})
			.collect();

		results.sort_by(|a, b| b.score.total_cmp(&a.score));
		results
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::builder::LanguageProfileBuilder;

	fn profile(language: &str, lines: &[&str]) -> LanguageProfile {
		let mut builder = LanguageProfileBuilder::new(language);
		for line in lines {
			builder.append(line);
		}
		builder.build()
	}

	fn sample_detector() -> NgramDetector {
		NgramDetector::new(vec![
			profile(
				"eng",
				&[
					"the quick brown fox jumps over the lazy dog",
					"this is the house that jack built",
					"where there is a will there is a way",
				],
			),
			profile(
				"ger",
				&[
					"der schnelle braune fuchs springt über den faulen hund",
					"das ist das haus das jakob gebaut hat",
					"wo ein wille ist ist auch ein weg",
				],
			),
		])
	}

	#[test]
	fn recognizes_the_closer_profile() {
		let detector = sample_detector();
		assert_eq!(detector.detect("the fox jumps"), Some("eng".to_owned()));
		assert_eq!(detector.detect("der faule hund"), Some("ger".to_owned()));
	}

	#[test]
	fn empty_input_yields_empty_results() {
		let detector = sample_detector();
		assert!(detector.detect_all("").is_empty());
		assert!(detector.detect_all("12345 !!!").is_empty());
		assert_eq!(detector.detect(""), None);
	}

	#[test]
	fn no_profiles_yields_empty_results() {
		let detector = NgramDetector::new(Vec::new());
		assert!(detector.detect_all("the quick brown fox").is_empty());
		assert_eq!(detector.detect("the quick brown fox"), None);
	}

	#[test]
	fn scoring_is_deterministic() {
		let detector = sample_detector();
		let text = "the quick brown fox is over there";
		let first = detector.detect_all(text);
		let second = detector.detect_all(text);
		assert_eq!(first, second);
	}

	#[test]
	fn omnipresent_ngrams_carry_no_signal() {
		// Both profiles trained on the same text: every n-gram has
		// document frequency == profile count, so every IDF weight is
		// 0 and no language can accumulate evidence.
		let detector = NgramDetector::new(vec![
			profile("aaa", &["identical training text"]),
			profile("bbb", &["identical training text"]),
		]);
		assert!(detector.detect_all("identical training text").is_empty());
	}

	#[test]
	fn unknown_ngrams_contribute_nothing() {
		let detector = sample_detector();
		let with_noise = detector.detect_all("the fox xyzzyq");
		let clean = detector.detect_all("the fox");
		assert_eq!(
			with_noise.first().map(|r| r.language.as_str()),
			clean.first().map(|r| r.language.as_str())
		);
	}
}
