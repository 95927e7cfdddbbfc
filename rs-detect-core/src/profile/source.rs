use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::Result;
use crate::io::list_files;

use super::codec;
use super::language_profile::LanguageProfile;

/// Yields zero or more serialized profile byte-streams at startup.
///
/// A source with nothing to offer is not an error: it produces an
/// empty detector, not a failure. Absence of training data is an
/// unusable detector, not a fatal condition.
pub trait ProfileSource {
	/// Opens every available profile resource.
	fn streams(&self) -> Result<Vec<Box<dyn Read>>>;
}

/// Profile source backed by a directory of `.bin` files.
///
/// Enumeration is non-recursive and happens once per `streams` call;
/// the detector loads eagerly at startup and never re-discovers.
pub struct DirectorySource {
	dir: PathBuf,
}

impl DirectorySource {
	/// Creates a source over `<dir>/*.bin`.
	pub fn new<P: AsRef<Path>>(dir: P) -> Self {
		Self {
			dir: dir.as_ref().to_path_buf(),
		}
	}
}

impl ProfileSource for DirectorySource {
	fn streams(&self) -> Result<Vec<Box<dyn Read>>> {
		// A missing directory means zero profiles, not an error
		if !self.dir.is_dir() {
			debug!("Profile directory not found: {}", self.dir.display());
			return Ok(Vec::new());
		}

		let mut streams: Vec<Box<dyn Read>> = Vec::new();
		for path in list_files(&self.dir, "bin")? {
			streams.push(Box::new(File::open(path)?));
		}
		Ok(streams)
	}
}

/// Eagerly decodes every profile the source offers.
///
/// One corrupt profile must not take down the rest: decode failures
/// are logged and skipped, and detection degrades gracefully to the
/// profiles that did load.
pub fn load_profiles(source: &dyn ProfileSource) -> Result<Vec<LanguageProfile>> {
	let mut profiles = Vec::new();

	for stream in source.streams()? {
		match codec::read(stream) {
			Ok(profile) => {
				debug!("Loaded profile: {}", profile.language());
				profiles.push(profile);
			}
			Err(e) => warn!("Skipping unreadable profile: {e}"),
		}
	}

	info!(
		"Profiles: {}",
		profiles
			.iter()
			.map(|p| p.language())
			.collect::<Vec<_>>()
			.join(", ")
	);

	Ok(profiles)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::builder::LanguageProfileBuilder;

	/// In-memory source used to exercise loading without a filesystem.
	struct VecSource {
		blobs: Vec<Vec<u8>>,
	}

	impl ProfileSource for VecSource {
		fn streams(&self) -> Result<Vec<Box<dyn Read>>> {
			Ok(self
				.blobs
				.iter()
				.map(|b| Box::new(std::io::Cursor::new(b.clone())) as Box<dyn Read>)
				.collect())
		}
	}

	fn encoded(language: &str, text: &str) -> Vec<u8> {
		let mut builder = LanguageProfileBuilder::new(language);
		builder.append(text);
		let mut bytes = Vec::new();
		codec::write(&builder.build(), &mut bytes).unwrap();
		bytes
	}

	#[test]
	fn loads_every_offered_profile() {
		let source = VecSource {
			blobs: vec![encoded("eng", "the cat"), encoded("ger", "die katze")],
		};
		let profiles = load_profiles(&source).unwrap();
		assert_eq!(profiles.len(), 2);
		assert_eq!(profiles[0].language(), "eng");
		assert_eq!(profiles[1].language(), "ger");
	}

	#[test]
	fn a_bad_profile_is_skipped_not_fatal() {
		let source = VecSource {
			blobs: vec![vec![1, 2, 3, 4], encoded("eng", "the cat")],
		};
		let profiles = load_profiles(&source).unwrap();
		assert_eq!(profiles.len(), 1);
		assert_eq!(profiles[0].language(), "eng");
	}

	#[test]
	fn zero_streams_is_zero_profiles() {
		let source = VecSource { blobs: Vec::new() };
		assert!(load_profiles(&source).unwrap().is_empty());
	}

	#[test]
	fn missing_directory_is_zero_profiles() {
		let source = DirectorySource::new("/definitely/not/here");
		assert!(load_profiles(&source).unwrap().is_empty());
	}
}
