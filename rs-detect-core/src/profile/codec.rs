//! Binary serialization of language profiles.
//!
//! Layout (big-endian, gzip-wrapped as a whole):
//! 1. `u16` byte length + UTF-8 bytes: language identifier
//! 2. `i32` entry count `N`
//! 3. `N` × (`u16` byte length + UTF-8 n-gram, `f32` frequency)
//!
//! Frequencies are stored at f32 precision deliberately: ranking
//! fidelity is required, exact probability reproduction is not.
//! The gzip wrapper is a storage optimization; profiles are highly
//! repetitive and compress well.

use std::collections::HashMap;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{DetectError, Result};

use super::language_profile::LanguageProfile;

/// Serializes `profile` into `sink`.
///
/// # Errors
/// Fails if the sink cannot be written to, or if an n-gram or the
/// language tag exceeds the `u16` length prefix.
pub fn write<W: Write>(profile: &LanguageProfile, sink: W) -> Result<()> {
	let mut encoder = GzEncoder::new(sink, Compression::default());

	write_string(&mut encoder, profile.language())?;
	encoder.write_i32::<BigEndian>(profile.len() as i32)?;
	for (ngram, freq) in profile.ngrams() {
		write_string(&mut encoder, ngram)?;
		encoder.write_f32::<BigEndian>(*freq as f32)?;
	}

	encoder.finish()?;
	Ok(())
}

/// Decodes one profile from `source`.
///
/// # Errors
/// Fails with a decode error if the stream is truncated, contains
/// invalid UTF-8, declares a negative entry count, or declares more
/// entries than it holds. The error is scoped to this one profile.
pub fn read<R: Read>(source: R) -> Result<LanguageProfile> {
	let mut decoder = GzDecoder::new(source);

	let language = read_string(&mut decoder, "language tag")?;
	let declared = decoder
		.read_i32::<BigEndian>()
		.map_err(|e| map_read_err(e, "entry count"))?;
	if declared < 0 {
		return Err(DetectError::Corrupt(format!("negative entry count: {declared}")));
	}

	let mut ngrams = HashMap::new();
	for _ in 0..declared {
		let ngram = read_string(&mut decoder, "n-gram")?;
		let freq = decoder
			.read_f32::<BigEndian>()
			.map_err(|e| map_read_err(e, "frequency"))?;
		ngrams.insert(ngram, f64::from(freq));
	}

	// Duplicate keys in the stream would silently shrink the map
	if ngrams.len() != declared as usize {
		return Err(DetectError::CountMismatch {
			declared,
			decoded: ngrams.len(),
		});
	}

	Ok(LanguageProfile::new(language, ngrams))
}

fn write_string<W: Write>(sink: &mut W, value: &str) -> Result<()> {
	let bytes = value.as_bytes();
	let len = u16::try_from(bytes.len())
		.map_err(|_| DetectError::Corrupt(format!("string too long for length prefix: {} bytes", bytes.len())))?;
	sink.write_u16::<BigEndian>(len)?;
	sink.write_all(bytes)?;
	Ok(())
}

fn read_string<R: Read>(source: &mut R, context: &'static str) -> Result<String> {
	let len = source
		.read_u16::<BigEndian>()
		.map_err(|e| map_read_err(e, context))?;
	let mut bytes = vec![0u8; usize::from(len)];
	source
		.read_exact(&mut bytes)
		.map_err(|e| map_read_err(e, context))?;
	String::from_utf8(bytes).map_err(|source| DetectError::InvalidUtf8 { context, source })
}

fn map_read_err(e: std::io::Error, context: &'static str) -> DetectError {
	if e.kind() == std::io::ErrorKind::UnexpectedEof {
		DetectError::Truncated { context }
	} else {
		DetectError::Io(e)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::builder::LanguageProfileBuilder;

	fn sample_profile() -> LanguageProfile {
		let mut builder = LanguageProfileBuilder::new("nob");
		builder.append("dette er en test av språket");
		builder.append("og dette er enda en linje");
		builder.build()
	}

	#[test]
	fn round_trip_preserves_language_and_keys() {
		let profile = sample_profile();

		let mut bytes = Vec::new();
		write(&profile, &mut bytes).unwrap();
		let decoded = read(bytes.as_slice()).unwrap();

		assert_eq!(decoded.language(), profile.language());
		assert_eq!(decoded.len(), profile.len());
		for (ngram, freq) in profile.ngrams() {
			let restored = decoded.frequency(ngram);
			assert!(
				(restored - freq).abs() < 1e-6,
				"{ngram}: {restored} vs {freq}"
			);
		}
	}

	#[test]
	fn output_is_gzip_wrapped() {
		let mut bytes = Vec::new();
		write(&sample_profile(), &mut bytes).unwrap();
		assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
	}

	#[test]
	fn truncated_stream_is_a_decode_error() {
		let mut bytes = Vec::new();
		write(&sample_profile(), &mut bytes).unwrap();

		// Cut the compressed stream; decompression yields a short read
		bytes.truncate(bytes.len() / 2);
		assert!(read(bytes.as_slice()).is_err());
	}

	#[test]
	fn garbage_bytes_are_a_decode_error() {
		let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7];
		assert!(read(bytes.as_slice()).is_err());
	}

	#[test]
	fn empty_profile_round_trips() {
		let profile = LanguageProfileBuilder::new("eng").build();
		let mut bytes = Vec::new();
		write(&profile, &mut bytes).unwrap();
		let decoded = read(bytes.as_slice()).unwrap();
		assert_eq!(decoded.language(), "eng");
		assert!(decoded.is_empty());
	}
}
