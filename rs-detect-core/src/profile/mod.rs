//! Language profile pipeline.
//!
//! A profile is built in four stages:
//! - `extractor` turns raw text into overlapping character n-grams
//! - `builder` accumulates n-gram counts and freezes them into a
//!   normalized `LanguageProfile`
//! - `codec` moves profiles to and from their binary serialized form
//! - `source` discovers and loads every serialized profile at startup

/// Accumulates n-gram counts and produces a frozen `LanguageProfile`.
///
/// Single-use: `build` consumes the builder, so a profile cannot be
/// appended to after it has been frozen.
pub mod builder;

/// Binary serialization of language profiles.
///
/// Gzip-wrapped, big-endian, length-prefixed strings, f32 frequencies.
pub mod codec;

/// Pure text-to-n-gram extraction.
pub mod extractor;

/// The frozen profile entity: language tag + normalized frequencies.
pub mod language_profile;

/// Startup-time discovery and loading of serialized profiles.
pub mod source;
