//! Statistical language identification library.
//!
//! This crate identifies the natural language of short, noisy text by
//! combining two independent signals:
//! - Character n-gram frequency profiles trained per language
//! - Curated per-language stopword and diacritic-hint tables
//!
//! Profiles are built offline from raw corpora, stored in a compact
//! gzip-wrapped binary format, and loaded once at startup. Detection
//! calls are pure in-memory computations and can run concurrently
//! without coordination.

/// Language profiles: extraction, building, binary codec, loading.
///
/// Everything needed to produce a trained `LanguageProfile` from raw
/// text and to move it to and from its serialized form.
pub mod profile;

/// The three detectors and the common `Detector` capability.
///
/// N-gram profile matching, stopword/char-hint matching, and the
/// combined detector blending both signals.
pub mod detector;

/// Crate error type and `Result` alias.
mod error;

/// Filesystem helpers (directory listing).
///
/// Not exposed
pub(crate) mod io;

pub use error::{DetectError, Result};
