use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Hard failures only occur at the codec boundary (corrupt bytes) and
/// are scoped to the single profile being read. Empty or unscorable
/// input is never an error; detectors represent it as empty results.
#[derive(Debug, Error)]
pub enum DetectError {
	/// An error originating from I/O operations.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The profile stream ended before the declared data was read.
	#[error("Profile stream truncated while reading {context}")]
	Truncated { context: &'static str },

	/// The declared entry count does not match the decoded entries.
	#[error("Entry count mismatch: declared {declared}, decoded {decoded}")]
	CountMismatch { declared: i32, decoded: usize },

	/// A length-prefixed string did not contain valid UTF-8.
	#[error("Invalid UTF-8 in {context}")]
	InvalidUtf8 {
		context: &'static str,
		#[source]
		source: std::string::FromUtf8Error,
	},

	/// The profile data is structurally invalid.
	#[error("Corrupt profile data: {0}")]
	Corrupt(String),

	/// Two builders for different languages were merged.
	#[error("Language mismatch on merge: {left} vs {right}")]
	LanguageMismatch { left: String, right: String },
}

/// A convenience `Result` type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, DetectError>;
