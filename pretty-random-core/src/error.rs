use std::fmt;

/// Errors produced by the pretty-random library.
///
/// Both variants are caller-input errors, not transient failures:
/// they are surfaced immediately and never retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrettyRandomError {
	/// Charset configuration enables zero symbol classes.
	EmptyCharset,
	/// A `generate` argument violates its constraint.
	/// The message names the violated constraint.
	InvalidArgument(String),
}

impl fmt::Display for PrettyRandomError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PrettyRandomError::EmptyCharset => {
				write!(f, "At least one symbol class has to be enabled")
			}
			PrettyRandomError::InvalidArgument(reason) => {
				write!(f, "Invalid argument: {}", reason)
			}
		}
	}
}

impl std::error::Error for PrettyRandomError {}
