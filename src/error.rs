//! Configuration error types shared across the crate.

// self
use crate::{_prelude::*, policy::PolicyParseError};

/// Crate-wide result type alias returning [`ConfigError`] by default.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration failures raised while loading settings or resolving an authority.
///
/// These are deployment errors, not runtime faults: nothing here is transient, so there is
/// no retry surface. Errors propagate to the caller untouched; the crate never logs them.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The policy was explicitly unset, so no resolution branch can be selected.
	#[error("Policy must be set before use.")]
	PolicyUnset,
	/// The external-identity branch requires the caller-supplied user flow endpoint.
	#[error("External user flow endpoint must be set for the EXTERNAL_ID policy.")]
	UserFlowEndpointUnset,
	/// The resolved authority could not be parsed back into a URL.
	#[error("Resolved authority is not a well-formed URL.")]
	InvalidAuthority {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An environment variable held a value its field could not parse.
	#[error("Environment variable `{key}` holds an invalid value.")]
	EnvVar {
		/// Name of the offending variable.
		key: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: BoxError,
	},
	/// A policy tag failed to parse.
	#[error(transparent)]
	Policy(#[from] PolicyParseError),
}
impl ConfigError {
	/// Wraps a field's parse failure for `key` inside [`ConfigError::EnvVar`].
	pub fn env_var(key: &'static str, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::EnvVar { key, source: Box::new(src) }
	}
}
