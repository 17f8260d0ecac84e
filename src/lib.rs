//! Typed client configuration for Microsoft Entra ID. Derives the authority endpoint for
//! single-tenant, multi-tenant, external-identity, and B2C sign-in policies from one settings
//! struct.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod authority;
pub mod config;
pub mod error;
pub mod policy;

mod _prelude {
	pub use std::{
		fmt::{Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{ConfigError, Result};
}

pub use url;
