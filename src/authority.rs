//! Authority resolution.
//!
//! Maps the selected [`Policy`] to the endpoint URL the surrounding authentication flow
//! redirects to or registers with the identity-provider SDK. Resolution is a pure function
//! of the configuration snapshot: it validates the branch's preconditions and formats the
//! URL, nothing else. Errors are returned to the caller and never logged here.

// self
use crate::{_prelude::*, config::ClientConfig, policy::Policy};

const AAD_MULTI_AUTHORITY: &str = "https://login.microsoftonline.com/common/";
const DEFAULT_SCOPE: &str = "openid";
/// Percent-encoded space joining scope and response-type lists inside query values.
const LIST_SEPARATOR: &str = "%20";

impl ClientConfig {
	/// Resolves the authority URL for the selected policy.
	///
	/// Safe to call repeatedly and from multiple threads: the config is only read, and an
	/// unmodified config always resolves to the same string. For the external-identity
	/// policy, `scopes` and `user_flow_endpoint` must be finalized beforehand. Fails with
	/// [`ConfigError::PolicyUnset`] when `policy` is `None` and with
	/// [`ConfigError::UserFlowEndpointUnset`] when the external-identity branch is missing
	/// its endpoint.
	pub fn authority(&self) -> Result<String> {
		let policy = self.policy.ok_or(ConfigError::PolicyUnset)?;

		match policy {
			Policy::AadSingle =>
				Ok(format!("https://login.microsoftonline.com/{}", self.tenant_segment())),
			Policy::AadMulti => Ok(AAD_MULTI_AUTHORITY.into()),
			Policy::ExternalId => self.external_id_authority(),
			Policy::B2cLogin | Policy::B2cProfile | Policy::B2cCustom =>
				Ok(self.b2c_authority(policy)),
		}
	}

	/// Resolves the authority and parses it into a typed [`Url`].
	///
	/// Convenience for callers that hand the authority to an OAuth client expecting a
	/// parsed URL rather than a string.
	pub fn authority_url(&self) -> Result<Url> {
		let authority = self.authority()?;

		Url::parse(&authority).map_err(|source| ConfigError::InvalidAuthority { source })
	}

	fn external_id_authority(&self) -> Result<String> {
		if self.user_flow_endpoint.as_deref().is_none_or(str::is_empty) {
			return Err(ConfigError::UserFlowEndpointUnset);
		}

		let tenant = self.tenant_segment();
		let client_id = self.client_id.as_deref().unwrap_or_default();
		let response_type = self.external_id_response_types.join(LIST_SEPARATOR);
		let scope = if self.scopes.is_empty() {
			DEFAULT_SCOPE.to_owned()
		} else {
			self.scopes.join(LIST_SEPARATOR)
		};
		let prompt = self.external_id_prompt.as_deref().unwrap_or_default();

		Ok(format!(
			"https://{tenant}.ciamlogin.com/{tenant}.onmicrosoft.com/oauth2/v2.0/authorize?client_id={client_id}&response_type={response_type}&scope={scope}&prompt={prompt}"
		))
	}

	fn b2c_authority(&self, policy: Policy) -> String {
		let tenant = self.tenant_segment();
		// An empty override falls back to the policy's own tag.
		let segment =
			self.b2c_policy.as_deref().filter(|p| !p.is_empty()).unwrap_or(policy.as_str());

		format!("https://{tenant}.b2clogin.com/{tenant}.onmicrosoft.com/{segment}")
	}

	// An unset tenant renders as an empty segment; no branch fails on it.
	fn tenant_segment(&self) -> &str {
		self.tenant.as_deref().unwrap_or_default()
	}
}
