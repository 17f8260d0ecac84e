//! Client configuration for a Microsoft Entra ID integration.
//!
//! [`ClientConfig`] mirrors the app-registration data handed out by the portal plus the
//! policy parameters steering authority resolution. Values load from a serde settings
//! document or from `ENTRA_*` environment variables; the surrounding authentication flow
//! fills `scopes` and `user_flow_endpoint` before resolving an external-identity
//! authority.

// std
use std::env;
// self
use crate::{_prelude::*, policy::Policy};

/// Client-side settings for one registered application.
///
/// Every field has a usable default, so partial settings documents deserialize cleanly.
/// Resolution reads this struct without mutating it; it is the caller that finalizes
/// `scopes` before an external-identity resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Application (client) identifier from the app registration.
	pub client_id: Option<String>,
	/// Client secret or certificate credential from the app registration.
	pub client_credential: Option<String>,
	/// Directory tenant, either a tenant identifier or a domain label.
	pub tenant: Option<String>,
	/// Selected authentication policy.
	///
	/// Defaults to single-tenant; `None` only when a settings document explicitly nulls
	/// it, in which case resolution refuses to pick a branch.
	pub policy: Option<Policy>,
	/// Response types requested by the external-identity authorization endpoint.
	pub external_id_response_types: Vec<String>,
	/// Prompt hint forwarded to the external-identity authorization endpoint.
	pub external_id_prompt: Option<String>,
	/// Overrides the policy segment for any B2C-family policy.
	pub b2c_policy: Option<String>,
	/// OAuth scopes requested by the surrounding flow.
	///
	/// Owned per instance and empty until the flow populates it; two configs never share
	/// a scope list.
	pub scopes: Vec<String>,
	/// External user flow endpoint computed by the surrounding flow.
	///
	/// This crate never derives it; external-identity resolution only requires it to be
	/// present and non-empty.
	pub user_flow_endpoint: Option<String>,
	/// Prefix prepended to every routed path.
	pub path_prefix: String,
	/// Login route path.
	pub login_path: String,
	/// Token redemption route path.
	pub token_path: String,
	/// Logout route path.
	pub logout_path: String,
	/// Redirect URI override for deployments behind a reverse proxy.
	pub redirect_uri: Option<String>,
	/// Whether the authentication routes appear in generated API docs.
	pub show_in_docs: bool,
	/// Application name reported to the identity provider for telemetry.
	pub app_name: Option<String>,
	/// Application version reported alongside `app_name`.
	pub app_version: Option<String>,
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			client_id: None,
			client_credential: None,
			tenant: None,
			policy: Some(Policy::AadSingle),
			external_id_response_types: vec!["id_token".into(), "token".into()],
			external_id_prompt: Some("login".into()),
			b2c_policy: None,
			scopes: Vec::new(),
			user_flow_endpoint: None,
			path_prefix: String::new(),
			login_path: "/_login_route".into(),
			token_path: "/token".into(),
			logout_path: "/_logout_route".into(),
			redirect_uri: None,
			show_in_docs: false,
			app_name: None,
			app_version: None,
		}
	}
}
impl ClientConfig {
	/// Loads configuration from `ENTRA_*` environment variables on top of the defaults.
	///
	/// Unset variables keep their defaults and empty optional variables count as unset.
	/// `ENTRA_SCOPES` and `ENTRA_EXTERNAL_ID_RESPONSE_TYPES` split on commas, preserving
	/// the listed order. `ENTRA_POLICY` takes a wire tag such as `AAD_MULTI` and
	/// `ENTRA_SHOW_IN_DOCS` takes `true`/`false`.
	pub fn from_env() -> Result<Self> {
		let config = Self::from_lookup(|key| env::var(key).ok())?;

		#[cfg(feature = "tracing")]
		tracing::debug!(
			policy = ?config.policy,
			tenant = ?config.tenant,
			"Loaded client configuration from the environment."
		);

		Ok(config)
	}

	fn from_lookup(get: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
		let mut config = Self::default();

		if let Some(value) = present(get("ENTRA_CLIENT_ID")) {
			config.client_id = Some(value);
		}
		if let Some(value) = present(get("ENTRA_CLIENT_CREDENTIAL")) {
			config.client_credential = Some(value);
		}
		if let Some(value) = present(get("ENTRA_TENANT")) {
			config.tenant = Some(value);
		}
		if let Some(value) = present(get("ENTRA_POLICY")) {
			config.policy =
				Some(value.parse().map_err(|e| ConfigError::env_var("ENTRA_POLICY", e))?);
		}
		if let Some(value) = present(get("ENTRA_EXTERNAL_ID_RESPONSE_TYPES")) {
			config.external_id_response_types = split_list(&value);
		}
		if let Some(value) = present(get("ENTRA_EXTERNAL_ID_PROMPT")) {
			config.external_id_prompt = Some(value);
		}
		if let Some(value) = present(get("ENTRA_B2C_POLICY")) {
			config.b2c_policy = Some(value);
		}
		if let Some(value) = present(get("ENTRA_SCOPES")) {
			config.scopes = split_list(&value);
		}
		if let Some(value) = present(get("ENTRA_USER_FLOW_ENDPOINT")) {
			config.user_flow_endpoint = Some(value);
		}
		if let Some(value) = get("ENTRA_PATH_PREFIX") {
			config.path_prefix = value;
		}
		if let Some(value) = present(get("ENTRA_LOGIN_PATH")) {
			config.login_path = value;
		}
		if let Some(value) = present(get("ENTRA_TOKEN_PATH")) {
			config.token_path = value;
		}
		if let Some(value) = present(get("ENTRA_LOGOUT_PATH")) {
			config.logout_path = value;
		}
		if let Some(value) = present(get("ENTRA_REDIRECT_URI")) {
			config.redirect_uri = Some(value);
		}
		if let Some(value) = present(get("ENTRA_SHOW_IN_DOCS")) {
			config.show_in_docs =
				value.parse().map_err(|e| ConfigError::env_var("ENTRA_SHOW_IN_DOCS", e))?;
		}
		if let Some(value) = present(get("ENTRA_APP_NAME")) {
			config.app_name = Some(value);
		}
		if let Some(value) = present(get("ENTRA_APP_VERSION")) {
			config.app_version = Some(value);
		}

		Ok(config)
	}

	/// Sets the application (client) identifier.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the client credential.
	pub fn with_client_credential(mut self, credential: impl Into<String>) -> Self {
		self.client_credential = Some(credential.into());

		self
	}

	/// Sets the directory tenant.
	pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
		self.tenant = Some(tenant.into());

		self
	}

	/// Selects the authentication policy.
	pub fn with_policy(mut self, policy: Policy) -> Self {
		self.policy = Some(policy);

		self
	}

	/// Overrides the B2C policy segment.
	pub fn with_b2c_policy(mut self, b2c_policy: impl Into<String>) -> Self {
		self.b2c_policy = Some(b2c_policy.into());

		self
	}

	/// Replaces the requested scopes, preserving the given order.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Sets the externally computed user flow endpoint.
	pub fn with_user_flow_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.user_flow_endpoint = Some(endpoint.into());

		self
	}

	/// Full login route path (`path_prefix` + `login_path`).
	pub fn login_full_path(&self) -> String {
		format!("{}{}", self.path_prefix, self.login_path)
	}

	/// Full token route path (`path_prefix` + `token_path`).
	pub fn token_full_path(&self) -> String {
		format!("{}{}", self.path_prefix, self.token_path)
	}

	/// Full logout route path (`path_prefix` + `logout_path`).
	pub fn logout_full_path(&self) -> String {
		format!("{}{}", self.path_prefix, self.logout_path)
	}
}

/// Treats empty environment values as unset.
fn present(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
	value.split(',').map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned).collect()
}
