// self
use entra_authority::{config::ClientConfig, error::ConfigError, policy::Policy};

#[test]
fn empty_document_deserializes_to_the_defaults() {
	let config: ClientConfig =
		serde_json::from_str("{}").expect("An empty document should deserialize.");

	assert_eq!(config, ClientConfig::default());
}

#[test]
fn partial_documents_keep_the_remaining_defaults() {
	let config: ClientConfig =
		serde_json::from_str(r#"{ "tenant": "contoso", "policy": "B2C_1_LOGIN" }"#)
			.expect("A partial document should deserialize.");

	assert_eq!(config.tenant.as_deref(), Some("contoso"));
	assert_eq!(config.policy, Some(Policy::B2cLogin));
	assert_eq!(config.external_id_response_types, vec!["id_token", "token"]);
	assert_eq!(config.login_path, "/_login_route");
}

#[test]
fn explicit_null_policy_deserializes_as_unset() {
	let config: ClientConfig = serde_json::from_str(r#"{ "policy": null }"#)
		.expect("A nulled policy should deserialize.");

	assert_eq!(config.policy, None);

	let err = config.authority().expect_err("An unset policy must not resolve.");

	assert!(matches!(err, ConfigError::PolicyUnset));
}

#[test]
fn settings_round_trip_preserves_every_field() {
	let config = ClientConfig::default()
		.with_client_id("client-1")
		.with_client_credential("secret")
		.with_tenant("contoso")
		.with_policy(Policy::ExternalId)
		.with_b2c_policy("custom_flow")
		.with_scopes(["openid", "profile"])
		.with_user_flow_endpoint("https://contoso.ciamlogin.com/contoso.onmicrosoft.com/signup");
	let json = serde_json::to_string(&config).expect("The config should serialize.");
	let parsed: ClientConfig =
		serde_json::from_str(&json).expect("The serialized config should deserialize back.");

	assert_eq!(parsed, config);
}

#[test]
fn unknown_policy_tags_fail_deserialization() {
	assert!(serde_json::from_str::<ClientConfig>(r#"{ "policy": "B2C_LOGIN" }"#).is_err());
}
