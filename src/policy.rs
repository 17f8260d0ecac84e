//! Identity policy tags and their stable wire identifiers.

// self
use crate::_prelude::*;

/// Error returned when a policy tag fails to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Unknown policy tag: {tag}.")]
pub struct PolicyParseError {
	/// The tag that failed to parse.
	pub tag: String,
}

/// Supported authentication policies.
///
/// The set is closed: each variant maps to exactly one authority shape in
/// [`ClientConfig::authority`](crate::config::ClientConfig::authority), and a variant added
/// without a matching branch there fails to compile. Tags are stable across serialization
/// round-trips; the B2C tags double as the policy segment embedded into B2C authority URLs,
/// unless [`b2c_policy`](crate::config::ClientConfig::b2c_policy) overrides them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
	/// Sign in users of one specific organization.
	#[default]
	#[serde(rename = "AAD_SINGLE")]
	AadSingle,
	/// Sign in users with work, school, or personal Microsoft accounts.
	#[serde(rename = "AAD_MULTI")]
	AadMulti,
	/// Sign in external users through a CIAM user flow.
	#[serde(rename = "EXTERNAL_ID")]
	ExternalId,
	/// Predefined B2C sign-in policy.
	#[serde(rename = "B2C_1_LOGIN")]
	B2cLogin,
	/// Predefined B2C profile-editing policy.
	#[serde(rename = "B2C_1_PROFILE")]
	B2cProfile,
	/// Custom B2C policy slot; pair with a `b2c_policy` override when the deployed tag
	/// differs.
	#[serde(rename = "B2C_1A_LOGIN")]
	B2cCustom,
}
impl Policy {
	/// Stable string tag identifying this policy.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AadSingle => "AAD_SINGLE",
			Self::AadMulti => "AAD_MULTI",
			Self::ExternalId => "EXTERNAL_ID",
			Self::B2cLogin => "B2C_1_LOGIN",
			Self::B2cProfile => "B2C_1_PROFILE",
			Self::B2cCustom => "B2C_1A_LOGIN",
		}
	}
}
impl Display for Policy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Policy {
	type Err = PolicyParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"AAD_SINGLE" => Ok(Self::AadSingle),
			"AAD_MULTI" => Ok(Self::AadMulti),
			"EXTERNAL_ID" => Ok(Self::ExternalId),
			"B2C_1_LOGIN" => Ok(Self::B2cLogin),
			"B2C_1_PROFILE" => Ok(Self::B2cProfile),
			"B2C_1A_LOGIN" => Ok(Self::B2cCustom),
			_ => Err(PolicyParseError { tag: s.to_owned() }),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const ALL: [Policy; 6] = [
		Policy::AadSingle,
		Policy::AadMulti,
		Policy::ExternalId,
		Policy::B2cLogin,
		Policy::B2cProfile,
		Policy::B2cCustom,
	];

	#[test]
	fn tags_round_trip_through_display_and_from_str() {
		for policy in ALL {
			let parsed = policy
				.to_string()
				.parse::<Policy>()
				.expect("Every displayed tag should parse back.");

			assert_eq!(parsed, policy);
		}
	}

	#[test]
	fn tags_round_trip_through_serde() {
		for policy in ALL {
			let json =
				serde_json::to_string(&policy).expect("Policy tags should serialize to strings.");
			let parsed: Policy =
				serde_json::from_str(&json).expect("Serialized tags should deserialize back.");

			assert_eq!(json, format!("\"{}\"", policy.as_str()));
			assert_eq!(parsed, policy);
		}
	}

	#[test]
	fn unknown_tags_are_rejected() {
		let err = "B2C_LOGIN".parse::<Policy>().expect_err("Variant names are not wire tags.");

		assert_eq!(err, PolicyParseError { tag: "B2C_LOGIN".into() });
		assert!("aad_single".parse::<Policy>().is_err(), "Tags are case-sensitive.");
		assert!(serde_json::from_str::<Policy>("\"COMMON\"").is_err());
	}

	#[test]
	fn default_policy_is_single_tenant() {
		assert_eq!(Policy::default(), Policy::AadSingle);
	}
}
