//! Client configuration loading.
//!
//! Supports loading the SDK configuration from TOML and validates that all
//! referenced values are consistent before any client is constructed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::networks::{deserialize_networks, NetworksConfig};
use crate::ClientError;

/// Top-level configuration for the splits clients.
///
/// One configuration is shared by every client instance; clients copy what
/// they need at construction time and hold no reference back to the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitsConfig {
	/// Network configurations keyed by chain id.
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: NetworksConfig,
	/// Chain used when an operation does not pass an explicit chain id.
	pub default_chain_id: u64,
}

impl SplitsConfig {
	/// Creates a configuration from already-built parts, validating it.
	pub fn new(networks: NetworksConfig, default_chain_id: u64) -> Result<Self, ClientError> {
		let config = Self {
			networks,
			default_chain_id,
		};
		config.validate()?;
		Ok(config)
	}

	/// Loads and validates a configuration from a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClientError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Parses and validates a configuration from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self, ClientError> {
		let config: SplitsConfig = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks internal consistency of the configuration.
	fn validate(&self) -> Result<(), ClientError> {
		if self.networks.is_empty() {
			return Err(ClientError::Config(
				"at least one network must be configured".to_string(),
			));
		}
		if !self.networks.contains_key(&self.default_chain_id) {
			return Err(ClientError::Config(format!(
				"default_chain_id {} has no network configuration",
				self.default_chain_id
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	const SAMPLE: &str = r#"
		default_chain_id = 1

		[networks.1]
		rpc_url = "https://eth.example.com"
		waterfall_module_factory = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
		pass_through_wallet_factory = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"
	"#;

	#[test]
	fn test_from_toml_str() {
		let config = SplitsConfig::from_toml_str(SAMPLE).unwrap();
		assert_eq!(config.default_chain_id, 1);
		assert_eq!(
			config.networks[&1].pass_through_wallet_factory,
			address!("e7f1725e7734ce288f8367e1bb143e90bb3f0512")
		);
	}

	#[test]
	fn test_rejects_unknown_default_chain() {
		let bad = SAMPLE.replace("default_chain_id = 1", "default_chain_id = 137");
		let result = SplitsConfig::from_toml_str(&bad);
		assert!(matches!(result, Err(ClientError::Config(_))));
	}

	#[test]
	fn test_rejects_empty_networks() {
		let result = SplitsConfig::new(NetworksConfig::new(), 1);
		assert!(matches!(result, Err(ClientError::Config(_))));
	}
}
