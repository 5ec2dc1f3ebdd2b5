//! Network configuration types for multi-chain client operations.
//!
//! This module defines the per-chain settings the SDK needs: the RPC
//! endpoint used for reads and submission, and the deployed factory
//! addresses for both contract families. The set of configured chain ids is
//! the supported-chain set; resolving an unknown chain id fails with
//! [`crate::ClientError::UnsupportedChain`].

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Configuration for a single blockchain network.
///
/// # Fields
///
/// * `rpc_url` - The HTTP(S) RPC endpoint for blockchain interaction
/// * `waterfall_module_factory` - Deployed waterfall module factory address
/// * `pass_through_wallet_factory` - Deployed pass-through wallet factory address
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
	pub rpc_url: String,
	pub waterfall_module_factory: Address,
	pub pass_through_wallet_factory: Address,
}

/// Networks configuration mapping chain ids to their configurations.
pub type NetworksConfig = HashMap<u64, ChainConfig>;

/// Helper function to deserialize network configurations from TOML.
///
/// Chain ids arrive as string keys in TOML (TOML tables do not support
/// numeric keys) and are converted to u64 keys for internal use.
///
/// # Errors
///
/// Returns a deserialization error if a chain id key cannot be parsed as a
/// u64 or the underlying network configuration is invalid.
pub fn deserialize_networks<'de, D>(deserializer: D) -> Result<NetworksConfig, D::Error>
where
	D: Deserializer<'de>,
{
	let string_map: HashMap<String, ChainConfig> = HashMap::deserialize(deserializer)?;
	let mut result = HashMap::new();

	for (key, value) in string_map {
		let chain_id = key
			.parse::<u64>()
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain_id '{}': {}", key, e)))?;
		result.insert(chain_id, value);
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use serde::Deserialize;

	#[derive(Deserialize)]
	struct Wrapper {
		#[serde(deserialize_with = "deserialize_networks")]
		networks: NetworksConfig,
	}

	#[test]
	fn test_deserialize_networks_from_toml() {
		let toml_str = r#"
			[networks.1]
			rpc_url = "https://eth.example.com"
			waterfall_module_factory = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
			pass_through_wallet_factory = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"

			[networks.10]
			rpc_url = "https://op.example.com"
			waterfall_module_factory = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
			pass_through_wallet_factory = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"
		"#;

		let wrapper: Wrapper = toml::from_str(toml_str).unwrap();
		assert_eq!(wrapper.networks.len(), 2);
		assert_eq!(
			wrapper.networks[&1].waterfall_module_factory,
			address!("5fbdb2315678afecb367f032d93f642f64180aa3")
		);
		assert_eq!(wrapper.networks[&10].rpc_url, "https://op.example.com");
	}

	#[test]
	fn test_deserialize_networks_rejects_bad_chain_id() {
		let toml_str = r#"
			[networks.mainnet]
			rpc_url = "https://eth.example.com"
			waterfall_module_factory = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
			pass_through_wallet_factory = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"
		"#;

		let result: Result<Wrapper, _> = toml::from_str(toml_str);
		assert!(result.is_err());
	}
}
