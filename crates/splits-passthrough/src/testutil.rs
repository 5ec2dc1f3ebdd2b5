//! Shared fixtures for the pass-through wallet tests.

use alloy_primitives::{address, Address};
use splits_types::{ChainConfig, SplitsConfig};

pub(crate) const FACTORY: Address = address!("2222222222222222222222222222222222222222");
pub(crate) const WALLET: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub(crate) const OWNER: Address = address!("9999999999999999999999999999999999999999");

/// Configuration with a single supported chain (id 1).
pub(crate) fn test_config() -> SplitsConfig {
	let mut networks = std::collections::HashMap::new();
	networks.insert(
		1,
		ChainConfig {
			rpc_url: "http://localhost:8545".to_string(),
			waterfall_module_factory: address!("1111111111111111111111111111111111111111"),
			pass_through_wallet_factory: FACTORY,
		},
	);
	SplitsConfig {
		networks,
		default_chain_id: 1,
	}
}
