//! Shared fixtures for the waterfall client tests.

use alloy_primitives::{address, Address, U256};
use async_trait::async_trait;
use splits_metadata::MetadataInterface;
use splits_types::{ChainConfig, ClientError, SplitsConfig, Tranche, WaterfallMetadata};

pub(crate) const FACTORY: Address = address!("1111111111111111111111111111111111111111");
pub(crate) const MODULE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub(crate) const TOKEN: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

/// Configuration with a single supported chain (id 1).
pub(crate) fn test_config() -> SplitsConfig {
	let mut networks = std::collections::HashMap::new();
	networks.insert(
		1,
		ChainConfig {
			rpc_url: "http://localhost:8545".to_string(),
			waterfall_module_factory: FACTORY,
			pass_through_wallet_factory: address!("2222222222222222222222222222222222222222"),
		},
	);
	SplitsConfig {
		networks,
		default_chain_id: 1,
	}
}

/// Metadata collaborator serving one fixed module configuration.
pub(crate) struct StaticMetadata {
	metadata: WaterfallMetadata,
}

impl StaticMetadata {
	pub(crate) fn new(metadata: WaterfallMetadata) -> Self {
		Self { metadata }
	}
}

impl Default for StaticMetadata {
	fn default() -> Self {
		Self::new(WaterfallMetadata {
			token: TOKEN,
			non_waterfall_recipient: None,
			tranches: vec![
				Tranche {
					recipient: address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
					threshold: U256::from(100),
				},
				Tranche {
					recipient: address!("cccccccccccccccccccccccccccccccccccccccc"),
					threshold: U256::from(200),
				},
			],
		})
	}
}

#[async_trait]
impl MetadataInterface for StaticMetadata {
	async fn waterfall_metadata(
		&self,
		_chain_id: u64,
		_module: Address,
	) -> Result<WaterfallMetadata, ClientError> {
		Ok(self.metadata.clone())
	}
}
