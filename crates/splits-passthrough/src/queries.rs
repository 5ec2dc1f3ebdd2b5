//! Read-only pass-through wallet accessors.

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use splits_executor::ChainInterface;
use splits_types::{validate_address, ClientError, NetworksConfig, SplitsConfig};
use std::sync::Arc;

use crate::contracts::IPassThroughWallet;

/// Read-only query facade for pass-through wallets.
pub struct PassThroughQueries {
	chain: Arc<dyn ChainInterface>,
	networks: NetworksConfig,
	default_chain_id: u64,
}

impl PassThroughQueries {
	/// Creates a query facade over the given transport.
	pub fn new(chain: Arc<dyn ChainInterface>, config: &SplitsConfig) -> Self {
		Self {
			chain,
			networks: config.networks.clone(),
			default_chain_id: config.default_chain_id,
		}
	}

	fn resolve_chain_id(&self, chain_id: Option<u64>) -> Result<u64, ClientError> {
		let chain_id = chain_id.unwrap_or(self.default_chain_id);
		if !self.networks.contains_key(&chain_id) {
			return Err(ClientError::UnsupportedChain(chain_id));
		}
		Ok(chain_id)
	}

	async fn read<C: SolCall>(
		&self,
		wallet: &str,
		chain_id: Option<u64>,
		call: C,
	) -> Result<C::Return, ClientError> {
		let wallet = validate_address(wallet)?;
		let chain_id = self.resolve_chain_id(chain_id)?;

		let ret = self
			.chain
			.call(chain_id, wallet, call.abi_encode().into())
			.await?;
		C::abi_decode_returns(&ret, true)
			.map_err(|e| ClientError::Network(format!("Failed to decode contract read: {e}")))
	}

	/// The wallet's owner.
	pub async fn owner(&self, wallet: &str, chain_id: Option<u64>) -> Result<Address, ClientError> {
		Ok(self
			.read(wallet, chain_id, IPassThroughWallet::ownerCall {})
			.await?
			._0)
	}

	/// Whether the wallet is paused.
	pub async fn paused(&self, wallet: &str, chain_id: Option<u64>) -> Result<bool, ClientError> {
		Ok(self
			.read(wallet, chain_id, IPassThroughWallet::pausedCall {})
			.await?
			._0)
	}

	/// The wallet's pass-through target.
	pub async fn pass_through(
		&self,
		wallet: &str,
		chain_id: Option<u64>,
	) -> Result<Address, ClientError> {
		Ok(self
			.read(wallet, chain_id, IPassThroughWallet::passThroughCall {})
			.await?
			._0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::{test_config, OWNER, WALLET};
	use alloy_sol_types::SolValue;
	use splits_executor::implementations::mock::MockChain;

	#[tokio::test]
	async fn test_owner() {
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			WALLET,
			IPassThroughWallet::ownerCall::SELECTOR,
			OWNER.abi_encode().into(),
		));
		let queries = PassThroughQueries::new(chain, &test_config());

		let owner = queries.owner(&WALLET.to_string(), None).await.unwrap();
		assert_eq!(owner, OWNER);
	}

	#[tokio::test]
	async fn test_paused() {
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			WALLET,
			IPassThroughWallet::pausedCall::SELECTOR,
			true.abi_encode().into(),
		));
		let queries = PassThroughQueries::new(chain, &test_config());

		assert!(queries.paused(&WALLET.to_string(), None).await.unwrap());
	}

	#[tokio::test]
	async fn test_unsupported_chain_rejected() {
		let queries = PassThroughQueries::new(Arc::new(MockChain::new(vec![1])), &test_config());
		let result = queries.owner(&WALLET.to_string(), Some(10)).await;
		assert!(matches!(result, Err(ClientError::UnsupportedChain(10))));
	}
}
