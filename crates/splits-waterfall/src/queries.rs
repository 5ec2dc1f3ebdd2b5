//! Read-only waterfall accessors.
//!
//! Stateless methods issuing one direct contract read each and returning the
//! on-chain value verbatim. No retries, no caching across calls.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use splits_executor::ChainInterface;
use splits_types::{
	validate_address, ClientError, NetworksConfig, SplitsConfig, Tranche,
};
use std::sync::Arc;

use crate::contracts::IWaterfallModule;

/// Read-only query facade for waterfall modules.
pub struct WaterfallQueries {
	chain: Arc<dyn ChainInterface>,
	networks: NetworksConfig,
	default_chain_id: u64,
}

impl WaterfallQueries {
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
		module: &str,
		chain_id: Option<u64>,
		call: C,
	) -> Result<C::Return, ClientError> {
		let module = validate_address(module)?;
		let chain_id = self.resolve_chain_id(chain_id)?;

		let ret = self
			.chain
			.call(chain_id, module, call.abi_encode().into())
			.await?;
		C::abi_decode_returns(&ret, true)
			.map_err(|e| ClientError::Network(format!("Failed to decode contract read: {e}")))
	}

	/// Total funds the module has distributed so far.
	pub async fn distributed_funds(
		&self,
		module: &str,
		chain_id: Option<u64>,
	) -> Result<U256, ClientError> {
		Ok(self
			.read(module, chain_id, IWaterfallModule::distributedFundsCall {})
			.await?
			._0)
	}

	/// Funds distributed in pull flow but not yet withdrawn.
	pub async fn funds_pending_withdrawal(
		&self,
		module: &str,
		chain_id: Option<u64>,
	) -> Result<U256, ClientError> {
		Ok(self
			.read(
				module,
				chain_id,
				IWaterfallModule::fundsPendingWithdrawalCall {},
			)
			.await?
			._0)
	}

	/// Pulled balance awaiting withdrawal for one account.
	pub async fn get_pull_balance(
		&self,
		module: &str,
		account: &str,
		chain_id: Option<u64>,
	) -> Result<U256, ClientError> {
		let account = validate_address(account)?;
		Ok(self
			.read(
				module,
				chain_id,
				IWaterfallModule::getPullBalanceCall { account },
			)
			.await?
			._0)
	}

	/// The module's configured tranches.
	pub async fn get_tranches(
		&self,
		module: &str,
		chain_id: Option<u64>,
	) -> Result<Vec<Tranche>, ClientError> {
		let ret = self
			.read(module, chain_id, IWaterfallModule::getTranchesCall {})
			.await?;

		if ret.recipients.len() != ret.thresholds.len() {
			return Err(ClientError::Network(format!(
				"Module returned {} recipients but {} thresholds",
				ret.recipients.len(),
				ret.thresholds.len()
			)));
		}

		Ok(ret
			.recipients
			.into_iter()
			.zip(ret.thresholds)
			.map(|(recipient, threshold)| Tranche {
				recipient,
				threshold,
			})
			.collect())
	}

	/// The module's primary token.
	pub async fn token(&self, module: &str, chain_id: Option<u64>) -> Result<Address, ClientError> {
		Ok(self
			.read(module, chain_id, IWaterfallModule::tokenCall {})
			.await?
			._0)
	}

	/// The module's designated non-waterfall recipient, if set.
	pub async fn non_waterfall_recipient(
		&self,
		module: &str,
		chain_id: Option<u64>,
	) -> Result<Option<Address>, ClientError> {
		let recipient = self
			.read(
				module,
				chain_id,
				IWaterfallModule::nonWaterfallRecipientCall {},
			)
			.await?
			._0;
		Ok((recipient != Address::ZERO).then_some(recipient))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::{test_config, MODULE, TOKEN};
	use alloy_primitives::address;
	use alloy_sol_types::SolValue;
	use splits_executor::implementations::mock::MockChain;

	#[tokio::test]
	async fn test_distributed_funds() {
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			MODULE,
			IWaterfallModule::distributedFundsCall::SELECTOR,
			U256::from(12_345).abi_encode().into(),
		));
		let queries = WaterfallQueries::new(chain, &test_config());

		let value = queries
			.distributed_funds(&MODULE.to_string(), None)
			.await
			.unwrap();
		assert_eq!(value, U256::from(12_345));
	}

	#[tokio::test]
	async fn test_get_tranches() {
		let recipients = vec![
			address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
			address!("cccccccccccccccccccccccccccccccccccccccc"),
		];
		let thresholds = vec![U256::from(100), U256::from(200)];
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			MODULE,
			IWaterfallModule::getTranchesCall::SELECTOR,
			(recipients.clone(), thresholds.clone()).abi_encode_params().into(),
		));
		let queries = WaterfallQueries::new(chain, &test_config());

		let tranches = queries.get_tranches(&MODULE.to_string(), None).await.unwrap();
		assert_eq!(tranches.len(), 2);
		assert_eq!(tranches[0].recipient, recipients[0]);
		assert_eq!(tranches[1].threshold, thresholds[1]);
	}

	#[tokio::test]
	async fn test_token() {
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			MODULE,
			IWaterfallModule::tokenCall::SELECTOR,
			TOKEN.abi_encode().into(),
		));
		let queries = WaterfallQueries::new(chain, &test_config());

		let token = queries.token(&MODULE.to_string(), None).await.unwrap();
		assert_eq!(token, TOKEN);
	}

	#[tokio::test]
	async fn test_zero_non_waterfall_recipient_is_none() {
		let chain = Arc::new(MockChain::new(vec![1]).with_call_response(
			MODULE,
			IWaterfallModule::nonWaterfallRecipientCall::SELECTOR,
			Address::ZERO.abi_encode().into(),
		));
		let queries = WaterfallQueries::new(chain, &test_config());

		let recipient = queries
			.non_waterfall_recipient(&MODULE.to_string(), None)
			.await
			.unwrap();
		assert_eq!(recipient, None);
	}

	#[tokio::test]
	async fn test_invalid_module_address_rejected() {
		let queries = WaterfallQueries::new(Arc::new(MockChain::new(vec![1])), &test_config());
		let result = queries.distributed_funds("0xnot-an-address", None).await;
		assert!(matches!(result, Err(ClientError::InvalidArgument(_))));
	}
}
