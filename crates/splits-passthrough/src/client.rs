//! Mode-specialized pass-through wallet clients.
//!
//! Three thin facades over the shared transaction builder, one per execution
//! mode. Only the Transaction-mode client performs the owner-authorization
//! check, waits for the receipt, and decodes the operation's event.

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;
use splits_executor::ChainInterface;
use splits_types::{
	decode_first_event, CallData, ClientError, EventResponse, ExecutionMode, SplitsConfig,
	TransactionResult,
};
use std::sync::Arc;

use crate::events::{
	CreatePassThroughWallet, ExecCalls, PassThrough, PassThroughEventTopics, SetPassThrough,
	SetPaused,
};
use crate::transactions::{
	CreatePassThroughWalletArgs, ExecCallsArgs, PassThroughTokensArgs, PassThroughTransactions,
	SetPassThroughArgs, SetPausedArgs,
};

/// Transaction-mode pass-through wallet client.
///
/// Submits operations through a signer-backed endpoint, waits for the
/// receipt, and returns the decoded domain event together with the raw log.
pub struct PassThroughClient {
	tx: PassThroughTransactions,
	topics: PassThroughEventTopics,
}

impl PassThroughClient {
	/// Creates a Transaction-mode client.
	pub fn new(chain: Arc<dyn ChainInterface>, config: &SplitsConfig) -> Self {
		Self {
			tx: PassThroughTransactions::new(ExecutionMode::Transaction, chain, config),
			topics: PassThroughEventTopics::new(),
		}
	}

	/// Waits for the submitted transaction and decodes the operation's event.
	async fn confirm<E: SolEvent>(
		&self,
		chain_id: u64,
		result: TransactionResult,
		topic: B256,
		operation: &'static str,
	) -> Result<EventResponse<E>, ClientError> {
		let tx_hash = result.require_hash()?;
		let receipt = self.tx.chain().wait_for_receipt(chain_id, tx_hash).await?;

		if !receipt.success {
			return Err(ClientError::TransactionFailed(format!(
				"{operation} transaction {tx_hash} reverted"
			)));
		}

		let (event, log) = decode_first_event::<E>(&receipt.logs, topic)?;
		tracing::info!(tx_hash = %tx_hash, operation, "Transaction confirmed");

		Ok(EventResponse {
			tx_hash,
			event,
			log,
		})
	}

	/// Deploys a new pass-through wallet and returns the creation event,
	/// including the new wallet's address.
	pub async fn create_pass_through_wallet(
		&self,
		args: CreatePassThroughWalletArgs,
	) -> Result<EventResponse<CreatePassThroughWallet>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.create_pass_through_wallet(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.create_wallet,
			"create_pass_through_wallet",
		)
		.await
	}

	/// Forwards the wallet's balances of the given tokens to its target.
	pub async fn pass_through_tokens(
		&self,
		args: PassThroughTokensArgs,
	) -> Result<EventResponse<PassThrough>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.pass_through_tokens(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.pass_through,
			"pass_through_tokens",
		)
		.await
	}

	/// Redirects the wallet's pass-through target. Owner only.
	pub async fn set_pass_through(
		&self,
		args: SetPassThroughArgs,
	) -> Result<EventResponse<SetPassThrough>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.set_pass_through(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.set_pass_through,
			"set_pass_through",
		)
		.await
	}

	/// Flips the wallet's pause flag. Owner only.
	pub async fn set_paused(
		&self,
		args: SetPausedArgs,
	) -> Result<EventResponse<SetPaused>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.set_paused(&args).await?;
		self.confirm(chain_id, result, self.topics.set_paused, "set_paused")
			.await
	}

	/// Executes arbitrary calls through the wallet. Owner only.
	pub async fn exec_calls(
		&self,
		args: ExecCallsArgs,
	) -> Result<EventResponse<ExecCalls>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.exec_calls(&args).await?;
		self.confirm(chain_id, result, self.topics.exec_calls, "exec_calls")
			.await
	}
}

/// Gas-estimate pass-through wallet client.
///
/// Simulates operations and returns their estimated gas cost. Usable
/// without a configured signer; owner-gated operations are not
/// authorization-checked in this mode.
pub struct PassThroughGasClient {
	tx: PassThroughTransactions,
}

impl PassThroughGasClient {
	/// Creates a GasEstimate-mode client.
	pub fn new(chain: Arc<dyn ChainInterface>, config: &SplitsConfig) -> Self {
		Self {
			tx: PassThroughTransactions::new(ExecutionMode::GasEstimate, chain, config),
		}
	}

	pub async fn create_pass_through_wallet(
		&self,
		args: CreatePassThroughWalletArgs,
	) -> Result<u64, ClientError> {
		self.tx
			.create_pass_through_wallet(&args)
			.await?
			.require_gas_estimate()
	}

	pub async fn pass_through_tokens(
		&self,
		args: PassThroughTokensArgs,
	) -> Result<u64, ClientError> {
		self.tx
			.pass_through_tokens(&args)
			.await?
			.require_gas_estimate()
	}

	pub async fn set_pass_through(&self, args: SetPassThroughArgs) -> Result<u64, ClientError> {
		self.tx.set_pass_through(&args).await?.require_gas_estimate()
	}

	pub async fn set_paused(&self, args: SetPausedArgs) -> Result<u64, ClientError> {
		self.tx.set_paused(&args).await?.require_gas_estimate()
	}

	pub async fn exec_calls(&self, args: ExecCallsArgs) -> Result<u64, ClientError> {
		self.tx.exec_calls(&args).await?.require_gas_estimate()
	}
}

/// Call-data pass-through wallet client.
///
/// Encodes operations into unsigned, unsubmitted payloads for external
/// signing or relay. Requires neither a signer nor a network round trip.
pub struct PassThroughCallDataClient {
	tx: PassThroughTransactions,
}

impl PassThroughCallDataClient {
	/// Creates a CallData-mode client.
	pub fn new(chain: Arc<dyn ChainInterface>, config: &SplitsConfig) -> Self {
		Self {
			tx: PassThroughTransactions::new(ExecutionMode::CallData, chain, config),
		}
	}

	pub async fn create_pass_through_wallet(
		&self,
		args: CreatePassThroughWalletArgs,
	) -> Result<CallData, ClientError> {
		self.tx
			.create_pass_through_wallet(&args)
			.await?
			.require_call_data()
	}

	pub async fn pass_through_tokens(
		&self,
		args: PassThroughTokensArgs,
	) -> Result<CallData, ClientError> {
		self.tx.pass_through_tokens(&args).await?.require_call_data()
	}

	pub async fn set_pass_through(
		&self,
		args: SetPassThroughArgs,
	) -> Result<CallData, ClientError> {
		self.tx.set_pass_through(&args).await?.require_call_data()
	}

	pub async fn set_paused(&self, args: SetPausedArgs) -> Result<CallData, ClientError> {
		self.tx.set_paused(&args).await?.require_call_data()
	}

	pub async fn exec_calls(&self, args: ExecCallsArgs) -> Result<CallData, ClientError> {
		self.tx.exec_calls(&args).await?.require_call_data()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::contracts::{IPassThroughWallet, IPassThroughWalletFactory};
	use crate::testutil::{test_config, FACTORY, OWNER, WALLET};
	use crate::transactions::CallInput;
	use alloy_primitives::{address, b256, Log, U256};
	use alloy_sol_types::{SolCall, SolValue};
	use splits_executor::implementations::mock::MockChain;
	use splits_types::CallReceipt;

	fn owner_response() -> (alloy_primitives::Address, [u8; 4], alloy_primitives::Bytes) {
		(
			WALLET,
			IPassThroughWallet::ownerCall::SELECTOR,
			OWNER.abi_encode().into(),
		)
	}

	#[tokio::test]
	async fn test_set_paused_rejects_non_owner_signer() {
		let stranger = address!("4444444444444444444444444444444444444444");
		let (to, selector, data) = owner_response();
		let chain = Arc::new(
			MockChain::new(vec![1])
				.with_signer(stranger)
				.with_call_response(to, selector, data),
		);
		let client = PassThroughClient::new(chain.clone(), &test_config());

		let result = client
			.set_paused(SetPausedArgs {
				wallet: WALLET.to_string(),
				paused: true,
				..Default::default()
			})
			.await;

		assert!(matches!(result, Err(ClientError::InvalidAuth(_))));
		// Rejected before anything was submitted
		assert!(chain.submitted().is_empty());
	}

	#[tokio::test]
	async fn test_set_paused_succeeds_for_owner() {
		let hash = b256!("00000000000000000000000000000000000000000000000000000000000000ab");
		let event = SetPaused { paused: true };
		let log = Log {
			address: WALLET,
			data: event.encode_log_data(),
		};
		let (to, selector, data) = owner_response();
		let chain = Arc::new(
			MockChain::new(vec![1])
				.with_signer(OWNER)
				.with_call_response(to, selector, data)
				.with_next_hash(hash)
				.with_receipt(CallReceipt {
					hash,
					block_number: 7,
					success: true,
					logs: vec![log],
				}),
		);
		let client = PassThroughClient::new(chain.clone(), &test_config());

		let response = client
			.set_paused(SetPausedArgs {
				wallet: WALLET.to_string(),
				paused: true,
				..Default::default()
			})
			.await
			.unwrap();

		assert_eq!(response.tx_hash, hash);
		assert!(response.event.paused);
		assert_eq!(chain.submitted().len(), 1);
		assert_eq!(
			&chain.submitted()[0].data[..4],
			IPassThroughWallet::setPausedCall::SELECTOR
		);
	}

	#[tokio::test]
	async fn test_call_data_skips_owner_check() {
		// No signer, no staged owner response: the CallData client must not
		// touch the network at all.
		let chain = Arc::new(MockChain::new(vec![1]));
		let client = PassThroughCallDataClient::new(chain.clone(), &test_config());

		let payload = client
			.set_pass_through(SetPassThroughArgs {
				wallet: WALLET.to_string(),
				pass_through: "0x5555555555555555555555555555555555555555".to_string(),
				..Default::default()
			})
			.await
			.unwrap();

		assert_eq!(payload.to, WALLET);
		assert_eq!(
			&payload.data[..4],
			IPassThroughWallet::setPassThroughCall::SELECTOR
		);
		assert_eq!(chain.network_calls(), 0);
		assert!(chain.reads().is_empty());
	}

	#[tokio::test]
	async fn test_gas_estimate_skips_owner_check() {
		let chain = Arc::new(MockChain::new(vec![1]).with_gas_estimate(60_000));
		let client = PassThroughGasClient::new(chain.clone(), &test_config());

		let gas = client
			.exec_calls(ExecCallsArgs {
				wallet: WALLET.to_string(),
				calls: vec![CallInput {
					to: "0x5555555555555555555555555555555555555555".to_string(),
					value: U256::ZERO,
					data: Default::default(),
				}],
				..Default::default()
			})
			.await
			.unwrap();

		assert_eq!(gas, 60_000);
		assert!(chain.reads().is_empty());
	}

	#[tokio::test]
	async fn test_call_data_create_is_deterministic() {
		let chain = Arc::new(MockChain::new(vec![1]));
		let client = PassThroughCallDataClient::new(chain.clone(), &test_config());

		let args = || CreatePassThroughWalletArgs {
			owner: OWNER.to_string(),
			paused: false,
			pass_through: "0x5555555555555555555555555555555555555555".to_string(),
			..Default::default()
		};
		let first = client.create_pass_through_wallet(args()).await.unwrap();
		let second = client.create_pass_through_wallet(args()).await.unwrap();

		assert_eq!(first, second);
		assert_eq!(first.to, FACTORY);
		assert_eq!(
			&first.data[..4],
			IPassThroughWalletFactory::createPassThroughWalletCall::SELECTOR
		);
	}

	#[tokio::test]
	async fn test_exec_calls_validates_target_addresses() {
		let chain = Arc::new(MockChain::new(vec![1]));
		let client = PassThroughCallDataClient::new(chain.clone(), &test_config());

		let result = client
			.exec_calls(ExecCallsArgs {
				wallet: WALLET.to_string(),
				calls: vec![CallInput {
					to: "not-an-address".to_string(),
					value: U256::ZERO,
					data: Default::default(),
				}],
				..Default::default()
			})
			.await;

		assert!(matches!(result, Err(ClientError::InvalidArgument(_))));
		assert_eq!(chain.network_calls(), 0);
	}

	#[tokio::test]
	async fn test_create_decodes_wallet_address_from_event() {
		let hash = b256!("00000000000000000000000000000000000000000000000000000000000000cd");
		let deployed = address!("7777777777777777777777777777777777777777");
		let event = CreatePassThroughWallet {
			passThroughWallet: deployed,
			params: crate::contracts::InitParams {
				owner: OWNER,
				paused: false,
				passThrough: address!("5555555555555555555555555555555555555555"),
			},
		};
		let log = Log {
			address: FACTORY,
			data: event.encode_log_data(),
		};
		let chain = Arc::new(
			MockChain::new(vec![1])
				.with_signer(OWNER)
				.with_next_hash(hash)
				.with_receipt(CallReceipt {
					hash,
					block_number: 9,
					success: true,
					logs: vec![log],
				}),
		);
		let client = PassThroughClient::new(chain, &test_config());

		let response = client
			.create_pass_through_wallet(CreatePassThroughWalletArgs {
				owner: OWNER.to_string(),
				paused: false,
				pass_through: "0x5555555555555555555555555555555555555555".to_string(),
				..Default::default()
			})
			.await
			.unwrap();

		assert_eq!(response.event.passThroughWallet, deployed);
		assert!(!response.event.params.paused);
	}

	#[tokio::test]
	async fn test_transaction_mode_requires_signer() {
		let chain = Arc::new(MockChain::new(vec![1]));
		let client = PassThroughClient::new(chain, &test_config());

		let result = client
			.pass_through_tokens(PassThroughTokensArgs {
				wallet: WALLET.to_string(),
				tokens: vec!["0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string()],
				..Default::default()
			})
			.await;

		assert!(matches!(result, Err(ClientError::MissingSigner)));
	}

	#[tokio::test]
	async fn test_unsupported_chain_rejected() {
		let chain = Arc::new(MockChain::new(vec![1]));
		let client = PassThroughGasClient::new(chain, &test_config());

		let result = client
			.set_paused(SetPausedArgs {
				wallet: WALLET.to_string(),
				paused: true,
				chain_id: Some(137),
				..Default::default()
			})
			.await;

		assert!(matches!(result, Err(ClientError::UnsupportedChain(137))));
	}
}
