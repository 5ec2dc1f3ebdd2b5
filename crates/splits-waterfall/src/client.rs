//! Mode-specialized waterfall clients.
//!
//! Three thin facades over the shared transaction builder, one per execution
//! mode. Each asserts that the executor returned the variant appropriate to
//! its mode; only the Transaction-mode client additionally waits for the
//! receipt and decodes the operation's event.

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;
use splits_executor::ChainInterface;
use splits_metadata::MetadataInterface;
use splits_types::{
	decode_first_event, CallData, ClientError, EventResponse, ExecutionMode, SplitsConfig,
	TransactionResult,
};
use std::sync::Arc;

use crate::events::{
	CreateWaterfallModule, RecoverNonWaterfallFunds, WaterfallEventTopics, WaterfallFunds,
	Withdrawal,
};
use crate::transactions::{
	CreateWaterfallModuleArgs, RecoverNonWaterfallFundsArgs, WaterfallFundsArgs,
	WaterfallTransactions, WithdrawPullFundsArgs,
};

/// Transaction-mode waterfall client.
///
/// Submits operations through a signer-backed endpoint, waits for the
/// receipt, and returns the decoded domain event together with the raw log.
pub struct WaterfallClient {
	tx: WaterfallTransactions,
	topics: WaterfallEventTopics,
}

impl WaterfallClient {
	/// Creates a Transaction-mode client.
	pub fn new(
		chain: Arc<dyn ChainInterface>,
		metadata: Arc<dyn MetadataInterface>,
		config: &SplitsConfig,
	) -> Self {
		Self {
			tx: WaterfallTransactions::new(ExecutionMode::Transaction, chain, metadata, config),
			topics: WaterfallEventTopics::new(),
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

	/// Deploys a new waterfall module and returns the creation event,
	/// including the new module's address.
	pub async fn create_waterfall_module(
		&self,
		args: CreateWaterfallModuleArgs,
	) -> Result<EventResponse<CreateWaterfallModule>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.create_waterfall_module(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.create_module,
			"create_waterfall_module",
		)
		.await
	}

	/// Distributes a module's funds across its tranches.
	pub async fn waterfall_funds(
		&self,
		args: WaterfallFundsArgs,
	) -> Result<EventResponse<WaterfallFunds>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.waterfall_funds(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.waterfall_funds,
			"waterfall_funds",
		)
		.await
	}

	/// Recovers non-waterfall tokens to an eligible recipient.
	pub async fn recover_non_waterfall_funds(
		&self,
		args: RecoverNonWaterfallFundsArgs,
	) -> Result<EventResponse<RecoverNonWaterfallFunds>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.recover_non_waterfall_funds(&args).await?;
		self.confirm(
			chain_id,
			result,
			self.topics.recover_funds,
			"recover_non_waterfall_funds",
		)
		.await
	}

	/// Withdraws pulled funds on behalf of an account.
	pub async fn withdraw_pull_funds(
		&self,
		args: WithdrawPullFundsArgs,
	) -> Result<EventResponse<Withdrawal>, ClientError> {
		let chain_id = self.tx.resolve_chain_id(args.chain_id)?;
		let result = self.tx.withdraw_pull_funds(&args).await?;
		self.confirm(chain_id, result, self.topics.withdrawal, "withdraw_pull_funds")
			.await
	}
}

/// Gas-estimate waterfall client.
///
/// Simulates operations and returns their estimated gas cost. Usable
/// without a configured signer.
pub struct WaterfallGasClient {
	tx: WaterfallTransactions,
}

impl WaterfallGasClient {
	/// Creates a GasEstimate-mode client.
	pub fn new(
		chain: Arc<dyn ChainInterface>,
		metadata: Arc<dyn MetadataInterface>,
		config: &SplitsConfig,
	) -> Self {
		Self {
			tx: WaterfallTransactions::new(ExecutionMode::GasEstimate, chain, metadata, config),
		}
	}

	pub async fn create_waterfall_module(
		&self,
		args: CreateWaterfallModuleArgs,
	) -> Result<u64, ClientError> {
		self.tx
			.create_waterfall_module(&args)
			.await?
			.require_gas_estimate()
	}

	pub async fn waterfall_funds(&self, args: WaterfallFundsArgs) -> Result<u64, ClientError> {
		self.tx.waterfall_funds(&args).await?.require_gas_estimate()
	}

	pub async fn recover_non_waterfall_funds(
		&self,
		args: RecoverNonWaterfallFundsArgs,
	) -> Result<u64, ClientError> {
		self.tx
			.recover_non_waterfall_funds(&args)
			.await?
			.require_gas_estimate()
	}

	pub async fn withdraw_pull_funds(
		&self,
		args: WithdrawPullFundsArgs,
	) -> Result<u64, ClientError> {
		self.tx
			.withdraw_pull_funds(&args)
			.await?
			.require_gas_estimate()
	}
}

/// Call-data waterfall client.
///
/// Encodes operations into unsigned, unsubmitted payloads for external
/// signing or relay. Requires neither a signer nor a network round trip.
pub struct WaterfallCallDataClient {
	tx: WaterfallTransactions,
}

impl WaterfallCallDataClient {
	/// Creates a CallData-mode client.
	pub fn new(
		chain: Arc<dyn ChainInterface>,
		metadata: Arc<dyn MetadataInterface>,
		config: &SplitsConfig,
	) -> Self {
		Self {
			tx: WaterfallTransactions::new(ExecutionMode::CallData, chain, metadata, config),
		}
	}

	pub async fn create_waterfall_module(
		&self,
		args: CreateWaterfallModuleArgs,
	) -> Result<CallData, ClientError> {
		self.tx
			.create_waterfall_module(&args)
			.await?
			.require_call_data()
	}

	pub async fn waterfall_funds(
		&self,
		args: WaterfallFundsArgs,
	) -> Result<CallData, ClientError> {
		self.tx.waterfall_funds(&args).await?.require_call_data()
	}

	pub async fn recover_non_waterfall_funds(
		&self,
		args: RecoverNonWaterfallFundsArgs,
	) -> Result<CallData, ClientError> {
		self.tx
			.recover_non_waterfall_funds(&args)
			.await?
			.require_call_data()
	}

	pub async fn withdraw_pull_funds(
		&self,
		args: WithdrawPullFundsArgs,
	) -> Result<CallData, ClientError> {
		self.tx
			.withdraw_pull_funds(&args)
			.await?
			.require_call_data()
	}
}
