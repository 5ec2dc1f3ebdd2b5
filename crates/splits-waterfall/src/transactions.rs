//! Waterfall transaction building.
//!
//! One builder method per on-chain operation. Every method validates its
//! inputs, resolves the target chain, encodes the contract call, and
//! delegates to the executor. The three mode-specialized clients share this
//! builder; only the result variant they unwrap differs.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use splits_executor::{ChainInterface, TransactionExecutor};
use splits_metadata::MetadataInterface;
use splits_types::{
	validate_address, validate_tranches, ChainConfig, ClientError, ContractCall, ExecutionMode,
	NetworksConfig, SplitsConfig, Tranche, TransactionOverrides, TransactionResult,
};
use std::sync::Arc;

use crate::contracts::{IWaterfallModule, IWaterfallModuleFactory};

/// A tranche as supplied by the caller, with an unvalidated recipient.
#[derive(Debug, Clone, Default)]
pub struct TrancheInput {
	/// Recipient address.
	pub recipient: String,
	/// Cumulative threshold at which this tier is exhausted.
	pub threshold: U256,
}

/// Arguments for deploying a new waterfall module.
#[derive(Debug, Clone, Default)]
pub struct CreateWaterfallModuleArgs {
	/// The module's primary token.
	pub token: String,
	/// Designated recipient for non-waterfall recoveries; encodes as the
	/// zero address when absent.
	pub non_waterfall_recipient: Option<String>,
	/// Ordered payout tiers.
	pub tranches: Vec<TrancheInput>,
	/// Target chain; the configured default when absent.
	pub chain_id: Option<u64>,
	/// Optional transaction overrides.
	pub overrides: TransactionOverrides,
}

/// Arguments for distributing a module's funds.
#[derive(Debug, Clone, Default)]
pub struct WaterfallFundsArgs {
	/// The module to distribute.
	pub module: String,
	/// Pull flag: when set, funds are held for per-recipient withdrawal
	/// instead of being pushed directly.
	pub pull_funds: bool,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Arguments for recovering non-waterfall tokens from a module.
#[derive(Debug, Clone, Default)]
pub struct RecoverNonWaterfallFundsArgs {
	/// The module holding the stray tokens.
	pub module: String,
	/// The token to recover; must differ from the module's primary token.
	pub token: String,
	/// Recipient of the recovery; must be the module's designated
	/// non-waterfall recipient or one of its tranche recipients.
	pub recipient: String,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Arguments for withdrawing pulled funds on behalf of an account.
#[derive(Debug, Clone, Default)]
pub struct WithdrawPullFundsArgs {
	/// The module holding the pulled funds.
	pub module: String,
	/// The account whose balance is withdrawn.
	pub address: String,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Shared transaction builder behind the three waterfall clients.
pub(crate) struct WaterfallTransactions {
	executor: TransactionExecutor,
	metadata: Arc<dyn MetadataInterface>,
	networks: NetworksConfig,
	default_chain_id: u64,
}

impl WaterfallTransactions {
	pub(crate) fn new(
		mode: ExecutionMode,
		chain: Arc<dyn ChainInterface>,
		metadata: Arc<dyn MetadataInterface>,
		config: &SplitsConfig,
	) -> Self {
		Self {
			executor: TransactionExecutor::new(mode, chain),
			metadata,
			networks: config.networks.clone(),
			default_chain_id: config.default_chain_id,
		}
	}

	pub(crate) fn chain(&self) -> &Arc<dyn ChainInterface> {
		self.executor.chain()
	}

	/// Resolves the chain for an operation: the explicit argument when
	/// present, else the configured default.
	pub(crate) fn resolve_chain_id(&self, chain_id: Option<u64>) -> Result<u64, ClientError> {
		let chain_id = chain_id.unwrap_or(self.default_chain_id);
		if !self.networks.contains_key(&chain_id) {
			return Err(ClientError::UnsupportedChain(chain_id));
		}
		Ok(chain_id)
	}

	fn chain_config(&self, chain_id: u64) -> Result<&ChainConfig, ClientError> {
		self.networks
			.get(&chain_id)
			.ok_or(ClientError::UnsupportedChain(chain_id))
	}

	pub(crate) async fn create_waterfall_module(
		&self,
		args: &CreateWaterfallModuleArgs,
	) -> Result<TransactionResult, ClientError> {
		let token = validate_address(&args.token)?;
		let non_waterfall_recipient = match &args.non_waterfall_recipient {
			Some(addr) => validate_address(addr)?,
			None => Address::ZERO,
		};
		let tranches = args
			.tranches
			.iter()
			.map(|t| {
				Ok(Tranche {
					recipient: validate_address(&t.recipient)?,
					threshold: t.threshold,
				})
			})
			.collect::<Result<Vec<_>, ClientError>>()?;
		validate_tranches(&tranches)?;

		let chain_id = self.resolve_chain_id(args.chain_id)?;
		let factory = self.chain_config(chain_id)?.waterfall_module_factory;

		let data = IWaterfallModuleFactory::createWaterfallModuleCall {
			token,
			nonWaterfallRecipient: non_waterfall_recipient,
			recipients: tranches.iter().map(|t| t.recipient).collect(),
			thresholds: tranches.iter().map(|t| t.threshold).collect(),
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, factory, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn waterfall_funds(
		&self,
		args: &WaterfallFundsArgs,
	) -> Result<TransactionResult, ClientError> {
		let module = validate_address(&args.module)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;

		let data = if args.pull_funds {
			IWaterfallModule::waterfallFundsPullCall {}.abi_encode()
		} else {
			IWaterfallModule::waterfallFundsCall {}.abi_encode()
		};

		self.executor
			.execute(
				ContractCall::new(chain_id, module, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn recover_non_waterfall_funds(
		&self,
		args: &RecoverNonWaterfallFundsArgs,
	) -> Result<TransactionResult, ClientError> {
		let module = validate_address(&args.module)?;
		let token = validate_address(&args.token)?;
		let recipient = validate_address(&args.recipient)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;

		// Recovery is defined only for non-primary tokens, and only towards
		// recipients the module already knows about.
		let metadata = self.metadata.waterfall_metadata(chain_id, module).await?;
		if token == metadata.token {
			return Err(ClientError::InvalidArgument(format!(
				"Token {token} is the module's waterfall token and cannot be recovered"
			)));
		}
		if !metadata.is_recovery_recipient(recipient) {
			return Err(ClientError::InvalidArgument(format!(
				"Recipient {recipient} is neither the non-waterfall recipient nor a tranche recipient of module {module}"
			)));
		}

		let data = IWaterfallModule::recoverNonWaterfallFundsCall {
			nonWaterfallToken: token,
			recipient,
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, module, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn withdraw_pull_funds(
		&self,
		args: &WithdrawPullFundsArgs,
	) -> Result<TransactionResult, ClientError> {
		let module = validate_address(&args.module)?;
		let account = validate_address(&args.address)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;

		let data = IWaterfallModule::withdrawCall { account }.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, module, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}
}
