//! Pass-through wallet transaction building.
//!
//! One builder method per on-chain operation. Owner-gated operations verify
//! that the configured signer is the wallet owner before anything is
//! submitted; the gating is declared per operation in one policy table
//! rather than scattered through the methods.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use splits_executor::{ChainInterface, TransactionExecutor};
use splits_types::{
	validate_address, CallItem, ChainConfig, ClientError, ContractCall, ExecutionMode,
	NetworksConfig, SplitsConfig, TransactionOverrides, TransactionResult,
};
use std::sync::Arc;

use crate::contracts::{Call, InitParams, IPassThroughWallet, IPassThroughWalletFactory};

/// Owner-gating policy for one wallet operation.
///
/// The authorization check runs only when the executor requires a signer
/// (Transaction mode); gas-estimate and call-data clients build payloads
/// for arbitrary parties and skip it entirely.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OperationPolicy {
	/// Whether only the wallet owner may submit the operation.
	pub owner_gated: bool,
}

pub(crate) const CREATE_WALLET: OperationPolicy = OperationPolicy { owner_gated: false };
pub(crate) const PASS_THROUGH_TOKENS: OperationPolicy = OperationPolicy { owner_gated: false };
pub(crate) const SET_PASS_THROUGH: OperationPolicy = OperationPolicy { owner_gated: true };
pub(crate) const SET_PAUSED: OperationPolicy = OperationPolicy { owner_gated: true };
pub(crate) const EXEC_CALLS: OperationPolicy = OperationPolicy { owner_gated: true };

/// Arguments for deploying a new pass-through wallet.
#[derive(Debug, Clone, Default)]
pub struct CreatePassThroughWalletArgs {
	/// The wallet's owner.
	pub owner: String,
	/// Whether the wallet starts paused.
	pub paused: bool,
	/// Address funds are forwarded to.
	pub pass_through: String,
	/// Target chain; the configured default when absent.
	pub chain_id: Option<u64>,
	/// Optional transaction overrides.
	pub overrides: TransactionOverrides,
}

/// Arguments for forwarding token balances to the pass-through target.
#[derive(Debug, Clone, Default)]
pub struct PassThroughTokensArgs {
	/// The wallet to forward from.
	pub wallet: String,
	/// Tokens whose full balances are forwarded.
	pub tokens: Vec<String>,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Arguments for redirecting the pass-through target.
#[derive(Debug, Clone, Default)]
pub struct SetPassThroughArgs {
	/// The wallet to reconfigure.
	pub wallet: String,
	/// The new pass-through target.
	pub pass_through: String,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Arguments for flipping the wallet's pause flag.
#[derive(Debug, Clone, Default)]
pub struct SetPausedArgs {
	/// The wallet to reconfigure.
	pub wallet: String,
	/// The new pause state.
	pub paused: bool,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// A call to forward, with an unvalidated target address.
#[derive(Debug, Clone, Default)]
pub struct CallInput {
	/// Target contract.
	pub to: String,
	/// Ether value attached to the call.
	pub value: U256,
	/// Encoded calldata.
	pub data: Bytes,
}

/// Arguments for executing arbitrary calls through the wallet.
#[derive(Debug, Clone, Default)]
pub struct ExecCallsArgs {
	/// The wallet executing the calls.
	pub wallet: String,
	/// Calls to execute in order.
	pub calls: Vec<CallInput>,
	pub chain_id: Option<u64>,
	pub overrides: TransactionOverrides,
}

/// Shared transaction builder behind the three pass-through clients.
pub(crate) struct PassThroughTransactions {
	executor: TransactionExecutor,
	networks: NetworksConfig,
	default_chain_id: u64,
}

impl PassThroughTransactions {
	pub(crate) fn new(
		mode: ExecutionMode,
		chain: Arc<dyn ChainInterface>,
		config: &SplitsConfig,
	) -> Self {
		Self {
			executor: TransactionExecutor::new(mode, chain),
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

	/// Verifies that the configured signer owns the wallet.
	///
	/// Skipped for operations that are not owner-gated and for clients whose
	/// mode never submits (no signer identity to check against).
	async fn authorize(
		&self,
		chain_id: u64,
		wallet: Address,
		policy: OperationPolicy,
	) -> Result<(), ClientError> {
		if !policy.owner_gated || !self.executor.requires_signer() {
			return Ok(());
		}

		let signer = self
			.executor
			.signer_address()
			.ok_or(ClientError::MissingSigner)?;
		let ret = self
			.executor
			.read_contract(
				chain_id,
				wallet,
				IPassThroughWallet::ownerCall {}.abi_encode().into(),
			)
			.await?;
		let owner = IPassThroughWallet::ownerCall::abi_decode_returns(&ret, true)
			.map_err(|e| ClientError::Network(format!("Failed to decode wallet owner: {e}")))?
			._0;

		if owner != signer {
			return Err(ClientError::InvalidAuth(format!(
				"Signer {signer} is not the owner of wallet {wallet}"
			)));
		}
		Ok(())
	}

	pub(crate) async fn create_pass_through_wallet(
		&self,
		args: &CreatePassThroughWalletArgs,
	) -> Result<TransactionResult, ClientError> {
		let owner = validate_address(&args.owner)?;
		let pass_through = validate_address(&args.pass_through)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;
		let factory = self.chain_config(chain_id)?.pass_through_wallet_factory;
		self.authorize(chain_id, factory, CREATE_WALLET).await?;

		let data = IPassThroughWalletFactory::createPassThroughWalletCall {
			params: InitParams {
				owner,
				paused: args.paused,
				passThrough: pass_through,
			},
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, factory, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn pass_through_tokens(
		&self,
		args: &PassThroughTokensArgs,
	) -> Result<TransactionResult, ClientError> {
		let wallet = validate_address(&args.wallet)?;
		let tokens = args
			.tokens
			.iter()
			.map(|t| validate_address(t))
			.collect::<Result<Vec<_>, ClientError>>()?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;
		self.authorize(chain_id, wallet, PASS_THROUGH_TOKENS).await?;

		let data = IPassThroughWallet::passThroughTokensCall { tokens }.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, wallet, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn set_pass_through(
		&self,
		args: &SetPassThroughArgs,
	) -> Result<TransactionResult, ClientError> {
		let wallet = validate_address(&args.wallet)?;
		let pass_through = validate_address(&args.pass_through)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;
		self.authorize(chain_id, wallet, SET_PASS_THROUGH).await?;

		let data = IPassThroughWallet::setPassThroughCall {
			passThrough: pass_through,
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, wallet, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn set_paused(
		&self,
		args: &SetPausedArgs,
	) -> Result<TransactionResult, ClientError> {
		let wallet = validate_address(&args.wallet)?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;
		self.authorize(chain_id, wallet, SET_PAUSED).await?;

		let data = IPassThroughWallet::setPausedCall {
			paused: args.paused,
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, wallet, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}

	pub(crate) async fn exec_calls(
		&self,
		args: &ExecCallsArgs,
	) -> Result<TransactionResult, ClientError> {
		let wallet = validate_address(&args.wallet)?;
		let calls = args
			.calls
			.iter()
			.map(|c| {
				Ok(CallItem {
					to: validate_address(&c.to)?,
					value: c.value,
					data: c.data.clone(),
				})
			})
			.collect::<Result<Vec<_>, ClientError>>()?;
		let chain_id = self.resolve_chain_id(args.chain_id)?;
		self.authorize(chain_id, wallet, EXEC_CALLS).await?;

		let data = IPassThroughWallet::execCallsCall {
			calls: calls
				.into_iter()
				.map(|c| Call {
					to: c.to,
					value: c.value,
					data: c.data,
				})
				.collect(),
		}
		.abi_encode();

		self.executor
			.execute(
				ContractCall::new(chain_id, wallet, data.into())
					.with_overrides(args.overrides.clone()),
			)
			.await
	}
}
