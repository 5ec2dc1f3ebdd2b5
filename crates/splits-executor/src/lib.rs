//! Transaction mode execution for the splits client SDK.
//!
//! This crate provides the abstract transaction pipeline shared by every
//! domain client. A [`TransactionExecutor`] is constructed with a fixed
//! execution mode and performs the mode-specific action for a prepared
//! contract call: submit it and return the hash, simulate it and return the
//! gas estimate, or encode it and return the payload. The network transport
//! behind it is an exchangeable [`ChainInterface`] implementation.

use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use splits_types::{
	CallData, CallReceipt, ClientError, ContractCall, ExecutionMode, TransactionResult,
};
use std::sync::Arc;

/// Re-export implementations
pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
	pub mod mock;
}

/// Trait defining the interface for the network transport collaborator.
///
/// Implementations supply read-only and signer-backed endpoints per chain
/// id. The executor and the domain clients treat these as given
/// capabilities; they add no retries, batching, or sequencing on top.
#[async_trait]
pub trait ChainInterface: Send + Sync {
	/// Whether the given chain id is in the configured set of networks.
	fn supports(&self, chain_id: u64) -> bool;

	/// Address of the configured signer, if any.
	fn signer_address(&self) -> Option<Address>;

	/// Submits the call through a signer-backed endpoint.
	///
	/// Returns the transaction hash immediately; confirmation is a separate,
	/// caller-driven step via [`ChainInterface::wait_for_receipt`].
	async fn submit(&self, call: &ContractCall) -> Result<TxHash, ClientError>;

	/// Simulates the call and returns the estimated gas cost.
	async fn estimate_gas(&self, call: &ContractCall) -> Result<u64, ClientError>;

	/// Issues a read-only contract call (eth_call) and returns the raw
	/// return data.
	async fn call(&self, chain_id: u64, to: Address, data: Bytes) -> Result<Bytes, ClientError>;

	/// Waits for a submitted transaction to be mined and returns its
	/// receipt, including the raw logs.
	async fn wait_for_receipt(&self, chain_id: u64, hash: TxHash)
		-> Result<CallReceipt, ClientError>;
}

/// Executor that dispatches a contract call according to its configured mode.
///
/// The mode and the signer-requirement policy are resolved once at
/// construction and never change afterwards. Concurrent calls against the
/// same executor are independent; it holds no mutable per-call state.
pub struct TransactionExecutor {
	/// Execution mode fixed at construction.
	mode: ExecutionMode,
	/// Network transport collaborator.
	chain: Arc<dyn ChainInterface>,
	/// Whether operations through this executor require a configured signer.
	require_signer: bool,
}

impl TransactionExecutor {
	/// Creates an executor with a fixed mode over the given transport.
	pub fn new(mode: ExecutionMode, chain: Arc<dyn ChainInterface>) -> Self {
		let require_signer = mode.requires_signer();
		Self {
			mode,
			chain,
			require_signer,
		}
	}

	/// The executor's configured mode.
	pub fn mode(&self) -> ExecutionMode {
		self.mode
	}

	/// Whether operations through this executor require a configured signer.
	///
	/// Owner-authorization checks in the domain builders run only when this
	/// is true; gas-estimate and call-data clients may be used by parties
	/// that are not the authenticated signer.
	pub fn requires_signer(&self) -> bool {
		self.require_signer
	}

	/// Address of the configured signer, if any.
	pub fn signer_address(&self) -> Option<Address> {
		self.chain.signer_address()
	}

	/// The underlying transport, shared with read facades.
	pub fn chain(&self) -> &Arc<dyn ChainInterface> {
		&self.chain
	}

	/// Issues a read-only contract call through the transport.
	pub async fn read_contract(
		&self,
		chain_id: u64,
		to: Address,
		data: Bytes,
	) -> Result<Bytes, ClientError> {
		if !self.chain.supports(chain_id) {
			return Err(ClientError::UnsupportedChain(chain_id));
		}
		self.chain.call(chain_id, to, data).await
	}

	/// Performs the mode-specific action for a prepared contract call.
	///
	/// All three modes receive the identical call; only the side effect and
	/// the returned variant differ:
	/// - Transaction: requires a signer, submits, returns `Hash`;
	/// - GasEstimate: simulates, returns `GasEstimate`;
	/// - CallData: purely local, returns `CallData`.
	pub async fn execute(&self, call: ContractCall) -> Result<TransactionResult, ClientError> {
		if !self.chain.supports(call.chain_id) {
			return Err(ClientError::UnsupportedChain(call.chain_id));
		}

		match self.mode {
			ExecutionMode::Transaction => {
				if self.chain.signer_address().is_none() {
					return Err(ClientError::MissingSigner);
				}
				let hash = self.chain.submit(&call).await?;
				Ok(TransactionResult::Hash(hash))
			}
			ExecutionMode::GasEstimate => {
				let gas = self.chain.estimate_gas(&call).await?;
				Ok(TransactionResult::GasEstimate(gas))
			}
			ExecutionMode::CallData => Ok(TransactionResult::CallData(CallData {
				to: call.to,
				data: call.data,
			})),
		}
	}
}
