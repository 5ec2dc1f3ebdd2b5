//! Transaction pipeline types.
//!
//! This module defines the request and result shapes that flow through the
//! transaction executor: the contract call built by a domain builder, the
//! per-mode result union, and the receipt consumed for event decoding.

use alloy_primitives::{Address, Bytes, Log, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Execution mode fixed at client construction time.
///
/// The mode selects which action the executor performs for a contract call
/// and, with it, which [`TransactionResult`] variant is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
	/// Submit the call through a signer-backed endpoint and return the hash.
	Transaction,
	/// Simulate the call and return the estimated gas cost.
	GasEstimate,
	/// Encode the call locally and return the payload for external signing.
	CallData,
}

impl ExecutionMode {
	/// Whether this mode requires a configured signer.
	///
	/// Only Transaction mode submits on-chain and therefore needs a wallet.
	/// GasEstimate and CallData clients may be used by parties that are not
	/// yet the authenticated signer.
	pub fn requires_signer(&self) -> bool {
		matches!(self, ExecutionMode::Transaction)
	}
}

/// Optional per-call transaction overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOverrides {
	/// Native value to attach to the call, in wei.
	pub value: Option<U256>,
	/// Explicit gas limit.
	pub gas_limit: Option<u64>,
	/// Explicit gas price, in wei.
	pub gas_price: Option<u128>,
	/// Explicit nonce.
	pub nonce: Option<u64>,
}

/// A fully built contract call ready for execution.
///
/// Built fresh per operation by a domain builder and never mutated after
/// construction. All three execution modes receive the identical call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
	/// Chain the call targets.
	pub chain_id: u64,
	/// Target contract address.
	pub to: Address,
	/// ABI-encoded function selector and arguments.
	pub data: Bytes,
	/// Optional transaction overrides.
	pub overrides: TransactionOverrides,
}

impl ContractCall {
	/// Creates a contract call with default overrides.
	pub fn new(chain_id: u64, to: Address, data: Bytes) -> Self {
		Self {
			chain_id,
			to,
			data,
			overrides: TransactionOverrides::default(),
		}
	}

	/// Replaces the call's transaction overrides.
	pub fn with_overrides(mut self, overrides: TransactionOverrides) -> Self {
		self.overrides = overrides;
		self
	}
}

/// Encoded call payload returned in CallData mode.
///
/// The caller signs and broadcasts this elsewhere; the SDK performs no
/// network interaction to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallData {
	/// Target contract address.
	pub to: Address,
	/// ABI-encoded call payload.
	pub data: Bytes,
}

/// Result union over the three execution modes.
///
/// Exactly one variant is valid for a given executor mode. A facade
/// receiving the wrong variant fails with [`ClientError::UnexpectedResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionResult {
	/// Submitted-transaction identifier, returned in Transaction mode.
	Hash(TxHash),
	/// Estimated gas cost, returned in GasEstimate mode.
	GasEstimate(u64),
	/// Encoded payload and target, returned in CallData mode.
	CallData(CallData),
}

impl TransactionResult {
	/// Name of the held variant, used in mismatch errors.
	pub fn variant(&self) -> &'static str {
		match self {
			TransactionResult::Hash(_) => "transaction hash",
			TransactionResult::GasEstimate(_) => "gas estimate",
			TransactionResult::CallData(_) => "call data",
		}
	}

	/// Unwraps the submitted-transaction hash.
	pub fn require_hash(self) -> Result<TxHash, ClientError> {
		match self {
			TransactionResult::Hash(hash) => Ok(hash),
			other => Err(ClientError::UnexpectedResponse {
				expected: "transaction hash",
				actual: other.variant(),
			}),
		}
	}

	/// Unwraps the gas estimate.
	pub fn require_gas_estimate(self) -> Result<u64, ClientError> {
		match self {
			TransactionResult::GasEstimate(gas) => Ok(gas),
			other => Err(ClientError::UnexpectedResponse {
				expected: "gas estimate",
				actual: other.variant(),
			}),
		}
	}

	/// Unwraps the encoded call payload.
	pub fn require_call_data(self) -> Result<CallData, ClientError> {
		match self {
			TransactionResult::CallData(data) => Ok(data),
			other => Err(ClientError::UnexpectedResponse {
				expected: "call data",
				actual: other.variant(),
			}),
		}
	}
}

/// Receipt for a mined transaction.
///
/// Carries the raw logs so the Transaction facade can filter and decode the
/// operation's event after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReceipt {
	/// The hash of the transaction.
	pub hash: TxHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
	/// Raw logs emitted by the transaction.
	pub logs: Vec<Log>,
}

/// Outcome of a Transaction-mode operation.
///
/// Pairs the submitted hash with the decoded domain event and the raw log it
/// was decoded from.
#[derive(Debug, Clone)]
pub struct EventResponse<E> {
	/// Hash of the submitted transaction.
	pub tx_hash: TxHash,
	/// Decoded event data.
	pub event: E,
	/// The raw log the event was decoded from.
	pub log: Log,
}
