//! Mock chain transport for testing and development.
//!
//! Records every call issued through it and serves canned responses staged
//! up front. Used by the executor's own tests and by the domain client
//! crates to exercise the full pipeline without a live network.

use crate::ChainInterface;
use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use splits_types::{CallReceipt, ClientError, ContractCall};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory chain transport with staged responses.
///
/// Read responses are keyed by target address and function selector;
/// receipts are keyed by transaction hash. Anything not staged fails with a
/// `Network` error, which makes missing expectations visible in tests.
pub struct MockChain {
	/// Chain ids this mock reports as supported.
	chain_ids: Vec<u64>,
	/// Configured signer address, if any.
	signer: Option<Address>,
	/// Gas estimate served for every simulation.
	gas_estimate: u64,
	/// Hash returned for every submission.
	next_hash: TxHash,
	/// Staged eth_call responses keyed by (target, selector).
	responses: Mutex<HashMap<(Address, [u8; 4]), Bytes>>,
	/// Staged receipts keyed by transaction hash.
	receipts: Mutex<HashMap<TxHash, CallReceipt>>,
	submitted: Mutex<Vec<ContractCall>>,
	estimated: Mutex<Vec<ContractCall>>,
	reads: Mutex<Vec<(u64, Address, Bytes)>>,
}

impl MockChain {
	/// Creates a mock supporting the given chain ids, with no signer.
	pub fn new(chain_ids: Vec<u64>) -> Self {
		Self {
			chain_ids,
			signer: None,
			gas_estimate: 21_000,
			next_hash: TxHash::ZERO,
			responses: Mutex::new(HashMap::new()),
			receipts: Mutex::new(HashMap::new()),
			submitted: Mutex::new(Vec::new()),
			estimated: Mutex::new(Vec::new()),
			reads: Mutex::new(Vec::new()),
		}
	}

	/// Configures a signer address.
	pub fn with_signer(mut self, signer: Address) -> Self {
		self.signer = Some(signer);
		self
	}

	/// Sets the gas estimate served for simulations.
	pub fn with_gas_estimate(mut self, gas: u64) -> Self {
		self.gas_estimate = gas;
		self
	}

	/// Sets the hash returned for submissions.
	pub fn with_next_hash(mut self, hash: TxHash) -> Self {
		self.next_hash = hash;
		self
	}

	/// Stages a read response for calls to `to` with the given selector.
	pub fn with_call_response(self, to: Address, selector: [u8; 4], response: Bytes) -> Self {
		lock(&self.responses).insert((to, selector), response);
		self
	}

	/// Stages a receipt for a transaction hash.
	pub fn with_receipt(self, receipt: CallReceipt) -> Self {
		lock(&self.receipts).insert(receipt.hash, receipt);
		self
	}

	/// Calls submitted through this mock, in order.
	pub fn submitted(&self) -> Vec<ContractCall> {
		lock(&self.submitted).clone()
	}

	/// Calls simulated through this mock, in order.
	pub fn estimated(&self) -> Vec<ContractCall> {
		lock(&self.estimated).clone()
	}

	/// Read calls issued through this mock, in order.
	pub fn reads(&self) -> Vec<(u64, Address, Bytes)> {
		lock(&self.reads).clone()
	}

	/// Total number of network round trips issued through this mock.
	pub fn network_calls(&self) -> usize {
		lock(&self.submitted).len() + lock(&self.estimated).len() + lock(&self.reads).len()
	}
}

/// Locks a mutex, recovering the inner state if a test panicked mid-write.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ChainInterface for MockChain {
	fn supports(&self, chain_id: u64) -> bool {
		self.chain_ids.contains(&chain_id)
	}

	fn signer_address(&self) -> Option<Address> {
		self.signer
	}

	async fn submit(&self, call: &ContractCall) -> Result<TxHash, ClientError> {
		lock(&self.submitted).push(call.clone());
		Ok(self.next_hash)
	}

	async fn estimate_gas(&self, call: &ContractCall) -> Result<u64, ClientError> {
		lock(&self.estimated).push(call.clone());
		Ok(self.gas_estimate)
	}

	async fn call(&self, chain_id: u64, to: Address, data: Bytes) -> Result<Bytes, ClientError> {
		lock(&self.reads).push((chain_id, to, data.clone()));

		if data.len() < 4 {
			return Err(ClientError::Network(
				"Mock call data shorter than a selector".to_string(),
			));
		}
		let mut selector = [0u8; 4];
		selector.copy_from_slice(&data[..4]);

		lock(&self.responses)
			.get(&(to, selector))
			.cloned()
			.ok_or_else(|| {
				ClientError::Network(format!(
					"No mock response staged for {to} selector 0x{}",
					hex::encode(selector)
				))
			})
	}

	async fn wait_for_receipt(
		&self,
		_chain_id: u64,
		hash: TxHash,
	) -> Result<CallReceipt, ClientError> {
		lock(&self.receipts)
			.get(&hash)
			.cloned()
			.ok_or_else(|| ClientError::Network(format!("No mock receipt staged for {hash}")))
	}
}
