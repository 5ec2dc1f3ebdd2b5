//! Alloy-backed EVM transport implementation.
//!
//! Holds one HTTP provider per configured network, optionally wallet-backed
//! when a private key is supplied. Transport failures surface as
//! `ClientError::Network` without retries; retry policy belongs to the
//! caller.

use crate::ChainInterface;
use alloy_consensus::TxReceipt;
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use async_trait::async_trait;
use splits_types::{CallReceipt, ClientError, ContractCall, NetworksConfig, SecretString};
use std::collections::HashMap;
use std::sync::Arc;

/// Interval between receipt polls while waiting for a transaction to mine.
const RECEIPT_POLL_INTERVAL: tokio::time::Duration = tokio::time::Duration::from_secs(5);
/// Upper bound on the receipt wait.
const RECEIPT_TIMEOUT: tokio::time::Duration = tokio::time::Duration::from_secs(300);

/// Alloy-based EVM transport.
///
/// Supports multiple networks with a single instance. When constructed with
/// a private key, every provider is wallet-backed and submission is
/// available; without one the instance is read-only and only gas estimation
/// and contract reads work.
pub struct AlloyChain {
	/// Alloy providers for each supported network.
	providers: HashMap<u64, Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>>,
	/// Address of the configured signer, if any.
	signer_address: Option<Address>,
}

impl AlloyChain {
	/// Creates an AlloyChain from the networks configuration.
	///
	/// One provider is built per configured chain. The optional private key
	/// is applied to every network, with the chain id bound per provider so
	/// signed transactions cannot be replayed across chains.
	pub fn new(
		networks: &NetworksConfig,
		private_key: Option<&SecretString>,
	) -> Result<Self, ClientError> {
		if networks.is_empty() {
			return Err(ClientError::Config(
				"at least one network must be configured".to_string(),
			));
		}

		let signer = private_key
			.map(|key| {
				key.with_exposed(|raw| {
					raw.parse::<PrivateKeySigner>().map_err(|_| {
						ClientError::Config("Invalid private key format".to_string())
					})
				})
			})
			.transpose()?;
		let signer_address = signer.as_ref().map(|s| s.address());

		let mut providers = HashMap::new();
		for (chain_id, network) in networks {
			let url = network.rpc_url.parse().map_err(|e| {
				ClientError::Config(format!("Invalid RPC URL for chain {}: {}", chain_id, e))
			})?;

			let provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync> =
				match &signer {
					Some(signer) => {
						let chain_signer = signer.clone().with_chain_id(Some(*chain_id));
						let wallet = EthereumWallet::from(chain_signer);
						Arc::new(
							ProviderBuilder::new()
								.with_recommended_fillers()
								.wallet(wallet)
								.on_http(url),
						)
					}
					None => Arc::new(ProviderBuilder::new().on_http(url)),
				};

			providers.insert(*chain_id, provider);
		}

		Ok(Self {
			providers,
			signer_address,
		})
	}

	/// Gets the provider for a specific chain id.
	fn provider(
		&self,
		chain_id: u64,
	) -> Result<&Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>, ClientError> {
		self.providers
			.get(&chain_id)
			.ok_or(ClientError::UnsupportedChain(chain_id))
	}
}

/// Builds the RPC transaction request for a prepared contract call.
fn build_request(call: &ContractCall) -> TransactionRequest {
	let mut request = TransactionRequest::default()
		.with_to(call.to)
		.with_input(call.data.clone());

	if let Some(value) = call.overrides.value {
		request = request.with_value(value);
	}
	if let Some(gas_limit) = call.overrides.gas_limit {
		request = request.with_gas_limit(gas_limit);
	}
	if let Some(gas_price) = call.overrides.gas_price {
		request = request.with_gas_price(gas_price);
	}
	if let Some(nonce) = call.overrides.nonce {
		request = request.with_nonce(nonce);
	}

	request
}

#[async_trait]
impl ChainInterface for AlloyChain {
	fn supports(&self, chain_id: u64) -> bool {
		self.providers.contains_key(&chain_id)
	}

	fn signer_address(&self) -> Option<Address> {
		self.signer_address
	}

	async fn submit(&self, call: &ContractCall) -> Result<TxHash, ClientError> {
		let provider = self.provider(call.chain_id)?;
		let request = build_request(call);

		// The provider's wallet handles signing
		let pending_tx = provider
			.send_transaction(request)
			.await
			.map_err(|e| ClientError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending_tx.tx_hash();
		tracing::info!(tx_hash = %tx_hash, chain_id = call.chain_id, "Submitted transaction");

		Ok(tx_hash)
	}

	async fn estimate_gas(&self, call: &ContractCall) -> Result<u64, ClientError> {
		let provider = self.provider(call.chain_id)?;
		let request = build_request(call);

		provider
			.estimate_gas(&request)
			.await
			.map_err(|e| ClientError::Network(format!("Failed to estimate gas: {}", e)))
	}

	async fn call(&self, chain_id: u64, to: Address, data: Bytes) -> Result<Bytes, ClientError> {
		let provider = self.provider(chain_id)?;
		let request = TransactionRequest::default().with_to(to).with_input(data);

		provider
			.call(&request)
			.await
			.map_err(|e| ClientError::Network(format!("Contract read failed: {}", e)))
	}

	async fn wait_for_receipt(
		&self,
		chain_id: u64,
		hash: TxHash,
	) -> Result<CallReceipt, ClientError> {
		let provider = self.provider(chain_id)?;
		let start_time = tokio::time::Instant::now();

		loop {
			if start_time.elapsed() > RECEIPT_TIMEOUT {
				return Err(ClientError::Network(format!(
					"Timeout waiting for receipt of {} after {} seconds",
					hash,
					RECEIPT_TIMEOUT.as_secs()
				)));
			}

			let receipt = match provider.get_transaction_receipt(hash).await {
				Ok(Some(receipt)) => receipt,
				Ok(None) => {
					// Not yet mined, wait and retry
					tracing::debug!(tx_hash = %hash, "Waiting for transaction to mine");
					tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
					continue;
				}
				Err(e) => {
					return Err(ClientError::Network(format!(
						"Failed to get receipt: {}",
						e
					)));
				}
			};

			let logs = receipt
				.inner
				.logs()
				.iter()
				.map(|log| log.inner.clone())
				.collect();

			return Ok(CallReceipt {
				hash: receipt.transaction_hash,
				block_number: receipt.block_number.unwrap_or(0),
				success: receipt.status(),
				logs,
			});
		}
	}
}
