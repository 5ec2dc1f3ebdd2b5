//! On-chain metadata implementation.
//!
//! Reads a waterfall module's configuration directly from the contract via
//! three point lookups. Suitable wherever no indexing service is available;
//! every call costs one eth_call per getter.

use crate::MetadataInterface;
use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use splits_executor::ChainInterface;
use splits_types::{ClientError, Tranche, WaterfallMetadata};
use std::sync::Arc;

// The subset of the waterfall module ABI needed for metadata lookups.
sol! {
	interface IWaterfallModule {
		function token() external view returns (address);
		function nonWaterfallRecipient() external view returns (address);
		function getTranches() external view returns (address[] memory recipients, uint256[] memory thresholds);
	}
}

/// Metadata implementation backed by direct contract reads.
pub struct OnchainMetadata {
	/// Network transport used for the reads.
	chain: Arc<dyn ChainInterface>,
}

impl OnchainMetadata {
	/// Creates an on-chain metadata reader over the given transport.
	pub fn new(chain: Arc<dyn ChainInterface>) -> Self {
		Self { chain }
	}

	async fn read(
		&self,
		chain_id: u64,
		module: Address,
		data: Vec<u8>,
	) -> Result<Vec<u8>, ClientError> {
		let bytes = self.chain.call(chain_id, module, data.into()).await?;
		Ok(bytes.to_vec())
	}
}

#[async_trait]
impl MetadataInterface for OnchainMetadata {
	async fn waterfall_metadata(
		&self,
		chain_id: u64,
		module: Address,
	) -> Result<WaterfallMetadata, ClientError> {
		let token_ret = self
			.read(chain_id, module, IWaterfallModule::tokenCall {}.abi_encode())
			.await?;
		let token = IWaterfallModule::tokenCall::abi_decode_returns(&token_ret, true)
			.map_err(|e| ClientError::Metadata(format!("Failed to decode token(): {e}")))?
			._0;

		let recipient_ret = self
			.read(
				chain_id,
				module,
				IWaterfallModule::nonWaterfallRecipientCall {}.abi_encode(),
			)
			.await?;
		let recipient =
			IWaterfallModule::nonWaterfallRecipientCall::abi_decode_returns(&recipient_ret, true)
				.map_err(|e| {
					ClientError::Metadata(format!("Failed to decode nonWaterfallRecipient(): {e}"))
				})?
				._0;
		let non_waterfall_recipient = (recipient != Address::ZERO).then_some(recipient);

		let tranches_ret = self
			.read(
				chain_id,
				module,
				IWaterfallModule::getTranchesCall {}.abi_encode(),
			)
			.await?;
		let tranches = IWaterfallModule::getTranchesCall::abi_decode_returns(&tranches_ret, true)
			.map_err(|e| ClientError::Metadata(format!("Failed to decode getTranches(): {e}")))?;

		if tranches.recipients.len() != tranches.thresholds.len() {
			return Err(ClientError::Metadata(format!(
				"Module {} returned {} recipients but {} thresholds",
				module,
				tranches.recipients.len(),
				tranches.thresholds.len()
			)));
		}

		let tranches = tranches
			.recipients
			.into_iter()
			.zip(tranches.thresholds)
			.map(|(recipient, threshold)| Tranche {
				recipient,
				threshold,
			})
			.collect();

		tracing::debug!(module = %module, chain_id, "Fetched waterfall metadata");

		Ok(WaterfallMetadata {
			token,
			non_waterfall_recipient,
			tranches,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{address, U256};
	use alloy_sol_types::SolValue;
	use splits_executor::implementations::mock::MockChain;

	const MODULE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
	const TOKEN: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
	const RECIPIENT: Address = address!("cccccccccccccccccccccccccccccccccccccccc");

	fn staged_chain(non_waterfall_recipient: Address) -> MockChain {
		let recipients = vec![RECIPIENT];
		let thresholds = vec![U256::from(100)];
		MockChain::new(vec![1])
			.with_call_response(
				MODULE,
				IWaterfallModule::tokenCall::SELECTOR,
				TOKEN.abi_encode().into(),
			)
			.with_call_response(
				MODULE,
				IWaterfallModule::nonWaterfallRecipientCall::SELECTOR,
				non_waterfall_recipient.abi_encode().into(),
			)
			.with_call_response(
				MODULE,
				IWaterfallModule::getTranchesCall::SELECTOR,
				(recipients, thresholds).abi_encode_params().into(),
			)
	}

	#[tokio::test]
	async fn test_reads_module_configuration() {
		let designated = address!("dddddddddddddddddddddddddddddddddddddddd");
		let metadata = OnchainMetadata::new(Arc::new(staged_chain(designated)))
			.waterfall_metadata(1, MODULE)
			.await
			.unwrap();

		assert_eq!(metadata.token, TOKEN);
		assert_eq!(metadata.non_waterfall_recipient, Some(designated));
		assert_eq!(
			metadata.tranches,
			vec![Tranche {
				recipient: RECIPIENT,
				threshold: U256::from(100),
			}]
		);
	}

	#[tokio::test]
	async fn test_zero_recipient_maps_to_none() {
		let metadata = OnchainMetadata::new(Arc::new(staged_chain(Address::ZERO)))
			.waterfall_metadata(1, MODULE)
			.await
			.unwrap();
		assert_eq!(metadata.non_waterfall_recipient, None);
	}
}
