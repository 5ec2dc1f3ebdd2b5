//! Waterfall event topics and decoded event types.

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;

pub use crate::contracts::IWaterfallModule::{
	RecoverNonWaterfallFunds, WaterfallFunds, Withdrawal,
};
pub use crate::contracts::IWaterfallModuleFactory::CreateWaterfallModule;

/// Topic signatures for the waterfall events, one per logical operation.
///
/// Computed once when a Transaction-mode client is constructed and cached
/// for the client's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct WaterfallEventTopics {
	/// Topic of the module-created event.
	pub create_module: B256,
	/// Topic of the funds-distributed event.
	pub waterfall_funds: B256,
	/// Topic of the non-waterfall-recovery event.
	pub recover_funds: B256,
	/// Topic of the pulled-funds-withdrawal event.
	pub withdrawal: B256,
}

impl WaterfallEventTopics {
	/// Computes the topic table from the contract ABI.
	pub fn new() -> Self {
		Self {
			create_module: CreateWaterfallModule::SIGNATURE_HASH,
			waterfall_funds: WaterfallFunds::SIGNATURE_HASH,
			recover_funds: RecoverNonWaterfallFunds::SIGNATURE_HASH,
			withdrawal: Withdrawal::SIGNATURE_HASH,
		}
	}
}

impl Default for WaterfallEventTopics {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_topics_are_distinct() {
		let topics = WaterfallEventTopics::new();
		let all = [
			topics.create_module,
			topics.waterfall_funds,
			topics.recover_funds,
			topics.withdrawal,
		];
		for (i, a) in all.iter().enumerate() {
			for b in &all[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}
}
