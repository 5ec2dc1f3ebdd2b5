//! Pass-through wallet event topics and decoded event types.

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;

pub use crate::contracts::IPassThroughWallet::{ExecCalls, PassThrough, SetPassThrough, SetPaused};
pub use crate::contracts::IPassThroughWalletFactory::CreatePassThroughWallet;

/// Topic signatures for the pass-through wallet events.
///
/// Computed once when a Transaction-mode client is constructed and cached
/// for the client's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct PassThroughEventTopics {
	/// Topic of the wallet-created event.
	pub create_wallet: B256,
	/// Topic of the funds-forwarded event.
	pub pass_through: B256,
	/// Topic of the target-changed event.
	pub set_pass_through: B256,
	/// Topic of the pause-flag event.
	pub set_paused: B256,
	/// Topic of the arbitrary-calls event.
	pub exec_calls: B256,
}

impl PassThroughEventTopics {
	/// Computes the topic table from the contract ABI.
	pub fn new() -> Self {
		Self {
			create_wallet: CreatePassThroughWallet::SIGNATURE_HASH,
			pass_through: PassThrough::SIGNATURE_HASH,
			set_pass_through: SetPassThrough::SIGNATURE_HASH,
			set_paused: SetPaused::SIGNATURE_HASH,
			exec_calls: ExecCalls::SIGNATURE_HASH,
		}
	}
}

impl Default for PassThroughEventTopics {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_topics_are_distinct() {
		let topics = PassThroughEventTopics::new();
		let all = [
			topics.create_wallet,
			topics.pass_through,
			topics.set_pass_through,
			topics.set_paused,
			topics.exec_calls,
		];
		for (i, a) in all.iter().enumerate() {
			for b in &all[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}
}
