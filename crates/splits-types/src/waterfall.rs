//! Value types for the waterfall module family.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A single payout tier of a waterfall module.
///
/// Tiers are ordered; each threshold is the cumulative amount at which the
/// tier is exhausted. A valid tranche list is non-empty with strictly
/// increasing thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tranche {
	/// Recipient of this tier's payouts.
	pub recipient: Address,
	/// Cumulative threshold at which this tier is exhausted.
	pub threshold: U256,
}

/// Deployed configuration of a waterfall module.
///
/// Supplied by the metadata collaborator and consumed by the
/// recovery-validation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallMetadata {
	/// The module's primary (waterfall) token.
	pub token: Address,
	/// Designated recipient for non-waterfall token recoveries, if set.
	pub non_waterfall_recipient: Option<Address>,
	/// The module's configured tranches.
	pub tranches: Vec<Tranche>,
}

impl WaterfallMetadata {
	/// Whether the given address may receive recovered non-waterfall funds.
	///
	/// A recipient is eligible when it is the designated non-waterfall
	/// recipient or appears in any tranche.
	pub fn is_recovery_recipient(&self, recipient: Address) -> bool {
		if self.non_waterfall_recipient == Some(recipient) {
			return true;
		}
		self.tranches.iter().any(|t| t.recipient == recipient)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_is_recovery_recipient() {
		let tranche_recipient = address!("1111111111111111111111111111111111111111");
		let designated = address!("2222222222222222222222222222222222222222");
		let stranger = address!("3333333333333333333333333333333333333333");

		let metadata = WaterfallMetadata {
			token: address!("4444444444444444444444444444444444444444"),
			non_waterfall_recipient: Some(designated),
			tranches: vec![Tranche {
				recipient: tranche_recipient,
				threshold: U256::from(100),
			}],
		};

		assert!(metadata.is_recovery_recipient(tranche_recipient));
		assert!(metadata.is_recovery_recipient(designated));
		assert!(!metadata.is_recovery_recipient(stranger));
	}
}
