//! Value types for the pass-through wallet family.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A single call in a batch executed through a pass-through wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallItem {
	/// Call target.
	pub to: Address,
	/// Native value attached to the call, in wei.
	pub value: U256,
	/// Raw call data.
	pub data: Bytes,
}
