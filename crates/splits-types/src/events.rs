//! Event log filtering and decoding helpers.
//!
//! Transaction-mode facades precompute one topic signature per logical event
//! at construction time and use [`decode_first_event`] to shape the receipt
//! of a submitted operation into structured event data.

use alloy_primitives::{Log, B256};
use alloy_sol_types::SolEvent;

use crate::ClientError;

/// Finds and decodes the first log matching the given topic signature.
///
/// Returns the decoded event alongside the raw log it came from. A receipt
/// without a matching log signals an unexpected on-chain outcome and fails
/// with [`ClientError::TransactionFailed`].
pub fn decode_first_event<E: SolEvent>(logs: &[Log], topic: B256) -> Result<(E, Log), ClientError> {
	let log = logs
		.iter()
		.find(|log| log.data.topics().first() == Some(&topic))
		.ok_or_else(|| {
			ClientError::TransactionFailed(format!("No log matching event topic {topic}"))
		})?;

	let decoded = E::decode_log(log, true).map_err(|e| {
		ClientError::TransactionFailed(format!("Failed to decode event log: {e}"))
	})?;

	Ok((decoded.data, log.clone()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{address, U256};
	use alloy_sol_types::sol;

	sol! {
		event Ping(address indexed sender, uint256 value);
		event Pong(uint256 value);
	}

	#[test]
	fn test_decode_first_event() {
		let sender = address!("1111111111111111111111111111111111111111");
		let emitter = address!("2222222222222222222222222222222222222222");
		let event = Ping {
			sender,
			value: U256::from(42),
		};
		let log = Log {
			address: emitter,
			data: event.encode_log_data(),
		};

		let (decoded, raw) =
			decode_first_event::<Ping>(&[log.clone()], Ping::SIGNATURE_HASH).unwrap();
		assert_eq!(decoded.sender, sender);
		assert_eq!(decoded.value, U256::from(42));
		assert_eq!(raw, log);
	}

	#[test]
	fn test_decode_skips_unrelated_logs() {
		let emitter = address!("2222222222222222222222222222222222222222");
		let unrelated = Log {
			address: emitter,
			data: Pong {
				value: U256::from(1),
			}
			.encode_log_data(),
		};
		let wanted = Log {
			address: emitter,
			data: Ping {
				sender: address!("1111111111111111111111111111111111111111"),
				value: U256::from(2),
			}
			.encode_log_data(),
		};

		let (decoded, _) =
			decode_first_event::<Ping>(&[unrelated, wanted], Ping::SIGNATURE_HASH).unwrap();
		assert_eq!(decoded.value, U256::from(2));
	}

	#[test]
	fn test_missing_event_fails() {
		let result = decode_first_event::<Ping>(&[], Ping::SIGNATURE_HASH);
		assert!(matches!(result, Err(ClientError::TransactionFailed(_))));
	}
}
