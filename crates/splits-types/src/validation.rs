//! Input validation helpers.
//!
//! Pure functions checking address well-formedness and tranche-array
//! well-formedness. All failures map to [`ClientError::InvalidArgument`] and
//! are raised before any network interaction.

use alloy_primitives::Address;

use crate::utils::{with_0x_prefix, without_0x_prefix};
use crate::waterfall::Tranche;
use crate::ClientError;

/// Validates and parses an address argument.
///
/// Accepts all-lowercase and all-uppercase hex with or without the `0x`
/// prefix. Mixed-case input must carry a valid EIP-55 checksum.
///
/// # Errors
///
/// Returns `ClientError::InvalidArgument` when the input is not 20 bytes of
/// hex or fails the checksum.
pub fn validate_address(input: &str) -> Result<Address, ClientError> {
	let trimmed = input.trim();
	let hex_part = without_0x_prefix(trimmed);

	let has_lowercase = hex_part.chars().any(|c| c.is_ascii_lowercase());
	let has_uppercase = hex_part.chars().any(|c| c.is_ascii_uppercase());

	if has_lowercase && has_uppercase {
		Address::parse_checksummed(with_0x_prefix(hex_part), None).map_err(|_| {
			ClientError::InvalidArgument(format!("Address {trimmed} has an invalid checksum"))
		})
	} else {
		hex_part
			.parse::<Address>()
			.map_err(|_| ClientError::InvalidArgument(format!("Invalid address: {trimmed}")))
	}
}

/// Validates structural invariants of a tranche list.
///
/// The list must be non-empty and its thresholds strictly increasing.
pub fn validate_tranches(tranches: &[Tranche]) -> Result<(), ClientError> {
	if tranches.is_empty() {
		return Err(ClientError::InvalidArgument(
			"Tranche list must not be empty".to_string(),
		));
	}

	for window in tranches.windows(2) {
		if window[1].threshold <= window[0].threshold {
			return Err(ClientError::InvalidArgument(format!(
				"Tranche thresholds must be strictly increasing, got {} after {}",
				window[1].threshold, window[0].threshold
			)));
		}
	}

	Ok(())
}
