//! Error taxonomy shared by all splits client crates.
//!
//! Every public operation in the SDK reports failures through [`ClientError`].
//! Validation failures are raised before any network interaction takes place;
//! transport failures surface through the `Network` variant without being
//! caught, wrapped further, or retried.

use thiserror::Error;

/// Errors produced by the splits client SDK.
#[derive(Debug, Error)]
pub enum ClientError {
	/// A caller-supplied argument is malformed or semantically invalid.
	///
	/// Raised synchronously, before any network call is issued.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	/// The configured signer is not the authorized owner for a gated operation.
	#[error("Unauthorized: {0}")]
	InvalidAuth(String),
	/// The resolved chain id is outside the configured set of networks.
	#[error("Chain {0} is not supported")]
	UnsupportedChain(u64),
	/// A signer-requiring execution mode was invoked without a configured signer.
	#[error("A signer is required for this operation but none is configured")]
	MissingSigner,
	/// A transaction id was obtained but the on-chain outcome was unexpected,
	/// e.g. the transaction reverted or produced no matching event.
	#[error("Transaction failed: {0}")]
	TransactionFailed(String),
	/// The executor returned a result variant inconsistent with its configured
	/// mode. This is an internal-consistency fault and not expected to trigger
	/// in correct operation.
	#[error("Unexpected response: expected {expected}, got {actual}")]
	UnexpectedResponse {
		expected: &'static str,
		actual: &'static str,
	},
	/// Error surfaced by the network transport collaborator.
	#[error("Network error: {0}")]
	Network(String),
	/// Error surfaced by the metadata collaborator.
	#[error("Metadata error: {0}")]
	Metadata(String),
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing or validating configuration.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl From<toml::de::Error> for ClientError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ClientError::Config(message)
	}
}
