//! Common types for the splits client SDK.
//!
//! This crate defines the value types shared by every client crate: the
//! transaction pipeline shapes, per-chain configuration, domain value
//! objects, the shared error taxonomy, and the validation helpers applied
//! before any network interaction.

/// Client configuration loading.
pub mod config;
/// Error taxonomy shared by all client crates.
pub mod errors;
/// Event log filtering and decoding helpers.
pub mod events;
/// Network configuration types.
pub mod networks;
/// Pass-through wallet value types.
pub mod passthrough;
/// Secure string type for signer private keys.
pub mod secret_string;
/// Transaction pipeline types.
pub mod transaction;
/// String formatting utilities.
pub mod utils;
/// Input validation helpers.
pub mod validation;
/// Waterfall module value types.
pub mod waterfall;

// Re-export all types for convenient access
pub use config::SplitsConfig;
pub use errors::ClientError;
pub use events::decode_first_event;
pub use networks::{deserialize_networks, ChainConfig, NetworksConfig};
pub use passthrough::CallItem;
pub use secret_string::SecretString;
pub use transaction::{
	CallData, CallReceipt, ContractCall, EventResponse, ExecutionMode, TransactionOverrides,
	TransactionResult,
};
pub use utils::{with_0x_prefix, without_0x_prefix};
pub use validation::{validate_address, validate_tranches};
pub use waterfall::{Tranche, WaterfallMetadata};
