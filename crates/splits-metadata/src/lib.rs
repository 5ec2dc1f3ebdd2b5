//! Module metadata lookups for the splits client SDK.
//!
//! The recovery-validation step of the waterfall client needs the deployed
//! configuration of a module: its primary token, its designated
//! non-waterfall recipient, and its tranche recipients. This crate defines
//! the collaborator interface for those point lookups and ships an on-chain
//! implementation that reads them straight from the module contract.

use alloy_primitives::Address;
use async_trait::async_trait;
use splits_types::{ClientError, WaterfallMetadata};

/// Re-export implementations
pub mod implementations {
	pub mod onchain;
}

/// Trait defining the interface for the metadata collaborator.
///
/// Implementations supply point lookups of a deployed module's
/// configuration. No caching is required; callers issue one lookup per
/// operation that needs it.
#[async_trait]
pub trait MetadataInterface: Send + Sync {
	/// Fetches the deployed configuration of a waterfall module.
	async fn waterfall_metadata(
		&self,
		chain_id: u64,
		module: Address,
	) -> Result<WaterfallMetadata, ClientError>;
}
