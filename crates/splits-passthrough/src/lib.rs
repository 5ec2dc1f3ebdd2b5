//! Pass-through wallet clients.
//!
//! Typed wrappers around the pass-through wallet factory and wallet
//! contracts, symmetric to the waterfall crate. Owner-gated operations
//! verify the configured signer against the wallet's on-chain owner before
//! submission; the read-only and encoding clients skip that check.

/// Client facades, one per execution mode.
pub mod client;
/// Contract ABI bindings.
pub mod contracts;
/// Event types and topic table.
pub mod events;
/// Read-only wallet accessors.
pub mod queries;
/// Shared transaction builder and argument types.
pub mod transactions;

#[cfg(test)]
mod testutil;

pub use client::{PassThroughCallDataClient, PassThroughClient, PassThroughGasClient};
pub use events::{
	CreatePassThroughWallet, ExecCalls, PassThrough, PassThroughEventTopics, SetPassThrough,
	SetPaused,
};
pub use queries::PassThroughQueries;
pub use transactions::{
	CallInput, CreatePassThroughWalletArgs, ExecCallsArgs, PassThroughTokensArgs,
	SetPassThroughArgs, SetPausedArgs,
};
