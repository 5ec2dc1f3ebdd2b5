//! Waterfall module clients.
//!
//! Typed wrappers around the waterfall factory and module contracts. The
//! crate exposes three mode-specialized clients sharing one transaction
//! builder, plus a read-only query facade.

/// Client facades, one per execution mode.
pub mod client;
/// Contract ABI bindings.
pub mod contracts;
/// Event types and topic table.
pub mod events;
/// Read-only module accessors.
pub mod queries;
/// Shared transaction builder and argument types.
pub mod transactions;

#[cfg(test)]
mod testutil;

pub use client::{WaterfallCallDataClient, WaterfallClient, WaterfallGasClient};
pub use events::{
	CreateWaterfallModule, RecoverNonWaterfallFunds, WaterfallEventTopics, WaterfallFunds,
	Withdrawal,
};
pub use queries::WaterfallQueries;
pub use transactions::{
	CreateWaterfallModuleArgs, RecoverNonWaterfallFundsArgs, TrancheInput, WaterfallFundsArgs,
	WithdrawPullFundsArgs,
};
