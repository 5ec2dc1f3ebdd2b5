//! Solidity bindings for the pass-through wallet family.

use alloy_sol_types::sol;

sol! {
	/// Initial configuration of a pass-through wallet.
	#[derive(Debug, PartialEq, Eq)]
	struct InitParams {
		address owner;
		bool paused;
		address passThrough;
	}

	/// A single call forwarded by the wallet owner.
	#[derive(Debug, PartialEq, Eq)]
	struct Call {
		address to;
		uint256 value;
		bytes data;
	}

	/// Factory deploying pass-through wallets.
	interface IPassThroughWalletFactory {
		/// Emitted when a new pass-through wallet is deployed.
		event CreatePassThroughWallet(address indexed passThroughWallet, InitParams params);

		function createPassThroughWallet(InitParams calldata params)
			external
			returns (address passThroughWallet);
	}

	/// A deployed pass-through wallet.
	interface IPassThroughWallet {
		/// Emitted when token balances are forwarded to the pass-through target.
		event PassThrough(address[] tokens, uint256[] amounts);
		/// Emitted when the owner redirects the pass-through target.
		event SetPassThrough(address passThrough);
		/// Emitted when the owner flips the pause flag.
		event SetPaused(bool paused);
		/// Emitted when the owner executes arbitrary calls through the wallet.
		event ExecCalls(Call[] calls);

		function passThroughTokens(address[] calldata tokens) external;
		function setPassThrough(address passThrough) external;
		function setPaused(bool paused) external;
		function execCalls(Call[] calldata calls)
			external
			payable
			returns (uint256 blockNumber, bytes[] memory returnData);

		function owner() external view returns (address);
		function paused() external view returns (bool);
		function passThrough() external view returns (address);
	}
}
