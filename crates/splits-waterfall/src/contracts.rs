//! Solidity bindings for the waterfall module family.

use alloy_sol_types::sol;

sol! {
	/// Factory deploying waterfall modules.
	interface IWaterfallModuleFactory {
		/// Emitted when a new waterfall module is deployed.
		event CreateWaterfallModule(
			address indexed waterfallModule,
			address token,
			address nonWaterfallRecipient,
			address[] recipients,
			uint256[] thresholds
		);

		function createWaterfallModule(
			address token,
			address nonWaterfallRecipient,
			address[] recipients,
			uint256[] thresholds
		) external returns (address wm);
	}

	/// A deployed waterfall module.
	interface IWaterfallModule {
		/// Emitted when funds are distributed across the tranches.
		event WaterfallFunds(address[] recipients, uint256[] payouts, uint256 pullFlag);
		/// Emitted when non-waterfall tokens are recovered.
		event RecoverNonWaterfallFunds(address nonWaterfallToken, address recipient, uint256 amount);
		/// Emitted when pulled funds are withdrawn for an account.
		event Withdrawal(address account, uint256 amount);

		function waterfallFunds() external;
		function waterfallFundsPull() external;
		function recoverNonWaterfallFunds(address nonWaterfallToken, address recipient) external;
		function withdraw(address account) external;

		function distributedFunds() external view returns (uint256);
		function fundsPendingWithdrawal() external view returns (uint256);
		function getPullBalance(address account) external view returns (uint256);
		function getTranches() external view returns (address[] memory recipients, uint256[] memory thresholds);
		function token() external view returns (address);
		function nonWaterfallRecipient() external view returns (address);
	}
}
