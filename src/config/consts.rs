//! Centralized constants with different values for debug and release builds
//!
//! This module provides all CLI and configuration constants used throughout the application.
//! Values are conditionally compiled based on the build profile (debug vs release).

use std::time::Duration;

// =============================================================================
// Chain Defaults
// =============================================================================

/// Default Ethereum RPC endpoint (local Anvil node)
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Default remote-wallet relay endpoint
pub const DEFAULT_RELAY_URL: &str = "ws://127.0.0.1:8545";

/// Anvil deterministic address for the Greeter contract (deployer account #0, nonce 0)
pub const DEFAULT_GREETER_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Anvil deterministic address for the StandardToken contract (deployer account #0, nonce 1)
pub const DEFAULT_TOKEN_ADDRESS: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

/// Expected chain id; connecting to a different chain surfaces a warning
#[cfg(debug_assertions)]
pub const DEFAULT_CHAIN_ID: u64 = 31337; // Anvil for local development

#[cfg(not(debug_assertions))]
pub const DEFAULT_CHAIN_ID: u64 = 80001; // Mumbai testnet for release

// =============================================================================
// Dashboard Timing
// =============================================================================

/// How often the relay session watcher polls for account/chain changes
#[cfg(debug_assertions)]
pub const RELAY_POLL_INTERVAL: Duration = Duration::from_secs(2); // faster feedback in debug

#[cfg(not(debug_assertions))]
pub const RELAY_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Keyboard poll timeout for the UI loop
pub const UI_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// How long a transient notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(6);

/// How long a panel displays its success/error outcome before returning to idle
pub const PANEL_OUTCOME_TTL: Duration = Duration::from_secs(3);

// =============================================================================
// Error Decoding
// =============================================================================

/// Solidity Error(string) function selector
/// Used for decoding revert messages from contract calls
pub const ERROR_STRING_SELECTOR: &str = "08c379a0";
