use alloy::{
    contract::{CallBuilder, CallDecoder},
    primitives::B256,
    providers::Provider,
};
use anyhow::{anyhow, Result};
use tokio::sync::Mutex;
use tracing::info;

use crate::config::consts::ERROR_STRING_SELECTOR;

/// Decode a Solidity Error(string) revert message from hex data
/// Returns the decoded error message if it's a standard Error(string), otherwise None
pub fn decode_error_string(revert_data: &str) -> Option<String> {
    // Remove 0x prefix if present
    let data = revert_data.strip_prefix("0x").unwrap_or(revert_data);

    if !data.starts_with(ERROR_STRING_SELECTOR) {
        return None;
    }

    // Skip selector (8 hex chars = 4 bytes)
    let encoded = &data[8..];

    // ABI-encode format for string:
    // - offset (32 bytes = 64 hex chars) - should be 0x20
    // - length (32 bytes = 64 hex chars)
    // - string data (padded to 32-byte boundary)

    if encoded.len() < 128 {
        return None; // Need at least offset + length
    }

    let offset_hex = &encoded[0..64];
    match u64::from_str_radix(offset_hex, 16) {
        Ok(32) => (),
        _ => return None,
    }

    let length_hex = &encoded[64..128];
    let length = u64::from_str_radix(length_hex, 16).ok()?;

    // Extract string data (skip offset and length, start at byte 64 = char 128)
    let string_bytes = hex::decode(&encoded[128..]).ok()?;

    // Take only the length bytes (ignore padding)
    if length as usize <= string_bytes.len() {
        if let Ok(decoded) = String::from_utf8(string_bytes[..length as usize].to_vec()) {
            return Some(decoded);
        }
    }

    None
}

/// Render a contract error for display, decoding an embedded Error(string)
/// revert payload when one is present
pub fn revert_message(error: &alloy::contract::Error) -> String {
    let rendered = error.to_string();

    if let Some(start) = rendered.find(&format!("0x{ERROR_STRING_SELECTOR}")) {
        let payload: String = rendered[start + 2..]
            .chars()
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        if let Some(message) = decode_error_string(&payload) {
            return message;
        }
    }

    rendered
}

/// Submit a state-changing call: pre-simulate, send, then await one block of
/// inclusion. Submission and confirmation failures carry distinct context.
pub(crate) async fn submit_call<P, D>(
    method: &str,
    call: CallBuilder<P, D>,
    tx_lock: &Mutex<()>,
) -> Result<B256>
where
    P: Provider + Clone,
    D: CallDecoder + Clone,
{
    // Pre-simulate to catch reverts with proper error messages
    if let Err(e) = call.call().await {
        return Err(anyhow!("{method} reverted: {}", revert_message(&e)));
    }

    // Serialize sends so concurrent panel actions do not race on the nonce
    let _guard = tx_lock.lock().await;
    let pending = call
        .send()
        .await
        .map_err(|e| anyhow!("{method} failed to send: {}", revert_message(&e)))?;

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| anyhow!("{method} confirmation failed: {e}"))?;
    let tx_hash = receipt.transaction_hash;
    info!(method = %method, tx_hash = ?tx_hash, gas_used = receipt.gas_used, "transaction confirmed");

    if !receipt.status() {
        return Err(anyhow!("{method} reverted on-chain. Tx hash: {tx_hash:?}"));
    }

    Ok(tx_hash)
}
