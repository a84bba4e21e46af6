use alloy::{
    primitives::{utils::format_ether, Address, U256},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use term_table::row::Row;
use term_table::table_cell::{Alignment as CellAlignment, TableCell};
use term_table::{Table, TableStyle};
use tracing::{info, warn};

/// Wallet validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    /// No private key configured; only relay sessions are possible
    NotConfigured,
    /// Wallet has no ETH balance
    InsufficientFunds,
    /// Wallet is ready to sign transactions
    Ready,
}

/// Load a signer from a private key string (with or without 0x prefix)
pub fn load_signer(private_key: &str) -> Result<PrivateKeySigner> {
    let key = private_key.trim_start_matches("0x");
    let signer = key
        .parse::<PrivateKeySigner>()
        .context("Failed to parse private key")?;
    Ok(signer)
}

/// Check if an address has funds on the given RPC endpoint
pub async fn check_balance(rpc_url: &str, address: Address) -> Result<U256> {
    let provider = ProviderBuilder::new()
        .connect(rpc_url)
        .await
        .context("Failed to connect to RPC endpoint")?;

    let balance = provider
        .get_balance(address)
        .await
        .context("Failed to fetch balance")?;

    Ok(balance)
}

/// Display the injected wallet status banner before the terminal enters raw mode
pub fn display_wallet_status(
    status: WalletStatus,
    address: Option<Address>,
    rpc_url: &str,
    eth_balance: U256,
) {
    let mut table = Table::new();
    table.style = TableStyle::extended();

    let (header, use_warn) = match status {
        WalletStatus::NotConfigured => ("⚠️  NO INJECTED WALLET CONFIGURED  ⚠️", true),
        WalletStatus::InsufficientFunds => ("❌  INSUFFICIENT FUNDS  ❌", true),
        WalletStatus::Ready => ("🎉 WALLET LOADED SUCCESSFULLY 🎉", false),
    };
    table.add_row(Row::new(vec![TableCell::builder(header)
        .col_span(2)
        .alignment(CellAlignment::Center)
        .build()]));

    if let Some(address) = address {
        table.add_row(Row::new(vec![
            TableCell::builder("Address")
                .alignment(CellAlignment::Right)
                .build(),
            TableCell::builder(format!("{address:?}"))
                .alignment(CellAlignment::Left)
                .build(),
        ]));

        table.add_row(Row::new(vec![
            TableCell::builder("ETH Balance")
                .alignment(CellAlignment::Right)
                .build(),
            TableCell::builder(format!("{} ETH", format_ether(eth_balance)))
                .alignment(CellAlignment::Left)
                .build(),
        ]));
    }

    table.add_row(Row::new(vec![
        TableCell::builder("RPC URL")
            .alignment(CellAlignment::Right)
            .build(),
        TableCell::builder(rpc_url.to_owned())
            .alignment(CellAlignment::Left)
            .build(),
    ]));

    let status_message = match status {
        WalletStatus::NotConfigured => {
            "❗ Set PRIVATE_KEY to connect an injected wallet, or use a relay session ❗"
        }
        WalletStatus::InsufficientFunds => {
            "❗ Please fund this address with ETH before sending transactions ❗"
        }
        WalletStatus::Ready => "✅ Ready to sign transactions",
    };
    table.add_row(Row::new(vec![TableCell::builder(status_message)
        .col_span(2)
        .alignment(CellAlignment::Center)
        .build()]));

    if use_warn {
        warn!("\n{}", table.render());
    } else {
        info!("\n{}", table.render());
    }
}
