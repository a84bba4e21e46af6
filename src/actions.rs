//! Action layer between the view and the contract proxies
//!
//! Validation runs before anything touches a proxy: an action triggered with
//! no session, or with bad input, fails here and never reaches the chain.
//! Writes refresh the value they changed by re-running the matching read.

use alloy::primitives::{Address, B256, U256};
use anyhow::{Context, Result};

use crate::connector::Session;
use crate::contracts::{parse_token_amount, GreeterApi, TokenApi, TokenMeta};

/// Fail with a connection-validation error when no session is active
pub fn ensure_session(session: Option<&Session>) -> Result<&Session> {
    session.context("Please connect your wallet first")
}

/// Validate a Set Greeting request; returns the trimmed greeting text
pub fn validate_set_greeting(session: Option<&Session>, input: &str) -> Result<String> {
    ensure_session(session)?;
    let text = input.trim();
    if text.is_empty() {
        anyhow::bail!("Please enter a greeting");
    }
    Ok(text.to_string())
}

/// Validate a Send Token request; returns the parsed recipient and the raw
/// amount text. The amount is only scaled once the token's decimals are
/// known, in [`send_token`].
pub fn validate_send_token(
    session: Option<&Session>,
    recipient: &str,
    amount: &str,
) -> Result<(Address, String)> {
    ensure_session(session)?;
    let recipient = recipient.trim();
    if recipient.is_empty() {
        anyhow::bail!("Please enter a recipient address");
    }
    let to = recipient
        .parse::<Address>()
        .context("Invalid recipient address")?;
    let amount = amount.trim();
    if amount.is_empty() {
        anyhow::bail!("Please enter an amount");
    }
    Ok((to, amount.to_string()))
}

/// Read the current greeting
pub async fn fetch_greeting(greeter: &dyn GreeterApi) -> Result<String> {
    greeter.greet().await
}

/// Update the greeting, then re-read it for display
pub async fn set_greeting(greeter: &dyn GreeterApi, greeting: &str) -> Result<(B256, String)> {
    let tx_hash = greeter.set_greeting(greeting).await?;
    // The write does not refresh the displayed value by itself
    let current = greeter.greet().await?;
    Ok((tx_hash, current))
}

/// Read the connected account's balance along with the token metadata
pub async fn fetch_balance(token: &dyn TokenApi, account: Address) -> Result<(U256, TokenMeta)> {
    let meta = token.metadata().await?;
    let balance = token.balance_of(account).await?;
    Ok((balance, meta))
}

/// Transfer tokens, then re-read the sender's balance for display
///
/// The amount is scaled with the token's own decimals, read here just before
/// the transfer.
pub async fn send_token(
    token: &dyn TokenApi,
    sender: Address,
    to: Address,
    amount: &str,
) -> Result<(B256, U256, TokenMeta)> {
    let meta = token.metadata().await?;
    let amount = parse_token_amount(amount, meta.decimals)?;
    let tx_hash = token.transfer(to, amount).await?;
    let balance = token.balance_of(sender).await?;
    Ok((tx_hash, balance, meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ProviderKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn session() -> Session {
        Session {
            kind: ProviderKind::Injected,
            account: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
                .parse()
                .unwrap(),
            chain_id: 31337,
        }
    }

    /// Records every proxy invocation in order
    #[derive(Default)]
    struct RecordingGreeter {
        calls: Mutex<Vec<String>>,
        greeting: Mutex<String>,
        fail_write: bool,
    }

    #[async_trait]
    impl GreeterApi for RecordingGreeter {
        async fn greet(&self) -> Result<String> {
            self.calls.lock().unwrap().push("greet()".to_string());
            Ok(self.greeting.lock().unwrap().clone())
        }

        async fn set_greeting(&self, greeting: &str) -> Result<B256> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("setGreeting({greeting})"));
            if self.fail_write {
                anyhow::bail!("setGreeting reverted: user rejected");
            }
            *self.greeting.lock().unwrap() = greeting.to_string();
            Ok(B256::ZERO)
        }
    }

    struct RecordingToken {
        calls: Mutex<Vec<String>>,
        balance: U256,
        decimals: u8,
    }

    impl Default for RecordingToken {
        fn default() -> Self {
            Self {
                calls: Mutex::default(),
                balance: U256::ZERO,
                decimals: 18,
            }
        }
    }

    #[async_trait]
    impl TokenApi for RecordingToken {
        async fn metadata(&self) -> Result<TokenMeta> {
            self.calls.lock().unwrap().push("metadata()".to_string());
            Ok(TokenMeta {
                name: "Standard Token".to_string(),
                symbol: "STT".to_string(),
                decimals: self.decimals,
            })
        }

        async fn balance_of(&self, account: Address) -> Result<U256> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("balanceOf({account})"));
            Ok(self.balance)
        }

        async fn transfer(&self, to: Address, amount: U256) -> Result<B256> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("transfer({to},{amount})"));
            Ok(B256::ZERO)
        }
    }

    #[test]
    fn test_set_greeting_requires_session() {
        let err = validate_set_greeting(None, "hello").unwrap_err();
        assert!(err.to_string().contains("connect your wallet"));
    }

    #[test]
    fn test_set_greeting_requires_text() {
        let s = session();
        assert!(validate_set_greeting(Some(&s), "   ").is_err());
        assert_eq!(
            validate_set_greeting(Some(&s), " hello ").unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_send_token_requires_session() {
        let err = validate_send_token(None, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8", "1")
            .unwrap_err();
        assert!(err.to_string().contains("connect your wallet"));
    }

    #[test]
    fn test_send_token_empty_recipient_is_a_validation_error() {
        let s = session();
        let err = validate_send_token(Some(&s), "", "1").unwrap_err();
        assert!(err.to_string().contains("recipient"));
    }

    #[test]
    fn test_send_token_rejects_malformed_recipient_and_empty_amount() {
        let s = session();
        assert!(validate_send_token(Some(&s), "0x1234", "1").is_err());
        assert!(validate_send_token(
            Some(&s),
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "  "
        )
        .is_err());
    }

    #[tokio::test]
    async fn test_set_greeting_submits_once_then_refreshes() {
        let greeter = RecordingGreeter::default();

        let (_, current) = set_greeting(&greeter, "hello").await.unwrap();
        assert_eq!(current, "hello");

        // Exactly one submission with the argument, then exactly one read
        let calls = greeter.calls.lock().unwrap();
        assert_eq!(*calls, vec!["setGreeting(hello)", "greet()"]);
    }

    #[tokio::test]
    async fn test_failed_write_skips_the_refresh_read() {
        let greeter = RecordingGreeter {
            fail_write: true,
            ..Default::default()
        };

        let err = set_greeting(&greeter, "hello").await.unwrap_err();
        assert!(err.to_string().contains("reverted"));

        let calls = greeter.calls.lock().unwrap();
        assert_eq!(*calls, vec!["setGreeting(hello)"]);
    }

    #[tokio::test]
    async fn test_send_token_transfers_then_rereads_sender_balance() {
        let token = RecordingToken {
            balance: U256::from(7u64),
            ..Default::default()
        };
        let sender = session().account;
        let to = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
            .parse::<Address>()
            .unwrap();

        let (_, balance, meta) = send_token(&token, sender, to, "1").await.unwrap();
        assert_eq!(balance, U256::from(7u64));
        assert_eq!(meta.decimals, 18);

        let calls = token.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "metadata()".to_string(),
                format!("transfer({to},1000000000000000000)"),
                format!("balanceOf({sender})"),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_token_scales_with_the_token_decimals() {
        let token = RecordingToken {
            decimals: 6,
            ..Default::default()
        };
        let sender = session().account;
        let to = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
            .parse::<Address>()
            .unwrap();

        send_token(&token, sender, to, "1").await.unwrap();

        let calls = token.calls.lock().unwrap();
        assert!(calls.contains(&format!("transfer({to},1000000)")));
    }

    #[tokio::test]
    async fn test_send_token_rejects_non_positive_amount_before_transfer() {
        let token = RecordingToken::default();
        let sender = session().account;
        let to = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
            .parse::<Address>()
            .unwrap();

        assert!(send_token(&token, sender, to, "0").await.is_err());

        // The decimals read happens first; nothing is transferred
        let calls = token.calls.lock().unwrap();
        assert_eq!(*calls, vec!["metadata()".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_balance_reads_metadata_and_balance() {
        let token = RecordingToken::default();
        let account = session().account;

        let (balance, meta) = fetch_balance(&token, account).await.unwrap();
        assert_eq!(balance, U256::ZERO);
        assert_eq!(meta.symbol, "STT");
    }
}
