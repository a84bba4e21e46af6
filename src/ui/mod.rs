use alloy::primitives::{Address, B256, U256};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use crate::actions;
use crate::config::consts::UI_POLL_TIMEOUT;
use crate::config::DashboardConfig;
use crate::connector::{ProviderKind, Session, SessionEvent, WalletConnector};
use crate::contracts::{ContractClients, ContractConfig, GreeterApi, TokenApi, TokenMeta};
use crate::notify::Notifications;

pub mod panel;
pub mod render;

use panel::{Focus, PanelState};

/// Format an address or hash to a shortened format (0x1234...5678)
pub fn format_short_hex(hex: &str) -> String {
    if hex.len() > 12 {
        format!("{}...{}", &hex[..6], &hex[hex.len() - 4..])
    } else {
        hex.to_string()
    }
}

pub fn short_address(address: &Address) -> String {
    format_short_hex(&format!("{address}"))
}

/// User-triggered dashboard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    ConnectInjected,
    ConnectRelay,
    Disconnect,
    FetchGreeting,
    SetGreeting,
    FetchBalance,
    SendToken,
}

/// Results reported back from spawned action tasks
pub enum UiEvent {
    Connected {
        session: Session,
        greeter: Arc<dyn GreeterApi>,
        token: Arc<dyn TokenApi>,
        chain_warning: Option<String>,
    },
    ConnectFailed(String),
    GreetingFetched(Result<String, String>),
    GreetingSet(Result<(B256, String), String>),
    BalanceFetched(Result<(U256, TokenMeta), String>),
    TokenSent(Result<(B256, U256, TokenMeta), String>),
}

/// Dashboard state: the session, the contract proxies, panel lifecycles and
/// pending form input. All of it is explicit and owned here; nothing survives
/// the process.
pub struct App {
    config: DashboardConfig,
    contract_config: ContractConfig,
    connector: Arc<WalletConnector>,
    events_tx: mpsc::UnboundedSender<UiEvent>,

    pub(crate) session: Option<Session>,
    pub(crate) greeter: Option<Arc<dyn GreeterApi>>,
    pub(crate) token: Option<Arc<dyn TokenApi>>,

    pub(crate) greeting: Option<String>,
    pub(crate) balance: Option<U256>,
    pub(crate) token_meta: Option<TokenMeta>,

    pub(crate) wallet_panel: PanelState,
    pub(crate) greeter_panel: PanelState,
    pub(crate) token_panel: PanelState,

    pub(crate) notifications: Notifications,

    pub(crate) focus: Focus,
    pub(crate) greeting_input: String,
    pub(crate) recipient_input: String,
    pub(crate) amount_input: String,

    pub(crate) should_quit: bool,
}

impl App {
    pub fn new(
        config: DashboardConfig,
        connector: Arc<WalletConnector>,
        events_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let contract_config = ContractConfig::new(config.greeter_address, config.token_address);
        Self {
            config,
            contract_config,
            connector,
            events_tx,
            session: None,
            greeter: None,
            token: None,
            greeting: None,
            balance: None,
            token_meta: None,
            wallet_panel: PanelState::default(),
            greeter_panel: PanelState::default(),
            token_panel: PanelState::default(),
            notifications: Notifications::default(),
            focus: Focus::default(),
            greeting_input: String::new(),
            recipient_input: String::new(),
            amount_input: String::new(),
            should_quit: false,
        }
    }

    /// Dispatch a user-triggered action
    ///
    /// Validation happens here, before anything is spawned: an action that
    /// fails validation never reaches a contract proxy.
    pub fn trigger(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ConnectInjected => self.connect(ProviderKind::Injected),
            DashboardAction::ConnectRelay => self.connect(ProviderKind::Relay),
            DashboardAction::Disconnect => {
                self.connector.disconnect();
                self.clear_session();
                self.notifications.success("Wallet disconnected");
            }
            DashboardAction::FetchGreeting => self.fetch_greeting(),
            DashboardAction::SetGreeting => self.set_greeting(),
            DashboardAction::FetchBalance => self.fetch_balance(),
            DashboardAction::SendToken => self.send_token(),
        }
    }

    fn connect(&mut self, kind: ProviderKind) {
        self.wallet_panel.begin();
        let connector = self.connector.clone();
        let contract_config = self.contract_config.clone();
        let expected_chain_id = self.config.expected_chain_id;
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let event = match connector.connect(kind).await {
                Ok((session, provider)) => {
                    let clients =
                        ContractClients::new(provider, session.account, &contract_config);
                    let chain_warning = (session.chain_id != expected_chain_id).then(|| {
                        format!(
                            "Connected to chain {}, expected {expected_chain_id}",
                            session.chain_id
                        )
                    });
                    UiEvent::Connected {
                        session,
                        greeter: Arc::new(clients.greeter),
                        token: Arc::new(clients.token),
                        chain_warning,
                    }
                }
                Err(e) => UiEvent::ConnectFailed(format!("{e:#}")),
            };
            let _ = tx.send(event);
        });
    }

    fn fetch_greeting(&mut self) {
        if let Err(e) = actions::ensure_session(self.session.as_ref()) {
            self.notifications.error(format!("{e:#}"));
            return;
        }
        let Some(greeter) = self.greeter.clone() else {
            return;
        };

        self.greeter_panel.begin();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = actions::fetch_greeting(greeter.as_ref())
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(UiEvent::GreetingFetched(result));
        });
    }

    fn set_greeting(&mut self) {
        let text = match actions::validate_set_greeting(self.session.as_ref(), &self.greeting_input)
        {
            Ok(text) => text,
            Err(e) => {
                self.notifications.error(format!("{e:#}"));
                return;
            }
        };
        let Some(greeter) = self.greeter.clone() else {
            return;
        };

        self.greeter_panel.begin();
        self.notifications
            .info("Transaction sent. Waiting for confirmation...");
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = actions::set_greeting(greeter.as_ref(), &text)
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(UiEvent::GreetingSet(result));
        });
    }

    fn fetch_balance(&mut self) {
        let account = match actions::ensure_session(self.session.as_ref()) {
            Ok(session) => session.account,
            Err(e) => {
                self.notifications.error(format!("{e:#}"));
                return;
            }
        };
        let Some(token) = self.token.clone() else {
            return;
        };

        self.token_panel.begin();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = actions::fetch_balance(token.as_ref(), account)
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(UiEvent::BalanceFetched(result));
        });
    }

    fn send_token(&mut self) {
        let (to, amount) = match actions::validate_send_token(
            self.session.as_ref(),
            &self.recipient_input,
            &self.amount_input,
        ) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.notifications.error(format!("{e:#}"));
                return;
            }
        };
        let sender = match self.session.as_ref() {
            Some(session) => session.account,
            None => return,
        };
        let Some(token) = self.token.clone() else {
            return;
        };

        self.token_panel.begin();
        self.notifications
            .info("Transaction sent. Waiting for confirmation...");
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = actions::send_token(token.as_ref(), sender, to, &amount)
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(UiEvent::TokenSent(result));
        });
    }

    /// Apply the result of a spawned action task
    pub fn apply_ui_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::Connected {
                session,
                greeter,
                token,
                chain_warning,
            } => {
                self.wallet_panel.finish(true, now);
                self.notifications.success(format!(
                    "Connected with {}: {}",
                    session.kind.label(),
                    short_address(&session.account)
                ));
                if let Some(warning) = chain_warning {
                    self.notifications.info(warning);
                }
                self.session = Some(session);
                self.greeter = Some(greeter);
                self.token = Some(token);
            }
            UiEvent::ConnectFailed(e) => {
                self.wallet_panel.finish(false, now);
                self.notifications
                    .error(format!("Error connecting wallet: {e}"));
            }
            UiEvent::GreetingFetched(result) => match result {
                Ok(greeting) => {
                    self.greeter_panel.finish(true, now);
                    self.notifications.success(format!("Greeting: {greeting}"));
                    self.greeting = Some(greeting);
                }
                Err(e) => {
                    self.greeter_panel.finish(false, now);
                    self.notifications.error(format!("Error: {e}"));
                }
            },
            UiEvent::GreetingSet(result) => match result {
                Ok((tx_hash, greeting)) => {
                    self.greeter_panel.finish(true, now);
                    self.notifications.success(format!(
                        "Greeting updated successfully! TX: {}",
                        format_short_hex(&format!("{tx_hash:?}"))
                    ));
                    self.greeting = Some(greeting);
                }
                Err(e) => {
                    self.greeter_panel.finish(false, now);
                    self.notifications.error(format!("Error: {e}"));
                }
            },
            UiEvent::BalanceFetched(result) => match result {
                Ok((balance, meta)) => {
                    self.token_panel.finish(true, now);
                    self.notifications.success(format!(
                        "Balance: {} {}",
                        crate::contracts::format_token_amount(balance, meta.decimals),
                        meta.symbol
                    ));
                    self.balance = Some(balance);
                    self.token_meta = Some(meta);
                }
                Err(e) => {
                    self.token_panel.finish(false, now);
                    self.notifications.error(format!("Error: {e}"));
                }
            },
            UiEvent::TokenSent(result) => match result {
                Ok((tx_hash, balance, meta)) => {
                    self.token_panel.finish(true, now);
                    self.notifications.success(format!(
                        "Tokens sent successfully! TX: {}",
                        format_short_hex(&format!("{tx_hash:?}"))
                    ));
                    self.balance = Some(balance);
                    self.token_meta = Some(meta);
                }
                Err(e) => {
                    self.token_panel.finish(false, now);
                    self.notifications.error(format!("Error: {e}"));
                }
            },
        }
    }

    /// Apply an asynchronous session notification
    ///
    /// These can arrive between any two view operations; a disconnect here
    /// leaves every contract control disabled until the user reconnects.
    pub fn apply_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AccountsChanged(account) => {
                if let Some(session) = self.session.as_mut() {
                    session.account = account;
                    self.notifications.success("Account changed");
                }
            }
            SessionEvent::ChainChanged(chain_id) => {
                if let Some(session) = self.session.as_mut() {
                    session.chain_id = chain_id;
                    self.notifications.success("Chain changed");
                }
            }
            SessionEvent::Disconnected => {
                self.clear_session();
                self.notifications.error("Wallet session disconnected");
            }
        }
    }

    fn clear_session(&mut self) {
        self.session = None;
        self.greeter = None;
        self.token = None;
    }

    /// Decay panel outcomes and expired notifications
    pub fn on_tick(&mut self, now: Instant) {
        self.wallet_panel.tick(now);
        self.greeter_panel.tick(now);
        self.token_panel.tick(now);
        self.notifications.purge(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // An active input field captures keystrokes first
        if self.focus != Focus::None {
            let buffer = match self.focus {
                Focus::Greeting => &mut self.greeting_input,
                Focus::Recipient => &mut self.recipient_input,
                Focus::Amount => &mut self.amount_input,
                Focus::None => unreachable!(),
            };
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.focus = Focus::None,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('i') => self.trigger(DashboardAction::ConnectInjected),
            KeyCode::Char('w') => self.trigger(DashboardAction::ConnectRelay),
            KeyCode::Char('x') => self.trigger(DashboardAction::Disconnect),
            KeyCode::Char('g') => self.trigger(DashboardAction::FetchGreeting),
            KeyCode::Char('s') => self.trigger(DashboardAction::SetGreeting),
            KeyCode::Char('b') => self.trigger(DashboardAction::FetchBalance),
            KeyCode::Char('t') => self.trigger(DashboardAction::SendToken),
            KeyCode::Char('1') => self.focus = Focus::Greeting,
            KeyCode::Char('2') => self.focus = Focus::Recipient,
            KeyCode::Char('3') => self.focus = Focus::Amount,
            _ => {}
        }
    }
}

/// Run the dashboard until the user quits
pub async fn run_dashboard(config: DashboardConfig) -> Result<()> {
    let connector = Arc::new(WalletConnector::new(config.clone()));
    let session_events = connector.subscribe();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, connector, events_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, events_rx, session_events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut events_rx: mpsc::UnboundedReceiver<UiEvent>,
    mut session_events: broadcast::Receiver<SessionEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render::ui(f, app))?;

        // Results of spawned action tasks
        while let Ok(event) = events_rx.try_recv() {
            app.apply_ui_event(event, Instant::now());
        }

        // Asynchronous session notifications
        loop {
            match session_events.try_recv() {
                Ok(event) => app.apply_session_event(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Session event subscriber lagged");
                }
                Err(_) => break,
            }
        }

        app.on_tick(Instant::now());

        // Handle input with timeout
        if event::poll(UI_POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.connector.disconnect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{
        DEFAULT_CHAIN_ID, DEFAULT_GREETER_ADDRESS, DEFAULT_RELAY_URL, DEFAULT_RPC_URL,
        DEFAULT_TOKEN_ADDRESS,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_config() -> DashboardConfig {
        DashboardConfig {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            project_id: "test-project".to_string(),
            greeter_address: DEFAULT_GREETER_ADDRESS.parse().unwrap(),
            token_address: DEFAULT_TOKEN_ADDRESS.parse().unwrap(),
            private_key: None,
            expected_chain_id: DEFAULT_CHAIN_ID,
        }
    }

    fn test_session() -> Session {
        Session {
            kind: ProviderKind::Relay,
            account: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
                .parse()
                .unwrap(),
            chain_id: DEFAULT_CHAIN_ID,
        }
    }

    fn test_app() -> (App, mpsc::UnboundedReceiver<UiEvent>) {
        let config = test_config();
        let connector = Arc::new(WalletConnector::new(config.clone()));
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(config, connector, tx), rx)
    }

    #[derive(Default)]
    struct CountingGreeter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GreeterApi for CountingGreeter {
        async fn greet(&self) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("hello".to_string())
        }

        async fn set_greeting(&self, _greeting: &str) -> anyhow::Result<B256> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(B256::ZERO)
        }
    }

    #[derive(Default)]
    struct CountingToken {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TokenApi for CountingToken {
        async fn metadata(&self) -> anyhow::Result<TokenMeta> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TokenMeta {
                name: "Standard Token".to_string(),
                symbol: "STT".to_string(),
                decimals: 18,
            })
        }

        async fn balance_of(&self, _account: Address) -> anyhow::Result<U256> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(U256::ZERO)
        }

        async fn transfer(&self, _to: Address, _amount: U256) -> anyhow::Result<B256> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(B256::ZERO)
        }
    }

    /// Records transferred base-unit amounts for a token with few decimals
    struct SixDecimalToken {
        transfers: std::sync::Mutex<Vec<U256>>,
    }

    #[async_trait]
    impl TokenApi for SixDecimalToken {
        async fn metadata(&self) -> anyhow::Result<TokenMeta> {
            Ok(TokenMeta {
                name: "Six Decimal Token".to_string(),
                symbol: "SIX".to_string(),
                decimals: 6,
            })
        }

        async fn balance_of(&self, _account: Address) -> anyhow::Result<U256> {
            Ok(U256::ZERO)
        }

        async fn transfer(&self, _to: Address, amount: U256) -> anyhow::Result<B256> {
            self.transfers.lock().unwrap().push(amount);
            Ok(B256::ZERO)
        }
    }

    #[test]
    fn test_format_short_hex() {
        assert_eq!(
            format_short_hex("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            "0x7099...79C8"
        );
        assert_eq!(format_short_hex("0x1234"), "0x1234");
    }

    #[tokio::test]
    async fn test_actions_without_session_never_reach_the_proxy() {
        let (mut app, _rx) = test_app();
        let greeter = Arc::new(CountingGreeter::default());
        let token = Arc::new(CountingToken::default());
        // Stale proxies with no session: validation must stop everything
        app.greeter = Some(greeter.clone());
        app.token = Some(token.clone());

        app.trigger(DashboardAction::FetchGreeting);
        app.trigger(DashboardAction::SetGreeting);
        app.trigger(DashboardAction::FetchBalance);
        app.trigger(DashboardAction::SendToken);

        assert_eq!(greeter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(token.calls.load(Ordering::SeqCst), 0);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.text.contains("connect your wallet")));
        assert!(!app.greeter_panel.is_pending());
        assert!(!app.token_panel.is_pending());
    }

    #[tokio::test]
    async fn test_set_greeting_flow() {
        let (mut app, mut rx) = test_app();
        let greeter = Arc::new(CountingGreeter::default());
        app.session = Some(test_session());
        app.greeter = Some(greeter.clone());
        app.greeting_input = "hello".to_string();

        app.trigger(DashboardAction::SetGreeting);
        assert!(app.greeter_panel.is_pending());

        let event = rx.recv().await.expect("task must report back");
        app.apply_ui_event(event, Instant::now());

        // One submission (with confirmation wait) plus one refresh read
        assert_eq!(greeter.calls.load(Ordering::SeqCst), 2);
        assert_eq!(app.greeting.as_deref(), Some("hello"));
        assert!(matches!(app.greeter_panel, PanelState::Success(_)));
    }

    #[tokio::test]
    async fn test_send_token_with_empty_recipient_is_rejected() {
        let (mut app, _rx) = test_app();
        let token = Arc::new(CountingToken::default());
        app.session = Some(test_session());
        app.token = Some(token.clone());
        app.recipient_input = String::new();
        app.amount_input = "1".to_string();

        app.trigger(DashboardAction::SendToken);

        assert_eq!(token.calls.load(Ordering::SeqCst), 0);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.text.contains("recipient")));
        assert!(!app.token_panel.is_pending());
    }

    #[tokio::test]
    async fn test_send_token_scales_with_fetched_decimals() {
        let (mut app, mut rx) = test_app();
        let token = Arc::new(SixDecimalToken {
            transfers: std::sync::Mutex::new(Vec::new()),
        });
        app.session = Some(test_session());
        app.token = Some(token.clone());
        // No balance fetch has happened yet; the send path must still read
        // the token's decimals before scaling the amount
        app.recipient_input = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC".to_string();
        app.amount_input = "1".to_string();

        app.trigger(DashboardAction::SendToken);

        let event = rx.recv().await.expect("task must report back");
        app.apply_ui_event(event, Instant::now());

        assert_eq!(
            *token.transfers.lock().unwrap(),
            vec![U256::from(1_000_000u64)]
        );
        assert_eq!(app.token_meta.as_ref().unwrap().decimals, 6);
        assert!(matches!(app.token_panel, PanelState::Success(_)));
    }

    #[test]
    fn test_relay_disconnect_clears_the_session() {
        let (mut app, _rx) = test_app();
        app.session = Some(test_session());
        app.greeter = Some(Arc::new(CountingGreeter::default()));
        app.token = Some(Arc::new(CountingToken::default()));

        app.apply_session_event(SessionEvent::Disconnected);

        assert!(app.session.is_none());
        assert!(app.greeter.is_none());
        assert!(app.token.is_none());
        assert!(app
            .notifications
            .iter()
            .any(|n| n.text.contains("disconnected")));
    }

    #[test]
    fn test_accounts_changed_updates_displayed_account() {
        let (mut app, _rx) = test_app();
        app.session = Some(test_session());

        let new_account: Address = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
            .parse()
            .unwrap();
        app.apply_session_event(SessionEvent::AccountsChanged(new_account));

        assert_eq!(app.session.as_ref().unwrap().account, new_account);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.text.contains("Account changed")));
    }

    #[test]
    fn test_chain_changed_updates_the_session_chain() {
        let (mut app, _rx) = test_app();
        app.session = Some(test_session());

        app.apply_session_event(SessionEvent::ChainChanged(80001));

        assert_eq!(app.session.as_ref().unwrap().chain_id, 80001);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.text.contains("Chain changed")));
    }

    #[test]
    fn test_session_events_without_session_change_nothing() {
        let (mut app, _rx) = test_app();

        app.apply_session_event(SessionEvent::AccountsChanged(Address::ZERO));
        app.apply_session_event(SessionEvent::ChainChanged(1));

        assert!(app.session.is_none());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_input_focus_captures_keystrokes() {
        let (mut app, _rx) = test_app();

        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        assert_eq!(app.focus, Focus::Greeting);

        for c in "hi".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(app.greeting_input, "hi");

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.greeting_input, "h");

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.focus, Focus::None);

        // 'q' quits only outside of an input field
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
