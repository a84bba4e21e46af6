use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::contracts::format_token_amount;
use crate::notify::Level;

use super::panel::{Focus, PanelState};
use super::{short_address, App};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Wallet session
            Constraint::Min(10),   // Contract panels
            Constraint::Length(6), // Notifications
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_session(f, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_greeter_panel(f, panels[0], app);
    render_token_panel(f, panels[1], app);

    render_notifications(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn panel_style(state: &PanelState) -> Style {
    match state {
        PanelState::Idle => Style::default().fg(Color::White),
        PanelState::Pending => Style::default().fg(Color::Yellow),
        PanelState::Success(_) => Style::default().fg(Color::Green),
        PanelState::Error(_) => Style::default().fg(Color::Red),
    }
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}

fn render_session(f: &mut Frame, area: Rect, app: &App) {
    let status_line = match &app.session {
        Some(session) => Line::from(vec![
            Span::styled("Connected with ", Style::default().fg(Color::Cyan)),
            Span::styled(
                session.kind.label(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(
                short_address(&session.account),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("  (chain {})", session.chain_id),
                Style::default().fg(Color::Gray),
            ),
        ]),
        None => Line::from(vec![Span::styled(
            "Not connected: press 'i' for injected wallet, 'w' for relay session",
            Style::default().fg(Color::Red),
        )]),
    };

    let state_line = Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Cyan)),
        Span::styled(app.wallet_panel.label(), panel_style(&app.wallet_panel)),
    ]);

    let header = Paragraph::new(vec![status_line, state_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Wallet")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    f.render_widget(header, area);
}

fn render_greeter_panel(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Contract: ", Style::default().fg(Color::Cyan)),
            Span::raw(short_address(&app.config.greeter_address)),
        ]),
        Line::from(vec![
            Span::styled("Greeting: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                app.greeting.as_deref().unwrap_or("<not fetched>"),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        input_line(
            "[1] New greeting: ",
            &app.greeting_input,
            app.focus == Focus::Greeting,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("g", key_style()),
            Span::raw(": Fetch Greeting  "),
            Span::styled("s", key_style()),
            Span::raw(": Set Greeting"),
        ]),
    ];

    if app.greeter_panel.is_pending() {
        lines.push(Line::from(Span::styled(
            "Working...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Greeter Contract [{}]", app.greeter_panel.label()))
            .title_style(panel_style(&app.greeter_panel)),
    );

    f.render_widget(panel, area);
}

fn render_token_panel(f: &mut Frame, area: Rect, app: &App) {
    let balance_text = match (&app.balance, &app.token_meta) {
        (Some(balance), Some(meta)) => {
            format!("{} {}", format_token_amount(*balance, meta.decimals), meta.symbol)
        }
        (Some(balance), None) => balance.to_string(),
        (None, _) => "<not fetched>".to_string(),
    };

    let token_title = match &app.token_meta {
        Some(meta) => format!("{} ({}) [{}]", meta.name, meta.symbol, app.token_panel.label()),
        None => format!("Token Contract [{}]", app.token_panel.label()),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Contract: ", Style::default().fg(Color::Cyan)),
            Span::raw(short_address(&app.config.token_address)),
        ]),
        Line::from(vec![
            Span::styled("Balance: ", Style::default().fg(Color::Cyan)),
            Span::styled(balance_text, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        input_line(
            "[2] Recipient: ",
            &app.recipient_input,
            app.focus == Focus::Recipient,
        ),
        input_line(
            "[3] Amount:    ",
            &app.amount_input,
            app.focus == Focus::Amount,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("b", key_style()),
            Span::raw(": Get Balance  "),
            Span::styled("t", key_style()),
            Span::raw(": Send Token"),
        ]),
    ];

    if app.token_panel.is_pending() {
        lines.push(Line::from(Span::styled(
            "Working...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(token_title)
            .title_style(panel_style(&app.token_panel)),
    );

    f.render_widget(panel, area);
}

fn render_notifications(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .notifications
        .iter()
        .map(|n| {
            let style = match n.level {
                Level::Info => Style::default().fg(Color::Gray),
                Level::Success => Style::default().fg(Color::Green),
                Level::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::raw("• "),
                Span::styled(n.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Notifications")
            .title_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(list, area);
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut help_spans = vec![
        Span::styled("q", key_style()),
        Span::raw(": Quit  "),
        Span::styled("i", key_style()),
        Span::raw(": Connect injected  "),
        Span::styled("w", key_style()),
        Span::raw(": Connect relay  "),
        Span::styled("x", key_style()),
        Span::raw(": Disconnect  "),
        Span::styled("1/2/3", key_style()),
        Span::raw(": Edit fields  "),
    ];

    if app.focus != Focus::None {
        help_spans.push(Span::styled(
            "Editing: Enter/Esc to finish",
            Style::default().fg(Color::Yellow),
        ));
    }

    let footer = Paragraph::new(Line::from(help_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls")
            .title_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(footer, area);
}
