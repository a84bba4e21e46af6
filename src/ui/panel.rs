use std::time::Instant;

use crate::config::consts::PANEL_OUTCOME_TTL;

/// Lifecycle of a dashboard panel
///
/// Each user-triggered action moves the panel `Idle → Pending`, resolves to
/// `Success` or `Error`, and decays back to `Idle` on a later tick. Panels
/// are independent; several may be pending at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Pending,
    Success(Instant),
    Error(Instant),
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState::Idle
    }
}

impl PanelState {
    /// An action has been dispatched for this panel
    pub fn begin(&mut self) {
        *self = PanelState::Pending;
    }

    /// The in-flight action resolved
    pub fn finish(&mut self, ok: bool, now: Instant) {
        *self = if ok {
            PanelState::Success(now)
        } else {
            PanelState::Error(now)
        };
    }

    /// Decay a displayed outcome back to idle once its hold time has passed
    pub fn tick(&mut self, now: Instant) {
        match *self {
            PanelState::Success(at) | PanelState::Error(at) => {
                if now.saturating_duration_since(at) >= PANEL_OUTCOME_TTL {
                    *self = PanelState::Idle;
                }
            }
            PanelState::Idle | PanelState::Pending => {}
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PanelState::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PanelState::Idle => "idle",
            PanelState::Pending => "pending...",
            PanelState::Success(_) => "ok",
            PanelState::Error(_) => "error",
        }
    }
}

/// Which input field is capturing keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    Greeting,
    Recipient,
    Amount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_action_lifecycle() {
        let mut panel = PanelState::default();
        assert_eq!(panel, PanelState::Idle);

        panel.begin();
        assert!(panel.is_pending());

        let now = Instant::now();
        panel.finish(true, now);
        assert_eq!(panel, PanelState::Success(now));

        // Outcome holds until its display interval has passed
        panel.tick(now);
        assert_eq!(panel, PanelState::Success(now));

        panel.tick(now + PANEL_OUTCOME_TTL + Duration::from_millis(1));
        assert_eq!(panel, PanelState::Idle);
    }

    #[test]
    fn test_error_outcome_also_returns_to_idle() {
        let mut panel = PanelState::Pending;
        let now = Instant::now();
        panel.finish(false, now);
        assert_eq!(panel, PanelState::Error(now));

        panel.tick(now + PANEL_OUTCOME_TTL);
        assert_eq!(panel, PanelState::Idle);
    }

    #[test]
    fn test_tick_leaves_pending_untouched() {
        let mut panel = PanelState::Pending;
        panel.tick(Instant::now() + Duration::from_secs(60));
        assert!(panel.is_pending());
    }
}
