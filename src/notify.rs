use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::consts::NOTIFICATION_TTL;

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

/// A one-shot message surfaced to the user and dropped after its TTL
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: Level,
    pub text: String,
    created: Instant,
}

/// Bounded queue of transient notifications
#[derive(Debug)]
pub struct Notifications {
    entries: VecDeque<Notification>,
    ttl: Duration,
    capacity: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL, 6)
    }
}

impl Notifications {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
            capacity,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Level::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Level::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Level::Error, text);
    }

    pub fn push(&mut self, level: Level, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            level,
            text: text.into(),
            created: Instant::now(),
        });
    }

    /// Drop entries older than the TTL
    pub fn purge(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|n| now.saturating_duration_since(n.created) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iter() {
        let mut notifications = Notifications::default();
        notifications.success("connected");
        notifications.error("boom");

        let texts: Vec<_> = notifications.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["connected", "boom"]);
        assert_eq!(notifications.iter().next().unwrap().level, Level::Success);
    }

    #[test]
    fn test_purge_drops_expired_entries() {
        let mut notifications = Notifications::new(Duration::from_secs(5), 6);
        notifications.info("old");

        notifications.purge(Instant::now());
        assert_eq!(notifications.len(), 1);

        notifications.purge(Instant::now() + Duration::from_secs(6));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut notifications = Notifications::new(Duration::from_secs(60), 2);
        notifications.info("one");
        notifications.info("two");
        notifications.info("three");

        let texts: Vec<_> = notifications.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }
}
