//! Messages currently inside their display window.

use mdconsole_core::{Message, MessageLevel, MessageSource, StyledText};
use tracing::{debug, trace};

/// A message that has been dequeued and stamped with its show time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMessage {
    level: MessageLevel,
    text: StyledText,
    duration: f64,
    shown_at: f64,
}

impl ActiveMessage {
    /// Stamp `message` as shown at `shown_at`.
    ///
    /// Negative or NaN durations are floored to zero, leaving a message that
    /// expires on the first later update.
    pub fn new(message: Message, shown_at: f64) -> Self {
        let (level, text, duration) = message.into_parts();
        let duration = if duration >= 0.0 { duration } else { 0.0 };
        Self {
            level,
            text,
            duration,
            shown_at,
        }
    }

    /// Severity level.
    pub fn level(&self) -> MessageLevel {
        self.level
    }

    /// Message body.
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    /// Display duration in seconds (never negative).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time the message was dequeued.
    pub fn shown_at(&self) -> f64 {
        self.shown_at
    }

    /// Last instant the message is still active.
    pub fn expires_at(&self) -> f64 {
        self.shown_at + self.duration
    }

    /// True once `now` is strictly past the display window.
    pub fn is_expired(&self, now: f64) -> bool {
        now > self.expires_at()
    }
}

/// Ordered set of active messages, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ActiveMessageSet {
    messages: Vec<ActiveMessage>,
}

impl ActiveMessageSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every pending message from `source` into the set, stamped with `now`.
    ///
    /// Returns the number of messages ingested.
    pub fn ingest<S: MessageSource + ?Sized>(&mut self, source: &mut S, now: f64) -> usize {
        let mut count = 0;
        while let Some(message) = source.poll() {
            trace!(level = %message.level(), duration = message.duration(), "message shown");
            self.messages.push(ActiveMessage::new(message, now));
            count += 1;
        }
        count
    }

    /// Drop every message whose window ended before `now`.
    ///
    /// Returns the number of messages removed.
    pub fn purge(&mut self, now: f64) -> usize {
        let before = self.messages.len();
        self.messages.retain(|message| !message.is_expired(now));
        let removed = before - self.messages.len();
        if removed > 0 {
            debug!(removed, remaining = self.messages.len(), "expired console messages");
        }
        removed
    }

    /// Active messages, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ActiveMessage> {
        self.messages.iter()
    }

    /// Number of active messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing is active.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a ActiveMessageSet {
    type Item = &'a ActiveMessage;
    type IntoIter = std::slice::Iter<'a, ActiveMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn source(messages: &[(&str, f64)]) -> VecDeque<Message> {
        messages
            .iter()
            .map(|(text, duration)| Message::info(*text, *duration))
            .collect()
    }

    #[test]
    fn ingest_keeps_order_and_stamps_time() {
        let mut set = ActiveMessageSet::new();
        let mut queue = source(&[("a", 1.0), ("b", 2.0)]);
        assert_eq!(set.ingest(&mut queue, 5.0), 2);
        assert!(queue.is_empty());

        let texts: Vec<String> = set.iter().map(|m| m.text().to_string()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(set.iter().all(|m| m.shown_at() == 5.0));
    }

    #[test]
    fn later_ingest_appends_after_existing() {
        let mut set = ActiveMessageSet::new();
        set.ingest(&mut source(&[("old", 10.0)]), 0.0);
        set.ingest(&mut source(&[("new", 10.0)]), 1.0);
        let texts: Vec<String> = set.iter().map(|m| m.text().to_string()).collect();
        assert_eq!(texts, vec!["old", "new"]);
    }

    #[test]
    fn purge_is_strictly_after_expiry() {
        let mut set = ActiveMessageSet::new();
        set.ingest(&mut source(&[("a", 2.0)]), 1.0);

        assert_eq!(set.purge(3.0), 0);
        assert_eq!(set.len(), 1);

        assert_eq!(set.purge(3.000_001), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn purge_keeps_relative_order() {
        let mut set = ActiveMessageSet::new();
        set.ingest(&mut source(&[("long", 10.0), ("short", 1.0), ("mid", 5.0)]), 0.0);
        set.purge(2.0);
        let texts: Vec<String> = set.iter().map(|m| m.text().to_string()).collect();
        assert_eq!(texts, vec!["long", "mid"]);
    }

    #[test]
    fn negative_duration_is_floored() {
        let message = ActiveMessage::new(Message::warn("bad", -4.0), 2.0);
        assert_eq!(message.duration(), 0.0);
        assert!(!message.is_expired(2.0));
        assert!(message.is_expired(2.1));

        let nan = ActiveMessage::new(Message::warn("nan", f64::NAN), 0.0);
        assert_eq!(nan.duration(), 0.0);
    }

    #[test]
    fn empty_source_is_a_noop() {
        let mut set = ActiveMessageSet::new();
        assert_eq!(set.ingest(&mut VecDeque::<Message>::new(), 0.0), 0);
        assert_eq!(set.purge(100.0), 0);
        assert!(set.is_empty());
    }
}
