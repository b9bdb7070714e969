//! Transient status messages shown above the product list.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class the message block is rendered with.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success-message",
            MessageKind::Error => "error-message",
        }
    }
}

/// A message that dismisses itself once `expires_at` is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| shown_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            kind,
            text: text.into(),
            shown_at,
            expires_at,
        }
    }

    pub fn success(text: impl Into<String>, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(MessageKind::Success, text, shown_at, ttl)
    }

    pub fn error(text: impl Into<String>, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(MessageKind::Error, text, shown_at, ttl)
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_after_ttl() {
        let shown = Utc::now();
        let msg = StatusMessage::success("saved", shown, Duration::from_secs(5));

        assert!(msg.is_visible_at(shown));
        assert!(msg.is_visible_at(shown + TimeDelta::milliseconds(4_999)));
        assert!(!msg.is_visible_at(shown + TimeDelta::seconds(5)));
    }

    #[test]
    fn zero_ttl_is_never_visible() {
        let shown = Utc::now();
        let msg = StatusMessage::error("nope", shown, Duration::ZERO);
        assert!(!msg.is_visible_at(shown));
    }

    #[test]
    fn css_class_follows_kind() {
        assert_eq!(MessageKind::Success.css_class(), "success-message");
        assert_eq!(MessageKind::Error.css_class(), "error-message");
    }
}
