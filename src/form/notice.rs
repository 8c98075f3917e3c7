//! Transient copy notice.
use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

pub const COPIED_TEXT: &str = "Copied!";
pub const NOTHING_TO_COPY_TEXT: &str = "No text found to copy.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Message shown after a copy attempt until `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: &'static str,
    pub expires_at: Instant,
}

impl Notice {
    pub fn copied(now: Instant) -> Self {
        Self::new(NoticeKind::Success, COPIED_TEXT, now)
    }

    pub fn nothing_to_copy(now: Instant) -> Self {
        Self::new(NoticeKind::Failure, NOTHING_TO_COPY_TEXT, now)
    }

    fn new(kind: NoticeKind, text: &'static str, now: Instant) -> Self {
        Self {
            kind,
            text,
            expires_at: now + NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
