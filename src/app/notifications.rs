use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn classification_failed() -> Self {
        Self::destructive(
            "Classification Failed",
            "There was an error classifying the image. Please try again.",
        )
    }

    pub fn classification_timed_out() -> Self {
        Self::destructive(
            "Classification Timed Out",
            "The classification service took too long to answer. Please try again.",
        )
    }

    pub fn unreadable_image(reason: impl std::fmt::Display) -> Self {
        Self::destructive("Could not open image", reason.to_string())
    }

    pub fn saved_to_history() -> Self {
        Self::info(
            "Saved to History",
            "Your analysis has been saved successfully.",
        )
    }

    pub fn history_coming_soon() -> Self {
        Self::info("History", "History feature coming soon!")
    }
}

#[derive(Debug)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            capacity: 4,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
    }

    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    pub fn dismiss(&mut self, index: usize) {
        self.toasts.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
