// portal/src/notifications.rs
//! Non-blocking, dismissible user messages. Errors and confirmations are
//! queued here instead of interrupting the user; nothing in the queue halts
//! execution.
use std::collections::VecDeque;
use std::sync::Mutex;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

#[derive(Default)]
pub struct NotificationQueue {
    inner: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, severity: Severity, message: &str) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            severity,
            message: message.to_string(),
        };
        let id = notification.id;
        if let Ok(mut queue) = self.inner.lock() {
            queue.push_back(notification);
        }
        id
    }

    /// Removes one message. Dismissing an id that is already gone is a no-op.
    pub fn dismiss(&self, id: Uuid) -> bool {
        if let Ok(mut queue) = self.inner.lock() {
            if let Some(pos) = queue.iter().position(|n| n.id == id) {
                queue.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
