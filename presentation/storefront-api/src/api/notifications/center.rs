use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use business::domain::notifier::{Notice, Notifier};

const DEFAULT_CAPACITY: usize = 50;

/// Keeps the latest notices until a client collects them. The oldest notice is dropped
/// once the queue is full.
pub struct NotificationCenter {
    queue: Mutex<VecDeque<Notice>>,
    capacity: usize,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Returns every pending notice, oldest first, and empties the queue.
    pub fn drain(&self) -> Vec<Notice> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.drain(..).collect()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notice: Notice) {
        tracing::debug!(target: "storefront", level = %notice.level, "{}", notice.message);
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::notifier::NoticeLevel;

    #[test]
    fn should_drain_notices_in_arrival_order() {
        let center = NotificationCenter::default();
        center.notify(Notice::success("Item removed"));
        center.notify(Notice::error("Failed to sync cart"));

        let notices = center.drain();

        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[1].message, "Failed to sync cart");
        assert!(center.drain().is_empty());
    }

    #[test]
    fn should_drop_oldest_notice_when_full() {
        let center = NotificationCenter::new(2);
        center.notify(Notice::info("first"));
        center.notify(Notice::info("second"));
        center.notify(Notice::info("third"));

        let messages: Vec<String> = center.drain().into_iter().map(|n| n.message).collect();

        assert_eq!(messages, vec!["second", "third"]);
    }
}
