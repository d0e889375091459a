use serde::{Deserialize, Serialize};

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    pub limit: usize,
    pub duration_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            limit: 1,
            duration_ms: 5000,
        }
    }
}

// bounded notification queue
//
// when full, the oldest toast makes room for the newest one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    limit: usize,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        ToastQueue {
            items: Vec::new(),
            limit: limit.max(1),
            next_id: 0,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });

        if self.items.len() > self.limit {
            let excess = self.items.len() - self.limit;
            self.items.drain(..excess);
        }

        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::new(ToastConfig::default().limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_oldest_at_limit() {
        let mut queue = ToastQueue::new(1);
        queue.push("first", "a");
        let second = queue.push("second", "b");

        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
        assert_eq!(queue.items()[0].title, "second");
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push("a", "");
        let b = queue.push("b", "");
        let c = queue.push("c", "");

        queue.dismiss(b);
        let ids: Vec<_> = queue.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);

        // stale ids are ignored
        queue.dismiss(b);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn zero_limit_still_shows_one() {
        let mut queue = ToastQueue::new(0);
        queue.push("only", "");
        assert!(!queue.is_empty());
    }
}
