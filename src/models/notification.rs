use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// Bell-menu event log. Newest entries come first; nothing is ever evicted.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationType,
    ) -> &Notification {
        self.push_at(title, message, kind, Utc::now())
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationType,
        timestamp: DateTime<Utc>,
    ) -> &Notification {
        let notification = Notification {
            id: uuid::Uuid::new_v4().simple().to_string(),
            title: title.into(),
            message: message.into(),
            kind,
            timestamp,
            is_read: false,
        };
        tracing::debug!(id = %notification.id, title = %notification.title, "Notification added");
        self.entries.insert(0, notification);
        &self.entries[0]
    }

    pub fn all(&self) -> &[Notification] {
        &self.entries
    }

    pub fn recent(&self, limit: usize) -> &[Notification] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read).count()
    }

    /// Returns false for an unknown id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.entries {
            n.is_read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut feed = NotificationFeed::default();
        feed.push("First", "one", NotificationType::Info);
        feed.push("Second", "two", NotificationType::Success);
        let titles: Vec<_> = feed.all().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn mark_read_affects_one_entry() {
        let mut feed = NotificationFeed::default();
        let id = feed.push("A", "a", NotificationType::Info).id.clone();
        feed.push("B", "b", NotificationType::Warning);
        assert!(feed.mark_read(&id));
        assert_eq!(feed.unread_count(), 1);
        assert!(!feed.mark_read("missing"));
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn mark_all_read_clears_unread_count() {
        let mut feed = NotificationFeed::default();
        for i in 0..5 {
            feed.push(format!("N{i}"), "msg", NotificationType::Error);
        }
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
        assert_eq!(feed.all().len(), 5);
    }

    #[test]
    fn recent_is_capped_by_length() {
        let mut feed = NotificationFeed::default();
        feed.push("Only", "one", NotificationType::Info);
        assert_eq!(feed.recent(5).len(), 1);
    }
}
