use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize)]
pub struct ApiActivity {
    pub timestamp: DateTime<Utc>,
    pub action: String,
}

/// Partner API key in the `pk_<9>_<16>` shape.
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub key: String,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn generate(now: DateTime<Utc>) -> Self {
        let head = uuid::Uuid::new_v4().simple().to_string();
        let tail = uuid::Uuid::new_v4().simple().to_string();
        Self {
            key: format!("pk_{}_{}", &head[..9], &tail[..16]),
            created_at: now,
        }
    }

    pub fn masked(&self) -> String {
        mask_key(&self.key)
    }
}

pub fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(8).collect();
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{head}{}{tail}", "*".repeat(20))
}
