use std::fmt;

/// Server-assigned notification identifier.
///
/// Opaque to the widget: the backend sends UUID strings, older payloads used
/// numeric ids, and the untagged representation accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum NotificationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationId::Number(n) => write!(f, "{n}"),
            NotificationId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for NotificationId {
    fn from(id: i64) -> Self {
        NotificationId::Number(id)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        NotificationId::Text(id.to_string())
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        NotificationId::Text(id)
    }
}

/// One in-app notification as the backend serializes it.
///
/// `title` is nullable on the wire; extra fields (`channel`, `status`,
/// `created_at`) are ignored.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
}

impl Notification {
    /// Display text for the title; a missing title renders empty.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
