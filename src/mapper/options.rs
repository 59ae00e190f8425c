//! Record mapping options.

use super::classify::DEFAULT_MAX_TAGS;

/// Role given to every imported profile.
pub const DEFAULT_ROLE: &str = "user";

/// Status given to every imported profile.
pub const DEFAULT_STATUS: &str = "pending";

/// Import batch marker for the January 25 sign-up survey.
pub const DEFAULT_SOURCE: &str = "werox_jan_25_event_signup";

/// Options for mapping survey rows to records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillOptions {
    /// Value of the `role` field
    pub role: String,

    /// Value of the `status` field
    pub status: String,

    /// Value of the `source` field
    pub source: String,

    /// Maximum number of tags kept per record
    pub max_tags: usize,

    /// Fixed `createdAt`/`updatedAt` in epoch milliseconds (None = now)
    pub timestamp: Option<i64>,
}

impl Default for PrefillOptions {
    fn default() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            max_tags: DEFAULT_MAX_TAGS,
            timestamp: None,
        }
    }
}

impl PrefillOptions {
    /// Create new mapping options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the import batch marker.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the tag cap.
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Stamp every record with a fixed time instead of the current one.
    pub fn with_timestamp(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis);
        self
    }

    /// The run timestamp: the fixed one if set, otherwise the current UTC time.
    pub fn timestamp_or_now(&self) -> i64 {
        self.timestamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
    }
}
