//! User-profile records produced from survey rows.

use serde::{Deserialize, Serialize};

/// A normalized user profile, ready for import.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Contact handle, unique within a run
    pub wechat_id: String,
    /// Display name
    pub nickname: String,
    /// `男`, `女`, `其他` or empty
    pub sex: String,
    pub training_focus: String,
    pub hyrox_experience: String,
    pub partner_role: String,
    /// What the participant wants a partner to know
    pub partner_note: String,
    /// Four-letter personality type, or empty
    pub mbti: String,
    pub bio: String,
    /// Photo reference as exported by the survey tool
    pub avatar_file_id: String,
    /// At most six activity tags
    #[serde(default)]
    pub tags: Vec<String>,
    pub role: String,
    pub status: String,
    /// Import batch marker
    pub source: String,
    /// Unix epoch milliseconds
    pub created_at: i64,
    /// Unix epoch milliseconds
    pub updated_at: i64,
}
