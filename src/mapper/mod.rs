//! Survey row to user record mapping.
//!
//! The first table row is matched against the survey's question headers;
//! every following row becomes at most one [`UserRecord`](crate::model::UserRecord).
//!
//! # Example
//!
//! ```
//! use signup_prefill::mapper::{PrefillOptions, RecordMapper, REQUIRED_HEADERS};
//! use signup_prefill::model::Table;
//!
//! let header: Vec<String> = REQUIRED_HEADERS.iter().map(|h| h.to_string()).collect();
//! let row = vec!["wx_ann".to_string(), "Ann".to_string()];
//! let table = Table::from_rows(vec![header, row]);
//!
//! let mapper = RecordMapper::new(PrefillOptions::new().with_timestamp(0));
//! let outcome = mapper.map_table(&table)?;
//! assert_eq!(outcome.records[0].nickname, "Ann");
//! # Ok::<(), signup_prefill::Error>(())
//! ```

mod classify;
mod columns;
mod options;
mod records;

pub use classify::{
    classify_hyrox_experience, classify_partner_role, classify_sex, classify_training_focus,
    normalize_mbti, normalize_text, parse_tags, DEFAULT_MAX_TAGS,
};
pub use columns::{
    HeaderMap, SurveyColumns, HYROX_EXPERIENCE_HEADER, IMPRESSION_HEADER, MBTI_HEADER,
    NICKNAME_HEADER, PARTNER_NOTE_HEADER, PARTNER_ROLE_HEADER, PHOTO_HEADER, REQUIRED_HEADERS,
    SEX_HEADER, SUBMITTED_AT_HEADER, TAGS_HEADER, TRAINING_FOCUS_HEADER, WECHAT_ID_HEADER,
};
pub use options::{PrefillOptions, DEFAULT_ROLE, DEFAULT_SOURCE, DEFAULT_STATUS};
pub use records::{MappingOutcome, MappingReport, RecordMapper};
