//! Header resolution for the sign-up survey export.

use crate::error::{Error, Result};
use std::collections::HashMap;

pub const WECHAT_ID_HEADER: &str =
    "Q1你的微信号是? （用于赛前沟通、分组确认与赛后资料发送，请填写常用微信号）";
pub const NICKNAME_HEADER: &str = "Q2你的姓名 / 昵称是? （用于现场点名与成绩记录）";
pub const SEX_HEADER: &str = "Q4你的性别是?";
pub const TRAINING_FOCUS_HEADER: &str = "Q7你的主要训练方向是?";
pub const HYROX_EXPERIENCE_HEADER: &str = "Q8你的HYROX相关经验是?";
pub const PARTNER_ROLE_HEADER: &str = "Q10你在双人搭档中更适合的角色是?";
pub const IMPRESSION_HEADER: &str =
    "Q13如果给你的搭档一个「更好配合的印象」，你更接近哪几项?";
pub const PARTNER_NOTE_HEADER: &str = "Q14|你希望搭档提前知道你的一件事是?";
pub const MBTI_HEADER: &str = "Q15你是否了解自己的 MBTI 类型?（不强制填写，不影响分组）";
pub const TAGS_HEADER: &str = "Q6你平时参与过哪些运动项目?";
pub const PHOTO_HEADER: &str =
    "Q20请上传一张你的近期最满意的训练或运动照片（用于现场识别、与个人内容展示, 一张即可）";

/// Optional submission-time column written by the survey tool.
pub const SUBMITTED_AT_HEADER: &str = "提交答卷时间";

/// Every header the survey export must carry, in resolution order.
pub const REQUIRED_HEADERS: [&str; 11] = [
    WECHAT_ID_HEADER,
    NICKNAME_HEADER,
    SEX_HEADER,
    TRAINING_FOCUS_HEADER,
    HYROX_EXPERIENCE_HEADER,
    PARTNER_ROLE_HEADER,
    IMPRESSION_HEADER,
    PARTNER_NOTE_HEADER,
    MBTI_HEADER,
    TAGS_HEADER,
    PHOTO_HEADER,
];

/// Exact header text to zero-based column index.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build from a header row. A repeated header maps to its right-most column.
    pub fn from_header(header: &[String]) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { columns }
    }

    /// Column of an optional header.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Column of a required header.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.get(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Whether the header row carries `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Column positions of the survey questions a record is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyColumns {
    pub wechat_id: usize,
    pub nickname: usize,
    pub sex: usize,
    pub training_focus: usize,
    pub hyrox_experience: usize,
    pub partner_role: usize,
    pub impression: usize,
    pub partner_note: usize,
    pub mbti: usize,
    pub tags: usize,
    pub photo: usize,
    pub submitted_at: Option<usize>,
}

impl SurveyColumns {
    /// Resolve every required header, failing on the first one that is absent.
    pub fn resolve(headers: &HeaderMap) -> Result<Self> {
        Ok(Self {
            wechat_id: headers.require(WECHAT_ID_HEADER)?,
            nickname: headers.require(NICKNAME_HEADER)?,
            sex: headers.require(SEX_HEADER)?,
            training_focus: headers.require(TRAINING_FOCUS_HEADER)?,
            hyrox_experience: headers.require(HYROX_EXPERIENCE_HEADER)?,
            partner_role: headers.require(PARTNER_ROLE_HEADER)?,
            impression: headers.require(IMPRESSION_HEADER)?,
            partner_note: headers.require(PARTNER_NOTE_HEADER)?,
            mbti: headers.require(MBTI_HEADER)?,
            tags: headers.require(TAGS_HEADER)?,
            photo: headers.require(PHOTO_HEADER)?,
            submitted_at: headers.get(SUBMITTED_AT_HEADER),
        })
    }
}
