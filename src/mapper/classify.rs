//! Field normalization for survey answers.
//!
//! Every function here is total: it trims its input, maps known answers onto
//! a small vocabulary, passes unrecognized non-empty text through unchanged
//! and returns empty output for empty input. None of them can fail.

/// Default cap on the number of tags kept per record.
pub const DEFAULT_MAX_TAGS: usize = 6;

/// Characters that separate activities in the tags answer.
const TAG_DELIMITERS: [char; 5] = ['┋', ',', '，', '、', '/'];

/// Trim surrounding whitespace.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// `男` or `女` when the answer names one, `其他` for any other answer.
pub fn classify_sex(value: &str) -> String {
    let val = value.trim();
    if val.contains('男') {
        "男".to_string()
    } else if val.contains('女') {
        "女".to_string()
    } else if val.is_empty() {
        String::new()
    } else {
        "其他".to_string()
    }
}

/// Collapse training-focus answers onto `HYROX`, `CrossFit` or `综合训练`.
pub fn classify_training_focus(value: &str) -> String {
    let val = value.trim();
    let upper = val.to_uppercase();
    if val.is_empty() {
        String::new()
    } else if upper.contains("HYROX") {
        "HYROX".to_string()
    } else if upper.contains("CROSSFIT") || val.contains("功能性训练") {
        "CrossFit".to_string()
    } else if val.contains("综合") {
        "综合训练".to_string()
    } else {
        val.to_string()
    }
}

/// Whether the participant has raced before.
pub fn classify_hyrox_experience(value: &str) -> String {
    let val = value.trim();
    if val.is_empty() {
        String::new()
    } else if val.contains("未参赛") {
        "无参赛经验".to_string()
    } else if val.contains("参赛") {
        "有参赛经验".to_string()
    } else {
        val.to_string()
    }
}

/// Preferred role in a two-person team.
pub fn classify_partner_role(value: &str) -> String {
    let val = value.trim();
    let has_any = |needles: &[&str]| needles.iter().any(|n| val.contains(n));
    if val.is_empty() {
        String::new()
    } else if has_any(&["跑步", "心肺"]) {
        "耐力担当".to_string()
    } else if has_any(&["功能区", "力量"]) {
        "力量担当".to_string()
    } else if has_any(&["节奏"]) {
        "节奏控场".to_string()
    } else if has_any(&["均衡", "全能"]) {
        "全能搭档".to_string()
    } else {
        val.to_string()
    }
}

/// Split an activities answer into at most `max_tags` trimmed tags.
///
/// Any run of `┋ , ， 、 /` separates tags; empty fragments are dropped.
pub fn parse_tags(value: &str, max_tags: usize) -> Vec<String> {
    value
        .trim()
        .split(TAG_DELIMITERS)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(max_tags)
        .map(String::from)
        .collect()
}

/// Whether four upper-case letters form a personality type such as `ENFP`.
fn is_type_code(code: &[u8]) -> bool {
    matches!(
        code,
        [b'E' | b'I', b'S' | b'N', b'T' | b'F', b'J' | b'P']
    )
}

/// Pull a four-letter personality type out of free text.
///
/// The first standalone run of exactly four ASCII letters that spells a valid
/// type is returned upper-cased, so `"enfp-A"` gives `"ENFP"`. Anything else
/// yields an empty string.
pub fn normalize_mbti(value: &str) -> String {
    value
        .trim()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| run.len() == 4)
        .map(str::to_ascii_uppercase)
        .find(|code| is_type_code(code.as_bytes()))
        .unwrap_or_default()
}
