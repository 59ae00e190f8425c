//! Mapping survey rows to user records.

use super::classify::{
    classify_hyrox_experience, classify_partner_role, classify_sex, classify_training_focus,
    normalize_mbti, normalize_text, parse_tags,
};
use super::columns::{HeaderMap, SurveyColumns};
use super::options::PrefillOptions;
use crate::error::{Error, Result};
use crate::model::{cell_at, Table, UserRecord};
use std::collections::HashSet;

/// Row counts from one mapping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingReport {
    /// Rows after the header
    pub data_rows: usize,
    /// Records produced
    pub emitted: usize,
    /// Rows with no identifier
    pub skipped_blank: usize,
    /// Rows repeating an identifier seen earlier
    pub skipped_duplicate: usize,
}

/// Records produced by a run, with its row counts.
#[derive(Debug, Clone, Default)]
pub struct MappingOutcome {
    pub records: Vec<UserRecord>,
    pub report: MappingReport,
}

/// Turns survey tables into user records.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper {
    options: PrefillOptions,
}

impl RecordMapper {
    /// Create a mapper with the given options.
    pub fn new(options: PrefillOptions) -> Self {
        Self { options }
    }

    /// Map every data row of `table`.
    ///
    /// Fails only on structure: an empty table or a missing required header,
    /// both detected before any row is looked at. Rows without an identifier
    /// and repeats of an identifier already emitted are skipped; the first
    /// occurrence wins.
    pub fn map_table(&self, table: &Table) -> Result<MappingOutcome> {
        let header = table.header().ok_or(Error::NoDataRows)?;
        let columns = SurveyColumns::resolve(&HeaderMap::from_header(header))?;
        let now = self.options.timestamp_or_now();

        let mut outcome = MappingOutcome::default();
        let mut seen = HashSet::new();

        for (offset, row) in table.data_rows().enumerate() {
            outcome.report.data_rows += 1;

            let wechat_id = normalize_text(cell_at(row, columns.wechat_id));
            if wechat_id.is_empty() {
                outcome.report.skipped_blank += 1;
                continue;
            }
            if !seen.insert(wechat_id.clone()) {
                tracing::debug!(row = offset + 2, wechat_id = %wechat_id, "skipping duplicate identifier");
                outcome.report.skipped_duplicate += 1;
                continue;
            }

            if let Some(col) = columns.submitted_at {
                // Submission time is not carried into the record.
                tracing::trace!(row = offset + 2, submitted_at = cell_at(row, col).trim(), "read submission time");
            }

            outcome
                .records
                .push(self.build_record(row, &columns, wechat_id, now));
        }

        outcome.report.emitted = outcome.records.len();
        tracing::info!(
            data_rows = outcome.report.data_rows,
            emitted = outcome.report.emitted,
            skipped_blank = outcome.report.skipped_blank,
            skipped_duplicate = outcome.report.skipped_duplicate,
            "mapped survey rows"
        );
        Ok(outcome)
    }

    fn build_record(
        &self,
        row: &[String],
        columns: &SurveyColumns,
        wechat_id: String,
        now: i64,
    ) -> UserRecord {
        let cell = |col: usize| cell_at(row, col);
        UserRecord {
            wechat_id,
            nickname: normalize_text(cell(columns.nickname)),
            sex: classify_sex(cell(columns.sex)),
            training_focus: classify_training_focus(cell(columns.training_focus)),
            hyrox_experience: classify_hyrox_experience(cell(columns.hyrox_experience)),
            partner_role: classify_partner_role(cell(columns.partner_role)),
            partner_note: normalize_text(cell(columns.partner_note)),
            mbti: normalize_mbti(cell(columns.mbti)),
            bio: normalize_text(cell(columns.impression)),
            avatar_file_id: normalize_text(cell(columns.photo)),
            tags: parse_tags(cell(columns.tags), self.options.max_tags),
            role: self.options.role.clone(),
            status: self.options.status.clone(),
            source: self.options.source.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::columns::*;

    const NOW: i64 = 1_737_763_200_000;

    fn header() -> Vec<String> {
        REQUIRED_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    /// A data row laid out in `REQUIRED_HEADERS` order.
    fn answers(values: [&str; 11]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn mapper() -> RecordMapper {
        RecordMapper::new(PrefillOptions::new().with_timestamp(NOW))
    }

    #[test]
    fn test_maps_a_full_row() {
        let table = Table::from_rows(vec![
            header(),
            answers([
                " wx_ann ",
                " Ann ",
                "女",
                "HYROX",
                "已参赛",
                "跑步",
                "沟通直接",
                "膝盖有旧伤",
                "ENFP-A",
                "跑步┋游泳",
                "photo_1.jpg",
            ]),
        ]);

        let outcome = mapper().map_table(&table).unwrap();
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.wechat_id, "wx_ann");
        assert_eq!(record.nickname, "Ann");
        assert_eq!(record.sex, "女");
        assert_eq!(record.training_focus, "HYROX");
        assert_eq!(record.hyrox_experience, "有参赛经验");
        assert_eq!(record.partner_role, "耐力担当");
        assert_eq!(record.bio, "沟通直接");
        assert_eq!(record.partner_note, "膝盖有旧伤");
        assert_eq!(record.mbti, "ENFP");
        assert_eq!(record.tags, ["跑步", "游泳"]);
        assert_eq!(record.avatar_file_id, "photo_1.jpg");
        assert_eq!(record.role, "user");
        assert_eq!(record.status, "pending");
        assert_eq!(record.source, "werox_jan_25_event_signup");
        assert_eq!(record.created_at, NOW);
        assert_eq!(record.updated_at, record.created_at);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let mut first = answers(["wx_1", "First", "", "", "", "", "", "", "", "", ""]);
        let second = answers(["wx_1 ", "Second", "", "", "", "", "", "", "", "", ""]);
        first.truncate(2);
        let table = Table::from_rows(vec![header(), first, second]);

        let outcome = mapper().map_table(&table).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].nickname, "First");
        assert_eq!(outcome.report.skipped_duplicate, 1);
    }

    #[test]
    fn test_blank_and_short_rows_skipped() {
        let table = Table::from_rows(vec![
            header(),
            Vec::new(),
            answers(["   ", "Nobody", "", "", "", "", "", "", "", "", ""]),
            vec!["wx_short".to_string()],
        ]);

        let outcome = mapper().map_table(&table).unwrap();
        assert_eq!(outcome.report.data_rows, 3);
        assert_eq!(outcome.report.skipped_blank, 2);
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.wechat_id, "wx_short");
        assert_eq!(record.nickname, "");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_identifier_out_of_range_skipped() {
        let mut names = header();
        names.rotate_left(1);
        let table = Table::from_rows(vec![names, vec!["Ann".to_string()]]);

        let outcome = mapper().map_table(&table).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.report.skipped_blank, 1);
    }

    #[test]
    fn test_missing_header_aborts() {
        let mut names = header();
        names.retain(|h| h != MBTI_HEADER);
        let table = Table::from_rows(vec![names, vec!["wx_1".to_string()]]);

        let err = mapper().map_table(&table).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref h) if h == MBTI_HEADER));
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = mapper().map_table(&Table::new()).unwrap_err();
        assert!(matches!(err, Error::NoDataRows));
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let outcome = mapper().map_table(&Table::from_rows(vec![header()])).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.report, MappingReport::default());
    }

    #[test]
    fn test_submission_time_is_not_used() {
        let mut names = header();
        names.push(SUBMITTED_AT_HEADER.to_string());
        let mut row = answers(["wx_1", "", "", "", "", "", "", "", "", "", ""]);
        row.push("2025/1/10 20:15:03".to_string());

        let outcome = mapper()
            .map_table(&Table::from_rows(vec![names, row]))
            .unwrap();
        assert_eq!(outcome.records[0].created_at, NOW);
        assert_eq!(outcome.records[0].updated_at, NOW);
    }

    #[test]
    fn test_options_flow_into_records() {
        let options = PrefillOptions::new()
            .with_role("runner")
            .with_status("active")
            .with_source("spring")
            .with_max_tags(1)
            .with_timestamp(7);
        let table = Table::from_rows(vec![
            header(),
            answers(["wx_1", "", "", "", "", "", "", "", "", "a,b", ""]),
        ]);

        let outcome = RecordMapper::new(options).map_table(&table).unwrap();
        let record = &outcome.records[0];
        assert_eq!((record.role.as_str(), record.status.as_str()), ("runner", "active"));
        assert_eq!(record.source, "spring");
        assert_eq!(record.tags, ["a"]);
        assert_eq!(record.created_at, 7);
    }
}
