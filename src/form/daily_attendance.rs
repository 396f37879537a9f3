use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::form::time::TimePair;
use crate::form::validation::{Rule, ValidationError};
use crate::message::{Locale, MessageSource};

pub const NOTE_MAX_LENGTH: usize = 100;

/// One day of the attendance update screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DailyAttendanceRow {
    #[schema(example = 1201)]
    pub student_attendance_id: Option<u64>,
    #[schema(example = "2026-03-31", format = "date", value_type = Option<String>)]
    pub leave_date: Option<NaiveDate>,
    #[schema(example = "2026-01-05", format = "date", value_type = Option<String>)]
    pub training_date: Option<NaiveDate>,
    #[schema(example = "09")]
    pub training_start_hour: Option<String>,
    #[schema(example = "00")]
    pub training_start_minute: Option<String>,
    #[schema(example = "18")]
    pub training_end_hour: Option<String>,
    #[schema(example = "00")]
    pub training_end_minute: Option<String>,
    /// Break minutes, as a number or the dropdown's string value
    #[schema(example = 60)]
    #[serde(deserialize_with = "minutes_from_number_or_text")]
    pub blank_time: Option<u32>,
    pub blank_time_value: Option<String>,
    pub status: Option<String>,
    #[schema(example = "ok", max_length = 100)]
    pub note: Option<String>,

    // display only
    pub section_name: Option<String>,
    pub is_today: bool,
    pub is_error: bool,
    pub disp_training_date: Option<String>,
    pub status_disp_name: Option<String>,
}

/// Accepts `30`, `"30"`, `""` or `null`.
fn minutes_from_number_or_text<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Number(u32),
        Text(String),
    }

    match Option::<Minutes>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Minutes::Number(n)) => Ok(Some(n)),
        Some(Minutes::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Minutes::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl DailyAttendanceRow {
    pub fn start(&self) -> TimePair<'_> {
        TimePair::new(&self.training_start_hour, &self.training_start_minute)
    }

    pub fn end(&self) -> TimePair<'_> {
        TimePair::new(&self.training_end_hour, &self.training_end_minute)
    }

    /// Runs the time-entry rules in their fixed order and returns every
    /// violation found. Malformed numbers never fail the call; the ordering
    /// and break rules simply do not apply to a pair that does not parse.
    pub fn validate(
        &self,
        index: usize,
        messages: &dyn MessageSource,
        locale: Locale,
    ) -> Vec<ValidationError> {
        let start = self.start();
        let end = self.end();
        let label = |key: &str| messages.lookup(key, &[], locale);
        let mut errors = Vec::new();

        if start.is_half_input() {
            errors.push(ValidationError::new(
                index,
                "training_start_hour",
                Rule::InputInvalid,
                vec![label("label.trainingStartTime")],
                messages,
                locale,
            ));
        }

        if end.is_half_input() {
            errors.push(ValidationError::new(
                index,
                "training_end_hour",
                Rule::InputInvalid,
                vec![label("label.trainingEndTime")],
                messages,
                locale,
            ));
        }

        if start.is_empty() && !end.is_empty() {
            errors.push(ValidationError::new(
                index,
                "training_start_hour",
                Rule::PunchInEmpty,
                vec![],
                messages,
                locale,
            ));
        }

        let worked = match (start.minute_of_day(), end.minute_of_day()) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        };

        if let Some((s, e)) = worked {
            if s > e {
                errors.push(ValidationError::new(
                    index,
                    "training_start_hour",
                    Rule::TrainingTimeRange,
                    vec![(index + 1).to_string()],
                    messages,
                    locale,
                ));
            }
        }

        if let (Some(blank), Some((s, e))) = (self.blank_time.filter(|b| *b > 0), worked) {
            // signed: a reversed range also leaves no room for a break
            if i64::from(blank) > i64::from(e) - i64::from(s) {
                errors.push(ValidationError::new(
                    index,
                    "blank_time",
                    Rule::BlankTimeError,
                    vec![],
                    messages,
                    locale,
                ));
            }
        }

        errors
    }

    /// Declarative length bound on the note, counted in characters.
    pub fn validate_note(
        &self,
        index: usize,
        messages: &dyn MessageSource,
        locale: Locale,
    ) -> Option<ValidationError> {
        let note = self.note.as_deref()?;
        if note.chars().count() <= NOTE_MAX_LENGTH {
            return None;
        }
        Some(ValidationError::new(
            index,
            "note",
            Rule::MaxLength,
            vec![
                messages.lookup("label.note", &[], locale),
                NOTE_MAX_LENGTH.to_string(),
            ],
            messages,
            locale,
        ))
    }
}

/// Validates one row at the given zero-based position.
pub fn validate_row(
    row: &DailyAttendanceRow,
    index: usize,
    messages: &dyn MessageSource,
    locale: Locale,
) -> Vec<ValidationError> {
    row.validate(index, messages, locale)
}
