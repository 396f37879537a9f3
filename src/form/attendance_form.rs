use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::form::daily_attendance::{DailyAttendanceRow, validate_row};
use crate::form::options::{self, SelectOption};
use crate::form::time::split_hhmm;
use crate::form::validation::ValidationError;
use crate::message::{Locale, MessageSource};
use crate::model::attendance::AttendanceManagement;

/// The attendance update screen: every training day of the course as an
/// editable row plus the dropdown choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceForm {
    #[schema(example = 10)]
    pub lms_user_id: Option<u64>,
    #[schema(example = "taro")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub attendance_list: Vec<DailyAttendanceRow>,

    #[serde(default)]
    pub hours: Vec<SelectOption>,
    #[serde(default)]
    pub minutes: Vec<SelectOption>,
    #[serde(default)]
    pub blank_times: Vec<SelectOption>,
}

impl AttendanceForm {
    pub fn from_management(
        lms_user_id: u64,
        user_name: &str,
        list: &[AttendanceManagement],
        today: NaiveDate,
    ) -> Self {
        let attendance_list = list.iter().map(|m| row_from_management(m, today)).collect();

        let mut form = Self {
            lms_user_id: Some(lms_user_id),
            user_name: Some(user_name.to_string()),
            attendance_list,
            ..Default::default()
        };
        form.set_options();
        form
    }

    /// Restores the dropdown choices, which are never submitted back.
    pub fn set_options(&mut self) {
        self.hours = options::hours();
        self.minutes = options::minutes();
        self.blank_times = options::blank_times();
    }

    /// Note lengths of every row first, then the time-entry rules row by
    /// row.
    pub fn validate(&self, messages: &dyn MessageSource, locale: Locale) -> Vec<ValidationError> {
        let notes = self
            .attendance_list
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.validate_note(i, messages, locale));

        let rows = self
            .attendance_list
            .iter()
            .enumerate()
            .flat_map(|(i, row)| validate_row(row, i, messages, locale));

        notes.chain(rows).collect()
    }

    /// Flags the rows that own at least one of `errors`.
    pub fn mark_errors(&mut self, errors: &[ValidationError]) {
        for (i, row) in self.attendance_list.iter_mut().enumerate() {
            row.is_error = errors.iter().any(|e| e.row_index() == Some(i));
        }
    }
}

fn row_from_management(m: &AttendanceManagement, today: NaiveDate) -> DailyAttendanceRow {
    let (start_hour, start_minute) = split_time(m.training_start_time.as_deref());
    let (end_hour, end_minute) = split_time(m.training_end_time.as_deref());

    DailyAttendanceRow {
        student_attendance_id: m.student_attendance_id,
        leave_date: m.leave_date,
        training_date: Some(m.training_date),
        training_start_hour: start_hour,
        training_start_minute: start_minute,
        training_end_hour: end_hour,
        training_end_minute: end_minute,
        blank_time: m.blank_time,
        blank_time_value: m
            .blank_time
            .filter(|b| *b > 0)
            .map(options::blank_time_label),
        status: m.status.clone(),
        note: m.note.clone(),
        section_name: m.section_name.clone(),
        is_today: m.training_date == today,
        is_error: false,
        disp_training_date: Some(m.training_date.format("%Y/%m/%d(%a)").to_string()),
        status_disp_name: None,
    }
}

fn split_time(value: Option<&str>) -> (Option<String>, Option<String>) {
    match value.and_then(split_hhmm) {
        Some((hour, minute)) => (Some(hour), Some(minute)),
        None => (None, None),
    }
}
