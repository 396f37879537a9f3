use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use utoipa::ToSchema;

/// One training day of the course joined with the student's attendance
/// record for that day, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "student_attendance_id": 1201,
        "lms_user_id": 10,
        "training_date": "2026-01-05",
        "section_name": "Java basics",
        "training_start_time": "09:00",
        "training_end_time": "18:00",
        "blank_time": 60,
        "status": "0",
        "note": null,
        "leave_date": null
    })
)]
pub struct AttendanceManagement {
    pub student_attendance_id: Option<u64>,
    pub lms_user_id: u64,
    #[schema(value_type = String, format = "date")]
    pub training_date: NaiveDate,
    pub section_name: Option<String>,
    /// `HH:MM`
    pub training_start_time: Option<String>,
    /// `HH:MM`
    pub training_end_time: Option<String>,
    pub blank_time: Option<u32>,
    pub status: Option<String>,
    pub note: Option<String>,
    #[schema(value_type = Option<String>, format = "date")]
    pub leave_date: Option<NaiveDate>,
}

impl AttendanceManagement {
    pub fn is_punched_in(&self) -> bool {
        self.training_start_time
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    pub fn is_punched_out(&self) -> bool {
        self.training_end_time
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Punch {
    PunchIn,
    PunchOut,
}

impl Punch {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Message key of the confirmation shown after a successful punch.
    pub fn complete_key(&self) -> &'static str {
        match self {
            Punch::PunchIn => "attendance.punchIn.complete",
            Punch::PunchOut => "attendance.punchOut.complete",
        }
    }
}
