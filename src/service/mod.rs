pub mod sql;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::form::daily_attendance::DailyAttendanceRow;
use crate::model::attendance::{AttendanceManagement, Punch};

pub use sql::SqlAttendanceService;

/// Data access for student attendance.
#[allow(async_fn_in_trait)]
pub trait AttendanceService: Send + Sync + 'static {
    /// Every training day of the course with the student's record for it,
    /// ordered by date.
    async fn attendance_management(
        &self,
        course_id: u64,
        lms_user_id: u64,
    ) -> Result<Vec<AttendanceManagement>>;

    /// Whether a training day before `today` is missing its start or end
    /// time.
    async fn has_unfilled_past_attendance(
        &self,
        lms_user_id: u64,
        course_id: u64,
        today: NaiveDate,
    ) -> Result<bool>;

    /// The summary line for `today`, or `None` when it is not a training day.
    async fn today_attendance(
        &self,
        lms_user_id: u64,
        course_id: u64,
        today: NaiveDate,
    ) -> Result<Option<AttendanceManagement>>;

    /// Records a punch at `at` on today's line.
    async fn punch(
        &self,
        lms_user_id: u64,
        today: &AttendanceManagement,
        punch: Punch,
        at: NaiveTime,
    ) -> Result<()>;

    /// Persists every row, all or nothing.
    async fn update(&self, lms_user_id: u64, rows: &[DailyAttendanceRow]) -> Result<()>;
}

/// Checks whether `punch` is allowed on today's line. Returns the message
/// key of the reason when it is not.
pub fn punch_check(today: Option<&AttendanceManagement>, punch: Punch) -> Option<&'static str> {
    let Some(today) = today else {
        return Some("attendance.notTrainingDay");
    };

    match punch {
        Punch::PunchIn if today.is_punched_in() => Some("attendance.punchInDuplicate"),
        Punch::PunchIn => None,
        Punch::PunchOut if !today.is_punched_in() => Some("attendance.punchOutBeforeIn"),
        Punch::PunchOut if today.is_punched_out() => Some("attendance.punchOutDuplicate"),
        Punch::PunchOut => None,
    }
}
