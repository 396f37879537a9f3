use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;

use crate::form::daily_attendance::DailyAttendanceRow;
use crate::form::time::join_hhmm;
use crate::model::attendance::{AttendanceManagement, Punch};
use crate::service::AttendanceService;

/// Training days of a course (`m_section`) joined with the student's
/// attendance records (`t_student_attendance`).
const MANAGEMENT_SELECT: &str = r#"
    SELECT
        a.student_attendance_id,
        CAST(? AS UNSIGNED) AS lms_user_id,
        s.training_date,
        s.section_name,
        a.training_start_time,
        a.training_end_time,
        a.blank_time,
        a.status,
        a.note,
        cu.leave_date
    FROM m_section s
    LEFT JOIN t_student_attendance a
        ON a.training_date = s.training_date
        AND a.lms_user_id = ?
        AND a.delete_flg = 0
    LEFT JOIN m_course_user cu
        ON cu.course_id = s.course_id
        AND cu.lms_user_id = ?
    WHERE s.course_id = ?
    AND s.delete_flg = 0
"#;

#[derive(Clone)]
pub struct SqlAttendanceService {
    pool: MySqlPool,
}

impl SqlAttendanceService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl AttendanceService for SqlAttendanceService {
    async fn attendance_management(
        &self,
        course_id: u64,
        lms_user_id: u64,
    ) -> Result<Vec<AttendanceManagement>> {
        let sql = format!("{MANAGEMENT_SELECT} ORDER BY s.training_date");

        let list = sqlx::query_as::<_, AttendanceManagement>(&sql)
            .bind(lms_user_id)
            .bind(lms_user_id)
            .bind(lms_user_id)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(list)
    }

    async fn has_unfilled_past_attendance(
        &self,
        lms_user_id: u64,
        course_id: u64,
        today: NaiveDate,
    ) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM m_section s
            LEFT JOIN t_student_attendance a
                ON a.training_date = s.training_date
                AND a.lms_user_id = ?
                AND a.delete_flg = 0
            WHERE s.course_id = ?
            AND s.delete_flg = 0
            AND s.training_date < ?
            AND (
                a.training_start_time IS NULL OR a.training_start_time = ''
                OR a.training_end_time IS NULL OR a.training_end_time = ''
            )
            "#,
        )
        .bind(lms_user_id)
        .bind(course_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn today_attendance(
        &self,
        lms_user_id: u64,
        course_id: u64,
        today: NaiveDate,
    ) -> Result<Option<AttendanceManagement>> {
        let sql = format!("{MANAGEMENT_SELECT} AND s.training_date = ?");

        let line = sqlx::query_as::<_, AttendanceManagement>(&sql)
            .bind(lms_user_id)
            .bind(lms_user_id)
            .bind(lms_user_id)
            .bind(course_id)
            .bind(today)
            .fetch_optional(&self.pool)
            .await?;

        Ok(line)
    }

    async fn punch(
        &self,
        lms_user_id: u64,
        today: &AttendanceManagement,
        punch: Punch,
        at: NaiveTime,
    ) -> Result<()> {
        let time = at.format("%H:%M").to_string();
        let column = match punch {
            Punch::PunchIn => "training_start_time",
            Punch::PunchOut => "training_end_time",
        };

        match today.student_attendance_id {
            Some(id) => {
                let sql = format!(
                    "UPDATE t_student_attendance SET {column} = ?, last_modified_user = ?, \
                     last_modified_date = NOW() WHERE student_attendance_id = ? AND lms_user_id = ?"
                );
                sqlx::query(&sql)
                    .bind(&time)
                    .bind(lms_user_id)
                    .bind(id)
                    .bind(lms_user_id)
                    .execute(&self.pool)
                    .await?;
            }
            None => {
                let sql = format!(
                    "INSERT INTO t_student_attendance \
                     (lms_user_id, training_date, {column}, delete_flg, first_create_user, \
                     first_create_date, last_modified_user, last_modified_date) \
                     VALUES (?, ?, ?, 0, ?, NOW(), ?, NOW())"
                );
                sqlx::query(&sql)
                    .bind(lms_user_id)
                    .bind(today.training_date)
                    .bind(&time)
                    .bind(lms_user_id)
                    .bind(lms_user_id)
                    .execute(&self.pool)
                    .await?;
            }
        }

        tracing::debug!(lms_user_id, punch = punch.as_str(), %time, "Punch recorded");
        Ok(())
    }

    async fn update(&self, lms_user_id: u64, rows: &[DailyAttendanceRow]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for row in rows {
            let start = join_hhmm(row.start());
            let end = join_hhmm(row.end());
            let blank_time = row.blank_time.filter(|b| *b > 0);

            match row.student_attendance_id {
                Some(id) => {
                    sqlx::query(
                        r#"
                        UPDATE t_student_attendance
                        SET training_start_time = ?, training_end_time = ?, blank_time = ?,
                            status = ?, note = ?, last_modified_user = ?, last_modified_date = NOW()
                        WHERE student_attendance_id = ?
                        AND lms_user_id = ?
                        AND delete_flg = 0
                        "#,
                    )
                    .bind(&start)
                    .bind(&end)
                    .bind(blank_time)
                    .bind(&row.status)
                    .bind(&row.note)
                    .bind(lms_user_id)
                    .bind(id)
                    .bind(lms_user_id)
                    .execute(&mut *tx)
                    .await?;
                }
                None => {
                    let Some(training_date) = row.training_date else {
                        tracing::warn!(lms_user_id, "Skipping new row without training date");
                        continue;
                    };
                    let blank_note = row.note.as_deref().is_none_or(str::is_empty);
                    if start.is_none() && end.is_none() && blank_time.is_none() && blank_note {
                        continue;
                    }

                    sqlx::query(
                        r#"
                        INSERT INTO t_student_attendance
                            (lms_user_id, training_date, training_start_time, training_end_time,
                             blank_time, status, note, delete_flg, first_create_user,
                             first_create_date, last_modified_user, last_modified_date)
                        VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?, NOW(), ?, NOW())
                        "#,
                    )
                    .bind(lms_user_id)
                    .bind(training_date)
                    .bind(&start)
                    .bind(&end)
                    .bind(blank_time)
                    .bind(&row.status)
                    .bind(&row.note)
                    .bind(lms_user_id)
                    .bind(lms_user_id)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await?;
        tracing::info!(lms_user_id, rows = rows.len(), "Attendance updated");
        Ok(())
    }
}
