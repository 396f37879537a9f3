use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Locale, MessageSource, format_message};

/// key => (ja, en)
static MESSAGES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        // field labels
        ("label.trainingStartTime", ("出勤時間", "start time")),
        ("label.trainingEndTime", ("退勤時間", "end time")),
        ("label.note", ("備考", "note")),
        // validation
        (
            "input.invalid",
            ("{0}が正しく入力されていません。", "{0} is not entered correctly."),
        ),
        (
            "maxlength",
            ("{0}は{1}文字以内で入力してください。", "{0} must be at most {1} characters."),
        ),
        (
            "attendance.punchInEmpty",
            (
                "出勤情報がないため退勤情報を入力できません。",
                "An end time cannot be entered without a start time.",
            ),
        ),
        (
            "attendance.trainingTimeRange",
            (
                "{0}行目：出勤時刻が退勤時刻より後になっています。",
                "Row {0}: the start time is later than the end time.",
            ),
        ),
        (
            "attendance.blankTimeError",
            (
                "中抜け時間が勤務時間を超えています。",
                "The break time exceeds the working time.",
            ),
        ),
        // punch in / punch out
        (
            "attendance.notTrainingDay",
            ("本日は研修日ではありません。", "Today is not a training day."),
        ),
        (
            "attendance.punchInDuplicate",
            ("既に出勤済みです。", "You have already punched in today."),
        ),
        (
            "attendance.punchOutDuplicate",
            ("既に退勤済みです。", "You have already punched out today."),
        ),
        (
            "attendance.punchOutBeforeIn",
            ("出勤前に退勤はできません。", "You cannot punch out before punching in."),
        ),
        (
            "attendance.punchIn.complete",
            ("出勤情報を登録しました。", "Punch-in recorded."),
        ),
        (
            "attendance.punchOut.complete",
            ("退勤情報を登録しました。", "Punch-out recorded."),
        ),
        (
            "attendance.update.complete",
            ("勤怠情報の更新が完了しました。", "Attendance records updated."),
        ),
    ])
});

/// Built-in Japanese/English catalog.
///
/// An unknown key renders as the key itself so a missing entry shows up on
/// screen instead of failing the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogMessageSource;

impl MessageSource for CatalogMessageSource {
    fn lookup(&self, key: &str, args: &[String], locale: Locale) -> String {
        match MESSAGES.get(key) {
            Some((ja, en)) => {
                let template = match locale {
                    Locale::Ja => ja,
                    Locale::En => en,
                };
                format_message(template, args)
            }
            None => {
                tracing::warn!(key, %locale, "Message key not found");
                key.to_string()
            }
        }
    }
}
