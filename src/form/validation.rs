use serde::Serialize;
use strum::{AsRefStr, IntoStaticStr};
use utoipa::ToSchema;

use crate::message::{Locale, MessageSource};

/// Stable rule identifiers. The serialized form is the message key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, AsRefStr, IntoStaticStr, Serialize, ToSchema)]
pub enum Rule {
    #[strum(serialize = "input.invalid")]
    #[serde(rename = "input.invalid")]
    InputInvalid,
    #[strum(serialize = "attendance.punchInEmpty")]
    #[serde(rename = "attendance.punchInEmpty")]
    PunchInEmpty,
    #[strum(serialize = "attendance.trainingTimeRange")]
    #[serde(rename = "attendance.trainingTimeRange")]
    TrainingTimeRange,
    #[strum(serialize = "attendance.blankTimeError")]
    #[serde(rename = "attendance.blankTimeError")]
    BlankTimeError,
    #[strum(serialize = "maxlength")]
    #[serde(rename = "maxlength")]
    MaxLength,
}

impl Rule {
    pub fn key(&self) -> &'static str {
        (*self).into()
    }
}

/// One rule violation on one field of the submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationError {
    /// Row scoped field path, e.g. `attendance_list[0].training_start_hour`
    #[schema(example = "attendance_list[0].training_start_hour")]
    pub field: String,
    pub rule: Rule,
    pub args: Vec<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        index: usize,
        field: &str,
        rule: Rule,
        args: Vec<String>,
        messages: &dyn MessageSource,
        locale: Locale,
    ) -> Self {
        let message = messages.lookup(rule.key(), &args, locale);
        Self {
            field: format!("attendance_list[{index}].{field}"),
            rule,
            args,
            message,
        }
    }

    /// Index of the row the field belongs to.
    pub fn row_index(&self) -> Option<usize> {
        let start = self.field.find('[')? + 1;
        let end = self.field[start..].find(']')? + start;
        self.field[start..end].parse().ok()
    }
}

/// Joins rendered messages into the single block shown above the form.
pub fn error_display(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("* {}", e.message))
        .collect::<Vec<_>>()
        .join("<br/>")
}
