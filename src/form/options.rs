use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Largest selectable break, in minutes.
pub const MAX_BLANK_TIME: u32 = 8 * 60;
pub const BLANK_TIME_STEP: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectOption {
    #[schema(example = "09")]
    pub value: String,
    #[schema(example = "09")]
    pub label: String,
}

/// `00` .. `23`
pub fn hours() -> Vec<SelectOption> {
    (0..24).map(padded).collect()
}

/// `00` .. `59`
pub fn minutes() -> Vec<SelectOption> {
    (0..60).map(padded).collect()
}

/// Break choices in 15 minute steps, labelled `H:MM`.
pub fn blank_times() -> Vec<SelectOption> {
    (1..=MAX_BLANK_TIME / BLANK_TIME_STEP)
        .map(|step| {
            let minutes = step * BLANK_TIME_STEP;
            SelectOption {
                value: minutes.to_string(),
                label: blank_time_label(minutes),
            }
        })
        .collect()
}

pub fn blank_time_label(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

fn padded(n: u32) -> SelectOption {
    let text = format!("{n:02}");
    SelectOption {
        value: text.clone(),
        label: text,
    }
}
