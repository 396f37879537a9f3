/// Hour/minute pair as entered on the update screen.
///
/// Both members arrive as strings because the dropdowns allow an empty
/// selection. A member counts as filled when it is present and non-empty.
#[derive(Debug, Clone, Copy)]
pub struct TimePair<'a> {
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl<'a> TimePair<'a> {
    pub fn new(hour: &'a Option<String>, minute: &'a Option<String>) -> Self {
        Self {
            hour: hour.as_deref(),
            minute: minute.as_deref(),
        }
    }

    /// Neither hour nor minute is filled.
    pub fn is_empty(&self) -> bool {
        !filled(self.hour) && !filled(self.minute)
    }

    /// Exactly one of hour and minute is filled.
    pub fn is_half_input(&self) -> bool {
        filled(self.hour) ^ filled(self.minute)
    }

    /// Both hour and minute are filled.
    pub fn is_complete(&self) -> bool {
        filled(self.hour) && filled(self.minute)
    }

    /// Minutes since midnight, only for a complete pair whose members both
    /// parse as non-negative integers.
    pub fn minute_of_day(&self) -> Option<u32> {
        if !self.is_complete() {
            return None;
        }
        minute_of_day(self.hour?, self.minute?)
    }
}

/// `hour * 60 + minute`, or `None` when either part is not a non-negative
/// integer or the result does not fit.
pub fn minute_of_day(hour: &str, minute: &str) -> Option<u32> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    hour.checked_mul(60)?.checked_add(minute)
}

/// Splits a stored `HH:MM` value into its hour and minute parts.
pub fn split_hhmm(value: &str) -> Option<(String, String)> {
    let (hour, minute) = value.split_once(':')?;
    Some((hour.to_string(), minute.to_string()))
}

/// Joins an hour/minute pair back into the stored `HH:MM` form. An empty or
/// half-filled pair has no stored form.
pub fn join_hhmm(pair: TimePair<'_>) -> Option<String> {
    match (pair.hour, pair.minute) {
        (Some(h), Some(m)) if !h.is_empty() && !m.is_empty() => Some(format!("{h:0>2}:{m:0>2}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(hour: Option<&'a str>, minute: Option<&'a str>) -> TimePair<'a> {
        TimePair { hour, minute }
    }

    #[test]
    fn minute_of_day_combines_hour_and_minute() {
        assert_eq!(minute_of_day("09", "30"), Some(570));
        assert_eq!(minute_of_day("0", "0"), Some(0));
        assert_eq!(minute_of_day("23", "59"), Some(1439));
    }

    #[test]
    fn minute_of_day_rejects_malformed_numbers() {
        assert_eq!(minute_of_day("ab", "00"), None);
        assert_eq!(minute_of_day("09", "-1"), None);
        assert_eq!(minute_of_day(" 9", "00"), None);
        assert_eq!(minute_of_day("4294967295", "0"), None);
    }

    #[test]
    fn empty_string_and_missing_are_both_unfilled() {
        assert!(pair(None, None).is_empty());
        assert!(pair(Some(""), None).is_empty());
        assert!(pair(Some(""), Some("")).is_empty());
        assert!(!pair(Some("09"), Some("")).is_empty());
    }

    #[test]
    fn half_input_is_exclusive_or() {
        assert!(pair(Some("09"), None).is_half_input());
        assert!(pair(Some(""), Some("00")).is_half_input());
        assert!(!pair(Some("09"), Some("00")).is_half_input());
        assert!(!pair(None, Some("")).is_half_input());
    }

    #[test]
    fn parseable_pair_requires_both_members() {
        assert_eq!(pair(Some("09"), Some("00")).minute_of_day(), Some(540));
        assert_eq!(pair(Some("09"), None).minute_of_day(), None);
        assert_eq!(pair(Some("x"), Some("00")).minute_of_day(), None);
    }

    #[test]
    fn hhmm_split_and_join() {
        assert_eq!(
            split_hhmm("09:05"),
            Some(("09".to_string(), "05".to_string()))
        );
        assert_eq!(split_hhmm("0905"), None);
        assert_eq!(join_hhmm(pair(Some("9"), Some("5"))), Some("09:05".to_string()));
        assert_eq!(join_hhmm(pair(Some("9"), Some(""))), None);
        assert_eq!(join_hhmm(pair(None, None)), None);
    }
}
