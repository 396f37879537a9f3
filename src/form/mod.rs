pub mod attendance_form;
pub mod daily_attendance;
pub mod options;
pub mod time;
pub mod validation;
