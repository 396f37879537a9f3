use crate::api::attendance::{DetailResponse, UpdateRejectedResponse};
use crate::form::attendance_form::AttendanceForm;
use crate::form::daily_attendance::DailyAttendanceRow;
use crate::form::options::SelectOption;
use crate::form::validation::{Rule, ValidationError};
use crate::model::attendance::AttendanceManagement;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS Attendance API",
        version = "1.0.0",
        description = r#"
## Attendance management

Students punch in and out, review their attendance per training day and
correct past days directly.

### Update validation
- start and end times must be entered as hour **and** minute
- an end time needs a start time
- the start time may not be later than the end time
- the break may not exceed the working time
- notes are limited to 100 characters

A rejected update returns every message in `error` (`* message` joined by
`<br/>`) and saves nothing.

### Security
All endpoints require the **JWT Bearer** token issued by the LMS login.
"#,
    ),
    paths(
        crate::api::attendance::detail,
        crate::api::attendance::punch_in,
        crate::api::attendance::punch_out,
        crate::api::attendance::edit,
        crate::api::attendance::complete
    ),
    components(
        schemas(
            AttendanceManagement,
            AttendanceForm,
            DailyAttendanceRow,
            SelectOption,
            Rule,
            ValidationError,
            DetailResponse,
            UpdateRejectedResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
