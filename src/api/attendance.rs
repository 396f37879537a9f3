use std::future::Future;

use crate::auth::auth::LoginUser;
use crate::config::Config;
use crate::form::attendance_form::AttendanceForm;
use crate::form::validation::{ValidationError, error_display};
use crate::message::{Locale, MessageSource};
use crate::model::attendance::{AttendanceManagement, Punch};
use crate::service::{AttendanceService, punch_check};
use crate::utils::session_flags::SessionFlags;
use actix_web::{HttpRequest, HttpResponse, Responder, http::header::ACCEPT_LANGUAGE, web};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DetailResponse {
    pub attendance_management_list: Vec<AttendanceManagement>,
    /// Warn about past days without start or end time
    pub has_unfilled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateRejectedResponse {
    /// Every message as `* message`, joined by `<br/>`
    #[schema(example = "* 備考は100文字以内で入力してください。")]
    pub error: String,
    pub errors: Vec<ValidationError>,
    pub attendance_form: AttendanceForm,
}

/* =========================
Workflow
========================= */

/// Decides whether the unfilled-attendance warning is shown.
///
/// Takes the session flag and returns `(show_warning, flag)`. The check runs
/// only while the flag is unset; the returned flag is always set.
pub async fn unfilled_warning<F, Fut>(shown: bool, has_unfilled: F) -> anyhow::Result<(bool, bool)>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    if shown {
        return Ok((false, true));
    }
    Ok((has_unfilled().await?, true))
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Rejected {
        errors: Vec<ValidationError>,
        form: AttendanceForm,
    },
    Updated {
        message: String,
    },
}

/// Validates every row and persists them only when none has an error.
pub async fn complete_update<S: AttendanceService>(
    service: &S,
    user: &LoginUser,
    mut form: AttendanceForm,
    messages: &dyn MessageSource,
    locale: Locale,
) -> anyhow::Result<UpdateOutcome> {
    let errors = form.validate(messages, locale);

    if !errors.is_empty() {
        form.mark_errors(&errors);
        form.set_options();
        return Ok(UpdateOutcome::Rejected { errors, form });
    }

    service.update(user.lms_user_id, &form.attendance_list).await?;

    Ok(UpdateOutcome::Updated {
        message: messages.lookup("attendance.update.complete", &[], locale),
    })
}

/// Punch check on today's line, then the punch itself.
///
/// Returns the rendered error, or the rendered confirmation.
pub async fn punch<S: AttendanceService>(
    service: &S,
    user: &LoginUser,
    kind: Punch,
    now: NaiveDateTime,
    messages: &dyn MessageSource,
    locale: Locale,
) -> anyhow::Result<Result<String, String>> {
    let today = service
        .today_attendance(user.lms_user_id, user.course_id, now.date())
        .await?;

    if let Some(key) = punch_check(today.as_ref(), kind) {
        debug!(punch = kind.as_str(), key, "Punch refused");
        return Ok(Err(messages.lookup(key, &[], locale)));
    }

    // punch_check refuses a missing line
    if let Some(today) = today {
        service.punch(user.lms_user_id, &today, kind, now.time()).await?;
    }

    Ok(Ok(messages.lookup(kind.complete_key(), &[], locale)))
}

/// First `Accept-Language` tag we have messages for, else the default.
pub fn request_locale(req: &HttpRequest, default: Locale) -> Locale {
    req.headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| {
            value.split(',').find_map(|tag| {
                let tag = tag.split(';').next()?.trim();
                let primary = tag.split('-').next()?;
                primary.to_ascii_lowercase().parse::<Locale>().ok()
            })
        })
        .unwrap_or(default)
}

fn internal_error(e: anyhow::Error, user: &LoginUser, action: &str) -> actix_web::Error {
    tracing::error!(error = %e, lms_user_id = user.lms_user_id, action, "Attendance request failed");
    actix_web::error::ErrorInternalServerError("Internal Server Error")
}

async fn summary<S: AttendanceService>(
    service: &S,
    user: &LoginUser,
) -> actix_web::Result<Vec<AttendanceManagement>> {
    service
        .attendance_management(user.course_id, user.lms_user_id)
        .await
        .map_err(|e| internal_error(e, user, "attendance_management"))
}

/* =========================
Handlers
========================= */

/// Attendance summary with the unfilled warning
#[utoipa::path(
    get,
    path = "/api/attendance/detail",
    responses(
        (status = 200, description = "Attendance summary", body = DetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_detail", skip_all, fields(lms_user_id = user.lms_user_id))]
pub async fn detail<S: AttendanceService>(
    user: LoginUser,
    service: web::Data<S>,
    flags: web::Data<SessionFlags>,
) -> actix_web::Result<impl Responder> {
    let attendance_management_list = summary(service.get_ref(), &user).await?;

    let claimed = flags.claim_unfilled(&user.session_id).await;
    let today = Local::now().date_naive();
    let checked = unfilled_warning(!claimed, || {
        service.has_unfilled_past_attendance(user.lms_user_id, user.course_id, today)
    })
    .await;
    let (has_unfilled, _) = match checked {
        Ok(warning) => warning,
        Err(e) => {
            if claimed {
                flags.release_unfilled(&user.session_id).await;
            }
            return Err(internal_error(e, &user, "has_unfilled_past_attendance"));
        }
    };

    Ok(HttpResponse::Ok().json(DetailResponse {
        attendance_management_list,
        has_unfilled,
        message: None,
        error: None,
    }))
}

async fn punch_response<S: AttendanceService>(
    req: &HttpRequest,
    user: &LoginUser,
    kind: Punch,
    service: &S,
    messages: &dyn MessageSource,
    config: &Config,
) -> actix_web::Result<HttpResponse> {
    let locale = request_locale(req, config.default_locale);

    let outcome = punch(service, user, kind, Local::now().naive_local(), messages, locale)
        .await
        .map_err(|e| internal_error(e, user, kind.as_str()))?;

    let (message, error) = match outcome {
        Ok(message) => {
            info!(lms_user_id = user.lms_user_id, punch = kind.as_str(), "Punch recorded");
            (Some(message), None)
        }
        Err(error) => (None, Some(error)),
    };

    Ok(HttpResponse::Ok().json(DetailResponse {
        attendance_management_list: summary(service, user).await?,
        has_unfilled: false,
        message,
        error,
    }))
}

/// Punch in for today
#[utoipa::path(
    post,
    path = "/api/attendance/detail/punch-in",
    responses(
        (status = 200, description = "Punch result with the refreshed summary; `error` is set when the punch was refused", body = DetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_punch_in", skip_all, fields(lms_user_id = user.lms_user_id))]
pub async fn punch_in<S: AttendanceService>(
    req: HttpRequest,
    user: LoginUser,
    service: web::Data<S>,
    messages: web::Data<dyn MessageSource>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    punch_response(&req, &user, Punch::PunchIn, service.get_ref(), messages.get_ref(), &config).await
}

/// Punch out for today
#[utoipa::path(
    post,
    path = "/api/attendance/detail/punch-out",
    responses(
        (status = 200, description = "Punch result with the refreshed summary; `error` is set when the punch was refused", body = DetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_punch_out", skip_all, fields(lms_user_id = user.lms_user_id))]
pub async fn punch_out<S: AttendanceService>(
    req: HttpRequest,
    user: LoginUser,
    service: web::Data<S>,
    messages: web::Data<dyn MessageSource>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    punch_response(&req, &user, Punch::PunchOut, service.get_ref(), messages.get_ref(), &config).await
}

/// Editable attendance form
#[utoipa::path(
    get,
    path = "/api/attendance/update",
    responses(
        (status = 200, description = "Attendance form with dropdown options", body = AttendanceForm),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_edit", skip_all, fields(lms_user_id = user.lms_user_id))]
pub async fn edit<S: AttendanceService>(
    user: LoginUser,
    service: web::Data<S>,
) -> actix_web::Result<impl Responder> {
    let list = summary(service.get_ref(), &user).await?;
    let form = AttendanceForm::from_management(
        user.lms_user_id,
        &user.user_name,
        &list,
        Local::now().date_naive(),
    );

    Ok(HttpResponse::Ok().json(form))
}

/// Validate and save every row
#[utoipa::path(
    post,
    path = "/api/attendance/update",
    request_body(
        content = AttendanceForm,
        description = "Submitted attendance rows",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Rows saved; refreshed summary", body = DetailResponse),
        (status = 400, description = "Validation failed; nothing saved", body = UpdateRejectedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_complete", skip_all, fields(lms_user_id = user.lms_user_id))]
pub async fn complete<S: AttendanceService>(
    req: HttpRequest,
    user: LoginUser,
    service: web::Data<S>,
    messages: web::Data<dyn MessageSource>,
    config: web::Data<Config>,
    payload: web::Json<AttendanceForm>,
) -> actix_web::Result<impl Responder> {
    let locale = request_locale(&req, config.default_locale);

    let outcome = complete_update(
        service.get_ref(),
        &user,
        payload.into_inner(),
        messages.get_ref(),
        locale,
    )
    .await
    .map_err(|e| internal_error(e, &user, "update"))?;

    match outcome {
        UpdateOutcome::Rejected { errors, form } => {
            info!(errors = errors.len(), "Validation failed");
            Ok(HttpResponse::BadRequest().json(UpdateRejectedResponse {
                error: error_display(&errors),
                errors,
                attendance_form: form,
            }))
        }
        UpdateOutcome::Updated { message } => Ok(HttpResponse::Ok().json(DetailResponse {
            attendance_management_list: summary(service.get_ref(), &user).await?,
            has_unfilled: false,
            message: Some(message),
            error: None,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::issue_token;
    use crate::form::daily_attendance::DailyAttendanceRow;
    use crate::form::options::blank_times;
    use crate::message::CatalogMessageSource;
    use crate::models::Claims;
    use crate::routes::attendance_scope;
    use actix_web::test::{
        TestRequest, call_and_read_body_json, call_service, init_service, read_body_json,
    };
    use actix_web::{App, http::StatusCode, web::Data};
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const SECRET: &str = "test-secret";

    #[derive(Default)]
    struct FakeService {
        list: Vec<AttendanceManagement>,
        today: Option<AttendanceManagement>,
        unfilled: bool,
        unfilled_calls: AtomicUsize,
        updates: Mutex<Vec<Vec<DailyAttendanceRow>>>,
        punches: Mutex<Vec<(Punch, NaiveTime)>>,
    }

    impl AttendanceService for FakeService {
        async fn attendance_management(
            &self,
            _course_id: u64,
            _lms_user_id: u64,
        ) -> anyhow::Result<Vec<AttendanceManagement>> {
            Ok(self.list.clone())
        }

        async fn has_unfilled_past_attendance(
            &self,
            _lms_user_id: u64,
            _course_id: u64,
            _today: NaiveDate,
        ) -> anyhow::Result<bool> {
            self.unfilled_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.unfilled)
        }

        async fn today_attendance(
            &self,
            _lms_user_id: u64,
            _course_id: u64,
            _today: NaiveDate,
        ) -> anyhow::Result<Option<AttendanceManagement>> {
            Ok(self.today.clone())
        }

        async fn punch(
            &self,
            _lms_user_id: u64,
            _today: &AttendanceManagement,
            punch: Punch,
            at: NaiveTime,
        ) -> anyhow::Result<()> {
            self.punches.lock().unwrap().push((punch, at));
            Ok(())
        }

        async fn update(&self, _lms_user_id: u64, rows: &[DailyAttendanceRow]) -> anyhow::Result<()> {
            self.updates.lock().unwrap().push(rows.to_vec());
            Ok(())
        }
    }

    fn user() -> LoginUser {
        LoginUser {
            lms_user_id: 10,
            course_id: 3,
            user_name: "taro".to_string(),
            session_id: "session-1".to_string(),
        }
    }

    fn line(start: Option<&str>) -> AttendanceManagement {
        AttendanceManagement {
            student_attendance_id: Some(7),
            lms_user_id: 10,
            training_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            section_name: Some("Rust".to_string()),
            training_start_time: start.map(str::to_string),
            training_end_time: None,
            blank_time: None,
            status: None,
            note: None,
            leave_date: None,
        }
    }

    fn row(start: (&str, &str), end: (&str, &str), blank: Option<u32>) -> DailyAttendanceRow {
        DailyAttendanceRow {
            student_attendance_id: Some(7),
            training_start_hour: Some(start.0.into()),
            training_start_minute: Some(start.1.into()),
            training_end_hour: Some(end.0.into()),
            training_end_minute: Some(end.1.into()),
            blank_time: blank,
            ..Default::default()
        }
    }

    fn form(rows: Vec<DailyAttendanceRow>) -> AttendanceForm {
        AttendanceForm {
            attendance_list: rows,
            ..Default::default()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 1, 0)
            .unwrap()
    }

    #[actix_web::test]
    async fn warning_is_computed_only_while_flag_is_unset() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let check = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, anyhow::Error>(true)
        };

        assert_eq!(unfilled_warning(false, check).await.unwrap(), (true, true));
        assert_eq!(unfilled_warning(true, check).await.unwrap(), (false, true));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn rejected_update_persists_nothing() {
        let service = FakeService::default();
        let rows = vec![
            row(("09", "00"), ("18", "00"), Some(30)),
            row(("09", "00"), ("08", "00"), None),
        ];

        let outcome = complete_update(&service, &user(), form(rows), &CatalogMessageSource, Locale::En)
            .await
            .unwrap();

        match outcome {
            UpdateOutcome::Rejected { errors, form } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    error_display(&errors),
                    "* Row 2: the start time is later than the end time."
                );
                assert!(!form.attendance_list[0].is_error);
                assert!(form.attendance_list[1].is_error);
                assert_eq!(form.hours.len(), 24);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(service.updates.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn valid_update_persists_all_rows() {
        let service = FakeService::default();
        let rows = vec![
            row(("09", "00"), ("18", "00"), Some(30)),
            DailyAttendanceRow::default(),
        ];

        let outcome = complete_update(&service, &user(), form(rows), &CatalogMessageSource, Locale::Ja)
            .await
            .unwrap();

        match outcome {
            UpdateOutcome::Updated { message } => {
                assert_eq!(message, "勤怠情報の更新が完了しました。")
            }
            other => panic!("expected update, got {other:?}"),
        }
        assert_eq!(service.updates.lock().unwrap()[0].len(), 2);
    }

    #[actix_web::test]
    async fn punch_in_records_current_time() {
        let service = FakeService {
            today: Some(line(None)),
            ..Default::default()
        };

        let outcome = punch(&service, &user(), Punch::PunchIn, now(), &CatalogMessageSource, Locale::En)
            .await
            .unwrap();

        assert_eq!(outcome, Ok("Punch-in recorded.".to_string()));
        assert_eq!(
            service.punches.lock().unwrap().as_slice(),
            &[(Punch::PunchIn, NaiveTime::from_hms_opt(9, 1, 0).unwrap())]
        );
    }

    #[actix_web::test]
    async fn refused_punch_records_nothing() {
        let service = FakeService {
            today: Some(line(Some("09:00"))),
            ..Default::default()
        };

        let outcome = punch(&service, &user(), Punch::PunchIn, now(), &CatalogMessageSource, Locale::En)
            .await
            .unwrap();

        assert_eq!(outcome, Err("You have already punched in today.".to_string()));
        assert!(service.punches.lock().unwrap().is_empty());
    }

    #[test]
    fn locale_follows_accept_language() {
        let req = TestRequest::default()
            .insert_header((ACCEPT_LANGUAGE, "fr-FR, en-US;q=0.8"))
            .to_http_request();
        assert_eq!(request_locale(&req, Locale::Ja), Locale::En);

        let req = TestRequest::default().to_http_request();
        assert_eq!(request_locale(&req, Locale::Ja), Locale::Ja);
    }

    /* =========================
    HTTP
    ========================= */

    fn config() -> Config {
        Config {
            database_url: String::new(),
            jwt_secret: SECRET.to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            rate_protected_per_min: 1000,
            api_prefix: "/api".to_string(),
            session_ttl: 60,
            default_locale: Locale::En,
            log_dir: "logs".to_string(),
        }
    }

    fn bearer() -> (&'static str, String) {
        let claims = Claims {
            sub: "taro".to_string(),
            lms_user_id: 10,
            course_id: 3,
            sid: "session-1".to_string(),
            exp: 4_000_000_000,
        };
        ("Authorization", format!("Bearer {}", issue_token(&claims, SECRET)))
    }

    macro_rules! app {
        ($service:expr) => {
            init_service(
                App::new()
                    .app_data(Data::new(config()))
                    .app_data($service.clone())
                    .app_data(Data::from(
                        Arc::new(CatalogMessageSource) as Arc<dyn MessageSource>
                    ))
                    .app_data(Data::new(SessionFlags::new(100, Duration::from_secs(60))))
                    .service(web::scope("/api").service(attendance_scope::<FakeService>())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn detail_shows_unfilled_warning_once_per_session() {
        let service = Data::new(FakeService {
            list: vec![line(Some("09:00"))],
            unfilled: true,
            ..Default::default()
        });
        let app = app!(service);

        let req = TestRequest::get()
            .uri("/api/attendance/detail")
            .insert_header(bearer())
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["has_unfilled"], json!(true));
        assert_eq!(body["attendance_management_list"][0]["training_start_time"], json!("09:00"));

        let req = TestRequest::get()
            .uri("/api/attendance/detail")
            .insert_header(bearer())
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["has_unfilled"], json!(false));

        assert_eq!(service.unfilled_calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let service = Data::new(FakeService::default());
        let app = app!(service);

        let req = TestRequest::get().uri("/api/attendance/detail").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_update_returns_joined_errors() {
        let service = Data::new(FakeService::default());
        let app = app!(service);

        let req = TestRequest::post()
            .uri("/api/attendance/update")
            .insert_header(bearer())
            .set_json(json!({
                "attendance_list": [
                    {
                        "training_start_hour": "",
                        "training_start_minute": "",
                        "training_end_hour": "18",
                        "training_end_minute": "00"
                    },
                    {
                        "training_start_hour": "09",
                        "training_start_minute": "00",
                        "training_end_hour": "18",
                        "training_end_minute": "00",
                        "blank_time": 600
                    }
                ]
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = read_body_json(resp).await;
        assert_eq!(
            body["error"],
            json!("* An end time cannot be entered without a start time.<br/>* The break time exceeds the working time.")
        );
        assert_eq!(body["errors"][0]["rule"], json!("attendance.punchInEmpty"));
        assert_eq!(body["errors"][1]["field"], json!("attendance_list[1].blank_time"));
        assert_eq!(body["attendance_form"]["attendance_list"][1]["is_error"], json!(true));
        assert!(service.updates.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn edit_splits_stored_times() {
        let service = Data::new(FakeService {
            list: vec![line(Some("09:30"))],
            ..Default::default()
        });
        let app = app!(service);

        let req = TestRequest::get()
            .uri("/api/attendance/update")
            .insert_header(bearer())
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;

        let first = &body["attendance_list"][0];
        assert_eq!(first["training_start_hour"], json!("09"));
        assert_eq!(first["training_start_minute"], json!("30"));
        assert_eq!(body["user_name"], json!("taro"));
    }

    #[actix_web::test]
    async fn concurrent_details_show_warning_once() {
        let service = Data::new(FakeService {
            unfilled: true,
            ..Default::default()
        });
        let app = app!(service);

        let first = TestRequest::get()
            .uri("/api/attendance/detail")
            .insert_header(bearer())
            .to_request();
        let second = TestRequest::get()
            .uri("/api/attendance/detail")
            .insert_header(bearer())
            .to_request();
        let (a, b): (Value, Value) = futures::future::join(
            call_and_read_body_json(&app, first),
            call_and_read_body_json(&app, second),
        )
        .await;

        let shown = [&a, &b]
            .iter()
            .filter(|body| body["has_unfilled"] == json!(true))
            .count();
        assert_eq!(shown, 1);
        assert_eq!(service.unfilled_calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn update_accepts_break_value_from_edit_options() {
        let service = Data::new(FakeService {
            list: vec![line(Some("09:00"))],
            ..Default::default()
        });
        let app = app!(service);

        let req = TestRequest::get()
            .uri("/api/attendance/update")
            .insert_header(bearer())
            .to_request();
        let edit: Value = call_and_read_body_json(&app, req).await;
        let selected = edit["blank_times"][1]["value"].clone();
        assert_eq!(selected, json!(blank_times()[1].value));

        let req = TestRequest::post()
            .uri("/api/attendance/update")
            .insert_header(bearer())
            .set_json(json!({
                "attendance_list": [{
                    "training_start_hour": "09",
                    "training_start_minute": "00",
                    "training_end_hour": "18",
                    "training_end_minute": "00",
                    "blank_time": selected
                }]
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updates = service.updates.lock().unwrap();
        assert_eq!(updates[0][0].blank_time, Some(30));
    }
}
