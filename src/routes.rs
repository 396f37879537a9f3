use crate::{
    api::attendance,
    auth::middleware::auth_middleware,
    config::Config,
    service::AttendanceService,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, middleware::from_fn, web};

pub fn configure<S: AttendanceService>(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(60_000 / requests_per_min as u64)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("non-zero period and burst size");
        Governor::new(&cfg)
    }

    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(attendance_scope::<S>()),
    );
}

pub fn attendance_scope<S: AttendanceService>() -> Scope {
    web::scope("/attendance")
        // /attendance/detail
        .service(web::resource("/detail").route(web::get().to(attendance::detail::<S>)))
        // /attendance/detail/punch-in
        .service(
            web::resource("/detail/punch-in").route(web::post().to(attendance::punch_in::<S>)),
        )
        // /attendance/detail/punch-out
        .service(
            web::resource("/detail/punch-out").route(web::post().to(attendance::punch_out::<S>)),
        )
        // /attendance/update
        .service(
            web::resource("/update")
                .route(web::get().to(attendance::edit::<S>))
                .route(web::post().to(attendance::complete::<S>)),
        )
}

// LOGIN (LMS login service)
//  └─ access_token { sub, lms_user_id, course_id, sid }

// API REQUEST
//  └─ Authorization: Bearer access_token

// GET  /detail          summary + unfilled warning (once per sid)
// POST /update          validate all rows → 400 with errors, or save all
