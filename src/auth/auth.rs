use crate::auth::jwt::verify_token;
use crate::config::Config;
use actix_web::{
    FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized, web::Data,
};
use futures::future::{Ready, ready};

/// The signed-in student, taken from the bearer token.
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub lms_user_id: u64,
    pub course_id: u64,
    pub user_name: String,
    /// Login session, scopes the one-shot screen flags
    pub session_id: String,
}

impl FromRequest for LoginUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // already resolved by auth_middleware
        if let Some(user) = req.extensions().get::<LoginUser>() {
            return ready(Ok(user.clone()));
        }

        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => return ready(Err(ErrorUnauthorized("Missing token"))),
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(
                    actix_web::error::ErrorInternalServerError("Config missing"),
                ))
            }
        };

        match verify_token(token, &config.jwt_secret) {
            Ok(claims) => ready(Ok(LoginUser {
                lms_user_id: claims.lms_user_id,
                course_id: claims.course_id,
                user_name: claims.sub,
                session_id: claims.sid,
            })),
            Err(_) => ready(Err(ErrorUnauthorized("Invalid token"))),
        }
    }
}
