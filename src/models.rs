use serde::{Deserialize, Serialize};

/// Claims of the bearer token issued by the LMS login service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub lms_user_id: u64,
    pub course_id: u64,
    /// Login session the token belongs to
    pub sid: String,
    pub exp: usize,
}
