use chrono::{Local, NaiveDateTime};
use derive_getters::Getters;

/// Authenticated context for backend calls. Created by [`crate::api::auth::login`],
/// passed explicitly to every request that needs it, and cleared by
/// [`crate::api::auth::logout`]. There is no ambient token storage.
#[derive(Clone, Debug, Getters)]
pub struct Session {
    token: String,
    user_id: i64,
    email: String,
    name: String,
    issued_at: NaiveDateTime,
}

impl Session {
    pub(crate) fn new(token: String, user_id: i64, email: String, name: String) -> Self {
        Self {
            token,
            user_id,
            email,
            name,
            issued_at: Local::now().naive_local(),
        }
    }
}
