use anyhow::{Context, Result};
use serde_json::json;
use tracing::{debug, info};

use crate::api::dto::{LoginResponseDto, MessageResponseDto};
use crate::api::{ApiClient, Session};

/// Exchanges credentials for a bearer session.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Session> {
    let response: LoginResponseDto = api
        .post(
            "auth/login",
            &json!({ "email": email, "password": password }),
            None,
        )
        .await
        .with_context(|| format!("Login failed for {}", email))?;

    info!(email, "Logged in");

    let name = format!("{} {}", response.first_name(), response.last_name());
    Ok(Session::new(
        response.access_token().clone(),
        *response.id(),
        response.email().clone(),
        name,
    ))
}

pub async fn register(
    api: &ApiClient,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    phone: Option<&str>,
) -> Result<String> {
    let response: MessageResponseDto = api
        .post(
            "auth/register",
            &json!({
                "firstName": first_name,
                "lastName": last_name,
                "email": email,
                "password": password,
                "phone": phone,
            }),
            None,
        )
        .await
        .with_context(|| format!("Registration failed for {}", email))?;

    Ok(response.message().clone())
}

/// Ends the session. Consuming it guarantees no further request can carry
/// the token.
pub fn logout(session: Session) {
    debug!(email = %session.email(), "Session cleared");
    drop(session);
}
