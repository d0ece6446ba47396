//! Authentication middleware.
//!
//! A simple Bearer token extractor gating the staff endpoints. When no
//! AUTH_SECRET is configured the desk runs in open mode and anonymous
//! requests are allowed through.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use crate::AppState;

/// Staff identity extracted from the request.
#[derive(Debug, Clone)]
pub struct Staff {
    /// The bearer token presented by the client
    #[allow(dead_code)]
    pub token: String,
}

impl FromRequestParts<AppState> for Staff {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match auth_header {
            Some(header) if header.starts_with("Bearer ") => {
                let token = header.trim_start_matches("Bearer ").to_string();
                if token.is_empty() {
                    return Err((StatusCode::UNAUTHORIZED, "Empty bearer token"));
                }

                if let Some(secret) = &state.config.auth_secret {
                    if token != *secret {
                        return Err((StatusCode::UNAUTHORIZED, "Invalid token"));
                    }
                }

                Ok(Staff { token })
            }
            Some(_) => Err((
                StatusCode::UNAUTHORIZED,
                "Invalid authorization header format",
            )),
            None => {
                if state.config.auth_secret.is_none() {
                    // Open mode: no secret configured, allow anonymous access
                    Ok(Staff {
                        token: "anonymous".to_string(),
                    })
                } else {
                    Err((StatusCode::UNAUTHORIZED, "Missing authorization header"))
                }
            }
        }
    }
}
