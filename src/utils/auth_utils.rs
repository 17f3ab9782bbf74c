use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use thiserror::Error;

use crate::structs::response_struct::ApiResponse;

// Google rotates these keys; they are fetched fresh for every verification.
const JWK_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()> {
            success: false,
            data: None,
            message: Some(self.to_string()),
        })
    }
}

/// Claims we care about from a decoded Firebase ID token.
#[derive(Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    pub email: String,
}

#[derive(Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

/// Verifies Firebase ID tokens against Google's secure-token JWKs.
#[derive(Clone)]
pub struct TokenVerifier {
    client: reqwest::Client,
    project_id: String,
}

impl TokenVerifier {
    pub fn new(client: reqwest::Client, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// Checks signature, audience, issuer and expiry, and returns the
    /// decoded claims. Every failure collapses into `InvalidToken`; the
    /// caller never learns which check failed.
    pub async fn verify_id_token(&self, token: &str) -> Result<IdTokenClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        let kid = header.kid.ok_or(AuthError::InvalidToken)?;

        let jwks: JwkSet = self
            .client
            .get(JWK_URL)
            .send()
            .await
            .map_err(|_| AuthError::InvalidToken)?
            .json()
            .await
            .map_err(|_| AuthError::InvalidToken)?;

        let jwk = jwks
            .keys
            .into_iter()
            .find(|key| key.kid == kid)
            .ok_or(AuthError::InvalidToken)?;

        let decoding_key =
            DecodingKey::from_rsa_components(&jwk.n, &jwk.e).map_err(|_| AuthError::InvalidToken)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!(
            "https://securetoken.google.com/{}",
            self.project_id
        )]);

        decode::<IdTokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_accepts_the_expected_shape() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_missing_or_empty_tokens() {
        assert_eq!(bearer_token("abc.def.ghi"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn bearer_token_is_case_sensitive() {
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("BEARER abc"), None);
    }
}
