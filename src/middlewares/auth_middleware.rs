use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, error, http::header, web};
use futures_util::future::LocalBoxFuture;

use crate::utils::auth_utils::{AuthError, TokenVerifier, bearer_token};

/// The verified principal behind a request. Using this as a handler
/// argument makes the route protected: extraction fails with 403 before
/// the handler body runs.
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let verifier = req
                .app_data::<web::Data<TokenVerifier>>()
                .cloned()
                .ok_or_else(|| error::ErrorInternalServerError("Token verifier not configured"))?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(bearer_token)
                .ok_or(AuthError::MissingToken)?;

            let claims = verifier.verify_id_token(token).await?;

            Ok(AuthenticatedUser {
                uid: claims.sub,
                email: claims.email,
            })
        })
    }
}
