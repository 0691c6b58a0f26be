//! Lenient request-body extractor.
//!
//! Clients post either JSON or HTML-form bodies. [`Payload`] picks the
//! decoder from the `Content-Type` header and, when the body cannot be
//! decoded at all, yields `T::default()` instead of rejecting. Handlers then
//! report the absent fields with their own validation message, so every
//! malformed body ends up as a `400` with a readable explanation.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A JSON or form-encoded body, defaulted when unreadable.
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE));

        let decoded = if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|rejection| rejection.body_text())
        };

        Ok(Self(decoded.unwrap_or_else(|reason| {
            debug!(%reason, "Unreadable request body, treating as empty");
            T::default()
        })))
    }
}
