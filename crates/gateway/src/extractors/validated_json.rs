//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::{FieldErrors, MSG_FIELD_REQUIRED};

/// JSON extractor that automatically validates the payload.
///
/// Every failing field is reported, keyed by field name. A required field
/// missing from the body is reported the same way.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        // Validate
        value
            .validate()
            .map_err(|e| AppError::InvalidFields(FieldErrors::from(e)))?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    match missing_field(&text) {
        Some(field) => AppError::field(field, MSG_FIELD_REQUIRED),
        None => AppError::validation(text),
    }
}

/// Field name from a serde "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let rest = &message[message.find("missing field `")? + "missing field `".len()..];
    rest.find('`').map(|end| &rest[..end])
}
