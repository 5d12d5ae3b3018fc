//! Form extractor for the HTML pages.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

use common::AppError;

use crate::pages::PageError;

/// URL-encoded form whose rejection renders as an HTML error page.
pub struct PageForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for PageForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| PageError::from(AppError::validation(e.body_text())))?;

        Ok(PageForm(value))
    }
}
