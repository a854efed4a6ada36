//! See [`FormFields`].

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use tracing::debug;

/// The text fields of a submitted HTML form, read from either a URL-encoded or a
/// `multipart/form-data` body.
///
/// Extraction never fails. A body that isn't a form, or can't be decoded as one, has no fields.
/// File uploads in multipart bodies aren't text fields, so they're skipped.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Removes and returns the first value of the field with the specified name.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(key, _)| key == name)?;

        Some(self.0.remove(index).1)
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(fields: Vec<(String, String)>) -> Self {
        Self(fields)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for FormFields {
    type Rejection = Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            match Multipart::from_request(request, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(rejection) => {
                    debug!("ignoring undecodable multipart body: {rejection}");
                    Self::default()
                }
            }
        } else {
            match Form::<Vec<(String, String)>>::from_request(request, state).await {
                Ok(Form(fields)) => fields.into(),
                Err(rejection) => {
                    debug!("ignoring non-form body: {rejection}");
                    Self::default()
                }
            }
        };

        Ok(fields)
    }
}

/// Collects the text fields of a multipart body, or none if the body is malformed.
async fn read_multipart(mut multipart: Multipart) -> FormFields {
    let mut fields = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(error) => {
                debug!("ignoring malformed multipart body: {error}");
                return FormFields::default();
            }
        };

        if field.file_name().is_some() {
            continue;
        }

        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(error) => {
                debug!("ignoring malformed multipart body: {error}");
                return FormFields::default();
            }
        }
    }

    fields.into()
}
